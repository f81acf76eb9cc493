// File: crates/labchart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with the configured font family.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use crate::types::FontConfig;

const FALLBACK_FAMILIES: [&str; 5] = ["DejaVu Sans", "Arial", "Helvetica", "Roboto", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
    families: Vec<String>,
}

impl TextShaper {
    pub fn new(font: &FontConfig) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        let mut families = vec![font.family.clone()];
        families.extend(
            FALLBACK_FAMILIES
                .iter()
                .filter(|f| !f.eq_ignore_ascii_case(&font.family))
                .map(|f| f.to_string()),
        );
        Self { fonts: fc, families }
    }

    fn make_style(&self, size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&self.families[..]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    /// Shape `text` (may contain `\n`), center-aligned and laid out to its own width.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Center);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = self.make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        let width = paragraph.longest_line().ceil().max(1.0);
        paragraph.layout(width);
        paragraph
    }

    /// (width, height) of the shaped text block.
    pub fn measure(&self, text: &str, size: f32, bold: bool) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, bold);
        (p.max_width(), p.height())
    }

    /// Horizontally centered on `cx` with the block's bottom edge at `bottom`.
    pub fn draw_above(&self, canvas: &skia::Canvas, text: &str, cx: f32, bottom: f32, size: f32, color: skia::Color, bold: bool) {
        let p = self.layout(text, size, color, bold);
        p.paint(canvas, (cx - p.max_width() * 0.5, bottom - p.height()));
    }

    /// Horizontally centered on `cx` with the block's top edge at `top`.
    pub fn draw_below(&self, canvas: &skia::Canvas, text: &str, cx: f32, top: f32, size: f32, color: skia::Color, bold: bool) {
        let p = self.layout(text, size, color, bold);
        p.paint(canvas, (cx - p.max_width() * 0.5, top));
    }

    /// Right edge at `right`, vertically centered on `cy`.
    pub fn draw_right_aligned(&self, canvas: &skia::Canvas, text: &str, right: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color, false);
        p.paint(canvas, (right - p.max_width(), cy - p.height() * 0.5));
    }

    /// Left edge at `x`, vertically centered on `cy`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color, false);
        p.paint(canvas, (x, cy - p.height() * 0.5));
    }

    /// Rotated 90° counter-clockwise and centered on (`cx`, `cy`); used for the y-axis title.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color, false);
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-p.max_width() * 0.5, -p.height() * 0.5));
        canvas.restore();
    }
}
