// File: crates/labchart-core/src/chart.rs
// Summary: Grouped bar chart layout plan and headless PNG rendering using Skia CPU raster surfaces.

use image::RgbaImage;
use log::{debug, info};
use skia_safe as skia;

use crate::axis::{Axis, ScaleKind};
use crate::error::{RenderError, Result};
use crate::export::{encode_png, tight_crop, write_file};
use crate::geometry::RectF;
use crate::grid::{linear_ticks, log10_ticks, Tick};
use crate::layout::{category_extent, value_range, GroupLayout};
use crate::scale::{CategoryScale, ValueScale};
use crate::spec::ChartSpec;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{FigureSize, FontConfig, Insets, POINTS_PER_INCH};

const TICK_LEN: f32 = 3.5;
const TICK_PAD: f32 = 3.5;
const LABEL_PAD: f32 = 4.0;
const TITLE_PAD: f32 = 6.0;
const VALUE_LABEL_PAD: f32 = 1.0;
const LINE_WIDTH: f32 = 0.8;

/// Process-wide rendering configuration, fixed when the renderer is built.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub figure: FigureSize,
    pub insets: Insets,
    pub font: FontConfig,
    pub theme: Theme,
    /// Whitespace kept around the content after the tight crop, in inches.
    pub crop_padding_in: f32,
    /// Blank border around the figure that catches labels running past its
    /// edges; the tight crop trims whatever stays empty.
    pub overflow_in: f32,
    /// Approximate number of ticks on a linear value axis.
    pub y_tick_target: usize,
    pub draw_text: bool,
}

impl RenderOptions {
    /// Width of the overflow border in pixels at `dpi`.
    pub fn overflow_px(&self, dpi: u32) -> i32 {
        (self.overflow_in.max(0.0) * dpi as f32).round() as i32
    }

    /// Raster size: the figure plus the overflow border on every side.
    pub fn canvas_pixels(&self, dpi: u32) -> (i32, i32) {
        let (w, h) = self.figure.pixels(dpi);
        let o = self.overflow_px(dpi);
        (w + 2 * o, h + 2 * o)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            figure: FigureSize::default(),
            insets: Insets::default(),
            font: FontConfig::default(),
            theme: Theme::light(),
            crop_padding_in: 0.1,
            overflow_in: 1.0,
            y_tick_target: 6,
            draw_text: true,
        }
    }
}

/// One bar, resolved to data and point space.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeom {
    pub category: usize,
    pub series: usize,
    pub value: f64,
    /// Logical horizontal extent, in category units.
    pub span: (f64, f64),
    pub rect: RectF,
    pub fill: skia::Color,
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendCorner {
    UpperLeft,
    UpperRight,
}

/// Fully resolved layout of a chart in point coordinates; rendering draws exactly this.
#[derive(Clone, Debug)]
pub struct ChartPlan {
    pub size_pt: (f32, f32),
    pub plot: RectF,
    pub x_range: (f64, f64),
    pub y_axis: Axis,
    /// Row bars grow from: zero on linear axes, the axis floor on log axes.
    pub base: f32,
    pub y_ticks: Vec<(f32, Tick)>,
    /// Tick position and label for each category.
    pub category_ticks: Vec<(f32, String)>,
    pub bars: Vec<BarGeom>,
    pub legend: Vec<(String, skia::Color)>,
    pub legend_corner: LegendCorner,
}

impl ChartPlan {
    pub fn bars_in_category(&self, category: usize) -> impl Iterator<Item = &BarGeom> + '_ {
        self.bars.iter().filter(move |b| b.category == category)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }
}

/// Holds only immutable configuration; one renderer can serve several threads.
/// Skia text and raster state is created per render call.
pub struct BarChartRenderer {
    opts: RenderOptions,
}

impl BarChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Validate `spec` and resolve axes, ticks and every bar's geometry.
    pub fn plan(&self, spec: &ChartSpec) -> Result<ChartPlan> {
        spec.validate()?;

        let (w_pt, h_pt) = self.opts.figure.points();
        let ins = &self.opts.insets;
        let plot = RectF::from_ltrb(
            ins.left as f32,
            ins.top as f32,
            (w_pt - ins.right as f32).max(ins.left as f32 + 1.0),
            (h_pt - ins.bottom as f32).max(ins.top as f32 + 1.0),
        );

        let values: Vec<f64> = spec.values().collect();
        let (y_min, y_max) = value_range(&values, spec.scale);
        let y_axis = match spec.scale {
            ScaleKind::Linear => Axis::new(spec.y_label.clone(), y_min, y_max),
            ScaleKind::Log10 => Axis::log10(spec.y_label.clone(), y_min, y_max),
        };
        let ys = ValueScale::for_axis(&y_axis, plot.top, plot.bottom);

        let x_range = category_extent(spec.categories.len(), spec.group_width);
        let xs = CategoryScale::fit(plot.left, plot.right, x_range.0, x_range.1);
        debug!(
            "plan {:?}: x {:?}, y [{:.4}, {:.4}] {:?}",
            spec.title, x_range, y_min, y_max, spec.scale
        );

        let ticks = match spec.scale {
            ScaleKind::Linear => linear_ticks(y_min, y_max, self.opts.y_tick_target),
            ScaleKind::Log10 => log10_ticks(y_min, y_max),
        };
        let y_ticks = ticks.into_iter().map(|t| (ys.to_px(t.value), t)).collect();

        let category_ticks = spec
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| (xs.to_px(i as f64), c.clone()))
            .collect();

        let group = GroupLayout::new(spec.series.len(), spec.group_width);
        let palette = self.opts.theme.palette;
        let base = ys.base_px();
        let mut bars = Vec::with_capacity(spec.series.len() * spec.categories.len());
        for (si, s) in spec.series.iter().enumerate() {
            for (ci, &value) in s.values.iter().enumerate() {
                let span = group.bar_span(ci, si);
                let y = ys.to_px(value);
                bars.push(BarGeom {
                    category: ci,
                    series: si,
                    value,
                    span,
                    rect: RectF::from_ltrb(xs.to_px(span.0), y.min(base), xs.to_px(span.1), y.max(base)),
                    fill: s.fill_for(ci, si, palette),
                    label: spec.value_format.format(value),
                });
            }
        }

        let legend = if spec.show_legend() {
            spec.series
                .iter()
                .enumerate()
                .map(|(i, s)| (s.name.clone(), s.legend_fill(i, palette)))
                .collect()
        } else {
            Vec::new()
        };

        Ok(ChartPlan {
            size_pt: (w_pt, h_pt),
            plot,
            x_range,
            y_axis,
            base,
            y_ticks,
            category_ticks,
            legend_corner: legend_corner(&bars, spec.categories.len()),
            bars,
            legend,
        })
    }

    /// Render to an uncropped RGBA8 buffer: (pixels, width, height).
    ///
    /// The figure's top-left corner sits at `overflow_px` in both directions.
    pub fn render_to_rgba8(&self, spec: &ChartSpec) -> Result<(Vec<u8>, u32, u32)> {
        let plan = self.plan(spec)?;
        let (w, h) = self.opts.canvas_pixels(spec.dpi);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(RenderError::Surface { width: w, height: h })?;
        let shaper = TextShaper::new(&self.opts.font);
        {
            let canvas = surface.canvas();
            canvas.clear(self.opts.theme.background);
            let s = spec.dpi as f32 / POINTS_PER_INCH;
            canvas.scale((s, s));
            let o = self.opts.overflow_in.max(0.0) * POINTS_PER_INCH;
            canvas.translate((o, o));
            self.draw(canvas, &shaper, spec, &plan);
        }

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut px = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut px, row_bytes, (0, 0)) {
            return Err(RenderError::Encode("failed to read back surface pixels".into()));
        }
        Ok((px, w as u32, h as u32))
    }

    /// Render, tightly crop and PNG-encode in memory.
    pub fn render_to_png_bytes(&self, spec: &ChartSpec) -> Result<Vec<u8>> {
        let (px, w, h) = self.render_to_rgba8(spec)?;
        let img = RgbaImage::from_raw(w, h, px)
            .ok_or_else(|| RenderError::Encode("pixel buffer size mismatch".into()))?;
        let bg = self.opts.theme.background;
        let pad = (self.opts.crop_padding_in * spec.dpi as f32).round() as i32;
        let cropped = tight_crop(img, [bg.r(), bg.g(), bg.b(), bg.a()], pad);
        encode_png(&cropped, spec.dpi)
    }

    /// Render `spec` to its output path. The file is written once, after encoding succeeds.
    pub fn render(&self, spec: &ChartSpec) -> Result<()> {
        let bytes = self.render_to_png_bytes(spec)?;
        write_file(&spec.output, &bytes)?;
        info!("wrote {} ({} bytes)", spec.output.display(), bytes.len());
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, shaper: &TextShaper, spec: &ChartSpec, plan: &ChartPlan) {
        let theme = &self.opts.theme;
        draw_grid(canvas, plan, theme);
        draw_bars(canvas, plan);
        draw_axes(canvas, plan, theme);
        if self.opts.draw_text {
            self.draw_labels(canvas, shaper, spec, plan);
            if !plan.legend.is_empty() {
                self.draw_legend(canvas, shaper, plan);
            }
        }
    }

    fn draw_labels(&self, canvas: &skia::Canvas, shaper: &TextShaper, spec: &ChartSpec, plan: &ChartPlan) {
        let theme = &self.opts.theme;
        let font = &self.opts.font;
        let plot = plan.plot;

        let mut max_tick_w = 0.0f32;
        for (y, tick) in &plan.y_ticks {
            let (w, _) = shaper.measure(&tick.label, font.base_size, false);
            max_tick_w = max_tick_w.max(w);
            shaper.draw_right_aligned(canvas, &tick.label, plot.left - TICK_LEN - TICK_PAD, *y, font.base_size, theme.tick);
        }

        let mut max_cat_h = 0.0f32;
        for (x, label) in &plan.category_ticks {
            let (_, h) = shaper.measure(label, font.base_size, false);
            max_cat_h = max_cat_h.max(h);
            shaper.draw_below(canvas, label, *x, plot.bottom + TICK_LEN + TICK_PAD, font.base_size, theme.tick, false);
        }

        let vf = &spec.value_format;
        for bar in &plan.bars {
            let (x, r) = (bar.rect.center_x(), bar.rect);
            if bar.value < 0.0 {
                shaper.draw_below(canvas, &bar.label, x, r.bottom + VALUE_LABEL_PAD, vf.size, theme.value_label, vf.bold);
            } else {
                shaper.draw_above(canvas, &bar.label, x, r.top - VALUE_LABEL_PAD, vf.size, theme.value_label, vf.bold);
            }
        }

        if let Some(x_label) = &spec.x_label {
            let top = plot.bottom + TICK_LEN + TICK_PAD + max_cat_h + LABEL_PAD;
            shaper.draw_below(canvas, x_label, plot.center_x(), top, font.axis_label_size, theme.axis_label, false);
        }
        let y_title = &plan.y_axis.label;
        if !y_title.is_empty() {
            let (_, h) = shaper.measure(y_title, font.axis_label_size, false);
            let cx = plot.left - TICK_LEN - TICK_PAD - max_tick_w - LABEL_PAD - h * 0.5;
            shaper.draw_vertical(canvas, y_title, cx, plot.center_y(), font.axis_label_size, theme.axis_label);
        }
        if !spec.title.is_empty() {
            shaper.draw_above(canvas, &spec.title, plot.center_x(), plot.top - TITLE_PAD, font.title_size, theme.axis_label, true);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, shaper: &TextShaper, plan: &ChartPlan) {
        let theme = &self.opts.theme;
        let size = self.opts.font.base_size;
        let row_h = size * 1.4;
        let swatch = (size * 2.0, size * 0.7);
        let pad = size * 0.5;
        let gap = size * 0.8;

        let text_w = plan
            .legend
            .iter()
            .map(|(name, _)| shaper.measure(name, size, false).0)
            .fold(0.0f32, f32::max);
        let box_w = pad * 2.0 + swatch.0 + gap + text_w;
        let box_h = pad * 2.0 + row_h * plan.legend.len() as f32;
        let left = match plan.legend_corner {
            LegendCorner::UpperLeft => plan.plot.left + pad,
            LegendCorner::UpperRight => plan.plot.right - pad - box_w,
        };
        let top = plan.plot.top + pad;

        let frame = skia::Rect::from_xywh(left, top, box_w, box_h);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.legend_fill);
        canvas.draw_round_rect(frame, 2.0, 2.0, &fill);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(LINE_WIDTH);
        border.set_color(theme.legend_border);
        canvas.draw_round_rect(frame, 2.0, 2.0, &border);

        let mut swatch_paint = skia::Paint::default();
        swatch_paint.set_anti_alias(true);
        for (i, (name, color)) in plan.legend.iter().enumerate() {
            let cy = top + pad + row_h * (i as f32 + 0.5);
            swatch_paint.set_color(*color);
            canvas.draw_rect(
                skia::Rect::from_xywh(left + pad, cy - swatch.1 * 0.5, swatch.0, swatch.1),
                &swatch_paint,
            );
            shaper.draw_left(canvas, name, left + pad + swatch.0 + gap, cy, size, theme.axis_label);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Put the legend over whichever edge category has the shorter bars.
fn legend_corner(bars: &[BarGeom], categories: usize) -> LegendCorner {
    let tallest = |category: usize| {
        bars.iter()
            .filter(|b| b.category == category)
            .map(|b| b.rect.height())
            .fold(0.0f32, f32::max)
    };
    if tallest(0) <= tallest(categories.saturating_sub(1)) {
        LegendCorner::UpperLeft
    } else {
        LegendCorner::UpperRight
    }
}

fn draw_grid(canvas: &skia::Canvas, plan: &ChartPlan, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(LINE_WIDTH);

    // horizontals only
    let p = plan.plot;
    for (y, _) in &plan.y_ticks {
        canvas.draw_line((p.left, *y), (p.right, *y), &paint);
    }
}

fn draw_bars(canvas: &skia::Canvas, plan: &ChartPlan) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    for bar in &plan.bars {
        body.set_color(bar.fill);
        let r = bar.rect;
        canvas.draw_rect(skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom), &body);
    }
}

fn draw_axes(canvas: &skia::Canvas, plan: &ChartPlan, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(LINE_WIDTH);

    let p = plan.plot;
    canvas.draw_rect(skia::Rect::from_ltrb(p.left, p.top, p.right, p.bottom), &axis_paint);
    // zero line when bars hang below it
    if plan.base > p.top + 0.5 && plan.base < p.bottom - 0.5 {
        canvas.draw_line((p.left, plan.base), (p.right, plan.base), &axis_paint);
    }

    axis_paint.set_color(theme.tick);
    for (x, _) in &plan.category_ticks {
        canvas.draw_line((*x, p.bottom), (*x, p.bottom + TICK_LEN), &axis_paint);
    }
    for (y, _) in &plan.y_ticks {
        canvas.draw_line((p.left - TICK_LEN, *y), (p.left, *y), &axis_paint);
    }
}
