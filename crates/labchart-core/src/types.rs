// File: crates/labchart-core/src/types.rs
// Summary: Shared types and constants (figure size, fonts, margins).

/// Points per inch; all layout happens in points and is scaled by `dpi / 72`.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Default figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 10.0;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 6.0;

/// Default export resolution.
pub const DEFAULT_DPI: u32 = 300;

/// Figure margins around the plot area, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80, 20, 44, 60)
    }
}

/// Process-wide font settings, handed to the renderer once at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct FontConfig {
    pub family: String,
    /// Base size in points; tick labels and the legend use it directly.
    pub base_size: f32,
    pub title_size: f32,
    pub axis_label_size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "DejaVu Sans".to_string(),
            base_size: 10.0,
            title_size: 14.0,
            axis_label_size: 12.0,
        }
    }
}

/// Figure size in inches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32) -> Self {
        Self { width_in, height_in }
    }

    /// Size in points.
    pub fn points(&self) -> (f32, f32) {
        (self.width_in * POINTS_PER_INCH, self.height_in * POINTS_PER_INCH)
    }

    /// Raster size in pixels at `dpi`.
    pub fn pixels(&self, dpi: u32) -> (i32, i32) {
        let w = (self.width_in * dpi as f32).round() as i32;
        let h = (self.height_in * dpi as f32).round() as i32;
        (w.max(1), h.max(1))
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN)
    }
}
