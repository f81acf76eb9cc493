// File: crates/labchart-core/src/scale.rs
// Summary: Category (X) and Value (Y) scale transforms from data space to points.

use crate::axis::{Axis, ScaleKind};

/// Logical X coordinate: category index, bar offsets are fractions of one unit.
pub type Logical = f64;
/// Value Y coordinate (e.g., size in MB or seconds).
pub type Value = f64;

/// Horizontal category scale: logical start plus spacing (points per category unit).
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub start_logical: Logical,
    pub unit_spacing: f32,
}

impl CategoryScale {
    pub fn new(left_px: f32, start_logical: Logical, unit_spacing: f32) -> Self {
        Self { left_px, start_logical, unit_spacing: unit_spacing.max(0.01) }
    }

    /// Fit the logical range `[start, end]` into `[left_px, right_px]`.
    pub fn fit(left_px: f32, right_px: f32, start: Logical, end: Logical) -> Self {
        let span = (end - start).max(1e-9);
        Self::new(left_px, start, (right_px - left_px) / span as f32)
    }

    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        self.left_px + ((x - self.start_logical) as f32) * self.unit_spacing
    }
}

/// Vertical value scale mapping the axis range to [top, bottom] points.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(top_px: f32, bottom_px: f32, mut vmin: Value, mut vmax: Value) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { top_px, bottom_px, vmin, vmax, log: true, log_min, log_max }
    }

    pub fn for_axis(axis: &Axis, top_px: f32, bottom_px: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(top_px, bottom_px, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(top_px, bottom_px, axis.min, axis.max),
        }
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        if self.log {
            let yy = y.max(1e-12).log10();
            let span = (self.log_max - self.log_min).max(1e-12);
            self.bottom_px - ((yy - self.log_min) / span) as f32 * (self.bottom_px - self.top_px)
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
        }
    }

    /// Pixel row where bars start: zero on linear axes, the axis floor on log axes.
    pub fn base_px(&self) -> f32 {
        if self.log { self.bottom_px } else { self.to_px(0.0_f64.clamp(self.vmin, self.vmax)) }
    }
}
