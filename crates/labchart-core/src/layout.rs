// File: crates/labchart-core/src/layout.rs
// Summary: Bar-group geometry in category units and value-axis range resolution.

use crate::axis::ScaleKind;

/// Fraction of one category unit occupied by a bar group unless a chart overrides it.
pub const DEFAULT_GROUP_WIDTH: f64 = 0.8;

/// Horizontal padding added on each side of the bars, as a fraction of their extent.
pub const X_MARGIN: f64 = 0.05;

/// Headroom above the tallest bar for its value label (fraction of range, or of decades on log axes).
pub const VALUE_HEADROOM: f64 = 0.1;

/// Bar width and per-series center offsets within one category group.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupLayout {
    pub bar_width: f64,
    pub offsets: Vec<f64>,
}

impl GroupLayout {
    /// Split `group_width` evenly into `series_count` adjacent bars centered on the tick.
    pub fn new(series_count: usize, group_width: f64) -> Self {
        let n = series_count.max(1);
        let bar_width = group_width / n as f64;
        let mid = (n as f64 - 1.0) * 0.5;
        let offsets = (0..n).map(|i| (i as f64 - mid) * bar_width).collect();
        Self { bar_width, offsets }
    }

    /// Logical (left, right) of bar `series` in category `category`.
    pub fn bar_span(&self, category: usize, series: usize) -> (f64, f64) {
        let center = category as f64 + self.offsets[series];
        (center - self.bar_width * 0.5, center + self.bar_width * 0.5)
    }
}

/// Logical x range covering every bar plus a small margin.
pub fn category_extent(categories: usize, group_width: f64) -> (f64, f64) {
    let lo = -group_width * 0.5;
    let hi = categories.saturating_sub(1) as f64 + group_width * 0.5;
    let pad = (hi - lo) * X_MARGIN;
    (lo - pad, hi + pad)
}

/// Resolve the value-axis range for strictly validated `values`.
///
/// Linear axes always include zero, with headroom on each side that holds bars.
/// Log axes start on the power of ten strictly below the smallest value, so every
/// bar keeps a positive height.
pub fn value_range(values: &[f64], kind: ScaleKind) -> (f64, f64) {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    match kind {
        ScaleKind::Linear => {
            if !max.is_finite() || !min.is_finite() {
                return (0.0, 1.0);
            }
            let lo = min.min(0.0);
            let hi = max.max(0.0);
            let span = hi - lo;
            if span <= 0.0 {
                return (0.0, 1.0);
            }
            let lo = if lo < 0.0 { lo - VALUE_HEADROOM * span } else { 0.0 };
            let hi = if hi > 0.0 { hi + VALUE_HEADROOM * span } else { 0.0 };
            (lo, hi)
        }
        ScaleKind::Log10 => {
            if !min.is_finite() || min <= 0.0 {
                return (1.0, 10.0);
            }
            let lmin = min.log10();
            let lmax = max.log10();
            let span = (lmax - lmin).max(1.0);
            let floor = (lmin - X_MARGIN * span).floor();
            let top = lmax + VALUE_HEADROOM * span;
            (10f64.powf(floor), 10f64.powf(top))
        }
    }
}
