// File: crates/labchart-core/src/series.rs
// Summary: Named bar series aligned to the chart's category set.

use skia_safe as skia;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    /// Fill for every bar of the series; falls back to the palette when unset.
    pub color: Option<skia::Color>,
    /// Per-category fills, overriding `color`. Empty or one per category.
    pub bar_colors: Vec<skia::Color>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values, color: None, bar_colors: Vec::new() }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Color each category's bar individually (single-series comparison charts).
    pub fn with_bar_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.bar_colors = colors;
        self
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Fill of the bar at `category`, given this series' position in the chart.
    pub fn fill_for(&self, category: usize, series_index: usize, palette: &[skia::Color]) -> skia::Color {
        if let Some(c) = self.bar_colors.get(category) {
            return *c;
        }
        if let Some(c) = self.color {
            return c;
        }
        if palette.is_empty() {
            return skia::Color::BLACK;
        }
        palette[series_index % palette.len()]
    }

    /// Swatch color for the legend: the series color, else its first bar color, else palette.
    pub fn legend_fill(&self, series_index: usize, palette: &[skia::Color]) -> skia::Color {
        match (self.color, self.bar_colors.first()) {
            (Some(c), _) => c,
            (None, Some(c)) => *c,
            (None, None) => self.fill_for(usize::MAX, series_index, palette),
        }
    }
}
