// File: crates/labchart-core/src/spec.rs
// Summary: ChartSpec: categories, series, labels and export settings for one bar chart.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::axis::ScaleKind;
use crate::error::{RenderError, Result};
use crate::format::ValueFormat;
use crate::layout::DEFAULT_GROUP_WIDTH;
use crate::series::Series;
use crate::types::DEFAULT_DPI;

/// Everything needed to render one chart to one file.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: String,
    pub value_format: ValueFormat,
    pub scale: ScaleKind,
    /// Fraction of a category unit covered by each bar group, in (0, 1].
    pub group_width: f64,
    /// `None` shows a legend only when there is more than one series.
    pub legend: Option<bool>,
    pub output: PathBuf,
    pub dpi: u32,
}

impl ChartSpec {
    pub fn new<I, S>(categories: I, output: impl AsRef<Path>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            series: Vec::new(),
            title: String::new(),
            x_label: None,
            y_label: String::new(),
            value_format: ValueFormat::default(),
            scale: ScaleKind::Linear,
            group_width: DEFAULT_GROUP_WIDTH,
            legend: None,
            output: output.as_ref().to_path_buf(),
            dpi: DEFAULT_DPI,
        }
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn value_format(mut self, format: ValueFormat) -> Self {
        self.value_format = format;
        self
    }

    pub fn log_scale(mut self) -> Self {
        self.scale = ScaleKind::Log10;
        self
    }

    pub fn group_width(mut self, width: f64) -> Self {
        self.group_width = width;
        self
    }

    pub fn legend(mut self, show: bool) -> Self {
        self.legend = Some(show);
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn show_legend(&self) -> bool {
        self.legend.unwrap_or(self.series.len() > 1)
    }

    /// All values in series order, category-major within each series.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(|s| s.values.iter().copied())
    }

    /// Check every layout precondition; nothing is drawn for an invalid spec.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(RenderError::invalid("at least one category is required"));
        }
        let mut seen = HashSet::new();
        for c in &self.categories {
            if !seen.insert(c.as_str()) {
                return Err(RenderError::invalid(format!("duplicate category {c:?}")));
            }
        }
        if self.series.is_empty() {
            return Err(RenderError::invalid("at least one series is required"));
        }
        let n = self.categories.len();
        for s in &self.series {
            if s.is_empty() {
                return Err(RenderError::invalid(format!("series {:?} is empty", s.name)));
            }
            if s.len() != n {
                return Err(RenderError::invalid(format!(
                    "series {:?} has {} values for {} categories",
                    s.name,
                    s.len(),
                    n
                )));
            }
            if !s.bar_colors.is_empty() && s.bar_colors.len() != n {
                return Err(RenderError::invalid(format!(
                    "series {:?} has {} bar colors for {} categories",
                    s.name,
                    s.bar_colors.len(),
                    n
                )));
            }
            for &v in &s.values {
                if !v.is_finite() {
                    return Err(RenderError::invalid(format!("series {:?} has non-finite value {v}", s.name)));
                }
                if self.scale == ScaleKind::Log10 && v <= 0.0 {
                    return Err(RenderError::invalid(format!(
                        "series {:?} has value {v}, log scale needs values > 0",
                        s.name
                    )));
                }
            }
        }
        if !(self.group_width > 0.0 && self.group_width <= 1.0) {
            return Err(RenderError::invalid(format!("group width {} outside (0, 1]", self.group_width)));
        }
        if self.dpi == 0 {
            return Err(RenderError::invalid("dpi must be positive"));
        }
        Ok(())
    }
}
