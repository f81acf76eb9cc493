// File: crates/labchart-core/src/lib.rs
// Summary: Core library entry point; exports the grouped bar chart spec, layout plan and renderer.

pub mod axis;
pub mod chart;
pub mod error;
pub mod export;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod scale;
pub mod series;
pub mod spec;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, ScaleKind};
pub use chart::{BarChartRenderer, BarGeom, ChartPlan, LegendCorner, RenderOptions};
pub use error::{RenderError, Result};
pub use format::ValueFormat;
pub use series::Series;
pub use spec::ChartSpec;
pub use text::TextShaper;
pub use theme::{rgb_hex, Theme, DEFAULT_PALETTE};
pub use types::{FigureSize, FontConfig, Insets};

pub use skia_safe::Color;
