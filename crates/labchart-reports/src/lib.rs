// File: crates/labchart-reports/src/lib.rs
// Summary: Shared plumbing for the lab report programs: logging, output directory, render loop.

pub mod lab3;
pub mod lab4;
pub mod logger;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use labchart_core::{BarChartRenderer, ChartSpec, RenderOptions};
use log::debug;

/// Where report images go unless the first CLI argument says otherwise.
pub const DEFAULT_OUT_DIR: &str = "docs/images";

/// Output directory from the first CLI argument, or `docs/images`.
pub fn output_dir() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
}

/// Render every chart in order, printing one confirmation line per file to stdout.
pub fn render_all(specs: &[ChartSpec]) -> Result<()> {
    render_all_to(&mut std::io::stdout().lock(), specs)
}

/// Render every chart in order, writing the confirmation lines to `out`.
///
/// Stops at the first failure; lines for charts already written stay in `out`.
pub fn render_all_to(out: &mut impl Write, specs: &[ChartSpec]) -> Result<()> {
    let renderer = BarChartRenderer::new(RenderOptions::default());
    for (i, spec) in specs.iter().enumerate() {
        debug!("rendering chart {} of {}: {:?}", i + 1, specs.len(), spec.title);
        renderer
            .render(spec)
            .with_context(|| format!("failed to render '{}' to {}", spec.title, spec.output.display()))?;
        writeln!(out, "✓ Chart {} saved: {}", i + 1, spec.output.display())?;
    }
    writeln!(out, "\nAll charts generated successfully!")?;
    Ok(())
}
