// File: crates/labchart-reports/src/bin/lab4.rs
// Summary: Renders the lab 4 (LZ77 vs GZIP vs ZSTD) report charts.

use anyhow::Result;
use labchart_reports::{lab4, logger, output_dir, render_all};

fn main() -> Result<()> {
    logger::init_logger()?;
    let out = output_dir();
    render_all(&lab4::charts(&out))
}
