// File: crates/labchart-reports/src/bin/lab3.rs
// Summary: Renders the lab 3 (LSM vs PostgreSQL) report charts.

use anyhow::Result;
use labchart_reports::{lab3, logger, output_dir, render_all};

fn main() -> Result<()> {
    logger::init_logger()?;
    let out = output_dir();
    render_all(&lab3::charts(&out))
}
