// File: crates/labchart-reports/src/lab3.rs
// Summary: Lab 3 charts: LSM storage engine vs PostgreSQL on the trade_data and tweets datasets.

use std::path::Path;

use labchart_core::{rgb_hex, ChartSpec, Color, Series, ValueFormat};

pub const DATASETS: [&str; 2] = ["trade_data", "tweets"];

/// On-disk size after import, MB.
pub const CSV_SIZES: [f64; 2] = [265.49, 3997.58];
pub const LSM_SIZES: [f64; 2] = [792.45, 6257.66];
pub const PG_SIZES: [f64; 2] = [1146.17, 8987.94];

/// Full-scan read time, seconds.
pub const LSM_READ: [f64; 2] = [24.72, 110.60];
pub const PG_READ: [f64; 2] = [6.93, 52.58];

/// Write / import time, seconds.
pub const LSM_WRITE: [f64; 2] = [162.74, 578.21];
pub const PG_WRITE: [f64; 2] = [294.43, 1521.90];

const CSV_COLOR: Color = rgb_hex(0x3498db);
const LSM_COLOR: Color = rgb_hex(0xe74c3c);
const PG_COLOR: Color = rgb_hex(0x2ecc71);

pub fn charts(out_dir: &Path) -> Vec<ChartSpec> {
    vec![sizes(out_dir), read_times(out_dir), write_times(out_dir)]
}

fn sizes(out_dir: &Path) -> ChartSpec {
    ChartSpec::new(DATASETS, out_dir.join("lab3_sizes.png"))
        .title("Size after conversion")
        .x_label("Dataset")
        .y_label("Size (MB)")
        .group_width(0.75)
        .value_format(ValueFormat::decimals(1))
        .series(Series::new("CSV", CSV_SIZES.to_vec()).with_color(CSV_COLOR))
        .series(Series::new("LSM", LSM_SIZES.to_vec()).with_color(LSM_COLOR))
        .series(Series::new("PostgreSQL", PG_SIZES.to_vec()).with_color(PG_COLOR))
}

fn engine_timing(out_dir: &Path, file: &str, title: &str, lsm: &[f64], pg: &[f64]) -> ChartSpec {
    ChartSpec::new(DATASETS, out_dir.join(file))
        .title(title)
        .x_label("Dataset")
        .y_label("Time (seconds)")
        .group_width(0.7)
        .value_format(ValueFormat::decimals(2))
        .series(Series::new("LSM", lsm.to_vec()).with_color(LSM_COLOR))
        .series(Series::new("PostgreSQL", pg.to_vec()).with_color(PG_COLOR))
}

fn read_times(out_dir: &Path) -> ChartSpec {
    engine_timing(out_dir, "lab3_read.png", "Full read time", &LSM_READ, &PG_READ)
}

fn write_times(out_dir: &Path) -> ChartSpec {
    engine_timing(out_dir, "lab3_write.png", "Write / import time", &LSM_WRITE, &PG_WRITE)
}
