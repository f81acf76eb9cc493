// File: crates/labchart-reports/src/lab4.rs
// Summary: Lab 4 charts: LZ77 (ours) vs GZIP vs ZSTD on trade_data (278.38 MB).

use std::path::Path;

use labchart_core::{rgb_hex, ChartSpec, Color, Series, ValueFormat};

pub const ALGORITHMS: [&str; 3] = ["LZ77\n(ours)", "GZIP", "ZSTD"];

pub const COMPRESSION_RATIOS: [f64; 3] = [2.29, 5.67, 4.85];
/// Seconds.
pub const COMPRESS_TIMES: [f64; 3] = [187.32, 22.67, 1.99];
/// Seconds.
pub const DECOMPRESS_TIMES: [f64; 3] = [203.15, 1.73, 0.71];

const BAR_COLORS: [Color; 3] = [rgb_hex(0xe74c3c), rgb_hex(0x3498db), rgb_hex(0x2ecc71)];

pub fn charts(out_dir: &Path) -> Vec<ChartSpec> {
    vec![
        ChartSpec::new(ALGORITHMS, out_dir.join("lab4_compression_ratio.png"))
            .title("Compression ratio for trade_data (278.38 MB)")
            .y_label("Compression ratio")
            .value_format(ValueFormat::decimals(2).times().bold().size(11.0))
            .series(per_algorithm("ratio", &COMPRESSION_RATIOS)),
        timing(
            out_dir,
            "lab4_compress_time.png",
            "Compression time for trade_data (278.38 MB)",
            &COMPRESS_TIMES,
        ),
        timing(
            out_dir,
            "lab4_decompress_time.png",
            "Decompression time for trade_data (278.38 MB)",
            &DECOMPRESS_TIMES,
        ),
    ]
}

fn per_algorithm(name: &str, values: &[f64]) -> Series {
    Series::new(name, values.to_vec()).with_bar_colors(BAR_COLORS.to_vec())
}

// Timings span two orders of magnitude, so the value axis is logarithmic.
fn timing(out_dir: &Path, file: &str, title: &str, values: &[f64]) -> ChartSpec {
    ChartSpec::new(ALGORITHMS, out_dir.join(file))
        .title(title)
        .y_label("Time (seconds)")
        .log_scale()
        .value_format(ValueFormat::decimals(2).unit("s").bold().size(10.0))
        .series(per_algorithm("time", values))
}
