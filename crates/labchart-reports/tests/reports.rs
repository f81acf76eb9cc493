// File: crates/labchart-reports/tests/reports.rs
// Purpose: The lab report chart sets are valid and render to the expected files.

use std::path::{Path, PathBuf};

use labchart_core::{BarChartRenderer, RenderOptions, ScaleKind};
use labchart_reports::{lab3, lab4, render_all_to};

fn file_names(specs: &[labchart_core::ChartSpec]) -> Vec<String> {
    specs
        .iter()
        .map(|s| s.output.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn lab3_charts_are_valid() {
    let specs = lab3::charts(Path::new("docs/images"));
    assert_eq!(file_names(&specs), ["lab3_sizes.png", "lab3_read.png", "lab3_write.png"]);
    for spec in &specs {
        spec.validate().expect("valid");
        assert_eq!(spec.scale, ScaleKind::Linear);
        assert_eq!(spec.dpi, 300);
        assert!(spec.show_legend());
        assert_eq!(spec.output.parent(), Some(Path::new("docs/images")));
    }
    assert_eq!(specs[0].series.len(), 3);
    assert_eq!(specs[1].series.len(), 2);
}

#[test]
fn lab3_size_labels_use_one_decimal() {
    let renderer = BarChartRenderer::new(RenderOptions::default());
    let plan = renderer.plan(&lab3::charts(Path::new("out"))[0]).expect("plan");
    let labels = plan.labels();
    assert!(labels.starts_with(&["265.5", "3997.6", "792.5"]));
}

#[test]
fn lab4_time_charts_are_logarithmic() {
    let specs = lab4::charts(Path::new("docs/images"));
    assert_eq!(
        file_names(&specs),
        ["lab4_compression_ratio.png", "lab4_compress_time.png", "lab4_decompress_time.png"]
    );
    assert_eq!(specs[0].scale, ScaleKind::Linear);
    assert_eq!(specs[1].scale, ScaleKind::Log10);
    assert_eq!(specs[2].scale, ScaleKind::Log10);
    for spec in &specs {
        spec.validate().expect("valid");
        assert!(!spec.show_legend());
        assert_eq!(spec.series[0].bar_colors.len(), 3);
    }
    assert_eq!(specs[0].value_format.format(5.67), "5.67×");
    assert_eq!(specs[1].value_format.format(22.67), "22.67 s");
}

#[test]
fn reports_render_to_output_dir() {
    let out = PathBuf::from("target/test_out/reports");
    let renderer = BarChartRenderer::new(RenderOptions::default());
    let specs = lab3::charts(&out).into_iter().chain(lab4::charts(&out));
    for spec in specs.map(|s| s.dpi(50)) {
        renderer.render(&spec).expect("render");
        let len = std::fs::metadata(&spec.output).expect("exists").len();
        assert!(len > 0, "{} is empty", spec.output.display());
    }
}

#[test]
fn render_all_reports_each_saved_file() {
    let out = PathBuf::from("target/test_out/reports_stdout");
    let specs: Vec<_> = lab4::charts(&out).into_iter().map(|s| s.dpi(40)).collect();
    let mut buf = Vec::new();
    render_all_to(&mut buf, &specs).expect("render all");

    let text = String::from_utf8(buf).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    let expected: Vec<String> = specs
        .iter()
        .enumerate()
        .map(|(i, s)| format!("✓ Chart {} saved: {}", i + 1, s.output.display()))
        .collect();
    assert_eq!(lines.len(), 5, "{text}");
    assert_eq!(&lines[..3], expected.as_slice());
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "All charts generated successfully!");
}

#[test]
fn render_all_stops_before_summary_on_failure() {
    let blocker = PathBuf::from("target/test_out/reports_blocker");
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    std::fs::write(&blocker, b"file").unwrap();

    let mut specs: Vec<_> = lab4::charts(Path::new("target/test_out/reports_partial"))
        .into_iter()
        .map(|s| s.dpi(40))
        .collect();
    specs[1].output = blocker.join("chart.png");

    let mut buf = Vec::new();
    assert!(render_all_to(&mut buf, &specs).is_err());
    let text = String::from_utf8(buf).expect("utf8");
    assert_eq!(text.lines().count(), 1, "{text}");
    assert!(text.starts_with("✓ Chart 1 saved: "));
    assert!(!text.contains("All charts generated"));
}
