// File: crates/labchart-core/tests/validation.rs
// Purpose: Malformed chart specs are rejected before anything is drawn or written.

use labchart_core::{rgb_hex, BarChartRenderer, ChartSpec, RenderError, RenderOptions, Series};

fn renderer() -> BarChartRenderer {
    BarChartRenderer::new(RenderOptions::default())
}

fn assert_invalid(spec: ChartSpec, needle: &str) {
    match renderer().plan(&spec) {
        Err(RenderError::InvalidSpec(msg)) => assert!(msg.contains(needle), "message {msg:?} lacks {needle:?}"),
        other => panic!("expected InvalidSpec containing {needle:?}, got {other:?}"),
    }
}

fn two_categories(out: &str) -> ChartSpec {
    ChartSpec::new(["trade_data", "tweets"], format!("target/test_out/{out}"))
}

#[test]
fn length_mismatch_is_rejected() {
    assert_invalid(two_categories("v1.png").series(Series::new("LSM", vec![1.0, 2.0, 3.0])), "3 values for 2 categories");
}

#[test]
fn empty_series_is_rejected() {
    assert_invalid(two_categories("v2.png").series(Series::new("LSM", vec![])), "is empty");
}

#[test]
fn missing_series_or_categories_is_rejected() {
    assert_invalid(two_categories("v3.png"), "at least one series");
    let none: [&str; 0] = [];
    assert_invalid(ChartSpec::new(none, "target/test_out/v4.png"), "at least one category");
}

#[test]
fn duplicate_categories_are_rejected() {
    let spec = ChartSpec::new(["a", "a"], "target/test_out/v5.png").series(Series::new("s", vec![1.0, 2.0]));
    assert_invalid(spec, "duplicate category");
}

#[test]
fn log_scale_rejects_zero() {
    let spec = two_categories("v6.png").log_scale().series(Series::new("t", vec![0.0, 2.0]));
    assert_invalid(spec, "log scale needs values > 0");
}

#[test]
fn non_finite_values_are_rejected() {
    assert_invalid(two_categories("v7.png").series(Series::new("t", vec![f64::NAN, 2.0])), "non-finite");
    assert_invalid(two_categories("v8.png").series(Series::new("t", vec![f64::INFINITY, 2.0])), "non-finite");
}

#[test]
fn negative_values_are_valid_on_linear_axes_only() {
    let linear = two_categories("v11.png").series(Series::new("d", vec![-3.0, 5.0]));
    assert!(linear.validate().is_ok());
    assert_invalid(linear.log_scale(), "log scale needs values > 0");
}

#[test]
fn bar_color_count_must_match_categories() {
    let spec = two_categories("v9.png")
        .series(Series::new("t", vec![1.0, 2.0]).with_bar_colors(vec![rgb_hex(0xff0000)]));
    assert_invalid(spec, "1 bar colors for 2 categories");
}

#[test]
fn group_width_and_dpi_are_bounded() {
    let ok = || two_categories("v10.png").series(Series::new("t", vec![1.0, 2.0]));
    assert_invalid(ok().group_width(0.0), "group width");
    assert_invalid(ok().group_width(1.5), "group width");
    assert_invalid(ok().dpi(0), "dpi");
    assert!(ok().validate().is_ok());
}

#[test]
fn invalid_spec_writes_no_file() {
    let out = std::path::PathBuf::from("target/test_out/never_written.png");
    std::fs::remove_file(&out).ok();
    let spec = ChartSpec::new(["a", "b"], &out).series(Series::new("s", vec![1.0]));
    assert!(matches!(renderer().render(&spec), Err(RenderError::InvalidSpec(_))));
    assert!(!out.exists());
}
