// File: crates/labchart-core/tests/rgba.rs
// Purpose: Validate the raw RGBA buffer: shape, background, and bar fill pixels.

use labchart_core::{rgb_hex, BarChartRenderer, ChartSpec, RenderOptions, Series};

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn renderer_overflow(dpi: u32) -> usize {
    RenderOptions::default().overflow_px(dpi) as usize
}

#[test]
fn render_rgba8_buffer() {
    let red = rgb_hex(0xe74c3c);
    let spec = ChartSpec::new(["LZ77", "GZIP", "ZSTD"], "target/test_out/rgba.png")
        .series(Series::new("ratio", vec![2.29, 5.67, 4.85]).with_color(red))
        .dpi(72);

    let mut opts = RenderOptions::default();
    opts.draw_text = false; // avoid font variance
    let renderer = BarChartRenderer::new(opts);
    let plan = renderer.plan(&spec).expect("plan");
    let (px, w, h) = renderer.render_to_rgba8(&spec).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());

    // background in the top-left corner
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // interior of every bar carries its fill (72 dpi: 1 pt = 1 px, shifted by the overflow border)
    let o = renderer_overflow(72);
    for bar in &plan.bars {
        let x = bar.rect.center_x() as usize + o;
        let y = bar.rect.center_y() as usize + o;
        let i = (y * w as usize + x) * 4;
        assert_eq!(&px[i..i + 4], &[red.r(), red.g(), red.b(), 255], "bar {}", bar.label);
    }
}

#[test]
fn negative_bar_hangs_below_zero() {
    let blue = rgb_hex(0x3498db);
    let spec = ChartSpec::new(["loss", "gain"], "target/test_out/rgba_negative.png")
        .series(Series::new("delta", vec![-3.0, 5.0]).with_color(blue))
        .dpi(72);
    let mut opts = RenderOptions::default();
    opts.draw_text = false;
    let renderer = BarChartRenderer::new(opts);
    let plan = renderer.plan(&spec).expect("plan");
    let (px, w, _) = renderer.render_to_rgba8(&spec).expect("rgba render");

    let o = renderer_overflow(72);
    let neg = &plan.bars[0];
    let x = neg.rect.center_x() as usize + o;
    let below = (plan.base + 0.5 * neg.rect.height()) as usize + o;
    let i = (below * w as usize + x) * 4;
    assert_eq!(&px[i..i + 4], &[blue.r(), blue.g(), blue.b(), 255]);

    // nothing of that bar above the zero row
    let above = (plan.base - 0.5 * neg.rect.height()) as usize + o;
    let i = (above * w as usize + x) * 4;
    assert_ne!(&px[i..i + 4], &[blue.r(), blue.g(), blue.b(), 255]);
}

#[test]
fn wide_tick_labels_keep_y_title_on_canvas() {
    let spec = ChartSpec::new(["small", "large"], "target/test_out/rgba_wide.png")
        .title("Row counts")
        .y_label("Rows written")
        .series(Series::new("rows", vec![1e9, 2e9]))
        .dpi(72);
    let renderer = BarChartRenderer::new(RenderOptions::default());

    // every drawn pixel stays off the raster edge
    let (px, w, h) = renderer.render_to_rgba8(&spec).expect("rgba render");
    for y in 0..h as usize {
        let i = y * w as usize * 4;
        assert_eq!(&px[i..i + 4], &WHITE, "left edge row {y}");
    }

    // and the crop keeps a background margin on the left
    let bytes = renderer.render_to_png_bytes(&spec).expect("png");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    for y in 0..img.height() {
        assert_eq!(img.get_pixel(0, y).0, WHITE, "cropped column 0, row {y}");
    }
}
