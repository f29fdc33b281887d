// File: crates/csvchart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use csvchart_core::{build_chart, ChartKind, ChartRequest, RenderOptions};
use csvchart_render_skia::{render_png_bytes, render_to_png};

const SLEEP: &str = "date,sleep_score\n2024-01-01,85\n2024-01-02,78\n2024-01-03,92\n2024-01-04,88\n";

#[test]
fn render_smoke_png() {
    let req = ChartRequest::new(ChartKind::Line, "date", "sleep_score").with_title("Sleep");
    let chart = build_chart(SLEEP.as_bytes(), &req).expect("chart");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    render_to_png(&chart, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_png_bytes(&chart, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn png_matches_requested_size() {
    let req = ChartRequest::new(ChartKind::Bar, "date", "sleep_score");
    let chart = build_chart(SLEEP.as_bytes(), &req).expect("chart");
    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false;
    let bytes = render_png_bytes(&chart, &opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (320, 200));
    // Background is opaque
    assert_eq!(img.get_pixel(0, 0)[3], 255);
}
