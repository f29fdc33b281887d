// File: crates/csvchart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic line and bar charts to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use csvchart_core::{build_chart, ChartKind, ChartRequest, RenderOptions};
use csvchart_render_skia::render_png_bytes;

const STEPS: &str = "date,steps\nmon,8500\ntue,7200\nwed,9100\nthu,6400\nfri,10250\n";

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(kind: ChartKind) -> Vec<u8> {
    let chart = build_chart(STEPS.as_bytes(), &ChartRequest::new(kind, "date", "steps")).expect("chart");
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    render_png_bytes(&chart, &opts).expect("render bytes")
}

#[test]
fn golden_line() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/line.png");
    write_or_compare(&path, &render_bytes(ChartKind::Line));
}

#[test]
fn golden_bar() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/bar.png");
    write_or_compare(&path, &render_bytes(ChartKind::Bar));
}
