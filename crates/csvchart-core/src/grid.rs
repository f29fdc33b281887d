// File: crates/csvchart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Indices of at most `max_labels` evenly strided categories out of `count`.
/// The first category is always labelled.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if count == 0 || max_labels == 0 { return 1; }
    count.div_ceil(max_labels).max(1)
}

/// Format a tick value compactly: integers without decimals, others with
/// up to two decimals and trailing zeros removed.
pub fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        return format!("{}", v.round() as i64);
    }
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
