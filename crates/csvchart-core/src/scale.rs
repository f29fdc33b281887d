// File: crates/csvchart-core/src/scale.rs
// Summary: Value (Y) range autoscale and pixel transforms for category/value plots.

use crate::chart::{ChartDescription, ChartKind};
use crate::types::PlotRect;

/// Visible value range of a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Autoscale over the finite values of `chart`, padded by 2% of the span.
    /// Bar charts always include zero so bars grow from a visible baseline.
    /// Falls back to `0..1` when no finite value exists.
    pub fn from_chart(chart: &ChartDescription) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in chart.values().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return Self { min: 0.0, max: 1.0 };
        }
        if chart.kind == ChartKind::Bar {
            min = min.min(0.0);
            max = max.max(0.0);
        }
        if (max - min).abs() < 1e-9 { max = min + 1.0; }
        let m = (max - min) * 0.02;
        let mut out = Self { min: min - m, max: max + m };
        // keep the zero baseline exact for bars
        if chart.kind == ChartKind::Bar {
            if min == 0.0 { out.min = 0.0; }
            if max == 0.0 { out.max = 0.0; }
        }
        out
    }

    pub fn span(&self) -> f64 { (self.max - self.min).max(1e-12) }
}

/// Linear map from values to vertical pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub range: ValueRange,
}

impl ValueScale {
    pub fn new(rect: &PlotRect, range: ValueRange) -> Self {
        Self { top_px: rect.top, bottom_px: rect.bottom, range }
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let t = ((y - self.range.min) / self.range.span()) as f32;
        self.bottom_px - t * (self.bottom_px - self.top_px)
    }
}

/// Evenly spaced bands, one per category; points sit at band centers.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub band: f32,
}

impl CategoryScale {
    pub fn new(rect: &PlotRect, count: usize) -> Self {
        let n = count.max(1) as f32;
        Self { left_px: rect.left, band: rect.width() / n }
    }
    #[inline]
    pub fn center(&self, index: usize) -> f32 {
        self.left_px + (index as f32 + 0.5) * self.band
    }
}
