// File: crates/csvchart-core/src/types.rs
// Summary: Shared render types and constants (sizes, paddings, plot rectangle).

/// Default surface width in pixels.
pub const WIDTH: u32 = 900;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 500;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // top leaves room for title + legend, bottom for category labels + axis title
        Self::new(80, 32, 72, 72)
    }
}

/// Plot area in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Surface minus insets; never narrower or shorter than one pixel.
    pub fn new(width: u32, height: u32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width.saturating_sub(insets.right) as f32).max(left + 1.0);
        let bottom = (height.saturating_sub(insets.bottom) as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
