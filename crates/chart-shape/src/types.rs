// File: crates/chart-shape/src/types.rs
// Summary: Shared constants (widths, dash patterns, smoothing) and the plot inset model.

/// Line width used when a point carries no explicit size.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
/// Stroke width halved by the active (highlight) style when no size is given.
pub const DEFAULT_ACTIVE_LINE_WIDTH: f64 = 4.0;
/// Catmull-Rom tension used by the smooth strategy.
pub const DEFAULT_SMOOTHING: f64 = 0.4;

/// Dash pattern (on, off) of the `dot` shape.
pub const DOT_DASH: [f64; 2] = [2.0, 1.0];
/// Dash pattern (on, off) of the `dash` shape.
pub const DASH_DASH: [f64; 2] = [10.0, 5.0];

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
        Self::new(48, 24, 24, 48)
    }
}
