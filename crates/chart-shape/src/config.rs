// File: crates/chart-shape/src/config.rs
// Summary: Construction-time options injected into the line shape facade.

use serde::Deserialize;

use crate::error::ShapeError;
use crate::theme::{Color, Theme};
use crate::types::{DEFAULT_ACTIVE_LINE_WIDTH, DEFAULT_LINE_WIDTH, DEFAULT_SMOOTHING};

/// How a point set with exactly one range-valued axis is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeEdges {
    /// Render only the second element of the pair.
    #[default]
    Rendered,
    /// Render both edges of the band: second-element line first, then first-element line.
    Both,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShapeOptions {
    pub default_color: Color,
    pub line_width: f64,
    pub active_line_width: f64,
    pub smoothing: f64,
    pub range_edges: RangeEdges,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            default_color: Color::from_rgb(0x18, 0x90, 0xff),
            line_width: DEFAULT_LINE_WIDTH,
            active_line_width: DEFAULT_ACTIVE_LINE_WIDTH,
            smoothing: DEFAULT_SMOOTHING,
            range_edges: RangeEdges::Rendered,
        }
    }
}

impl ShapeOptions {
    /// Defaults with the theme's line stroke as default color.
    pub fn from_theme(theme: &Theme) -> Self {
        Self { default_color: theme.line_stroke, ..Self::default() }
    }

    pub fn with_range_edges(mut self, range_edges: RangeEdges) -> Self {
        self.range_edges = range_edges;
        self
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        positive("line_width", self.line_width)?;
        positive("active_line_width", self.active_line_width)?;
        if !(0.0..=1.0).contains(&self.smoothing) {
            return Err(ShapeError::InvalidOption {
                name: "smoothing",
                reason: format!("{} is outside [0, 1]", self.smoothing),
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, v: f64) -> Result<(), ShapeError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidOption { name, reason: format!("{v} must be finite and > 0") })
    }
}
