// File: crates/chart-shape/src/style.rs
// Summary: Stroke style resolution per shape type, plus the reduced active (highlight) style.

use serde::Deserialize;

use crate::config::ShapeOptions;
use crate::shape_type::ShapeType;
use crate::theme::Color;
use crate::types::{DASH_DASH, DOT_DASH};

/// Per-point or per-series style attributes; every field is optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleAttrs {
    pub color: Option<Color>,
    pub size: Option<f64>,
    pub opacity: Option<f64>,
}

impl StyleAttrs {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    pub stroke: Color,
    pub line_width: f64,
    /// `(on, off)` lengths; `None` strokes a solid line.
    pub line_dash: Option<[f64; 2]>,
    pub opacity: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveStyle {
    pub line_width: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct StyleResolver {
    default_stroke: Color,
    line_width: f64,
    active_line_width: f64,
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::from_options(&ShapeOptions::default())
    }
}

impl StyleResolver {
    pub fn from_options(opts: &ShapeOptions) -> Self {
        Self {
            default_stroke: opts.default_color,
            line_width: opts.line_width,
            active_line_width: opts.active_line_width,
        }
    }

    pub fn default_stroke(&self) -> Color {
        self.default_stroke
    }

    pub fn style(&self, shape: ShapeType, attrs: &StyleAttrs) -> ShapeStyle {
        ShapeStyle {
            stroke: attrs.color.unwrap_or(self.default_stroke),
            line_width: attrs.size.unwrap_or(self.line_width),
            line_dash: line_dash(shape),
            opacity: attrs.opacity,
        }
    }

    /// Half the given size, or half the default active width.
    pub fn active_style(&self, attrs: Option<&StyleAttrs>) -> ActiveStyle {
        let width = attrs.and_then(|a| a.size).unwrap_or(self.active_line_width);
        ActiveStyle { line_width: width / 2.0 }
    }
}

fn line_dash(shape: ShapeType) -> Option<[f64; 2]> {
    match shape {
        ShapeType::Dot => Some(DOT_DASH),
        ShapeType::Dash => Some(DASH_DASH),
        _ => None,
    }
}
