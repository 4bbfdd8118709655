// File: crates/chart-shape/src/error.rs
// Summary: Error type shared by point expansion, option validation and surfaces.

use std::fmt;

use thiserror::Error;

/// Data axis a point value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    /// A shape needs at least one point.
    #[error("invalid input: at least one point is required")]
    EmptyPoints,
    /// Point `index` disagrees with the first point on whether `axis` is a range.
    #[error("invalid input: point {index} has a {axis} value whose range arity differs from the first point")]
    MismatchedRange { index: usize, axis: Axis },
    #[error("unknown shape type '{0}'")]
    UnknownShapeType(String),
    #[error("invalid color '{0}': expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },
    #[error("drawing surface failed: {0}")]
    Surface(String),
}
