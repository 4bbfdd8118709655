// File: crates/chart-shape/src/point.rs
// Summary: Point model (scalar or range per axis) and expansion into drawable point sequences.

use serde::Deserialize;

use crate::config::RangeEdges;
use crate::error::{Axis, ShapeError};
use crate::scale::CoordinateTransform;

/// Value of one axis: a single quantity or an ordered pair describing a band.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Scalar(f64),
    Range([f64; 2]),
}

impl AxisValue {
    pub fn is_range(&self) -> bool {
        matches!(self, AxisValue::Range(_))
    }

    /// Element `edge` of a range; scalars ignore the index.
    #[inline]
    fn edge(&self, edge: usize) -> f64 {
        match *self {
            AxisValue::Scalar(v) => v,
            AxisValue::Range(pair) => pair[edge],
        }
    }
}

impl From<f64> for AxisValue {
    fn from(v: f64) -> Self {
        AxisValue::Scalar(v)
    }
}

impl From<[f64; 2]> for AxisValue {
    fn from(pair: [f64; 2]) -> Self {
        AxisValue::Range(pair)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Point {
    pub x: AxisValue,
    pub y: AxisValue,
}

impl Point {
    pub fn new(x: impl Into<AxisValue>, y: impl Into<AxisValue>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

// Pair elements rendered per output sequence, in emission order.
const RENDERED: &[usize] = &[1];
const BOTH_EDGES: &[usize] = &[1, 0];

/// Expand `points` into one or two sequences of drawing-space tuples.
///
/// - No range axis: one sequence with the values as given.
/// - One range axis: one sequence using each pair's second element
///   (or both edges when `edges` is [`RangeEdges::Both`]).
/// - Both axes ranges: two sequences, second elements first, then first elements.
///
/// Every point must agree with the first one on which axes are ranges.
pub fn expand_points<T: CoordinateTransform + ?Sized>(
    points: &[Point],
    transform: &T,
    edges: RangeEdges,
) -> Result<Vec<Vec<(f64, f64)>>, ShapeError> {
    let first = points.first().ok_or(ShapeError::EmptyPoints)?;
    let (x_range, y_range) = (first.x.is_range(), first.y.is_range());
    for (index, p) in points.iter().enumerate().skip(1) {
        if p.x.is_range() != x_range {
            return Err(ShapeError::MismatchedRange { index, axis: Axis::X });
        }
        if p.y.is_range() != y_range {
            return Err(ShapeError::MismatchedRange { index, axis: Axis::Y });
        }
    }

    let passes = match (x_range, y_range, edges) {
        (true, true, _) => BOTH_EDGES,
        (true, false, RangeEdges::Both) | (false, true, RangeEdges::Both) => BOTH_EDGES,
        _ => RENDERED,
    };

    Ok(passes
        .iter()
        .map(|&edge| {
            points
                .iter()
                .map(|p| transform.convert(p.x.edge(edge), p.y.edge(edge)))
                .collect()
        })
        .collect())
}
