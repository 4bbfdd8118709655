// File: crates/chart-shape/src/path.rs
// Summary: Path commands and the per-shape path construction strategies.

use std::fmt;

use crate::curve::CurveInterpolator;
use crate::shape_type::ShapeType;
use crate::types::DEFAULT_SMOOTHING;

/// One drawing instruction in drawing-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    /// Cubic Bezier: first control, second control, destination.
    CurveTo(f64, f64, f64, f64, f64, f64),
}

impl PathCommand {
    /// SVG command letter.
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(..) => 'M',
            PathCommand::LineTo(..) => 'L',
            PathCommand::CurveTo(..) => 'C',
        }
    }

    /// Length of the command in array form: the letter plus its coordinates.
    pub fn field_count(&self) -> usize {
        match self {
            PathCommand::MoveTo(..) | PathCommand::LineTo(..) => 3,
            PathCommand::CurveTo(..) => 7,
        }
    }

    pub fn end_point(&self) -> (f64, f64) {
        match *self {
            PathCommand::MoveTo(x, y) | PathCommand::LineTo(x, y) => (x, y),
            PathCommand::CurveTo(_, _, _, _, x, y) => (x, y),
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(x, y) => write!(f, "M {x} {y}"),
            PathCommand::LineTo(x, y) => write!(f, "L {x} {y}"),
            PathCommand::CurveTo(c1x, c1y, c2x, c2y, x, y) => {
                write!(f, "C {c1x} {c1y} {c2x} {c2y} {x} {y}")
            }
        }
    }
}

/// Join a path into SVG `d` attribute syntax.
pub fn svg_path_data(path: &[PathCommand]) -> String {
    path.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// Builds the path of one point sequence for a given shape type.
/// Stateless apart from the smoothing factor; identical inputs give identical paths.
#[derive(Clone, Copy, Debug)]
pub struct PathBuilder {
    curve: CurveInterpolator,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING)
    }
}

impl PathBuilder {
    pub fn new(smoothing: f64) -> Self {
        Self { curve: CurveInterpolator::new(smoothing) }
    }

    /// Path for `points`: a MoveTo to the first point, then shape-specific commands.
    /// A single point yields only the MoveTo; no points yield an empty path.
    pub fn build(&self, shape: ShapeType, points: &[(f64, f64)]) -> Vec<PathCommand> {
        let Some(&(x0, y0)) = points.first() else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(points.len() * commands_per_step(shape) + 1);
        out.push(PathCommand::MoveTo(x0, y0));
        match shape {
            ShapeType::Line | ShapeType::Dot | ShapeType::Dash => {
                out.extend(points[1..].iter().map(|&(x, y)| PathCommand::LineTo(x, y)));
            }
            ShapeType::Smooth => out.extend(self.curve.segments(points)),
            ShapeType::Hv => steps(points, &mut out, hv_step),
            ShapeType::Vh => steps(points, &mut out, vh_step),
            ShapeType::Hvh => steps(points, &mut out, hvh_step),
            ShapeType::Vhv => steps(points, &mut out, vhv_step),
        }
        out
    }
}

fn commands_per_step(shape: ShapeType) -> usize {
    match shape {
        ShapeType::Line | ShapeType::Dot | ShapeType::Dash | ShapeType::Smooth => 1,
        ShapeType::Hv | ShapeType::Vh => 2,
        ShapeType::Hvh | ShapeType::Vhv => 3,
    }
}

type Step = fn((f64, f64), (f64, f64), &mut Vec<PathCommand>);

fn steps(points: &[(f64, f64)], out: &mut Vec<PathCommand>, step: Step) {
    for w in points.windows(2) {
        step(w[0], w[1], out);
    }
}

fn hv_step((_, y0): (f64, f64), (x1, y1): (f64, f64), out: &mut Vec<PathCommand>) {
    out.push(PathCommand::LineTo(x1, y0));
    out.push(PathCommand::LineTo(x1, y1));
}

fn vh_step((x0, _): (f64, f64), (x1, y1): (f64, f64), out: &mut Vec<PathCommand>) {
    out.push(PathCommand::LineTo(x0, y1));
    out.push(PathCommand::LineTo(x1, y1));
}

fn hvh_step((x0, y0): (f64, f64), (x1, y1): (f64, f64), out: &mut Vec<PathCommand>) {
    let mx = (x0 + x1) / 2.0;
    out.push(PathCommand::LineTo(mx, y0));
    out.push(PathCommand::LineTo(mx, y1));
    out.push(PathCommand::LineTo(x1, y1));
}

fn vhv_step((x0, y0): (f64, f64), (x1, y1): (f64, f64), out: &mut Vec<PathCommand>) {
    let my = (y0 + y1) / 2.0;
    out.push(PathCommand::LineTo(x0, my));
    out.push(PathCommand::LineTo(x1, my));
    out.push(PathCommand::LineTo(x1, y1));
}
