// File: crates/chart-shape/src/marker.rs
// Summary: Legend marker glyphs echoing each shape type at a fixed, data-independent scale.

use crate::path::PathCommand;
use crate::shape_type::ShapeType;

/// Glyph outline drawn by a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Horizontal segment; used by line, dot, dash and smooth.
    Segment,
    Hv,
    Vh,
    Hvh,
    Vhv,
}

/// A pure glyph generator: `(cx, cy, r)` to path commands.
/// Copyable and stateless, so one symbol can be shared and called repeatedly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerSymbol {
    glyph: Glyph,
}

impl MarkerSymbol {
    pub fn for_shape(shape: ShapeType) -> Self {
        let glyph = match shape {
            ShapeType::Line | ShapeType::Dot | ShapeType::Dash | ShapeType::Smooth => Glyph::Segment,
            ShapeType::Hv => Glyph::Hv,
            ShapeType::Vh => Glyph::Vh,
            ShapeType::Hvh => Glyph::Hvh,
            ShapeType::Vhv => Glyph::Vhv,
        };
        Self { glyph }
    }

    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    /// Glyph path around center `(x, y)` with radius `r`.
    pub fn path(&self, x: f64, y: f64, r: f64) -> Vec<PathCommand> {
        use PathCommand::{LineTo, MoveTo};
        let h = r / 2.0;
        match self.glyph {
            Glyph::Segment => vec![MoveTo(x - r, y), LineTo(x + r, y)],
            Glyph::Hv => vec![
                MoveTo(x - r, y - r),
                LineTo(x, y - r),
                LineTo(x, y),
                LineTo(x + r, y),
            ],
            Glyph::Vh => vec![
                MoveTo(x - r, y),
                LineTo(x, y),
                LineTo(x, y - r),
                LineTo(x + r, y - r),
            ],
            Glyph::Hvh => vec![
                MoveTo(x - r - h, y),
                LineTo(x - h, y),
                LineTo(x - h, y - h),
                LineTo(x + h, y - h),
                LineTo(x + h, y),
                LineTo(x + r + h, y),
            ],
            Glyph::Vhv => vec![
                MoveTo(x - r, y),
                LineTo(x - r, y - h),
                LineTo(x, y - h),
                LineTo(x, y - r),
                LineTo(x, y + h),
                LineTo(x + r, y + h),
            ],
        }
    }

    /// The symbol as a plain closure.
    pub fn as_fn(self) -> impl Fn(f64, f64, f64) -> Vec<PathCommand> + Copy + Send + Sync {
        move |x, y, r| self.path(x, y, r)
    }
}
