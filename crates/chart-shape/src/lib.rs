// File: crates/chart-shape/src/lib.rs
// Summary: Core library entry point; exports the line-shape API (paths, markers, styles, surfaces).

pub mod error;
pub mod types;
pub mod theme;
pub mod config;
pub mod scale;
pub mod point;
pub mod path;
pub mod curve;
pub mod shape_type;
pub mod marker;
pub mod style;
pub mod surface;
pub mod shape;

pub use error::{Axis, ShapeError};
pub use theme::{Color, Theme};
pub use config::{RangeEdges, ShapeOptions};
pub use scale::{AxisScale, CartesianTransform, CoordinateTransform, IdentityTransform, ScaleKind};
pub use point::{expand_points, AxisValue, Point};
pub use path::{svg_path_data, PathBuilder, PathCommand};
pub use curve::CurveInterpolator;
pub use shape_type::ShapeType;
pub use marker::{Glyph, MarkerSymbol};
pub use style::{ActiveStyle, ShapeStyle, StyleAttrs, StyleResolver};
pub use surface::{DrawingSurface, RecordingSurface, Visual, VisualAttrs, VisualId, VisualKind};
pub use shape::{LineShape, MarkerCfg, ShapeConfig};
