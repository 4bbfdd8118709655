// File: crates/chart-shape/src/shape_type.rs
// Summary: Closed set of line-family shape types with name parsing and default fallback.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ShapeError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    #[default]
    Line,
    Dot,
    Dash,
    /// Also accepted as `spline`.
    #[serde(alias = "spline")]
    Smooth,
    Hv,
    Vh,
    Hvh,
    Vhv,
}

impl ShapeType {
    pub const ALL: [ShapeType; 8] = [
        ShapeType::Line,
        ShapeType::Dot,
        ShapeType::Dash,
        ShapeType::Smooth,
        ShapeType::Hv,
        ShapeType::Vh,
        ShapeType::Hvh,
        ShapeType::Vhv,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Line => "line",
            ShapeType::Dot => "dot",
            ShapeType::Dash => "dash",
            ShapeType::Smooth => "smooth",
            ShapeType::Hv => "hv",
            ShapeType::Vh => "vh",
            ShapeType::Hvh => "hvh",
            ShapeType::Vhv => "vhv",
        }
    }

    /// Resolve an optional shape name, falling back to the default for
    /// missing or unknown names.
    pub fn resolve(name: Option<&str>) -> Self {
        match name {
            None => Self::default(),
            Some(name) => name.parse().unwrap_or_else(|_| {
                log::debug!("unknown shape type '{name}', falling back to '{}'", Self::default());
                Self::default()
            }),
        }
    }
}

impl FromStr for ShapeType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ShapeType::Line),
            "dot" => Ok(ShapeType::Dot),
            "dash" => Ok(ShapeType::Dash),
            "smooth" | "spline" => Ok(ShapeType::Smooth),
            "hv" => Ok(ShapeType::Hv),
            "vh" => Ok(ShapeType::Vh),
            "hvh" => Ok(ShapeType::Hvh),
            "vhv" => Ok(ShapeType::Vhv),
            other => Err(ShapeError::UnknownShapeType(other.to_string())),
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
