// File: crates/chart-shape/src/shape.rs
// Summary: LineShape facade; expands points, builds paths, resolves styles and hands them to a surface.

use std::collections::BTreeMap;

use crate::config::{RangeEdges, ShapeOptions};
use crate::error::ShapeError;
use crate::marker::MarkerSymbol;
use crate::path::{PathBuilder, PathCommand};
use crate::point::{expand_points, Point};
use crate::scale::{CoordinateTransform, IdentityTransform};
use crate::shape_type::ShapeType;
use crate::style::{ActiveStyle, ShapeStyle, StyleAttrs, StyleResolver};
use crate::surface::{DrawingSurface, VisualAttrs, VisualKind};
use crate::theme::Color;

/// Input of one draw call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeConfig {
    pub points: Vec<Point>,
    pub attrs: StyleAttrs,
    /// Unrecognized keys, forwarded to the surface as-is.
    pub extra: BTreeMap<String, String>,
}

impl ShapeConfig {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, ..Self::default() }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.attrs.color = Some(color);
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.attrs.size = Some(size);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.attrs.opacity = Some(opacity);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Legend marker configuration: the resolved style plus the glyph generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerCfg {
    pub style: ShapeStyle,
    pub symbol: MarkerSymbol,
}

/// Line-family shape renderer bound to one coordinate transform.
#[derive(Clone, Debug)]
pub struct LineShape<T = IdentityTransform> {
    transform: T,
    builder: PathBuilder,
    resolver: StyleResolver,
    range_edges: RangeEdges,
}

impl Default for LineShape<IdentityTransform> {
    fn default() -> Self {
        Self::new(IdentityTransform)
    }
}

impl<T: CoordinateTransform> LineShape<T> {
    pub const DEFAULT_SHAPE_TYPE: ShapeType = ShapeType::Line;

    /// Facade with default options.
    pub fn new(transform: T) -> Self {
        let opts = ShapeOptions::default();
        Self {
            transform,
            builder: PathBuilder::new(opts.smoothing),
            resolver: StyleResolver::from_options(&opts),
            range_edges: opts.range_edges,
        }
    }

    pub fn with_options(transform: T, opts: &ShapeOptions) -> Result<Self, ShapeError> {
        opts.validate()?;
        Ok(Self {
            transform,
            builder: PathBuilder::new(opts.smoothing),
            resolver: StyleResolver::from_options(opts),
            range_edges: opts.range_edges,
        })
    }

    pub fn default_shape_type(&self) -> ShapeType {
        Self::DEFAULT_SHAPE_TYPE
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    pub fn resolver(&self) -> &StyleResolver {
        &self.resolver
    }

    /// Drawing-space path of `points`; range points contribute one subpath per
    /// expanded sequence, concatenated in expansion order.
    pub fn shape_path(&self, shape: ShapeType, points: &[Point]) -> Result<Vec<PathCommand>, ShapeError> {
        let lines = expand_points(points, &self.transform, self.range_edges)?;
        Ok(lines.iter().flat_map(|line| self.builder.build(shape, line)).collect())
    }

    pub fn draw<S: DrawingSurface>(
        &self,
        shape: ShapeType,
        cfg: &ShapeConfig,
        surface: &mut S,
    ) -> Result<S::Handle, ShapeError> {
        let path = self.shape_path(shape, &cfg.points)?;
        let style = self.resolver.style(shape, &cfg.attrs);
        log::trace!("draw {shape}: {} points -> {} commands", cfg.points.len(), path.len());
        surface.create_path_visual(path, style, cfg.extra.clone())
    }

    /// [`LineShape::draw`] by shape name; unknown or missing names draw a plain line.
    pub fn draw_shape<S: DrawingSurface>(
        &self,
        shape: Option<&str>,
        cfg: &ShapeConfig,
        surface: &mut S,
    ) -> Result<S::Handle, ShapeError> {
        self.draw(ShapeType::resolve(shape), cfg, surface)
    }

    pub fn marker(&self, shape: ShapeType, attrs: &StyleAttrs) -> MarkerCfg {
        MarkerCfg {
            style: self.resolver.style(shape, attrs),
            symbol: MarkerSymbol::for_shape(shape),
        }
    }

    pub fn marker_cfg(&self, shape: Option<&str>, attrs: &StyleAttrs) -> MarkerCfg {
        self.marker(ShapeType::resolve(shape), attrs)
    }

    /// Draw the legend glyph of `shape` centered at `center` (drawing space).
    pub fn draw_marker<S: DrawingSurface>(
        &self,
        shape: ShapeType,
        center: (f64, f64),
        radius: f64,
        attrs: &StyleAttrs,
        surface: &mut S,
    ) -> Result<S::Handle, ShapeError> {
        let MarkerCfg { style, symbol } = self.marker(shape, attrs);
        let path = symbol.path(center.0, center.1, radius);
        surface.create_visual(VisualKind::Marker, VisualAttrs { path, style, extra: BTreeMap::new() })
    }

    pub fn active_cfg(&self, attrs: Option<&StyleAttrs>) -> ActiveStyle {
        self.resolver.active_style(attrs)
    }
}
