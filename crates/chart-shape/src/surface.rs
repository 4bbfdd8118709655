// File: crates/chart-shape/src/surface.rs
// Summary: Drawing surface contract consumed by the facade, plus an in-memory recording surface.

use std::collections::BTreeMap;

use crate::error::ShapeError;
use crate::path::PathCommand;
use crate::style::ShapeStyle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualKind {
    /// A data-driven series path.
    Path,
    /// A legend/preview glyph.
    Marker,
}

/// Everything a surface needs to create one visual.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualAttrs {
    pub path: Vec<PathCommand>,
    pub style: ShapeStyle,
    /// Caller keys not interpreted by this crate, passed through untouched.
    pub extra: BTreeMap<String, String>,
}

/// Backend that turns paths and styles into visual objects.
pub trait DrawingSurface {
    type Handle;

    fn create_visual(&mut self, kind: VisualKind, attrs: VisualAttrs) -> Result<Self::Handle, ShapeError>;

    fn create_path_visual(
        &mut self,
        path: Vec<PathCommand>,
        style: ShapeStyle,
        extra: BTreeMap<String, String>,
    ) -> Result<Self::Handle, ShapeError> {
        self.create_visual(VisualKind::Path, VisualAttrs { path, style, extra })
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    type Handle = S::Handle;

    fn create_visual(&mut self, kind: VisualKind, attrs: VisualAttrs) -> Result<Self::Handle, ShapeError> {
        (**self).create_visual(kind, attrs)
    }
}

/// Index of a visual within the surface that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Visual {
    pub kind: VisualKind,
    pub attrs: VisualAttrs,
}

/// Surface that keeps every created visual in memory for inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    visuals: Vec<Visual>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visual(&self, id: VisualId) -> Option<&Visual> {
        self.visuals.get(id.0)
    }

    pub fn visuals(&self) -> &[Visual] {
        &self.visuals
    }

    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }
}

impl DrawingSurface for RecordingSurface {
    type Handle = VisualId;

    fn create_visual(&mut self, kind: VisualKind, attrs: VisualAttrs) -> Result<VisualId, ShapeError> {
        self.visuals.push(Visual { kind, attrs });
        Ok(VisualId(self.visuals.len() - 1))
    }
}
