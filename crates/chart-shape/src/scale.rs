// File: crates/chart-shape/src/scale.rs
// Summary: Coordinate transforms mapping data-space points to drawing-space pixels.

/// Maps a data-space pair to a drawing-space pair.
/// Implementations must be side-effect free; one transform may serve many shapes.
pub trait CoordinateTransform {
    fn convert(&self, x: f64, y: f64) -> (f64, f64);
}

impl<T: CoordinateTransform + ?Sized> CoordinateTransform for &T {
    fn convert(&self, x: f64, y: f64) -> (f64, f64) {
        (**self).convert(x, y)
    }
}

/// Data space is drawing space.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityTransform;

impl CoordinateTransform for IdentityTransform {
    #[inline]
    fn convert(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// One axis: maps `domain` (data values) onto `range` (pixels).
/// `range` may be reversed, e.g. (bottom, top) for a Y axis growing upward.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub kind: ScaleKind,
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl AxisScale {
    pub fn linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (lo, mut hi) = domain;
        if (hi - lo).abs() < 1e-12 { hi = lo + 1.0; }
        Self { kind: ScaleKind::Linear, domain: (lo, hi), range }
    }

    pub fn log10(domain: (f64, f64), range: (f64, f64)) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        let lo = if domain.0 <= eps { eps } else { domain.0 };
        let hi = if domain.1 <= lo { lo * 10.0 } else { domain.1 };
        Self { kind: ScaleKind::Log10, domain: (lo, hi), range }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (r0, r1) = self.range;
        let t = match self.kind {
            ScaleKind::Linear => {
                let span = self.domain.1 - self.domain.0;
                (v - self.domain.0) / span
            }
            ScaleKind::Log10 => {
                let (lo, hi) = (self.domain.0.log10(), self.domain.1.log10());
                let span = (hi - lo).max(1e-12);
                (v.max(1e-12).log10() - lo) / span
            }
        };
        r0 + t * (r1 - r0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CartesianTransform {
    pub x: AxisScale,
    pub y: AxisScale,
}

impl CartesianTransform {
    pub fn new(x: AxisScale, y: AxisScale) -> Self {
        Self { x, y }
    }

    /// Linear mapping of the data box `(x_min, x_max, y_min, y_max)` onto the pixel
    /// rectangle `(left, top, right, bottom)`; larger y values are drawn higher.
    pub fn for_rect(bounds: (f64, f64, f64, f64), rect: (f64, f64, f64, f64)) -> Self {
        let (x_min, x_max, y_min, y_max) = bounds;
        let (left, top, right, bottom) = rect;
        Self {
            x: AxisScale::linear((x_min, x_max), (left, right)),
            y: AxisScale::linear((y_min, y_max), (bottom, top)),
        }
    }
}

impl CoordinateTransform for CartesianTransform {
    #[inline]
    fn convert(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x.map(x), self.y.map(y))
    }
}
