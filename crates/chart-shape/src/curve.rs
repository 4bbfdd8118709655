// File: crates/chart-shape/src/curve.rs
// Summary: Catmull-Rom style control point estimation for the smooth/spline strategy.

use crate::path::PathCommand;

/// Computes cubic Bezier segments that pass through every input point.
///
/// The tangent at an interior point is parallel to `next - prev`, scaled by
/// `smoothing` and split between the incoming and outgoing control point in
/// proportion to the distances to the neighbours. Endpoints have no tangent
/// (their control point is the point itself). Control points are clamped to
/// the bounding box of the sequence, so the curve stays inside that box.
/// Within the box a segment can still pass slightly beyond its end point
/// when neighbouring points are unevenly spaced.
#[derive(Clone, Copy, Debug)]
pub struct CurveInterpolator {
    smoothing: f64,
}

impl CurveInterpolator {
    pub fn new(smoothing: f64) -> Self {
        Self { smoothing }
    }

    /// Incoming and outgoing control point for each point, in order.
    pub fn control_points(&self, points: &[(f64, f64)]) -> Vec<((f64, f64), (f64, f64))> {
        let n = points.len();
        if n == 0 {
            return Vec::new();
        }
        let (min, max) = bounds(points);
        // f64::clamp panics when min > max, which all-NaN input produces
        let clamp = |(x, y): (f64, f64)| (x.max(min.0).min(max.0), y.max(min.1).min(max.1));

        let mut cps = Vec::with_capacity(n);
        for i in 0..n {
            let p = points[i];
            if i == 0 || i == n - 1 {
                cps.push((p, p));
                continue;
            }
            let (prev, next) = (points[i - 1], points[i + 1]);
            let vx = (next.0 - prev.0) * self.smoothing;
            let vy = (next.1 - prev.1) * self.smoothing;
            let mut d0 = distance(p, prev);
            let mut d1 = distance(p, next);
            let sum = d0 + d1;
            if sum != 0.0 {
                d0 /= sum;
                d1 /= sum;
            }
            let incoming = clamp((p.0 - vx * d0, p.1 - vy * d0));
            let outgoing = clamp((p.0 + vx * d1, p.1 + vy * d1));
            cps.push((incoming, outgoing));
        }
        cps
    }

    /// One `CurveTo` per consecutive pair; the caller emits the initial MoveTo.
    pub fn segments(&self, points: &[(f64, f64)]) -> Vec<PathCommand> {
        let cps = self.control_points(points);
        points
            .windows(2)
            .zip(cps.windows(2))
            .map(|(p, c)| {
                let (_, out_cp) = c[0];
                let (in_cp, _) = c[1];
                let (x, y) = p[1];
                PathCommand::CurveTo(out_cp.0, out_cp.1, in_cp.0, in_cp.1, x, y)
            })
            .collect()
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

fn bounds(points: &[(f64, f64)]) -> ((f64, f64), (f64, f64)) {
    points.iter().fold(
        ((f64::INFINITY, f64::INFINITY), (f64::NEG_INFINITY, f64::NEG_INFINITY)),
        |(min, max), &(x, y)| ((min.0.min(x), min.1.min(y)), (max.0.max(x), max.1.max(y))),
    )
}
