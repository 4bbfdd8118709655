// File: crates/chart-shape/tests/paths.rs
// Purpose: Path builder properties across shape types and point counts.

use chart_shape::path::PathCommand::{CurveTo, LineTo, MoveTo};
use chart_shape::{svg_path_data, CurveInterpolator, PathBuilder, PathCommand, ShapeType};

fn zigzag(n: usize) -> Vec<(f64, f64)> {
    (0..n).map(|i| (i as f64 * 10.0, if i % 2 == 0 { 0.0 } else { 25.0 })).collect()
}

#[test]
fn line_family_length_equals_point_count() {
    let builder = PathBuilder::default();
    for n in 1..8 {
        let pts = zigzag(n);
        for shape in [ShapeType::Line, ShapeType::Dot, ShapeType::Dash, ShapeType::Smooth] {
            let path = builder.build(shape, &pts);
            assert_eq!(path.len(), n, "{shape} with {n} points");
            assert_eq!(path[0], MoveTo(pts[0].0, pts[0].1));
        }
    }
}

#[test]
fn step_shapes_command_counts() {
    let builder = PathBuilder::default();
    let pts = zigzag(2);
    assert_eq!(builder.build(ShapeType::Hv, &pts).len(), 3);
    assert_eq!(builder.build(ShapeType::Vh, &pts).len(), 3);
    assert_eq!(builder.build(ShapeType::Hvh, &pts).len(), 4);
    assert_eq!(builder.build(ShapeType::Vhv, &pts).len(), 4);

    let pts = zigzag(5);
    assert_eq!(builder.build(ShapeType::Hv, &pts).len(), 1 + 2 * 4);
    assert_eq!(builder.build(ShapeType::Vhv, &pts).len(), 1 + 3 * 4);
}

#[test]
fn smooth_fields_and_interpolation() {
    let pts = zigzag(6);
    let path = PathBuilder::default().build(ShapeType::Smooth, &pts);
    assert_eq!(path[0].field_count(), 3);
    for (cmd, p) in path.iter().zip(&pts).skip(1) {
        assert_eq!(cmd.field_count(), 7);
        assert!(matches!(cmd, CurveTo(..)));
        // passes through every input point
        assert_eq!(cmd.end_point(), *p);
    }
}

#[test]
fn smooth_two_points_is_straight_cubic() {
    let path = PathBuilder::default().build(ShapeType::Smooth, &[(0.0, 0.0), (10.0, 5.0)]);
    assert_eq!(path, vec![MoveTo(0.0, 0.0), CurveTo(0.0, 0.0, 10.0, 5.0, 10.0, 5.0)]);
}

#[test]
fn smooth_monotone_input_has_monotone_control_polygon() {
    let pts = [(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)];
    let path = PathBuilder::default().build(ShapeType::Smooth, &pts);
    let mut prev = pts[0];
    for cmd in &path[1..] {
        let CurveTo(c1x, c1y, c2x, c2y, x, y) = *cmd else {
            panic!("expected curve, got {cmd:?}");
        };
        for (px, py) in [(c1x, c1y), (c2x, c2y), (x, y)] {
            assert!(px >= prev.0 && py >= prev.1, "control polygon turns back at ({px}, {py})");
            prev = (px, py);
        }
    }
}

#[test]
fn uneven_spacing_stays_inside_bounding_box() {
    let pts = [(0.0, 0.0), (10.0, 0.0), (11.0, 10.0), (12.0, 10.0)];
    let path = PathBuilder::default().build(ShapeType::Smooth, &pts);
    assert_eq!(path.len(), pts.len());
    for (cmd, p) in path.iter().zip(&pts).skip(1) {
        let CurveTo(c1x, c1y, c2x, c2y, x, y) = *cmd else {
            panic!("expected curve, got {cmd:?}");
        };
        assert_eq!((x, y), *p);
        for (px, py) in [(c1x, c1y), (c2x, c2y)] {
            assert!((0.0..=12.0).contains(&px) && (0.0..=10.0).contains(&py), "control ({px}, {py}) outside box");
        }
    }
    // the outgoing control at (10, 0) is clamped to the right edge, past the next point's x
    let CurveTo(c1x, _, _, _, _, _) = path[2] else {
        panic!("expected curve");
    };
    assert_eq!(c1x, 12.0);
}

#[test]
fn zero_smoothing_collapses_tangents() {
    let pts = zigzag(4);
    let cps = CurveInterpolator::new(0.0).control_points(&pts);
    assert_eq!(cps.len(), pts.len());
    for (p, (incoming, outgoing)) in pts.iter().zip(cps) {
        assert_eq!(incoming, *p);
        assert_eq!(outgoing, *p);
    }
}

#[test]
fn repeated_points_do_not_produce_nan() {
    let pts = [(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)];
    let path = PathBuilder::default().build(ShapeType::Smooth, &pts);
    assert!(path.iter().all(|c| match *c {
        CurveTo(a, b, c, d, e, f) => [a, b, c, d, e, f].iter().all(|v| v.is_finite()),
        _ => true,
    }));
}

#[test]
fn fractional_midpoints_are_not_rounded() {
    let path = PathBuilder::default().build(ShapeType::Hvh, &[(0.0, 0.0), (3.0, 1.0)]);
    assert_eq!(path[1], LineTo(1.5, 0.0));
    let path = PathBuilder::default().build(ShapeType::Vhv, &[(0.0, 0.0), (3.0, 1.0)]);
    assert_eq!(path[1], LineTo(0.0, 0.5));
}

#[test]
fn building_is_idempotent() {
    let builder = PathBuilder::default();
    let pts = zigzag(9);
    for shape in ShapeType::ALL {
        assert_eq!(builder.build(shape, &pts), builder.build(shape, &pts));
    }
}

#[test]
fn empty_input_gives_empty_path() {
    assert!(PathBuilder::default().build(ShapeType::Hvh, &[]).is_empty());
}

#[test]
fn svg_formatting() {
    let path: Vec<PathCommand> = vec![MoveTo(1.0, 2.0), LineTo(3.5, 4.0), CurveTo(1.0, 1.0, 2.0, 2.0, 3.0, 3.0)];
    assert_eq!(svg_path_data(&path), "M 1 2 L 3.5 4 C 1 1 2 2 3 3");
    assert_eq!(path[2].letter(), 'C');
}
