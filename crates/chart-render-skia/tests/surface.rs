// File: crates/chart-render-skia/tests/surface.rs
// Purpose: Stroke line shapes on a raster surface and check pixels and PNG output.

use chart_render_skia::SkiaSurface;
use chart_shape::{Color, LineShape, Point, ShapeConfig, ShapeType, StyleAttrs, VisualKind};

const W: i32 = 200;
const H: i32 = 120;

fn pixel(px: &[u8], x: i32, y: i32) -> [u8; 4] {
    let i = ((y * W + x) * 4) as usize;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn horizontal(shape: &str) -> Vec<u8> {
    let line: LineShape = LineShape::default();
    let mut surface = SkiaSurface::new(W, H, Color::WHITE).expect("surface");
    let cfg = ShapeConfig::new(vec![Point::new(10.0, 60.0), Point::new(190.0, 60.0)])
        .with_color(Color::RED)
        .with_size(4.0);
    line.draw_shape(Some(shape), &cfg, &mut surface).expect("draw");
    surface.to_rgba8().expect("rgba")
}

#[test]
fn solid_line_is_stroked() {
    let px = horizontal("line");
    assert_eq!(px.len(), (W * H * 4) as usize);
    let on = pixel(&px, 100, 60);
    assert!(on[0] > 200 && on[1] < 50 && on[2] < 50, "expected red, got {on:?}");
    assert_eq!(pixel(&px, 100, 10), [255, 255, 255, 255]);
    assert_eq!(pixel(&px, 22, 60)[1], 0);
}

#[test]
fn dash_pattern_leaves_gaps() {
    let px = horizontal("dash");
    // dash [10, 5] from x = 10: ink on 10..20, gap on 20..25
    assert!(pixel(&px, 15, 60)[1] < 50);
    assert_eq!(pixel(&px, 22, 60), [255, 255, 255, 255]);
}

#[test]
fn every_shape_renders_to_png() {
    let line: LineShape = LineShape::default();
    let mut surface = SkiaSurface::new(W, H, Color::BLACK).expect("surface");
    let points: Vec<Point> = (0..6).map(|i| Point::new(20.0 + i as f64 * 30.0, if i % 2 == 0 { 30.0 } else { 90.0 })).collect();
    for shape in ShapeType::ALL {
        line.draw(shape, &ShapeConfig::new(points.clone()), &mut surface).expect("draw");
    }
    assert_eq!(surface.drawn(), ShapeType::ALL.len());

    let bytes = surface.encode_png().expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (W as u32, H as u32));
}

#[test]
fn handles_report_kind_and_bounds() {
    let line: LineShape = LineShape::default();
    let mut surface = SkiaSurface::new(W, H, Color::WHITE).expect("surface");
    let cfg = ShapeConfig::new(vec![Point::new(10.0, 10.0), Point::new(50.0, 40.0)]);
    let path = line.draw(ShapeType::Hv, &cfg, &mut surface).expect("draw");
    assert_eq!(path.kind, VisualKind::Path);
    assert_eq!(path.index, 0);
    assert_eq!((path.bounds.left, path.bounds.top, path.bounds.right, path.bounds.bottom), (10.0, 10.0, 50.0, 40.0));

    let marker = line
        .draw_marker(ShapeType::Hvh, (100.0, 60.0), 8.0, &StyleAttrs::default(), &mut surface)
        .expect("marker");
    assert_eq!(marker.kind, VisualKind::Marker);
    assert_eq!(marker.index, 1);
    assert_eq!(marker.bounds.left, 88.0);
    assert_eq!(marker.bounds.right, 112.0);

    surface.clear();
    assert_eq!(surface.drawn(), 0);
}

#[test]
fn write_png_creates_parent_dirs() {
    let mut surface = SkiaSurface::new(16, 16, Color::WHITE).expect("surface");
    let out = std::path::PathBuf::from("target/test_out/skia/blank.png");
    surface.write_png(&out).expect("write");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}
