// File: crates/chart-shape/benches/path_bench.rs
// Summary: Path construction throughput per shape type over large point sets.

use chart_shape::{LineShape, PathBuilder, Point, ShapeType};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_xy(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            // simple waveform with drift
            (x, (x * 0.01).sin() * 10.0 + x * 0.0001)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let builder = PathBuilder::default();
    let mut group = c.benchmark_group("build");
    for &n in &[10_000usize, 100_000usize] {
        let data = gen_xy(n);
        for shape in [ShapeType::Line, ShapeType::Smooth, ShapeType::Hvh] {
            group.bench_with_input(BenchmarkId::new(shape.name(), n), &data, |b, d| {
                b.iter(|| black_box(builder.build(shape, d)));
            });
        }
    }
    group.finish();
}

fn bench_ranges(c: &mut Criterion) {
    let line: LineShape = LineShape::default();
    let points: Vec<Point> = gen_xy(50_000)
        .into_iter()
        .map(|(x, y)| Point::new([x, x + 0.5], [y - 1.0, y + 1.0]))
        .collect();
    c.bench_function("shape_path_dual_range_50k", |b| {
        b.iter(|| black_box(line.shape_path(ShapeType::Smooth, &points)))
    });
}

criterion_group!(benches, bench_build, bench_ranges);
criterion_main!(benches);
