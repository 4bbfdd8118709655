// File: crates/demo/src/main.rs
// Summary: Demo loads points from CSV and renders each line shape type plus a marker legend to PNGs.
// Usage: shape-demo [points.csv] [out_dir] [style.toml]
//   CSV headers: `x,y` or `x,y_low,y_high` (band data).
//   SHAPE_THEME selects a theme preset (default: dark).

use anyhow::{Context, Result};
use chart_render_skia::SkiaSurface;
use chart_shape::theme::{self, Theme};
use chart_shape::types::Insets;
use chart_shape::path::PathCommand::{LineTo, MoveTo};
use chart_shape::{
    AxisValue, CartesianTransform, Color, DrawingSurface, LineShape, Point, ShapeConfig, ShapeOptions, ShapeStyle,
    ShapeType, StyleAttrs,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const WIDTH: i32 = 640;
const HEIGHT: i32 = 360;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let points = match args.first() {
        Some(raw) => {
            let path = Path::new(raw);
            load_points_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => sample_points(),
    };
    if points.is_empty() {
        anyhow::bail!("no points loaded; check headers/delimiter.");
    }
    log::info!("Loaded {} points", points.len());

    let out_dir = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("target/out/shapes"));
    let theme = theme::find(&std::env::var("SHAPE_THEME").unwrap_or_else(|_| "dark".to_string()));
    let opts = match args.get(2) {
        Some(p) => load_options(Path::new(p))?,
        None => ShapeOptions::from_theme(&theme),
    };

    let insets = Insets::default();
    let plot = (
        insets.left as f64,
        insets.top as f64,
        (WIDTH - insets.right as i32) as f64,
        (HEIGHT - insets.bottom as i32) as f64,
    );
    let transform = CartesianTransform::for_rect(data_bounds(&points), plot);
    let line = LineShape::with_options(transform, &opts)?;

    let cfg = ShapeConfig::new(points);
    for shape in ShapeType::ALL {
        let mut surface = SkiaSurface::new(WIDTH, HEIGHT, theme.background)?;
        draw_axes(&mut surface, plot, theme.axis_line)?;
        line.draw(shape, &cfg, &mut surface)?;
        let out = out_dir.join(format!("line_{shape}.png"));
        surface.write_png(&out)?;
        log::info!("Wrote {}", out.display());
    }

    let legend = render_legend(&line, &theme)?;
    let out = out_dir.join("legend.png");
    std::fs::write(&out, legend).with_context(|| format!("failed to write '{}'", out.display()))?;
    log::info!("Wrote {}", out.display());
    Ok(())
}

/// X and Y axis lines along the bottom and left edges of the plot rect.
fn draw_axes(surface: &mut SkiaSurface, plot: (f64, f64, f64, f64), color: Color) -> Result<()> {
    let (l, t, r, b) = plot;
    let path = vec![MoveTo(l, b), LineTo(r, b), MoveTo(l, t), LineTo(l, b)];
    let style = ShapeStyle { stroke: color, line_width: 1.5, line_dash: None, opacity: None };
    surface.create_path_visual(path, style, BTreeMap::new())?;
    Ok(())
}

/// One marker per shape type in a single row.
fn render_legend(line: &LineShape<CartesianTransform>, theme: &Theme) -> Result<Vec<u8>> {
    let cell = 48.0;
    let width = (cell * ShapeType::ALL.len() as f64) as i32;
    let mut surface = SkiaSurface::new(width, cell as i32, theme.background)?;
    let attrs = StyleAttrs::default().with_size(2.0);
    for (i, shape) in ShapeType::ALL.into_iter().enumerate() {
        let center = (cell * (i as f64 + 0.5), cell / 2.0);
        line.draw_marker(shape, center, 8.0, &attrs, &mut surface)?;
    }
    surface.encode_png()
}

fn load_options(path: &Path) -> Result<ShapeOptions> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    let opts: ShapeOptions = toml::from_str(&text).with_context(|| format!("invalid style file '{}'", path.display()))?;
    Ok(opts)
}

#[derive(Clone, Copy)]
enum YColumns {
    Scalar(usize),
    Band(usize, usize),
}

fn load_points_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let col = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let x = col("x").context("missing `x` column")?;
    let ycols = match (col("y_low").zip(col("y_high")), col("y")) {
        (Some((lo, hi)), _) => YColumns::Band(lo, hi),
        (None, Some(y)) => YColumns::Scalar(y),
        (None, None) => anyhow::bail!("expected a `y` column or `y_low`/`y_high` columns"),
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| -> Result<f64> {
            let raw = rec.get(i).unwrap_or("");
            raw.parse::<f64>().with_context(|| format!("row {}: '{raw}' is not a number", row + 1))
        };
        let yv = match ycols {
            YColumns::Scalar(y) => AxisValue::Scalar(num(y)?),
            YColumns::Band(lo, hi) => AxisValue::Range([num(lo)?, num(hi)?]),
        };
        out.push(Point { x: AxisValue::Scalar(num(x)?), y: yv });
    }
    Ok(out)
}

fn sample_points() -> Vec<Point> {
    (0..12)
        .map(|i| {
            let x = i as f64;
            Point::new(x, (x * 0.7).sin() * 3.0 + x * 0.25)
        })
        .collect()
}

/// (x_min, x_max, y_min, y_max) over every scalar and range element.
fn data_bounds(points: &[Point]) -> (f64, f64, f64, f64) {
    let values = |v: &AxisValue| match *v {
        AxisValue::Scalar(s) => [s, s],
        AxisValue::Range(pair) => pair,
    };
    let mut b = (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        for x in values(&p.x) {
            b.0 = b.0.min(x);
            b.1 = b.1.max(x);
        }
        for y in values(&p.y) {
            b.2 = b.2.min(y);
            b.3 = b.3.max(y);
        }
    }
    let ym = (b.3 - b.2) * 0.05;
    (b.0, b.1, b.2 - ym, b.3 + ym)
}
