// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster surface implementing the chart-shape drawing surface contract.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use chart_shape::{Color, DrawingSurface, PathCommand, ShapeError, ShapeStyle, VisualAttrs, VisualKind};
use skia_safe as skia;

#[inline]
pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub fn to_skia_path(path: &[PathCommand]) -> skia::Path {
    let mut p = skia::Path::new();
    for cmd in path {
        match *cmd {
            PathCommand::MoveTo(x, y) => {
                p.move_to((x as f32, y as f32));
            }
            PathCommand::LineTo(x, y) => {
                p.line_to((x as f32, y as f32));
            }
            PathCommand::CurveTo(c1x, c1y, c2x, c2y, x, y) => {
                p.cubic_to((c1x as f32, c1y as f32), (c2x as f32, c2y as f32), (x as f32, y as f32));
            }
        }
    }
    p
}

/// Stroke paint for a resolved shape style.
pub fn stroke_paint(style: &ShapeStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.line_width as f32);
    paint.set_color(to_skia_color(style.stroke));
    if let Some(opacity) = style.opacity {
        let alpha = paint.alpha_f() * opacity.clamp(0.0, 1.0) as f32;
        paint.set_alpha_f(alpha);
    }
    if let Some([on, off]) = style.line_dash {
        match skia::PathEffect::dash(&[on as f32, off as f32], 0.0) {
            Some(effect) => {
                paint.set_path_effect(effect);
            }
            None => log::warn!("invalid dash pattern [{on}, {off}], stroking solid"),
        }
    }
    paint
}

/// Handle of a visual stroked onto a [`SkiaSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkiaVisual {
    pub index: usize,
    pub kind: VisualKind,
    /// Bounds of the path geometry, excluding stroke width.
    pub bounds: skia::Rect,
}

pub struct SkiaSurface {
    surface: skia::Surface,
    background: skia::Color,
    drawn: usize,
}

impl SkiaSurface {
    /// Create a raster surface cleared to `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
        let background = to_skia_color(background);
        surface.canvas().clear(background);
        Ok(Self { surface, background, drawn: 0 })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Number of visuals stroked since creation or the last clear.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    pub fn clear(&mut self) {
        self.surface.canvas().clear(self.background);
        self.drawn = 0;
    }

    /// Unpremultiplied RGBA8 pixels, row-major, stride = width * 4.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let (w, h) = (self.width(), self.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            bail!("failed to read {w}x{h} pixels from surface");
        }
        Ok(pixels)
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let (w, h) = (self.width() as u32, self.height() as u32);
        let img = image::RgbaImage::from_raw(w, h, self.to_rgba8()?)
            .ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(bytes)
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }
}

impl DrawingSurface for SkiaSurface {
    type Handle = SkiaVisual;

    fn create_visual(&mut self, kind: VisualKind, attrs: VisualAttrs) -> Result<SkiaVisual, ShapeError> {
        if !attrs.style.line_width.is_finite() {
            return Err(ShapeError::Surface(format!("non-finite line width {}", attrs.style.line_width)));
        }
        let path = to_skia_path(&attrs.path);
        let paint = stroke_paint(&attrs.style);
        self.surface.canvas().draw_path(&path, &paint);
        let index = self.drawn;
        self.drawn += 1;
        Ok(SkiaVisual { index, kind, bounds: *path.bounds() })
    }
}
