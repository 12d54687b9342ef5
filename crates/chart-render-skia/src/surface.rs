// File: crates/chart-render-skia/src/surface.rs
// Summary: `Surface` implementation over a Skia CPU raster surface.

use chart_core::{Color, ExportError, Point, Rect, Surface, Viewport};
use skia_safe as skia;

use crate::text::TextShaper;

#[inline]
fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

#[inline]
fn sk_point(p: Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

#[inline]
fn sk_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

/// Owns one raster surface for the duration of a chart render.
pub struct SkiaSurface {
    surface: skia::Surface,
    text: TextShaper,
}

impl SkiaSurface {
    pub fn new(viewport: &Viewport) -> Result<Self, ExportError> {
        let (width, height) = (viewport.width, viewport.height);
        let dims = (
            i32::try_from(width).map_err(|_| ExportError::SurfaceUnavailable { width, height })?,
            i32::try_from(height).map_err(|_| ExportError::SurfaceUnavailable { width, height })?,
        );
        let surface = skia::surfaces::raster_n32_premul(dims)
            .ok_or(ExportError::SurfaceUnavailable { width, height })?;
        Ok(Self { surface, text: TextShaper::new() })
    }

    /// Snapshot and encode as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>, ExportError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ExportError::Encode("PNG encoder returned no data".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    fn fill(color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(sk_color(color));
        paint
    }
}

impl Surface for SkiaSurface {
    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(sk_color(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Color, stroke_width: f64) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke_width as f32);
        paint.set_color(sk_color(stroke));
        self.surface.canvas().draw_line(sk_point(from), sk_point(to), &paint);
    }

    fn draw_rect(&mut self, rect: Rect, fill: Color) {
        self.surface.canvas().draw_rect(sk_rect(rect), &Self::fill(fill));
    }

    fn draw_arc(&mut self, bounds: Rect, start_deg: f64, sweep_deg: f64, filled: bool, fill: Color) {
        let mut paint = Self::fill(fill);
        if !filled {
            paint.set_style(skia::paint::Style::Stroke);
        }
        self.surface
            .canvas()
            .draw_arc(sk_rect(bounds), start_deg as f32, sweep_deg as f32, filled, &paint);
    }

    fn draw_text(&mut self, text: &str, at: Point, color: Color, font_size: f64) {
        let canvas = self.surface.canvas();
        self.text
            .draw_on_baseline(canvas, text, at.x as f32, at.y as f32, font_size as f32, sk_color(color));
    }

    fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        f64::from(self.text.measure_width(text, font_size as f32))
    }
}
