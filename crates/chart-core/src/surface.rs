// File: crates/chart-core/src/surface.rs
// Summary: Minimal drawing-surface contract consumed by the renderers, plus an in-memory recorder.

use crate::geometry::{Point, Rect};
use crate::theme::Color;

/// Raster target the renderers draw into. Angles are in degrees, clockwise from +x.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, from: Point, to: Point, stroke: Color, stroke_width: f64);
    fn draw_rect(&mut self, rect: Rect, fill: Color);
    fn draw_arc(&mut self, bounds: Rect, start_deg: f64, sweep_deg: f64, filled: bool, fill: Color);
    /// `at` is the left end of the text baseline.
    fn draw_text(&mut self, text: &str, at: Point, color: Color, font_size: f64);

    /// Advance width of `text`. The default is a rough average-glyph estimate;
    /// backends with real shaping should override it.
    fn measure_text(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * 0.55
    }
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Line { from: Point, to: Point, stroke: Color, width: f64 },
    Rect { rect: Rect, fill: Color },
    Arc { bounds: Rect, start_deg: f64, sweep_deg: f64, filled: bool, fill: Color },
    Text { text: String, at: Point, color: Color, size: f64 },
}

/// Surface that stores every call instead of rasterizing. Used for headless geometry checks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn is_empty(&self) -> bool { self.calls.is_empty() }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Rect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Color)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Line { from, to, stroke, .. } => Some((*from, *to, *stroke)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, at, .. } => Some((text.as_str(), *at)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }
    fn draw_line(&mut self, from: Point, to: Point, stroke: Color, stroke_width: f64) {
        self.calls.push(DrawCall::Line { from, to, stroke, width: stroke_width });
    }
    fn draw_rect(&mut self, rect: Rect, fill: Color) {
        self.calls.push(DrawCall::Rect { rect, fill });
    }
    fn draw_arc(&mut self, bounds: Rect, start_deg: f64, sweep_deg: f64, filled: bool, fill: Color) {
        self.calls.push(DrawCall::Arc { bounds, start_deg, sweep_deg, filled, fill });
    }
    fn draw_text(&mut self, text: &str, at: Point, color: Color, font_size: f64) {
        self.calls.push(DrawCall::Text { text: text.to_owned(), at, color, size: font_size });
    }
}
