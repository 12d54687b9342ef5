// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, viewport and graph area).

use crate::error::ValidationError;
use crate::geometry::Rect;

/// Default surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 500;
/// Default margin around the graph area, in pixels.
pub const MARGIN: u32 = 50;

/// Pixel canvas with a uniform margin on all four sides.
/// Contract: `2 * margin < width` and `2 * margin < height` (checked by [`Viewport::validate`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32, margin: u32) -> Self {
        Self { width, height, margin }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let m2 = u64::from(self.margin) * 2;
        if m2 >= u64::from(self.width) || m2 >= u64::from(self.height) {
            return Err(ValidationError::DegenerateViewport {
                width: self.width,
                height: self.height,
                margin: self.margin,
            });
        }
        Ok(())
    }

    /// The region inside the margin; ticks, bars, and lines are laid out here.
    pub fn graph_area(&self) -> Rect {
        let m = f64::from(self.margin);
        Rect::from_ltrb(m, m, f64::from(self.width) - m, f64::from(self.height) - m)
    }

    /// Pixel center of the whole canvas.
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) * 0.5, f64::from(self.height) * 0.5)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, MARGIN)
    }
}
