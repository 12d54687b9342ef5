// File: crates/chart-core/src/scale.rs
// Summary: Coordinate mapping from data domain to pixel space (value, point, and band scales).

use crate::error::ValidationError;
use crate::geometry::Rect;

/// Closed range of meaningful data values.
/// Contract: both bounds finite, `max > min`, and `max - min` finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        if !min.is_finite() || !max.is_finite() || max <= min || !(max - min).is_finite() {
            return Err(ValidationError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    /// The `[0, 100]` percentage domain shared by line, bar, and tick layouts.
    pub const fn percent() -> Self {
        Self { min: 0.0, max: 100.0 }
    }

    pub fn span(&self) -> f64 { self.max - self.min }
}

impl Default for Domain {
    fn default() -> Self { Self::percent() }
}

/// Vertical mapping: `domain_min` lands on `pixel_max` (bottom), `domain_max` on `pixel_min` (top).
pub fn map_value(
    value: f64,
    domain_min: f64,
    domain_max: f64,
    pixel_min: f64,
    pixel_max: f64,
) -> Result<f64, ValidationError> {
    let domain = Domain::new(domain_min, domain_max)?;
    Ok(ValueScale::new(domain, pixel_max, pixel_min).to_px(value))
}

/// Affine map from a [`Domain`] onto the pixel segment `[start_px, end_px]`.
/// `start_px` may be greater than `end_px` (vertical axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub domain: Domain,
    pub start_px: f64,
    pub end_px: f64,
}

impl ValueScale {
    pub fn new(domain: Domain, start_px: f64, end_px: f64) -> Self {
        Self { domain, start_px, end_px }
    }

    /// Y axis over `area`: larger values map to smaller pixel y.
    pub fn vertical(domain: Domain, area: &Rect) -> Self {
        Self::new(domain, area.bottom, area.top)
    }

    /// X axis over `area`: larger values map to larger pixel x.
    pub fn horizontal(domain: Domain, area: &Rect) -> Self {
        Self::new(domain, area.left, area.right)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.start_px + (v - self.domain.min) / self.domain.span() * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        self.domain.min + (px - self.start_px) / (self.end_px - self.start_px) * self.domain.span()
    }
}

/// Places `count` categories at evenly spaced positions, first on `start_px`, last on `end_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointScale {
    pub start_px: f64,
    pub step: f64,
    pub count: usize,
}

impl PointScale {
    /// Fails with [`ValidationError::TooFewPoints`] when `count < 2`, since the step divides by `count - 1`.
    pub fn new(start_px: f64, end_px: f64, count: usize) -> Result<Self, ValidationError> {
        if count < 2 {
            return Err(ValidationError::TooFewPoints(count));
        }
        Ok(Self { start_px, step: (end_px - start_px) / (count - 1) as f64, count })
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        self.start_px + self.step * index as f64
    }
}

/// Divides `[start_px, end_px]` into `count` equal slots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    pub start_px: f64,
    pub slot: f64,
    pub count: usize,
}

impl BandScale {
    pub fn new(start_px: f64, end_px: f64, count: usize) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::EmptyDataset);
        }
        Ok(Self { start_px, slot: (end_px - start_px) / count as f64, count })
    }

    /// Left/right edges of the band at `index`, occupying `ratio` of its slot, centered.
    pub fn band(&self, index: usize, ratio: f64) -> (f64, f64) {
        let slot_left = self.start_px + self.slot * index as f64;
        let inset = self.slot * (1.0 - ratio) * 0.5;
        (slot_left + inset, slot_left + self.slot - inset)
    }

    pub fn center(&self, index: usize) -> f64 {
        self.start_px + self.slot * (index as f64 + 0.5)
    }
}
