// File: crates/chart-core/src/render/pie.rs
// Summary: Pie chart: consecutive sectors proportional to each value's share of the total.

use tracing::debug;

use crate::config::ChartConfig;
use crate::error::ValidationError;
use crate::geometry::{Point, Rect};
use crate::series::Dataset;
use crate::surface::Surface;
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    pub label: String,
    pub value: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub color: Color,
    /// Label anchor on the bisecting angle, `pie_label_radius` from the center.
    pub label_at: Point,
}

impl Sector {
    pub fn mid_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg * 0.5
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieLayout {
    /// Square bounding box of the full circle, centered in the graph area.
    pub bounds: Rect,
    pub sectors: Vec<Sector>,
}

impl PieLayout {
    pub fn center(&self) -> Point { self.bounds.center() }
}

/// Sectors keep input order, starting at 0 degrees. Requires non-negative values with a positive,
/// finite total.
pub fn layout(data: &Dataset, config: &ChartConfig) -> Result<PieLayout, ValidationError> {
    config.validate()?;
    data.validate()?;
    let series = data.sole_series()?;
    if let Some((index, &value)) = series.values.iter().enumerate().find(|(_, v)| **v < 0.0) {
        return Err(ValidationError::NegativeValue { series: series.name.clone(), index, value });
    }
    let total = series.total();
    if !total.is_finite() {
        return Err(ValidationError::TotalOverflow);
    }
    if total <= 0.0 {
        return Err(ValidationError::NonPositiveTotal(total));
    }

    let area = config.viewport.graph_area();
    let side = area.width().min(area.height());
    let c = area.center();
    let bounds = Rect::from_ltwh(c.x - side * 0.5, c.y - side * 0.5, side, side);
    let r = config.pie_label_radius;

    let mut start = 0.0_f64;
    let sectors: Vec<Sector> = series
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let sweep = value / total * 360.0;
            let mid = (start + sweep * 0.5).to_radians();
            let sector = Sector {
                label: label.to_owned(),
                value,
                start_deg: start,
                sweep_deg: sweep,
                color: config.theme.series_color(i),
                label_at: Point::new(c.x + r * mid.cos(), c.y + r * mid.sin()),
            };
            start += sweep;
            sector
        })
        .collect();

    debug!(sectors = series.len(), total, "pie layout");
    Ok(PieLayout { bounds, sectors })
}

pub fn draw<S: Surface>(layout: &PieLayout, config: &ChartConfig, surface: &mut S) {
    surface.clear(config.theme.background);
    for s in &layout.sectors {
        surface.draw_arc(layout.bounds, s.start_deg, s.sweep_deg, true, s.color);
    }
    let size = config.font_size;
    for s in &layout.sectors {
        let w = surface.measure_text(&s.label, size);
        let at = Point::new(s.label_at.x - w * 0.5, s.label_at.y + size * 0.3);
        surface.draw_text(&s.label, at, config.theme.axis_label, size);
    }
}
