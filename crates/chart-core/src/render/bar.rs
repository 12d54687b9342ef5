// File: crates/chart-core/src/render/bar.rs
// Summary: Bar chart: one bar per category, centered in equal slots, growing up from the baseline.

use tracing::debug;

use crate::axis::{build_ticks, draw_captions, draw_centered_label, draw_y_ticks, LabelFormat, TickSet};
use crate::config::ChartConfig;
use crate::error::ValidationError;
use crate::geometry::Rect;
use crate::scale::{BandScale, ValueScale};
use crate::series::Dataset;
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub ticks: TickSet,
    pub bars: Vec<Bar>,
}

/// Values outside the domain are not clamped: such bars extend past the graph area.
pub fn layout(data: &Dataset, config: &ChartConfig) -> Result<BarLayout, ValidationError> {
    config.validate()?;
    data.validate()?;
    let series = data.sole_series()?;

    let area = config.viewport.graph_area();
    let slots = BandScale::new(area.left, area.right, series.len())?;
    let ys = ValueScale::vertical(data.domain(), &area);
    let ticks = build_ticks(&ys, config.tick_count, &LabelFormat::plain())?;

    let bars: Vec<Bar> = series
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let (left, right) = slots.band(i, config.bar_width_ratio);
            let rect = Rect::from_ltrb(left, ys.to_px(value), right, area.bottom).sorted();
            Bar { label: label.to_owned(), value, rect }
        })
        .collect();

    debug!(bars = series.len(), slot = slots.slot, "bar layout");
    Ok(BarLayout { ticks, bars })
}

pub fn draw<S: Surface>(layout: &BarLayout, config: &ChartConfig, surface: &mut S) {
    super::draw_frame(surface, config);
    draw_y_ticks(surface, config, &layout.ticks, true);

    let area = config.viewport.graph_area();
    for bar in &layout.bars {
        surface.draw_rect(bar.rect, config.theme.bar_fill);
        draw_centered_label(surface, config, &area, &bar.label, bar.rect.center().x);
    }
    draw_captions(surface, config);
}
