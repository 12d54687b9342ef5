// File: crates/chart-core/src/render/scatter.rs
// Summary: Scatter plot: square markers over independently scaled, labeled x and y axes.

use tracing::debug;

use crate::axis::{build_ticks, draw_captions, draw_x_ticks, draw_y_ticks, TickSet};
use crate::config::ChartConfig;
use crate::error::ValidationError;
use crate::geometry::{Point, Rect};
use crate::scale::ValueScale;
use crate::series::{Placement, ScatterData};
use crate::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterLayout {
    pub x_ticks: TickSet,
    pub y_ticks: TickSet,
    pub x_label_origin: bool,
    pub y_label_origin: bool,
    /// Marker squares, centered on each point's pixel position.
    pub markers: Vec<Rect>,
}

pub fn layout(data: &ScatterData, config: &ChartConfig) -> Result<ScatterLayout, ValidationError> {
    config.validate()?;
    data.validate()?;

    let area = config.viewport.graph_area();
    let xs = ValueScale::horizontal(data.x_axis.domain, &area);
    let ys = ValueScale::vertical(data.y_axis.domain, &area);
    let x_ticks = build_ticks(&xs, data.x_axis.tick_count, &data.x_axis.format)?;
    let y_ticks = build_ticks(&ys, data.y_axis.tick_count, &data.y_axis.format)?;

    let markers: Vec<Rect> = data
        .points
        .iter()
        .map(|&(x, y)| {
            let p = match data.placement {
                Placement::Pixel => Point::new(x, y),
                Placement::Domain => Point::new(xs.to_px(x), ys.to_px(y)),
            };
            Rect::centered_square(p, config.marker_size)
        })
        .collect();

    debug!(points = data.points.len(), placement = ?data.placement, "scatter layout");
    Ok(ScatterLayout {
        x_ticks,
        y_ticks,
        x_label_origin: data.x_axis.label_origin,
        y_label_origin: data.y_axis.label_origin,
        markers,
    })
}

pub fn draw<S: Surface>(layout: &ScatterLayout, config: &ChartConfig, surface: &mut S) {
    super::draw_frame(surface, config);
    draw_y_ticks(surface, config, &layout.y_ticks, layout.y_label_origin);
    draw_x_ticks(surface, config, &layout.x_ticks, layout.x_label_origin);
    for m in &layout.markers {
        surface.draw_rect(*m, config.theme.marker);
    }
    draw_captions(surface, config);
}
