// File: crates/chart-core/src/render/line.rs
// Summary: Line chart: categories at evenly spaced x positions, values mapped on y, joined by segments.

use tracing::debug;

use crate::axis::{build_ticks, draw_captions, draw_centered_label, draw_y_ticks, LabelFormat, TickSet};
use crate::config::ChartConfig;
use crate::error::ValidationError;
use crate::geometry::Point;
use crate::scale::{PointScale, ValueScale};
use crate::series::Dataset;
use crate::surface::Surface;
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    pub ticks: TickSet,
    /// One polyline per series, in dataset order.
    pub polylines: Vec<Vec<Point>>,
    /// Category label and its x position, taken from the first series.
    pub categories: Vec<(String, f64)>,
}

pub fn layout(data: &Dataset, config: &ChartConfig) -> Result<LineLayout, ValidationError> {
    config.validate()?;
    data.validate()?;
    let first = &data.series[0];
    let n = first.len();
    for s in &data.series[1..] {
        if s.len() != n {
            return Err(ValidationError::SeriesLengthMismatch { series: s.name.clone(), expected: n, got: s.len() });
        }
    }

    let area = config.viewport.graph_area();
    let xs = PointScale::new(area.left, area.right, n)?;
    let ys = ValueScale::vertical(data.domain(), &area);
    let ticks = build_ticks(&ys, config.tick_count, &LabelFormat::plain())?;

    let polylines: Vec<Vec<Point>> = data
        .series
        .iter()
        .map(|s| s.values.iter().enumerate().map(|(i, &v)| Point::new(xs.to_px(i), ys.to_px(v))).collect::<Vec<_>>())
        .collect();
    let categories: Vec<(String, f64)> = first.labels.iter().enumerate().map(|(i, l)| (l.clone(), xs.to_px(i))).collect();

    debug!(series = data.series.len(), points = n, step = xs.step, "line layout");
    Ok(LineLayout { ticks, polylines, categories })
}

/// First series uses the theme's line stroke; further series cycle the palette from its start.
pub fn series_color(config: &ChartConfig, index: usize) -> Color {
    match index {
        0 => config.theme.line_stroke,
        i => config.theme.series_color(i - 1),
    }
}

pub fn draw<S: Surface>(layout: &LineLayout, config: &ChartConfig, surface: &mut S) {
    super::draw_frame(surface, config);
    draw_y_ticks(surface, config, &layout.ticks, true);

    let area = config.viewport.graph_area();
    for (label, x) in &layout.categories {
        draw_centered_label(surface, config, &area, label, *x);
    }
    draw_captions(surface, config);

    for (i, points) in layout.polylines.iter().enumerate() {
        let color = series_color(config, i);
        for seg in points.windows(2) {
            surface.draw_line(seg[0], seg[1], color, config.line_stroke);
        }
    }
}
