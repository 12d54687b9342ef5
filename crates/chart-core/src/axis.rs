// File: crates/chart-core/src/axis.rs
// Summary: Axis layout: evenly spaced tick sets, label formatting, and axis/tick/caption drawing.

use crate::config::ChartConfig;
use crate::error::ValidationError;
use crate::geometry::{Point, Rect};
use crate::grid::linspace;
use crate::scale::{Domain, ValueScale};
use crate::surface::Surface;

/// Prefix/suffix wrapped around a locale-independent number, e.g. `$` + `20` + `K`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelFormat {
    pub prefix: String,
    pub suffix: String,
}

impl LabelFormat {
    pub fn plain() -> Self { Self::default() }

    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), suffix: suffix.into() }
    }

    pub fn format(&self, value: f64) -> String {
        format!("{}{}{}", self.prefix, format_number(value), self.suffix)
    }
}

/// Integral values print without a fractional part; others with up to 2 decimals,
/// trailing zeros trimmed. Always `.` as decimal separator.
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        // `+ 0.0` folds -0 into 0; f64 formatting keeps magnitudes past i64 intact
        return format!("{:.0}", rounded + 0.0);
    }
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub px: f64,
    pub label: String,
}

/// Ordered ticks covering a domain at fixed, evenly spaced increments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickSet {
    pub ticks: Vec<Tick>,
}

impl TickSet {
    pub fn len(&self) -> usize { self.ticks.len() }
    pub fn is_empty(&self) -> bool { self.ticks.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Tick> { self.ticks.iter() }
    pub fn first(&self) -> Option<&Tick> { self.ticks.first() }
    pub fn last(&self) -> Option<&Tick> { self.ticks.last() }
}

/// `tick_count + 1` ticks from `scale.domain.min` to `scale.domain.max`, each mapped through `scale`.
/// The count is fixed and never adapts to the data.
pub fn build_ticks(scale: &ValueScale, tick_count: usize, format: &LabelFormat) -> Result<TickSet, ValidationError> {
    if tick_count == 0 {
        return Err(ValidationError::ZeroTickCount);
    }
    let Domain { min, max } = scale.domain;
    let ticks = linspace(min, max, tick_count + 1)
        .into_iter()
        .map(|value| Tick { value, px: scale.to_px(value), label: format.format(value) })
        .collect();
    Ok(TickSet { ticks })
}

/// Scale and label style for an axis whose ticks are independent of the plotted values.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    pub domain: Domain,
    pub tick_count: usize,
    pub format: LabelFormat,
    /// Whether the tick at `domain.min` gets a label.
    pub label_origin: bool,
}

impl AxisSpec {
    pub fn new(domain: Domain, tick_count: usize, format: LabelFormat) -> Self {
        Self { domain, tick_count, format, label_origin: true }
    }

    pub fn without_origin_label(mut self) -> Self {
        self.label_origin = false;
        self
    }
}

// ---- drawing ----------------------------------------------------------------

/// Horizontal baseline along the bottom margin and vertical axis along the left margin.
pub fn draw_axes<S: Surface>(surface: &mut S, config: &ChartConfig) {
    let area = config.viewport.graph_area();
    let color = config.theme.axis_line;
    surface.draw_line(
        Point::new(area.left, area.bottom),
        Point::new(area.right, area.bottom),
        color,
        config.axis_stroke,
    );
    surface.draw_line(
        Point::new(area.left, area.top),
        Point::new(area.left, area.bottom),
        color,
        config.axis_stroke,
    );
}

/// Tick marks left of the y axis with right-aligned labels.
pub fn draw_y_ticks<S: Surface>(surface: &mut S, config: &ChartConfig, ticks: &TickSet, label_origin: bool) {
    let area = config.viewport.graph_area();
    let size = config.font_size;
    for (i, t) in ticks.iter().enumerate() {
        surface.draw_line(
            Point::new(area.left - config.tick_length, t.px),
            Point::new(area.left, t.px),
            config.theme.tick,
            config.axis_stroke,
        );
        if i == 0 && !label_origin {
            continue;
        }
        let w = surface.measure_text(&t.label, size);
        let x = area.left - config.tick_length - config.tick_label_gap - w;
        surface.draw_text(&t.label, Point::new(x, t.px + size * 0.3), config.theme.axis_label, size);
    }
}

/// Tick marks below the x axis with labels centered under them.
pub fn draw_x_ticks<S: Surface>(surface: &mut S, config: &ChartConfig, ticks: &TickSet, label_origin: bool) {
    let area = config.viewport.graph_area();
    for (i, t) in ticks.iter().enumerate() {
        surface.draw_line(
            Point::new(t.px, area.bottom),
            Point::new(t.px, area.bottom + config.tick_length),
            config.theme.tick,
            config.axis_stroke,
        );
        if i == 0 && !label_origin {
            continue;
        }
        draw_centered_label(surface, config, &area, &t.label, t.px);
    }
}

/// Category label centered on `x`, below the x axis.
pub fn draw_centered_label<S: Surface>(surface: &mut S, config: &ChartConfig, area: &Rect, text: &str, x: f64) {
    let w = surface.measure_text(text, config.font_size);
    surface.draw_text(
        text,
        Point::new(x - w * 0.5, area.bottom + config.label_offset),
        config.theme.axis_label,
        config.font_size,
    );
}

/// X caption centered near the bottom edge; y caption at the left edge, vertically centered.
pub fn draw_captions<S: Surface>(surface: &mut S, config: &ChartConfig) {
    let (cx, cy) = config.viewport.center();
    let size = config.font_size;
    if let Some(caption) = &config.x_caption {
        let w = surface.measure_text(caption, size);
        let y = f64::from(config.viewport.height) - config.caption_offset;
        surface.draw_text(caption, Point::new(cx - w * 0.5, y), config.theme.axis_label, size);
    }
    if let Some(caption) = &config.y_caption {
        surface.draw_text(caption, Point::new(config.caption_offset, cy), config.theme.axis_label, size);
    }
}
