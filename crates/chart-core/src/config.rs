// File: crates/chart-core/src/config.rs
// Summary: Immutable per-chart-type configuration (canvas, strokes, fonts, layout constants).

use crate::chart::ChartKind;
use crate::error::ValidationError;
use crate::theme::Theme;
use crate::types::{Viewport, HEIGHT, MARGIN, WIDTH};

/// Layout constants for one chart type. Build with a preset, then adjust fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub viewport: Viewport,
    pub theme: Theme,
    /// Number of tick intervals; `tick_count + 1` ticks are drawn.
    pub tick_count: usize,
    pub tick_length: f64,
    /// Gap between a y tick mark and the right edge of its label.
    pub tick_label_gap: f64,
    pub axis_stroke: f64,
    pub line_stroke: f64,
    pub font_size: f64,
    /// Baseline distance of category/x-tick labels below the x axis.
    pub label_offset: f64,
    /// Baseline distance of the x caption above the bottom edge.
    pub caption_offset: f64,
    pub x_caption: Option<String>,
    pub y_caption: Option<String>,
    /// Fraction of each slot a bar occupies.
    pub bar_width_ratio: f64,
    /// Distance from the pie center to sector labels.
    pub pie_label_radius: f64,
    /// Side of the square scatter marker.
    pub marker_size: f64,
}

impl ChartConfig {
    fn base() -> Self {
        Self {
            viewport: Viewport::new(WIDTH, HEIGHT, MARGIN),
            theme: Theme::light(),
            tick_count: 5,
            tick_length: 5.0,
            tick_label_gap: 4.0,
            axis_stroke: 2.0,
            line_stroke: 4.0,
            font_size: 16.0,
            label_offset: 20.0,
            caption_offset: 10.0,
            x_caption: None,
            y_caption: None,
            bar_width_ratio: 0.7,
            pie_label_radius: 100.0,
            marker_size: 8.0,
        }
    }

    pub fn line() -> Self {
        Self { x_caption: Some("Months".into()), ..Self::base() }
    }

    pub fn bar() -> Self {
        Self { x_caption: Some("Categories".into()), ..Self::base() }
    }

    pub fn pie() -> Self {
        Self { viewport: Viewport::new(500, 500, MARGIN), ..Self::base() }
    }

    pub fn scatter() -> Self {
        Self {
            x_caption: Some("Advertisement Spend ($K)".into()),
            y_caption: Some("Sales".into()),
            ..Self::base()
        }
    }

    /// Preset matching `kind`.
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Line => Self::line(),
            ChartKind::Bar => Self::bar(),
            ChartKind::Pie => Self::pie(),
            ChartKind::Scatter => Self::scatter(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.viewport.validate()?;
        if self.tick_count == 0 {
            return Err(ValidationError::ZeroTickCount);
        }
        Ok(())
    }
}
