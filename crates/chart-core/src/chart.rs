// File: crates/chart-core/src/chart.rs
// Summary: Chart struct tying data to its per-type config; validates, lays out, and draws onto a surface.

use std::fmt;

use tracing::debug_span;

use crate::config::ChartConfig;
use crate::error::ValidationError;
use crate::render::{bar, line, pie, scatter};
use crate::series::{Dataset, ScatterData};
use crate::surface::Surface;

/// The four supported chart archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [ChartKind::Line, ChartKind::Bar, ChartKind::Pie, ChartKind::Scatter];

    /// Output artifact name (without extension).
    pub const fn name(self) -> &'static str {
        match self {
            ChartKind::Line => "line_chart",
            ChartKind::Bar => "bar_chart",
            ChartKind::Pie => "pie_chart",
            ChartKind::Scatter => "scatter_plot",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Line(Dataset),
    Bar(Dataset),
    Pie(Dataset),
    Scatter(ScatterData),
}

/// Geometry produced by a successful layout; drawing it cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartLayout {
    Line(line::LineLayout),
    Bar(bar::BarLayout),
    Pie(pie::PieLayout),
    Scatter(scatter::ScatterLayout),
}

impl ChartLayout {
    pub fn draw<S: Surface>(&self, config: &ChartConfig, surface: &mut S) {
        match self {
            ChartLayout::Line(l) => line::draw(l, config, surface),
            ChartLayout::Bar(l) => bar::draw(l, config, surface),
            ChartLayout::Pie(l) => pie::draw(l, config, surface),
            ChartLayout::Scatter(l) => scatter::draw(l, config, surface),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub config: ChartConfig,
    pub data: ChartData,
}

impl Chart {
    pub fn line(data: Dataset) -> Self {
        Self { config: ChartConfig::line(), data: ChartData::Line(data) }
    }

    pub fn bar(data: Dataset) -> Self {
        Self { config: ChartConfig::bar(), data: ChartData::Bar(data) }
    }

    pub fn pie(data: Dataset) -> Self {
        Self { config: ChartConfig::pie(), data: ChartData::Pie(data) }
    }

    pub fn scatter(data: ScatterData) -> Self {
        Self { config: ChartConfig::scatter(), data: ChartData::Scatter(data) }
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn kind(&self) -> ChartKind {
        match self.data {
            ChartData::Line(_) => ChartKind::Line,
            ChartData::Bar(_) => ChartKind::Bar,
            ChartData::Pie(_) => ChartKind::Pie,
            ChartData::Scatter(_) => ChartKind::Scatter,
        }
    }

    /// Validate input and compute all geometry. No surface is touched.
    pub fn layout(&self) -> Result<ChartLayout, ValidationError> {
        let c = &self.config;
        Ok(match &self.data {
            ChartData::Line(d) => ChartLayout::Line(line::layout(d, c)?),
            ChartData::Bar(d) => ChartLayout::Bar(bar::layout(d, c)?),
            ChartData::Pie(d) => ChartLayout::Pie(pie::layout(d, c)?),
            ChartData::Scatter(d) => ChartLayout::Scatter(scatter::layout(d, c)?),
        })
    }

    /// Lay out and draw onto `surface`. On error, nothing has been drawn.
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), ValidationError> {
        let _span = debug_span!("render", chart = %self.kind()).entered();
        let layout = self.layout()?;
        layout.draw(&self.config, surface);
        Ok(())
    }
}
