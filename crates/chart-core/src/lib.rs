// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for chart construction, layout, and rendering.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod pipeline;
pub mod render;
pub mod scale;
pub mod series;
pub mod surface;
pub mod theme;
pub mod types;

pub use axis::{build_ticks, AxisSpec, LabelFormat, Tick, TickSet};
pub use chart::{Chart, ChartData, ChartKind, ChartLayout};
pub use config::ChartConfig;
pub use error::{ChartError, ExportError, ValidationError};
pub use geometry::{Point, Rect};
pub use pipeline::{render_all, render_chart, ChartOutcome, RasterBackend};
pub use scale::{map_value, BandScale, Domain, PointScale, ValueScale};
pub use series::{Dataset, Placement, ScatterData, Series};
pub use surface::{DrawCall, RecordingSurface, Surface};
pub use theme::{Color, Theme};
pub use types::Viewport;
