// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy: input validation, surface/export failures, and the per-chart wrapper.

use std::path::PathBuf;

use thiserror::Error;

use crate::chart::ChartKind;

/// Dataset or configuration invariant violated. Raised before any draw call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("series `{series}` has {labels} labels but {values} values")]
    LengthMismatch { series: String, labels: usize, values: usize },

    #[error("series `{series}` is empty")]
    EmptySeries { series: String },

    #[error("dataset contains no series")]
    EmptyDataset,

    #[error("series `{series}` has {got} values, expected {expected} like the first series")]
    SeriesLengthMismatch { series: String, expected: usize, got: usize },

    #[error("expected exactly {expected} series, got {got}")]
    SeriesCount { expected: usize, got: usize },

    #[error("line chart needs at least 2 points per series, got {0}")]
    TooFewPoints(usize),

    #[error("non-finite value {value} at index {index} of `{series}`")]
    NonFiniteValue { series: String, index: usize, value: f64 },

    #[error("negative value {value} at index {index} of `{series}`")]
    NegativeValue { series: String, index: usize, value: f64 },

    #[error("values must sum to a positive total, got {0}")]
    NonPositiveTotal(f64),

    #[error("values sum past the largest finite total")]
    TotalOverflow,

    #[error("domain [{min}, {max}] must be finite with max > min and a finite span")]
    InvalidDomain { min: f64, max: f64 },

    #[error("margin {margin} leaves no graph area in a {width}x{height} viewport")]
    DegenerateViewport { width: u32, height: u32, margin: u32 },

    #[error("tick count must be at least 1")]
    ZeroTickCount,
}

/// Failure while acquiring, encoding, or persisting a raster surface.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create a {width}x{height} raster surface")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("encode failed: {0}")]
    Encode(String),

    #[error("writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A failure of one chart render, tagged with the chart it belongs to.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("{chart}: invalid input: {source}")]
    Validation {
        chart: ChartKind,
        #[source]
        source: ValidationError,
    },

    #[error("{chart}: export failed: {source}")]
    Export {
        chart: ChartKind,
        #[source]
        source: ExportError,
    },
}

impl ChartError {
    pub fn chart(&self) -> ChartKind {
        match self {
            ChartError::Validation { chart, .. } | ChartError::Export { chart, .. } => *chart,
        }
    }
}
