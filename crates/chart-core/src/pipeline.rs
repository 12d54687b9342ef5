// File: crates/chart-core/src/pipeline.rs
// Summary: Render/export pipeline: validate, acquire a surface, draw, hand off to the exporter.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::chart::{Chart, ChartKind};
use crate::error::{ChartError, ExportError};
use crate::surface::Surface;
use crate::types::Viewport;

/// Supplies raster surfaces and persists them once drawing is done.
pub trait RasterBackend {
    type Surface: Surface;

    fn create_surface(&self, viewport: &Viewport) -> Result<Self::Surface, ExportError>;

    /// Encode `surface` and write it under `name`. Consumes the surface.
    fn export(&self, surface: Self::Surface, name: &str) -> Result<PathBuf, ExportError>;
}

/// Result of one chart in a batch.
#[derive(Debug)]
pub struct ChartOutcome {
    pub kind: ChartKind,
    pub result: Result<PathBuf, ChartError>,
}

/// Render one chart end to end. Validation runs before the surface is acquired,
/// and the surface is dropped on every path out of this function.
pub fn render_chart<B: RasterBackend>(backend: &B, chart: &Chart) -> Result<PathBuf, ChartError> {
    let kind = chart.kind();
    let layout = chart
        .layout()
        .map_err(|source| ChartError::Validation { chart: kind, source })?;

    let mut surface = backend
        .create_surface(&chart.config.viewport)
        .map_err(|source| ChartError::Export { chart: kind, source })?;
    layout.draw(&chart.config, &mut surface);
    debug!(chart = %kind, "drawn");

    let path = backend
        .export(surface, kind.name())
        .map_err(|source| ChartError::Export { chart: kind, source })?;
    info!(chart = %kind, path = %path.display(), "exported");
    Ok(path)
}

/// Render every chart on its own scoped thread, each with its own surface.
/// A failure in one chart never affects the others; outcomes keep input order.
pub fn render_all<B>(backend: &B, charts: &[Chart]) -> Vec<ChartOutcome>
where
    B: RasterBackend + Sync,
{
    std::thread::scope(|scope| {
        let handles: Vec<_> = charts
            .iter()
            .map(|chart| scope.spawn(move || render_chart(backend, chart)))
            .collect();

        handles
            .into_iter()
            .zip(charts)
            .map(|(handle, chart)| {
                let result = match handle.join() {
                    Ok(r) => r,
                    Err(panic) => std::panic::resume_unwind(panic),
                };
                if let Err(e) = &result {
                    warn!(error = %e, "chart failed");
                }
                ChartOutcome { kind: chart.kind(), result }
            })
            .collect()
    })
}
