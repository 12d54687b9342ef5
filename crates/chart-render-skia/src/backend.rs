// File: crates/chart-render-skia/src/backend.rs
// Summary: Skia raster backend: creates surfaces and persists them as PNG files.

use std::path::PathBuf;

use chart_core::{Chart, ChartError, ExportError, RasterBackend, Viewport};
use tracing::debug;

use crate::surface::SkiaSurface;

/// Writes `<name>.png` files into `out_dir`.
#[derive(Clone, Debug)]
pub struct SkiaBackend {
    out_dir: PathBuf,
}

impl SkiaBackend {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    /// Destination for an artifact called `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.out_dir.join(format!("{name}.png"))
    }

    /// Render `chart` and return the encoded PNG without touching the filesystem.
    pub fn render_to_png_bytes(&self, chart: &Chart) -> Result<Vec<u8>, ChartError> {
        let kind = chart.kind();
        let layout = chart
            .layout()
            .map_err(|source| ChartError::Validation { chart: kind, source })?;
        let mut surface = self
            .create_surface(&chart.config.viewport)
            .map_err(|source| ChartError::Export { chart: kind, source })?;
        layout.draw(&chart.config, &mut surface);
        surface
            .encode_png()
            .map_err(|source| ChartError::Export { chart: kind, source })
    }
}

impl RasterBackend for SkiaBackend {
    type Surface = SkiaSurface;

    fn create_surface(&self, viewport: &Viewport) -> Result<SkiaSurface, ExportError> {
        SkiaSurface::new(viewport)
    }

    fn export(&self, mut surface: SkiaSurface, name: &str) -> Result<PathBuf, ExportError> {
        let bytes = surface.encode_png()?;
        let path = self.path_for(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::Io { path: parent.to_path_buf(), source })?;
        }
        std::fs::write(&path, &bytes).map_err(|source| ExportError::Io { path: path.clone(), source })?;
        debug!(path = %path.display(), bytes = bytes.len(), "png written");
        Ok(path)
    }
}
