// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate: CPU raster surfaces, text shaping, and PNG export for chart-core.

pub mod backend;
pub mod surface;
pub mod text;

pub use backend::SkiaBackend;
pub use surface::SkiaSurface;
pub use text::TextShaper;
