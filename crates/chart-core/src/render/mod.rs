// File: crates/chart-core/src/render/mod.rs
// Summary: Per-chart-type renderers. Each splits into a pure `layout` (validation + geometry)
// and a `draw` step that only issues surface calls.

pub mod bar;
pub mod line;
pub mod pie;
pub mod scatter;

use crate::axis::draw_axes;
use crate::config::ChartConfig;
use crate::surface::Surface;

/// Background plus the two axis lines shared by the cartesian charts.
fn draw_frame<S: Surface>(surface: &mut S, config: &ChartConfig) {
    surface.clear(config.theme.background);
    draw_axes(surface, config);
}
