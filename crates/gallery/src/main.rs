// File: crates/gallery/src/main.rs
// Summary: Renders the line, bar, pie, and scatter reference charts in parallel to target/out/*.png.

mod charts;
mod report;

use anyhow::Result;
use chart_render_skia::SkiaBackend;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::report::Reporter;

const OUT_DIR: &str = "target/out";

/// Diagnostics stay quiet unless `RUST_LOG` asks; the reporter owns stdout.
const DEFAULT_LOG_FILTER: &str = "warn";

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(log_filter())
        .init();

    let built = charts::all();
    let backend = SkiaBackend::new(OUT_DIR);
    info!(out_dir = OUT_DIR, charts = built.len(), "rendering gallery");

    let mut reporter = Reporter::new();
    reporter.started(built.len());
    for outcome in charts::render(&backend, built) {
        reporter.outcome(&outcome);
    }

    if !reporter.finish() {
        anyhow::bail!("one or more charts failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::EnvFilter;

    #[test]
    fn default_filter_is_warn() {
        let filter = EnvFilter::try_new(super::DEFAULT_LOG_FILTER).expect("valid directive");
        assert_eq!(filter.to_string(), "warn");
    }
}
