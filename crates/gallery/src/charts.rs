// File: crates/gallery/src/charts.rs
// Summary: The four reference datasets, their charts, and the gallery render over them.

use chart_core::{
    render_all, AxisSpec, Chart, ChartError, ChartKind, ChartOutcome, Dataset, Domain, LabelFormat, RasterBackend,
    ScatterData, Series, ValidationError,
};
use tracing::warn;

pub fn line_chart() -> Result<Chart, ValidationError> {
    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"];
    let series = Series::try_new("sales", months, vec![10.0, 50.0, 30.0, 70.0, 90.0, 40.0, 60.0])?;
    Ok(Chart::line(Dataset::single(series)))
}

pub fn bar_chart() -> Result<Chart, ValidationError> {
    let series = Series::try_new("scores", ["A", "B", "C", "D", "E"], vec![30.0, 70.0, 50.0, 90.0, 40.0])?;
    Ok(Chart::bar(Dataset::single(series)))
}

pub fn pie_chart() -> Result<Chart, ValidationError> {
    let series = Series::try_new("share", ["Red", "Blue", "Green", "Orange"], vec![30.0, 50.0, 70.0, 90.0])?;
    Ok(Chart::pie(Dataset::single(series)))
}

/// Ad spend vs. sales. Points are pixel positions; the axes carry their own $K scales.
pub fn scatter_plot() -> Result<Chart, ValidationError> {
    let dollars = LabelFormat::new("$", "K");
    let x_axis = AxisSpec::new(Domain::new(0.0, 7.0)?, 7, dollars.clone()).without_origin_label();
    let y_axis = AxisSpec::new(Domain::new(0.0, 50.0)?, 5, dollars);
    let points = vec![
        (50.0, 450.0),  // $1K spend -> $5K sales
        (150.0, 400.0), // $2K -> $10K
        (250.0, 350.0), // $3K -> $15K
        (350.0, 250.0), // $4K -> $25K
        (450.0, 150.0), // $5K -> $35K
        (550.0, 100.0), // $6K -> $40K
        (650.0, 50.0),  // $7K -> $45K
    ];
    Ok(Chart::scatter(ScatterData::pixels(points, x_axis, y_axis)))
}

/// A chart as built from its reference data; construction may already have failed.
pub struct Built {
    pub kind: ChartKind,
    pub chart: Result<Chart, ValidationError>,
}

/// Each chart is built independently, so one bad dataset never hides the others.
pub fn all() -> Vec<Built> {
    vec![
        Built { kind: ChartKind::Line, chart: line_chart() },
        Built { kind: ChartKind::Bar, chart: bar_chart() },
        Built { kind: ChartKind::Pie, chart: pie_chart() },
        Built { kind: ChartKind::Scatter, chart: scatter_plot() },
    ]
}

/// Renders every chart that was built and reports construction failures as outcomes of
/// their own chart. Outcomes keep the order of `built`.
pub fn render<B>(backend: &B, built: Vec<Built>) -> Vec<ChartOutcome>
where
    B: RasterBackend + Sync,
{
    let mut ready = Vec::new();
    let mut slots = Vec::with_capacity(built.len());
    for Built { kind, chart } in built {
        match chart {
            Ok(chart) => {
                ready.push(chart);
                slots.push(None);
            }
            Err(source) => {
                warn!(chart = %kind, error = %source, "reference data rejected");
                slots.push(Some(ChartOutcome { kind, result: Err(ChartError::Validation { chart: kind, source }) }));
            }
        }
    }

    let mut rendered = render_all(backend, &ready).into_iter();
    slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| rendered.next()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chart_core::{ChartError, ChartKind, ChartLayout, ExportError, RasterBackend, RecordingSurface, ValidationError, Viewport};

    use super::Built;

    /// Names each export after its chart without touching the filesystem.
    struct NullBackend;

    impl RasterBackend for NullBackend {
        type Surface = RecordingSurface;

        fn create_surface(&self, _viewport: &Viewport) -> Result<RecordingSurface, ExportError> {
            Ok(RecordingSurface::new())
        }

        fn export(&self, _surface: RecordingSurface, name: &str) -> Result<PathBuf, ExportError> {
            Ok(PathBuf::from(format!("{name}.png")))
        }
    }

    #[test]
    fn reference_charts_lay_out() {
        let charts: Vec<_> = super::all().into_iter().map(|b| b.chart.expect("reference data is valid")).collect();
        let kinds: Vec<_> = charts.iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, ChartKind::ALL);
        for chart in &charts {
            chart.layout().expect("layout");
        }
        let ChartLayout::Pie(pie) = charts[2].layout().unwrap() else { panic!("pie expected") };
        let sweeps: Vec<f64> = pie.sectors.iter().map(|s| s.sweep_deg.round()).collect();
        assert_eq!(sweeps, [45.0, 75.0, 105.0, 135.0]);
    }

    #[test]
    fn construction_failure_is_reported_in_place() {
        let mut built = super::all();
        built[1].chart = Err(ValidationError::EmptyDataset);

        let outcomes = super::render(&NullBackend, built);
        let kinds: Vec<_> = outcomes.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, ChartKind::ALL);

        assert!(matches!(
            &outcomes[1].result,
            Err(ChartError::Validation { chart: ChartKind::Bar, source: ValidationError::EmptyDataset })
        ));
        for i in [0, 2, 3] {
            let path = outcomes[i].result.as_ref().expect("other charts still render");
            assert_eq!(path, &PathBuf::from(format!("{}.png", outcomes[i].kind.name())));
        }
    }
}
