// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end render of all four chart types to PNG files through the pipeline.

use chart_core::{
    render_all, AxisSpec, Chart, ChartError, Dataset, Domain, LabelFormat, ScatterData, Series,
};
use chart_render_skia::SkiaBackend;

fn charts() -> Vec<Chart> {
    let line = Series::try_new("l", ["Jan", "Feb", "Mar"], vec![10.0, 50.0, 30.0]).unwrap();
    let bar = Series::try_new("b", ["A", "B"], vec![30.0, 70.0]).unwrap();
    let pie = Series::try_new("p", ["Red", "Blue"], vec![30.0, 50.0]).unwrap();
    let fmt = LabelFormat::new("$", "K");
    let scatter = ScatterData::pixels(
        vec![(150.0, 400.0), (450.0, 150.0)],
        AxisSpec::new(Domain::new(0.0, 7.0).unwrap(), 7, fmt.clone()),
        AxisSpec::new(Domain::new(0.0, 50.0).unwrap(), 5, fmt),
    );
    vec![
        Chart::line(Dataset::single(line)),
        Chart::bar(Dataset::single(bar)),
        Chart::pie(Dataset::single(pie)),
        Chart::scatter(scatter),
    ]
}

#[test]
fn render_smoke_png() {
    let out = std::path::PathBuf::from("target/test_out/smoke");
    let backend = SkiaBackend::new(&out);

    let outcomes = render_all(&backend, &charts());
    assert_eq!(outcomes.len(), 4);
    for o in &outcomes {
        let path = o.result.as_ref().expect("render should succeed");
        assert_eq!(path, &backend.path_for(o.kind.name()));
        let meta = std::fs::metadata(path).expect("output exists");
        assert!(meta.len() > 0, "png should be non-empty");
    }

    // Also verify in-memory API works
    let bytes = backend.render_to_png_bytes(&charts()[0]).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn invalid_chart_writes_nothing() {
    let out = std::path::PathBuf::from("target/test_out/invalid");
    let _ = std::fs::remove_dir_all(&out);
    let backend = SkiaBackend::new(&out);
    let single = Chart::line(Dataset::single(Series::try_new("l", ["Jan"], vec![1.0]).unwrap()));

    let outcomes = render_all(&backend, &[single]);
    assert!(matches!(outcomes[0].result, Err(ChartError::Validation { .. })));
    assert!(!backend.path_for("line_chart").exists());
}
