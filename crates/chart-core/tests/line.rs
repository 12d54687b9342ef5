// File: crates/chart-core/tests/line.rs
// Purpose: Line chart layout geometry, drawing, and input guards.

use chart_core::render::line;
use chart_core::{Chart, ChartConfig, ChartLayout, Dataset, Domain, RecordingSurface, Series, Theme, ValidationError};

const MONTHS: [&str; 7] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"];

fn monthly() -> Dataset {
    Dataset::single(Series::try_new("sales", MONTHS, vec![10.0, 50.0, 30.0, 70.0, 90.0, 40.0, 60.0]).unwrap())
}

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-6 }

#[test]
fn reference_points_land_where_expected() {
    let l = line::layout(&monthly(), &ChartConfig::line()).unwrap();
    let pts = &l.polylines[0];
    assert_eq!(pts.len(), 7);
    let step = (800.0 - 100.0) / 6.0;
    assert!(close(pts[0].x, 50.0) && close(pts[0].y, 500.0 - 50.0 - 10.0 * 4.0));
    assert!(close(pts[6].x, 50.0 + 6.0 * step) && close(pts[6].y, 500.0 - 50.0 - 60.0 * 4.0));
    for w in pts.windows(2) {
        assert!(close(w[1].x - w[0].x, step));
    }
    assert_eq!(l.categories[3].0, "Apr");
    assert!(close(l.categories[3].1, 50.0 + 3.0 * step));
    assert_eq!(l.ticks.len(), 6);
}

#[test]
fn draws_one_segment_per_consecutive_pair() {
    let chart = Chart::line(monthly());
    let mut s = RecordingSurface::new();
    chart.render(&mut s).unwrap();
    let blue = Theme::light().line_stroke;
    assert_eq!(s.lines().filter(|(_, _, c)| *c == blue).count(), 6);
    let texts: Vec<_> = s.texts().map(|(t, _)| t).collect();
    assert!(texts.contains(&"Months"));
    assert!(MONTHS.iter().all(|m| texts.contains(m)));
}

#[test]
fn single_point_is_rejected_before_drawing() {
    let chart = Chart::line(Dataset::single(Series::try_new("one", ["Jan"], vec![10.0]).unwrap()));
    let mut s = RecordingSurface::new();
    assert_eq!(chart.render(&mut s).unwrap_err(), ValidationError::TooFewPoints(1));
    assert!(s.is_empty());
}

#[test]
fn custom_domain_rescales_y() {
    let data = monthly().with_domain(Domain::new(0.0, 200.0).unwrap());
    let l = line::layout(&data, &ChartConfig::line()).unwrap();
    assert!(close(l.polylines[0][4].y, 450.0 - 90.0 * 2.0));
    assert_eq!(l.ticks.last().unwrap().label, "200");
}

#[test]
fn multiple_series_share_x_and_get_palette_colors() {
    let mut data = monthly();
    data.series.push(Series::try_new("costs", MONTHS, vec![5.0; 7]).unwrap());
    let chart = Chart::line(data);
    let ChartLayout::Line(l) = chart.layout().unwrap() else { panic!("line layout expected") };
    assert_eq!(l.polylines.len(), 2);
    assert_eq!(l.polylines[0][2].x, l.polylines[1][2].x);

    let mut s = RecordingSurface::new();
    chart.render(&mut s).unwrap();
    let second = line::series_color(&chart.config, 1);
    assert_eq!(second, Theme::light().palette[0]);
    assert_eq!(s.lines().filter(|(_, _, c)| *c == second).count(), 6);
}

#[test]
fn series_of_different_lengths_are_rejected() {
    let mut data = monthly();
    data.series.push(Series::try_new("short", ["Jan", "Feb"], vec![1.0, 2.0]).unwrap());
    assert_eq!(
        line::layout(&data, &ChartConfig::line()).unwrap_err(),
        ValidationError::SeriesLengthMismatch { series: "short".into(), expected: 7, got: 2 }
    );
}

#[test]
fn malformed_series_is_rejected() {
    let mismatch = Series { name: "bad".into(), labels: vec!["a".into()], values: vec![1.0, 2.0] };
    assert!(matches!(
        line::layout(&Dataset::single(mismatch), &ChartConfig::line()),
        Err(ValidationError::LengthMismatch { labels: 1, values: 2, .. })
    ));
    assert!(matches!(
        Series::try_new("nan", ["a", "b"], vec![1.0, f64::NAN]),
        Err(ValidationError::NonFiniteValue { index: 1, .. })
    ));
    assert_eq!(
        line::layout(&Dataset::new(vec![]), &ChartConfig::line()).unwrap_err(),
        ValidationError::EmptyDataset
    );
}
