// File: crates/chart-core/tests/bar.rs
// Purpose: Bar slot geometry, non-overlap, boundary bars, and unclamped out-of-range values.

use chart_core::render::bar;
use chart_core::{Chart, ChartConfig, Dataset, RecordingSurface, Series, Theme, ValidationError};

fn bars(values: Vec<f64>) -> bar::BarLayout {
    let labels: Vec<String> = (0..values.len()).map(|i| format!("C{i}")).collect();
    let data = Dataset::single(Series::try_new("v", labels, values).unwrap());
    bar::layout(&data, &ChartConfig::bar()).unwrap()
}

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

#[test]
fn bars_are_ordered_and_never_overlap() {
    let l = bars(vec![30.0, 70.0, 50.0, 90.0, 40.0]);
    assert_eq!(l.bars.len(), 5);
    for b in &l.bars {
        assert!(b.rect.left < b.rect.right);
    }
    for w in l.bars.windows(2) {
        assert!(w[0].rect.right <= w[1].rect.left);
    }
}

#[test]
fn bar_occupies_seventy_percent_of_its_slot_centered() {
    let l = bars(vec![30.0, 70.0, 50.0, 90.0, 40.0]);
    let slot = 700.0 / 5.0;
    for (i, b) in l.bars.iter().enumerate() {
        let slot_left = 50.0 + slot * i as f64;
        assert!(close(b.rect.width(), 0.7 * slot));
        assert!(close(b.rect.left, slot_left + 0.15 * slot));
        assert!(close(b.rect.bottom, 450.0));
    }
    assert!(close(l.bars[3].rect.top, 450.0 - 90.0 * 4.0));
}

#[test]
fn single_full_value_spans_whole_graph_height() {
    let l = bars(vec![100.0]);
    assert_eq!(l.bars.len(), 1);
    let r = l.bars[0].rect;
    assert!(close(r.top, 50.0));
    assert!(close(r.bottom, 450.0));
    assert!(close(r.left, 50.0 + 0.15 * 700.0));
}

#[test]
fn out_of_range_values_are_not_clamped() {
    let l = bars(vec![150.0, -20.0]);
    assert!(l.bars[0].rect.top < 50.0);
    // negative values extend below the baseline
    assert!(close(l.bars[1].rect.top, 450.0));
    assert!(close(l.bars[1].rect.bottom, 450.0 + 20.0 * 4.0));
}

#[test]
fn render_draws_one_filled_rect_per_value() {
    let data = Dataset::single(Series::try_new("v", ["A", "B", "C"], vec![10.0, 20.0, 30.0]).unwrap());
    let mut s = RecordingSurface::new();
    Chart::bar(data).render(&mut s).unwrap();
    assert_eq!(s.rects().count(), 3);
    assert!(s.calls.iter().all(|c| match c {
        chart_core::DrawCall::Rect { fill, .. } => *fill == Theme::light().bar_fill,
        _ => true,
    }));
    assert!(s.texts().any(|(t, _)| t == "Categories"));
}

#[test]
fn theme_drives_background_and_fill() {
    let data = Dataset::single(Series::try_new("v", ["A"], vec![50.0]).unwrap());
    let dark = Theme::dark();
    let chart = Chart::bar(data).with_config(ChartConfig::bar().with_theme(dark.clone()));
    let mut s = RecordingSurface::new();
    chart.render(&mut s).unwrap();
    assert_eq!(s.calls[0], chart_core::DrawCall::Clear(dark.background));
    assert!(s.calls.contains(&chart_core::DrawCall::Rect { rect: *s.rects().next().unwrap(), fill: dark.bar_fill }));
}

#[test]
fn bar_chart_takes_exactly_one_series() {
    let a = Series::try_new("a", ["x"], vec![1.0]).unwrap();
    let data = Dataset::new(vec![a.clone(), a]);
    assert_eq!(
        bar::layout(&data, &ChartConfig::bar()).unwrap_err(),
        ValidationError::SeriesCount { expected: 1, got: 2 }
    );
}
