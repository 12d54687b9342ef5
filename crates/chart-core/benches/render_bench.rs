use chart_core::{Chart, Dataset, RecordingSurface, Series};
use criterion::{criterion_group, criterion_main, black_box, Criterion};

fn build_line_chart(n: usize) -> Chart {
    let labels: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
    let values: Vec<f64> = (0..n).map(|i| 50.0 + (i as f64 * 0.01).sin() * 40.0).collect();
    let series = Series::try_new("wave", labels, values).expect("valid series");
    Chart::line(Dataset::single(series))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_recording");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("line_{n}"), |b| {
            let chart = build_line_chart(n);
            b.iter(|| {
                let mut surface = RecordingSurface::new();
                chart.render(&mut surface).expect("render");
                black_box(surface.calls.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
