use csvchart_core::{align, assemble, ChartKind};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_series(n: usize) -> (Vec<String>, Vec<f64>) {
    let cats = (0..n).map(|i| format!("day-{i}")).collect();
    let vals = (0..n - n / 10).map(|i| (i as f64 * 0.01).sin() * 10.0).collect();
    (cats, vals)
}

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("align_assemble");
    for &n in &[10_000usize, 100_000usize] {
        let data = gen_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |(cats, vals)| {
                    let series = align(cats, vals).unwrap();
                    black_box(assemble(ChartKind::Line, series, "date", "value", "bench"))
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_align);
criterion_main!(benches);
