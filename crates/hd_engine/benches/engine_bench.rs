use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hd_engine::{
    BirthData, ChartConfig, compute_fallback, compute_full_chart_with, compute_quick_type,
};

fn entry_points_bench(c: &mut Criterion) {
    let birth = BirthData::new(1990, 6, 15, 10, 30);
    let heuristic = ChartConfig::default();
    let lookup = ChartConfig::gate_lookup();

    let mut group = c.benchmark_group("entry_points");
    group.bench_function("full_chart_heuristic", |b| {
        b.iter(|| compute_full_chart_with(black_box(&birth), &heuristic))
    });
    group.bench_function("full_chart_gate_lookup", |b| {
        b.iter(|| compute_full_chart_with(black_box(&birth), &lookup))
    });
    group.bench_function("quick_type", |b| {
        b.iter(|| compute_quick_type(black_box(&birth)))
    });
    group.bench_function("fallback", |b| b.iter(|| compute_fallback(black_box(&birth))));
    group.finish();
}

criterion_group!(benches, entry_points_bench);
criterion_main!(benches);
