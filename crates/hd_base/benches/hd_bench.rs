use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hd_base::{
    CenterSet, Gate, determine_authority, determine_type, gate_for_degree, quick_centers,
    sun_longitude_deg,
};

fn solar_bench(c: &mut Criterion) {
    let jd = 2_448_057.937_5;

    let mut group = c.benchmark_group("solar");
    group.bench_function("sun_longitude", |b| {
        b.iter(|| sun_longitude_deg(black_box(jd)))
    });
    group.bench_function("sun_gate", |b| {
        b.iter(|| gate_for_degree(sun_longitude_deg(black_box(jd))))
    });
    group.finish();
}

fn centers_bench(c: &mut Criterion) {
    let gates: Vec<Gate> = [42, 32, 60, 56].into_iter().filter_map(Gate::new).collect();
    let sun = gate_for_degree(84.067);

    let mut group = c.benchmark_group("centers");
    group.bench_function("from_gates", |b| {
        b.iter(|| CenterSet::from_gates(black_box(&gates)))
    });
    group.bench_function("quick_centers", |b| {
        b.iter(|| quick_centers(black_box(6), black_box(15), sun))
    });
    group.finish();
}

fn classify_bench(c: &mut Criterion) {
    let centers = quick_centers(6, 15, gate_for_degree(84.067));

    let mut group = c.benchmark_group("classify");
    group.bench_function("type_and_authority", |b| {
        b.iter(|| {
            let t = determine_type(black_box(centers));
            determine_authority(centers, t)
        })
    });
    group.finish();
}

criterion_group!(benches, solar_bench, centers_bench, classify_bench);
criterion_main!(benches);
