use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_psi(c: &mut Criterion) {
    let observed: Vec<f64> = (0..1_000).map(|i| ((i % 37) as f64) + 1.0).collect();
    let predicted: Vec<f64> = (0..1_000).map(|i| 20.0 + 5.0 * ((i as f64) * 0.01).sin()).collect();

    c.bench_function("psi_test_1k_bins", |b| {
        b.iter(|| {
            black_box(au_stats::psi_test(black_box(&predicted), black_box(&observed)).unwrap())
        })
    });

    let flat = vec![1.0; 1_000];
    let candidates = [("model", predicted.as_slice()), ("flat", flat.as_slice())];
    c.bench_function("rank_hypotheses_2x1k", |b| {
        b.iter(|| black_box(au_stats::rank_hypotheses(&observed, &candidates).unwrap()))
    });
}

criterion_group!(benches, bench_psi);
criterion_main!(benches);
