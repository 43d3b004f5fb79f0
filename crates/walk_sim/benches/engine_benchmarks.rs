//! Criterion benchmarks for the walk engine.
//!
//! Measures the per-sample cost of the 1D cumulative walk and the
//! target-seeking loop across stream sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use walk_core::Point;
use walk_sim::{walk_line, walk_to_target, map_plane, SampleStream};

/// Deterministic uniform samples for reproducible benchmark runs.
fn generate_samples(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen::<f64>()).collect()
}

fn bench_line_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_walk");

    for size in [1_000, 100_000, 1_000_000] {
        let samples = generate_samples(size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &samples, |b, samples| {
            b.iter(|| {
                let mut stream = SampleStream::from_values(black_box(samples.clone()));
                walk_line(&mut stream).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_target_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("target_walk");

    for size in [1_000, 100_000] {
        let samples = generate_samples(size, 42);
        // An unreachable target forces full stream consumption.
        let target = Point::new([i64::MAX / 2, 0]);
        group.bench_with_input(BenchmarkId::from_parameter(size), &samples, |b, samples| {
            b.iter(|| {
                let mut stream = SampleStream::from_values(black_box(samples.clone()));
                walk_to_target(&mut stream, target, map_plane).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_line_walk, bench_target_walk);
criterion_main!(benches);
