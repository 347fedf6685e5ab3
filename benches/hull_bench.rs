//! Criterion benchmarks for planar hull construction.
//! Sizes: n in {100, 1000, 10000, 100000}, uniform in a square and on a circle.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use glam::DVec2;
use quickhull2d::{ConvexHull2d, HullConfig, PointSet};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn uniform_square(n: usize, seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut set = PointSet::with_capacity(n);
    for _ in 0..n {
        set.insert(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
            .unwrap();
    }
    set
}

// Every point is a hull vertex, the worst case for the angular sort.
fn on_circle(n: usize, seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<DVec2> = (0..n)
        .map(|_| DVec2::from_angle(rng.gen::<f64>() * std::f64::consts::TAU))
        .collect();
    PointSet::try_from_points(&points).unwrap()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull2d");
    let config = HullConfig::default();
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("uniform_square", n), &n, |b, &n| {
            b.iter_batched(
                || uniform_square(n, 42),
                |set| ConvexHull2d::try_from_point_set(&set, &config).unwrap(),
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("on_circle", n), &n, |b, &n| {
            b.iter_batched(
                || on_circle(n, 43),
                |set| ConvexHull2d::try_from_point_set(&set, &config).unwrap(),
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("insert", n), &n, |b, &n| {
            b.iter(|| uniform_square(n, 44))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
