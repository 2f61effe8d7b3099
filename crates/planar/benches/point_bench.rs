//! Criterion benchmarks for the hot `Point2` operations.
//! Focus sizes: n in {16, 256, 4096}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::{draw_point, Bounds2, Point2, ReplayToken};

fn random_points(n: usize, seed: u64) -> Vec<Point2> {
    (0..n)
        .map(|index| {
            draw_point(
                Bounds2::default(),
                ReplayToken {
                    seed,
                    index: index as u64,
                },
            )
        })
        .collect()
}

fn bench_point2(c: &mut Criterion) {
    let mut group = c.benchmark_group("point2");
    for &n in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("rotate", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 43),
                |mut pts| {
                    for p in &mut pts {
                        p.rotate(0.3);
                    }
                    pts
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("norm", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 44),
                |mut pts| {
                    for p in &mut pts {
                        p.norm();
                    }
                    pts
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("dis", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 45),
                |pts| {
                    let mut acc = 0.0f32;
                    for w in pts.windows(2) {
                        acc += w[0].dis(w[1]);
                    }
                    acc
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_point2);
criterion_main!(benches);
