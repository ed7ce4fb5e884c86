// -------------------------------------------------------------------------
// Solver Benchmark
// Gauss vs Householder vs Thomas on the same diagonally dominant
// tridiagonal system, at a few sizes.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_linsolve::{DenseMatrix, Method};
use std::hint::black_box;

/// Implicit heat equation pattern: main = 1 + 2*alpha, sub/super = -alpha.
fn heat_system(n: usize) -> (DenseMatrix<f64>, Vec<f64>) {
    let alpha = 0.4;
    let mut a = DenseMatrix::new(n, n);
    for i in 0..n {
        a.set(i, i, 1.0 + 2.0 * alpha);
        if i > 0 {
            a.set(i, i - 1, -alpha);
        }
        if i + 1 < n {
            a.set(i, i + 1, -alpha);
        }
    }
    let b = (0..n).map(|i| (i as f64 + 1.0).sin()).collect();
    (a, b)
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for n in [8usize, 32, 64] {
        let (a, b) = heat_system(n);
        for method in Method::ALL {
            group.bench_with_input(BenchmarkId::new(method.name(), n), &n, |bench, _| {
                bench.iter(|| method.solve(black_box(&a), black_box(&b)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
