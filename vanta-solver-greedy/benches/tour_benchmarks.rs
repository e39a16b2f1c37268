//! Criterion benchmarks for the nearest-neighbour optimizer.
//!
//! Measures the full optimization pipeline across batch sizes from a typical
//! day (10 jobs) to a large dispatch batch (200 jobs). Tour construction is
//! quadratic, so the larger sizes show how the scan scales.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package vanta-solver-greedy
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use vanta_core::RouteRequest;
use vanta_solver_greedy::default_optimizer;


use bench_support::{BENCHMARK_SEED, DEPOT, generate_jobs};

/// Batch sizes to benchmark.
const BATCH_SIZES: &[usize] = &[10, 50, 200];

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    let optimizer = default_optimizer();

    for &size in BATCH_SIZES {
        let request = RouteRequest::new(DEPOT, generate_jobs(size, BENCHMARK_SEED));

        group.throughput(Throughput::Elements(
            u64::try_from(size).unwrap_or(u64::MAX),
        ));
        group.bench_with_input(BenchmarkId::new("jobs", size), &request, |b, request| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking optimize performance, result is intentionally discarded"
                )]
                let _ = optimizer.optimize(request);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_optimize);
criterion_main!(benches);
