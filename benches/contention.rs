//! Contention benchmarks — strategy cost under shared-record load
//!
//! ## Benchmark Groups
//!
//! | Group | Semantic | Regression Detection |
//! |-------|----------|----------------------|
//! | uncontended/* | Single-worker decrement | Base per-call cost |
//! | optimistic_decrement/* | N workers, CAS + retry | Conflict/backoff scaling |
//! | pessimistic_decrement/* | N workers, exclusive section | Lock hand-off scaling |
//!
//! ## Conflict Shape
//!
//! All workers in a group hammer one record (worst case). Stock always
//! covers demand, so every worker commits and the timing reflects pure
//! contention cost, not failure paths.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench contention
//! cargo bench --bench contention -- "optimistic"  # specific group
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use stockbench::prelude::*;

/// Retry tuning for benches: a generous budget and a tiny backoff, so the
/// timing tracks contention instead of sleeping.
fn bench_harness() -> StockBench {
    StockBench::builder()
        .max_attempts(1_000)
        .backoff(Duration::from_micros(50))
        .build()
}

fn uncontended_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontended");
    group.throughput(Throughput::Elements(1));

    // --- Benchmark: one worker, no rivals ---
    // Semantic: base cost of a full harness run with a single decrement
    {
        let bench = bench_harness();
        group.bench_function("optimistic", |b| {
            b.iter(|| {
                let item = bench.initialize("solo", 1);
                black_box(bench.run_optimistic(item.id, 1, 1).unwrap())
            });
        });
    }
    {
        let bench = bench_harness();
        group.bench_function("pessimistic", |b| {
            b.iter(|| {
                let item = bench.initialize("solo", 1);
                black_box(bench.run_pessimistic(item.id, 1, 1).unwrap())
            });
        });
    }

    group.finish();
}

fn optimistic_contention_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimistic_decrement");
    group.sample_size(10);

    for workers in [4usize, 8, 16] {
        group.throughput(Throughput::Elements(workers as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(workers),
            &workers,
            |b, &workers| {
                let bench = bench_harness();
                b.iter(|| {
                    let item = bench.initialize("hot", workers as u32);
                    black_box(bench.run_optimistic(item.id, 1, workers).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn pessimistic_contention_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("pessimistic_decrement");
    group.sample_size(10);

    for workers in [4usize, 8, 16] {
        group.throughput(Throughput::Elements(workers as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(workers),
            &workers,
            |b, &workers| {
                let bench = bench_harness();
                b.iter(|| {
                    let item = bench.initialize("hot", workers as u32);
                    black_box(bench.run_pessimistic(item.id, 1, workers).unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    uncontended_benchmarks,
    optimistic_contention_benchmarks,
    pessimistic_contention_benchmarks
);
criterion_main!(benches);
