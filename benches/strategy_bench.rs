//! Criterion benchmarks for the selection strategies.
//!
//! Demonstrates the complexity split: the sort-then-scan strategies
//! track n·log n while fewest-conflicts diverges cubically. Pools are
//! regenerated from a fixed seed so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_interval::generator::{self, GeneratorConfig};
use u_interval::strategy::Strategy;
use u_interval::validate;

fn bench_scan_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_strategies");
    group.sample_size(10);

    let config = GeneratorConfig::default();
    for &size in &[100usize, 1_000, 5_000, 20_000] {
        let pool = generator::generate(&config, size, 42);
        for strategy in [
            Strategy::EarliestFinish,
            Strategy::EarliestStart,
            Strategy::ShortestDuration,
            Strategy::LatestStart,
            Strategy::MaxValueDensity,
        ] {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), size),
                &pool,
                |b, pool| b.iter(|| black_box(strategy.select(black_box(pool)))),
            );
        }
    }
    group.finish();
}

fn bench_fewest_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("fewest_conflicts");
    group.sample_size(10);

    let config = GeneratorConfig::default();
    // Small sizes only: the shrinking-set recount is O(n³) on purpose.
    for &size in &[50usize, 100, 200, 400] {
        let pool = generator::generate(&config, size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| black_box(Strategy::FewestConflicts.select(black_box(pool))))
        });
    }
    group.finish();
}

fn bench_reference_optimum(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_optimum");
    group.sample_size(10);

    let config = GeneratorConfig::default();
    for &size in &[1_000usize, 10_000] {
        let pool = generator::generate(&config, size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| black_box(validate::reference_optimal_count(black_box(pool))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scan_strategies,
    bench_fewest_conflicts,
    bench_reference_optimum
);
criterion_main!(benches);
