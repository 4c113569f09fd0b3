//! Sweep execution loop.

use super::config::HarnessConfig;
use super::types::BenchmarkRecord;
use crate::generator;
use crate::session::SessionPool;
use crate::strategy::Strategy;
use crate::validate;
use std::time::Instant;

/// Executes benchmark sweeps.
///
/// # Usage
///
/// ```
/// use u_interval::harness::{HarnessConfig, HarnessRunner};
///
/// let config = HarnessConfig::default()
///     .with_sizes(vec![100])
///     .with_trials_per_size(2);
/// let records = HarnessRunner::run(&config);
/// assert_eq!(records.len(), 2 * config.strategies.len());
/// ```
pub struct HarnessRunner;

impl HarnessRunner {
    /// Runs the full (size × trial × strategy) sweep.
    ///
    /// For each trial, the pool is regenerated from `seed + trial` and
    /// every strategy runs on that identical pool; the reference optimum
    /// is computed once per pool by the validator's DP. Record order is
    /// deterministic: sizes, then trials, then strategies as configured.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`HarnessConfig::validate`] first to get a descriptive error).
    pub fn run(config: &HarnessConfig) -> Vec<BenchmarkRecord> {
        config.validate().expect("invalid HarnessConfig");

        let mut records = Vec::new();
        for &size in &config.sizes {
            for trial in 0..config.trials_per_size {
                let pool = generator::generate(&config.generator, size, config.seed + trial as u64);
                let optimal = validate::reference_optimal_count(&pool);

                let active: Vec<Strategy> = config
                    .strategies
                    .iter()
                    .copied()
                    .filter(|s| {
                        !(matches!(s, Strategy::FewestConflicts)
                            && size > config.fewest_conflicts_cutoff)
                    })
                    .collect();

                records.extend(run_trial(&active, &pool, optimal, size, trial, config.parallel));
            }
        }
        records
    }
}

fn run_trial(
    strategies: &[Strategy],
    pool: &SessionPool,
    optimal: usize,
    size: usize,
    trial: usize,
    parallel: bool,
) -> Vec<BenchmarkRecord> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return strategies
            .par_iter()
            .map(|&strategy| measure(strategy, pool, optimal, size, trial))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    strategies
        .iter()
        .map(|&strategy| measure(strategy, pool, optimal, size, trial))
        .collect()
}

/// Runs one strategy once. The timer wraps only `select`; validation
/// happens outside the measured region.
fn measure(
    strategy: Strategy,
    pool: &SessionPool,
    optimal: usize,
    size: usize,
    trial: usize,
) -> BenchmarkRecord {
    let started = Instant::now();
    let schedule = strategy.select(pool);
    let elapsed_ns = started.elapsed().as_nanos() as u64;

    let report = validate::validate(&schedule);
    if report.feasible {
        BenchmarkRecord {
            strategy,
            input_size: size,
            selected_count: schedule.len() as i64,
            optimal_count: optimal,
            optimality_ratio: validate::optimality_ratio(schedule.len(), optimal),
            elapsed_ns,
            trial,
            feasible: true,
        }
    } else {
        BenchmarkRecord {
            strategy,
            input_size: size,
            selected_count: -1,
            optimal_count: optimal,
            optimality_ratio: 0.0,
            elapsed_ns,
            trial,
            feasible: false,
        }
    }
}
