//! Multi-trial aggregation.

use super::types::BenchmarkRecord;
use crate::strategy::Strategy;

/// Aggregated statistics for one (strategy, input size) cell of a sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategySummary {
    /// The strategy being summarized.
    pub strategy: Strategy,
    /// Pool size of the summarized trials.
    pub input_size: usize,
    /// Number of feasible trials behind the statistics.
    pub trials: usize,
    /// Trials whose output failed validation (excluded from the stats).
    pub infeasible_trials: usize,
    /// Mean selected count over feasible trials.
    pub mean_selected: f64,
    /// Smallest feasible selected count.
    pub min_selected: i64,
    /// Largest feasible selected count.
    pub max_selected: i64,
    /// Population standard deviation of the selected counts.
    pub std_selected: f64,
    /// Mean optimality ratio over feasible trials.
    pub mean_ratio: f64,
    /// Mean elapsed wall-clock nanoseconds over feasible trials.
    pub mean_elapsed_ns: f64,
}

/// Folds raw records into one summary per (strategy, input size), in
/// first-seen record order.
pub fn summarize(records: &[BenchmarkRecord]) -> Vec<StrategySummary> {
    let mut groups: Vec<((Strategy, usize), Vec<&BenchmarkRecord>)> = Vec::new();
    for record in records {
        let key = (record.strategy, record.input_size);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(record),
            None => groups.push((key, vec![record])),
        }
    }

    groups
        .into_iter()
        .map(|((strategy, input_size), members)| {
            let infeasible_trials = members.iter().filter(|r| !r.feasible).count();
            let feasible: Vec<&&BenchmarkRecord> =
                members.iter().filter(|r| r.feasible).collect();
            let trials = feasible.len();

            if trials == 0 {
                return StrategySummary {
                    strategy,
                    input_size,
                    trials: 0,
                    infeasible_trials,
                    mean_selected: 0.0,
                    min_selected: 0,
                    max_selected: 0,
                    std_selected: 0.0,
                    mean_ratio: 0.0,
                    mean_elapsed_ns: 0.0,
                };
            }

            let n = trials as f64;
            let mean_selected =
                feasible.iter().map(|r| r.selected_count as f64).sum::<f64>() / n;
            let variance = feasible
                .iter()
                .map(|r| {
                    let d = r.selected_count as f64 - mean_selected;
                    d * d
                })
                .sum::<f64>()
                / n;

            StrategySummary {
                strategy,
                input_size,
                trials,
                infeasible_trials,
                mean_selected,
                min_selected: feasible.iter().map(|r| r.selected_count).min().unwrap_or(0),
                max_selected: feasible.iter().map(|r| r.selected_count).max().unwrap_or(0),
                std_selected: variance.sqrt(),
                mean_ratio: feasible.iter().map(|r| r.optimality_ratio).sum::<f64>() / n,
                mean_elapsed_ns: feasible.iter().map(|r| r.elapsed_ns as f64).sum::<f64>() / n,
            }
        })
        .collect()
}
