//! Benchmark measurement rows.

use crate::strategy::Strategy;

/// One measurement: a strategy run once on one generated pool.
///
/// Records are append-only; the full sequence of a sweep is the artifact
/// handed to external reporting. A strategy whose output failed
/// validation is recorded with `selected_count = -1` and
/// `feasible = false` instead of aborting the sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkRecord {
    /// The strategy that was measured.
    pub strategy: Strategy,
    /// Pool size the strategy ran on.
    pub input_size: usize,
    /// Selected session count, or -1 if validation failed.
    pub selected_count: i64,
    /// Reference optimal count for the same pool.
    pub optimal_count: usize,
    /// `selected_count / optimal_count` (0.0 for a failed run, 1.0 for
    /// an empty pool by convention).
    pub optimality_ratio: f64,
    /// Wall-clock nanoseconds spent inside `select` only — pool
    /// generation and validation are excluded.
    pub elapsed_ns: u64,
    /// Trial index within the size.
    pub trial: usize,
    /// Whether the validator accepted the output.
    pub feasible: bool,
}

impl BenchmarkRecord {
    /// Compares everything except the timing field. Two sweeps with the
    /// same config agree on this even though their clocks differ.
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.strategy == other.strategy
            && self.input_size == other.input_size
            && self.selected_count == other.selected_count
            && self.optimal_count == other.optimal_count
            && self.optimality_ratio == other.optimality_ratio
            && self.trial == other.trial
            && self.feasible == other.feasible
    }
}
