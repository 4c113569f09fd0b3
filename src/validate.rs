//! Feasibility validation and optimality-gap computation.
//!
//! The validator is the single source of truth for correctness: it
//! rechecks every pair of a schedule against the shared overlap
//! predicate, with no knowledge of the strategy's internal bookkeeping.
//! [`reference_optimal_count`] computes the true maximum compatible
//! count with a standalone dynamic program, so the gap never trusts any
//! strategy's own output — including the earliest-finish strategy's.
//!
//! # Reference
//!
//! Kleinberg & Tardos (2006), *Algorithm Design*, Ch. 6.1
//! (weighted interval scheduling DP, here with unit weights)

use crate::session::overlap::conflicting_pairs;
use crate::session::{Schedule, SessionPool};
use std::cmp::Ordering;

/// Outcome of validating one schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleReport {
    /// Whether the schedule is pairwise conflict-free.
    pub feasible: bool,
    /// Every conflicting `(id, id)` pair found; empty iff feasible.
    pub violating_pairs: Vec<(u64, u64)>,
}

/// Rechecks every pair in the schedule against the overlap predicate.
///
/// Validation is pure; calling it twice on the same schedule yields the
/// same report.
pub fn validate(schedule: &Schedule<'_>) -> ScheduleReport {
    let violating_pairs = conflicting_pairs(schedule.sessions());
    ScheduleReport {
        feasible: violating_pairs.is_empty(),
        violating_pairs,
    }
}

/// Ratio of a selected count to the reference optimal count, in `[0, 1]`
/// for any feasible schedule.
///
/// An empty pool has `optimal_count == 0` and nothing to miss, so the
/// ratio is 1.0 by convention. Non-empty pools always have an optimum of
/// at least 1 (a single session is trivially feasible).
pub fn optimality_ratio(selected_count: usize, optimal_count: usize) -> f64 {
    if optimal_count == 0 {
        1.0
    } else {
        selected_count as f64 / optimal_count as f64
    }
}

/// True maximum number of pairwise-compatible sessions in the pool.
///
/// Sorts spans by finish time and runs the classic interval-scheduling
/// DP: `best[i+1] = max(best[i], best[p(i)] + 1)` where `p(i)` is found
/// by binary search over the sorted finish times. O(n log n), and
/// deliberately shares nothing with the strategies' scan loops.
pub fn reference_optimal_count(pool: &SessionPool) -> usize {
    let mut spans: Vec<(f64, f64)> = pool.iter().map(|s| (s.start, s.finish)).collect();
    spans.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    let finishes: Vec<f64> = spans.iter().map(|&(_, finish)| finish).collect();

    let mut best = vec![0usize; spans.len() + 1];
    for (i, &(start, _)) in spans.iter().enumerate() {
        // Sessions compatible before this one: finish <= start. The
        // half-open convention makes a shared endpoint compatible.
        let p = finishes[..i].partition_point(|&finish| finish <= start);
        best[i + 1] = best[i].max(best[p] + 1);
    }
    best[spans.len()]
}
