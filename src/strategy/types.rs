//! The closed strategy variant set and its dispatch.

use super::{fewest_conflicts, scan};
use crate::session::{Schedule, SessionPool};
use std::fmt;
use std::str::FromStr;

/// A named selection rule.
///
/// All variants implement the same contract: `select` reads the pool
/// (never mutating it) and returns a pairwise conflict-free
/// [`Schedule`]. Given the same pool, the same variant always returns
/// the same schedule — sort-key ties break by ascending session id.
///
/// Only [`Strategy::EarliestFinish`] is provably optimal (the greedy
/// exchange argument: the earliest-finishing compatible choice stays
/// ahead of any other feasible schedule at every prefix). The others are
/// deliberately kept for comparison; [`Strategy::LatestStart`] in
/// particular can match the optimum on favorable inputs, which is a
/// property of those inputs, not of the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Ascending finish time, single forward scan. Optimal, O(n log n).
    EarliestFinish,
    /// Ascending start time (first-come-first-served). Same scan, wrong
    /// key: one long early session can block many short later ones.
    EarliestStart,
    /// Ascending duration. Empirically close to optimal, no guarantee.
    ShortestDuration,
    /// Descending start time, mirrored scan from the end, result
    /// reversed. No guarantee in general.
    LatestStart,
    /// Repeatedly pick the remaining session with fewest conflicts
    /// against the remaining set, recomputing counts after each pick.
    /// Heuristic; O(n³).
    FewestConflicts,
    /// Descending value per unit time. Same scan. No guarantee for
    /// selected count.
    MaxValueDensity,
}

impl Strategy {
    /// Every variant, in a stable order.
    pub const ALL: [Strategy; 6] = [
        Strategy::EarliestFinish,
        Strategy::EarliestStart,
        Strategy::ShortestDuration,
        Strategy::LatestStart,
        Strategy::FewestConflicts,
        Strategy::MaxValueDensity,
    ];

    /// Stable display name, also accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::EarliestFinish => "earliest-finish",
            Strategy::EarliestStart => "earliest-start",
            Strategy::ShortestDuration => "shortest-duration",
            Strategy::LatestStart => "latest-start",
            Strategy::FewestConflicts => "fewest-conflicts",
            Strategy::MaxValueDensity => "max-value-density",
        }
    }

    /// Selects a conflict-free subset of the pool under this rule.
    pub fn select<'a>(&self, pool: &'a SessionPool) -> Schedule<'a> {
        match self {
            Strategy::EarliestFinish => scan::forward(pool, scan::SortKey::Finish),
            Strategy::EarliestStart => scan::forward(pool, scan::SortKey::Start),
            Strategy::ShortestDuration => scan::forward(pool, scan::SortKey::Duration),
            Strategy::MaxValueDensity => scan::forward(pool, scan::SortKey::ValueDensityDesc),
            Strategy::LatestStart => scan::backward(pool),
            Strategy::FewestConflicts => fewest_conflicts::select(pool),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| format!("unknown strategy '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{overlap, Session};
    use crate::validate;

    fn pool(spans: &[(f64, f64)]) -> SessionPool {
        let sessions = spans
            .iter()
            .enumerate()
            .map(|(i, &(start, finish))| {
                Session::new(i as u64, start, finish, 50.0, format!("owner-{i}"))
            })
            .collect();
        SessionPool::new(sessions).unwrap()
    }

    /// The classic activity-selection instance; the maximum compatible
    /// subset is {(1,4), (5,7), (8,11)}, size 3.
    fn classic_pool() -> SessionPool {
        pool(&[
            (1.0, 4.0),
            (3.0, 5.0),
            (0.0, 6.0),
            (5.0, 7.0),
            (3.0, 9.0),
            (5.0, 9.0),
            (6.0, 10.0),
            (8.0, 11.0),
        ])
    }

    #[test]
    fn test_earliest_finish_on_classic_instance() {
        let pool = classic_pool();
        let schedule = Strategy::EarliestFinish.select(&pool);
        // (1,4) then (5,7) then (8,11).
        assert_eq!(schedule.session_ids(), vec![0, 3, 7]);
    }

    #[test]
    fn test_no_strategy_beats_the_optimum_on_classic_instance() {
        let pool = classic_pool();
        let optimal = validate::reference_optimal_count(&pool);
        assert_eq!(optimal, 3);
        for strategy in Strategy::ALL {
            assert!(
                strategy.select(&pool).len() <= optimal,
                "{strategy} exceeded the optimum"
            );
        }
    }

    #[test]
    fn test_every_strategy_is_feasible_on_classic_instance() {
        let pool = classic_pool();
        for strategy in Strategy::ALL {
            let schedule = strategy.select(&pool);
            assert!(
                overlap::conflicting_pairs(schedule.sessions()).is_empty(),
                "{strategy} produced a conflicting schedule"
            );
        }
    }

    #[test]
    fn test_empty_pool_yields_empty_schedule() {
        let pool = SessionPool::new(Vec::new()).unwrap();
        for strategy in Strategy::ALL {
            assert!(strategy.select(&pool).is_empty());
        }
    }

    #[test]
    fn test_single_session_pool() {
        let pool = pool(&[(2.0, 5.0)]);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.select(&pool).len(), 1);
        }
    }

    #[test]
    fn test_adversarial_gap_for_earliest_start() {
        // One session starting at t=0 that spans the whole window, plus
        // disjoint short sessions after it begins. FCFS takes the long
        // one and nothing else; earliest-finish takes every short one.
        let mut spans = vec![(0.0, 100.0)];
        for k in 0..10 {
            let t = 1.0 + 2.0 * k as f64;
            spans.push((t, t + 1.0));
        }
        let pool = pool(&spans);

        let fcfs = Strategy::EarliestStart.select(&pool);
        let optimal = Strategy::EarliestFinish.select(&pool);
        assert_eq!(fcfs.len(), 1);
        assert_eq!(optimal.len(), 10);

        let reference = validate::reference_optimal_count(&pool);
        let ratio = validate::optimality_ratio(fcfs.len(), reference);
        assert!(ratio < 0.6, "expected a large FCFS gap, got {ratio}");
        assert!((validate::optimality_ratio(optimal.len(), reference) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_determinism_under_tied_keys() {
        // Three identical spans: ties must break by ascending id.
        let pool = pool(&[(0.0, 2.0), (0.0, 2.0), (0.0, 2.0), (2.0, 3.0)]);
        let schedule = Strategy::EarliestFinish.select(&pool);
        assert_eq!(schedule.session_ids(), vec![0, 3]);

        let again = Strategy::EarliestFinish.select(&pool);
        assert_eq!(schedule, again);
    }

    #[test]
    fn test_latest_start_schedule_is_in_chronological_order() {
        let pool = classic_pool();
        let schedule = Strategy::LatestStart.select(&pool);
        for pair in schedule.sessions().windows(2) {
            assert!(pair[0].finish <= pair[1].start);
        }
    }

    #[test]
    fn test_name_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
        assert!("not-a-strategy".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Strategy::EarliestFinish.to_string(), "earliest-finish");
        assert_eq!(Strategy::MaxValueDensity.to_string(), "max-value-density");
    }

    mod properties {
        use super::*;
        use proptest::collection::vec;
        use proptest::{prop_assert, prop_assert_eq, proptest};

        /// Spans arrive as (start, duration) so finish > start holds by
        /// construction.
        fn build(spans: &[(f64, f64)]) -> SessionPool {
            let converted: Vec<(f64, f64)> =
                spans.iter().map(|&(start, len)| (start, start + len)).collect();
            pool(&converted)
        }

        proptest! {
            #[test]
            fn prop_every_strategy_is_feasible_and_bounded(
                spans in vec((0.0f64..200.0, 0.5f64..40.0), 0..32)
            ) {
                let pool = build(&spans);
                let optimal = validate::reference_optimal_count(&pool);
                for strategy in Strategy::ALL {
                    let schedule = strategy.select(&pool);
                    prop_assert!(
                        overlap::conflicting_pairs(schedule.sessions()).is_empty(),
                        "{} produced a conflicting schedule",
                        strategy
                    );
                    prop_assert!(schedule.len() <= optimal);
                }
            }

            #[test]
            fn prop_earliest_finish_matches_the_reference_optimum(
                spans in vec((0.0f64..100.0, 0.5f64..25.0), 0..64)
            ) {
                let pool = build(&spans);
                prop_assert_eq!(
                    Strategy::EarliestFinish.select(&pool).len(),
                    validate::reference_optimal_count(&pool)
                );
            }
        }
    }
}
