//! Shared sort-then-scan acceptance pass.
//!
//! Five of the six strategies are the same single-pass rule with a
//! different sort key: order the pool, then keep a session iff it does
//! not overlap the last accepted one. Keeping the pass in one place
//! guarantees the variants differ only in their criterion.

use crate::session::{Schedule, Session, SessionPool};
use std::cmp::Ordering;

/// Sort key for the forward scan. Descending keys are negated so the
/// comparison is always ascending.
#[derive(Debug, Clone, Copy)]
pub(super) enum SortKey {
    /// Ascending finish time (the provably optimal criterion).
    Finish,
    /// Ascending start time (first-come-first-served).
    Start,
    /// Ascending duration.
    Duration,
    /// Descending value per unit time.
    ValueDensityDesc,
}

impl SortKey {
    fn value(&self, s: &Session) -> f64 {
        match self {
            SortKey::Finish => s.finish,
            SortKey::Start => s.start,
            SortKey::Duration => s.duration(),
            SortKey::ValueDensityDesc => -s.value_density(),
        }
    }
}

/// Sorts by `key` (ties by ascending id) and keeps every session whose
/// start is at or after the last accepted finish.
pub(super) fn forward<'a>(pool: &'a SessionPool, key: SortKey) -> Schedule<'a> {
    let mut order: Vec<&Session> = pool.iter().collect();
    order.sort_by(|a, b| compare_by(key.value(a), key.value(b), a.id, b.id));

    let mut selected: Vec<&Session> = Vec::new();
    let mut last_finish = f64::NEG_INFINITY;
    for session in order {
        if session.start >= last_finish {
            selected.push(session);
            last_finish = session.finish;
        }
    }
    Schedule::new(selected)
}

/// The earliest-finish rule mirrored from the end of the timeline:
/// sort by descending start, keep a session iff it finishes at or
/// before the earliest accepted start, then reverse into chronological
/// order.
///
/// Not optimal in general — it matches the optimum only on favorable
/// inputs, which is a property of those inputs.
pub(super) fn backward<'a>(pool: &'a SessionPool) -> Schedule<'a> {
    let mut order: Vec<&Session> = pool.iter().collect();
    order.sort_by(|a, b| compare_by(-a.start, -b.start, a.id, b.id));

    let mut selected: Vec<&Session> = Vec::new();
    let mut earliest_start = f64::INFINITY;
    for session in order {
        if session.finish <= earliest_start {
            selected.push(session);
            earliest_start = session.start;
        }
    }
    selected.reverse();
    Schedule::new(selected)
}

fn compare_by(ka: f64, kb: f64, ida: u64, idb: u64) -> Ordering {
    ka.partial_cmp(&kb)
        .unwrap_or(Ordering::Equal)
        .then_with(|| ida.cmp(&idb))
}
