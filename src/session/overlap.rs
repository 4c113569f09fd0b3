//! Interval intersection predicate and conflict counting.
//!
//! [`overlaps`] is the single source of truth for what "conflict" means.
//! Every strategy and the validator go through it; an ad-hoc comparison
//! anywhere else could disagree on boundary cases and silently corrupt
//! the optimality-gap computation.

use super::Session;

/// Returns `true` iff the two sessions' half-open intervals intersect.
///
/// Sessions touching exactly at an endpoint are compatible:
/// `a.finish <= b.start` (or the mirror) means no conflict.
pub fn overlaps(a: &Session, b: &Session) -> bool {
    a.start < b.finish && b.start < a.finish
}

/// Counts how many sessions in `others` conflict with `session`.
///
/// A session never conflicts with itself; identity is by id.
pub fn conflict_count(session: &Session, others: &[&Session]) -> usize {
    others
        .iter()
        .filter(|o| o.id != session.id && overlaps(session, o))
        .count()
}

/// Total number of conflicting unordered pairs in the set.
pub fn total_conflicts(sessions: &[&Session]) -> usize {
    conflicting_pairs(sessions).len()
}

/// All conflicting unordered pairs, as `(id, id)` tuples in scan order.
pub fn conflicting_pairs(sessions: &[&Session]) -> Vec<(u64, u64)> {
    let mut pairs = Vec::new();
    for (i, a) in sessions.iter().enumerate() {
        for b in &sessions[i + 1..] {
            if overlaps(a, b) {
                pairs.push((a.id, b.id));
            }
        }
    }
    pairs
}

/// Counts sessions active at any point inside the window `[start, end)`.
///
/// Uses the same half-open convention as [`overlaps`]: a session that
/// finishes exactly at `start` or begins exactly at `end` is not active.
pub fn active_in_window(sessions: &[&Session], start: f64, end: f64) -> usize {
    sessions
        .iter()
        .filter(|s| s.start < end && start < s.finish)
        .count()
}
