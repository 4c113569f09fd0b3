//! The fewest-conflicts heuristic.
//!
//! Repeatedly picks the remaining session that overlaps the fewest
//! other remaining sessions, keeping it if it is compatible with
//! everything accepted so far. Conflict counts are recomputed from
//! scratch against the shrinking remaining set on every pick: n picks ×
//! O(n²) counting = O(n³). The harness exists to measure exactly this
//! cost against the O(n log n) group, so the recomputation is the
//! specified behavior — do not memoize it.

use crate::session::overlap::{conflict_count, overlaps};
use crate::session::{Schedule, Session, SessionPool};

pub(super) fn select(pool: &SessionPool) -> Schedule<'_> {
    let mut remaining: Vec<&Session> = pool.iter().collect();
    let mut selected: Vec<&Session> = Vec::new();

    while !remaining.is_empty() {
        // Full recount per pick; ties break by ascending id.
        let mut best_index = 0;
        let mut best = (usize::MAX, u64::MAX);
        for (i, session) in remaining.iter().enumerate() {
            let candidate = (conflict_count(session, &remaining), session.id);
            if candidate < best {
                best = candidate;
                best_index = i;
            }
        }

        let chosen = remaining.swap_remove(best_index);
        if selected.iter().all(|kept| !overlaps(chosen, kept)) {
            selected.push(chosen);
        }
    }

    Schedule::new(selected)
}
