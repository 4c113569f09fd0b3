//! Core value objects: sessions, pools, and schedules.

use std::fmt;

/// A single resource-usage request with a start instant, a finish
/// instant, and an associated value (energy to deliver).
///
/// Invariant: `start < finish`. The invariant is enforced when a pool is
/// built from raw records ([`SessionPool::new`]); sessions are treated as
/// immutable once the pool owns them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    /// Unique session identifier within one pool.
    pub id: u64,
    /// Start instant. Units are the caller's choice (e.g., minutes since
    /// midnight) and must be consistent within one pool.
    pub start: f64,
    /// Finish instant.
    pub finish: f64,
    /// Value delivered if the session is served (e.g., energy in kWh).
    pub value: f64,
    /// Owner identifier (the requesting user).
    pub owner: String,
}

impl Session {
    /// Creates a new session record.
    pub fn new(id: u64, start: f64, finish: f64, value: f64, owner: impl Into<String>) -> Self {
        Self {
            id,
            start,
            finish,
            value,
            owner: owner.into(),
        }
    }

    /// Session duration (`finish - start`).
    pub fn duration(&self) -> f64 {
        self.finish - self.start
    }

    /// Value delivered per unit of time.
    ///
    /// Durations are strictly positive for sessions owned by a pool,
    /// so the ratio is finite there.
    pub fn value_density(&self) -> f64 {
        self.value / self.duration()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{:.1}, {:.1})", self.id, self.start, self.finish)
    }
}

/// Error raised when a pool is constructed from a malformed session
/// (`start >= finish`). Carries the offending record's fields so the
/// caller can report which input row was bad.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidSessionError {
    /// Id of the offending session.
    pub id: u64,
    /// Its start instant.
    pub start: f64,
    /// Its finish instant.
    pub finish: f64,
}

impl fmt::Display for InvalidSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "session {} has start {} >= finish {}",
            self.id, self.start, self.finish
        )
    }
}

impl std::error::Error for InvalidSessionError {}

/// An ordered, read-only pool of candidate sessions for one trial.
///
/// No ordering invariant is imposed on the input; each strategy sorts a
/// view of the pool by its own key. Construction is atomic: one malformed
/// session rejects the whole pool instead of silently dropping records.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionPool {
    sessions: Vec<Session>,
}

impl SessionPool {
    /// Builds a pool, validating every session's `start < finish`.
    ///
    /// Returns the first offending session's error; nothing is kept on
    /// failure.
    pub fn new(sessions: Vec<Session>) -> Result<Self, InvalidSessionError> {
        for s in &sessions {
            if s.start >= s.finish {
                return Err(InvalidSessionError {
                    id: s.id,
                    start: s.start,
                    finish: s.finish,
                });
            }
        }
        Ok(Self { sessions })
    }

    /// Number of sessions in the pool.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Read-only view of the pool's sessions.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Iterates over the pool's sessions.
    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.sessions.iter()
    }
}

/// A strategy's output: a subset of pool sessions that is pairwise
/// conflict-free under the shared overlap predicate.
///
/// Sessions are borrowed from the pool, never copied. A schedule lives
/// only as long as the trial that produced it: strategies build it, the
/// validator and harness consume it, then it is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule<'a> {
    sessions: Vec<&'a Session>,
}

impl<'a> Schedule<'a> {
    /// The empty schedule (every strategy's answer to an empty pool).
    pub fn empty() -> Self {
        Self {
            sessions: Vec::new(),
        }
    }

    /// Wraps an already-selected subset.
    ///
    /// Producers are responsible for the conflict-free invariant; the
    /// validator rechecks it independently.
    pub fn new(sessions: Vec<&'a Session>) -> Self {
        Self { sessions }
    }

    /// Number of selected sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// The selected sessions in the order the strategy accepted them.
    pub fn sessions(&self) -> &[&'a Session] {
        &self.sessions
    }

    /// Ordered ids of the selected sessions, for inspection and
    /// visualization by external consumers.
    pub fn session_ids(&self) -> Vec<u64> {
        self.sessions.iter().map(|s| s.id).collect()
    }

    /// Sum of the selected sessions' values.
    pub fn total_value(&self) -> f64 {
        self.sessions.iter().map(|s| s.value).sum()
    }

    /// Total time the resource is busy under this schedule.
    pub fn busy_time(&self) -> f64 {
        self.sessions.iter().map(|s| s.duration()).sum()
    }

    /// Fraction of a time window the resource is busy, in `[0, 1]`.
    ///
    /// Returns 0.0 for a non-positive window.
    pub fn utilization(&self, window: f64) -> f64 {
        if window <= 0.0 {
            return 0.0;
        }
        self.busy_time() / window
    }
}
