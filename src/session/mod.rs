//! Session domain model and overlap primitives.
//!
//! A [`Session`] is a single time-bound resource-usage request (one
//! charging request on a shared charger). A [`SessionPool`] owns the
//! candidate requests for one experiment trial; a [`Schedule`] is a
//! conflict-free subset of pool sessions chosen by a strategy.
//!
//! The [`overlap`] submodule defines the single interval-intersection
//! predicate shared by every strategy and the validator, plus the
//! pairwise and windowed conflict-counting utilities built on it.

pub mod overlap;
mod types;

pub use types::{InvalidSessionError, Schedule, Session, SessionPool};
