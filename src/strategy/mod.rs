//! Selection strategies.
//!
//! Six interchangeable rules for picking a conflict-free subset of a
//! session pool, behind one contract: [`Strategy::select`] is a pure,
//! deterministic function of the pool. The variant set is closed — the
//! point of the engine is to compare these exact rules against each
//! other, not to host arbitrary plug-ins.
//!
//! Five variants share a single sort-then-scan acceptance pass and
//! differ only in the sort key. The sixth,
//! [`Strategy::FewestConflicts`], recomputes conflict counts against the
//! shrinking remaining set on every pick; its cubic cost is the feature
//! being measured, not an accident.
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), *Algorithm Design*, Ch. 4.1
//!   (interval scheduling, exchange argument)
//! - Cormen et al. (2009), *Introduction to Algorithms*, Ch. 16.1

mod fewest_conflicts;
mod scan;
mod types;

pub use types::Strategy;
