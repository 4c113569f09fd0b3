//! Interval scheduling strategy engine.
//!
//! Selects a maximum subset of pairwise non-overlapping sessions
//! (time-bound resource-usage requests competing for one shared
//! resource) and evaluates competing selection strategies against each
//! other for solution quality and running time.
//!
//! # Modules
//!
//! - **`session`**: Domain types — [`session::Session`],
//!   [`session::SessionPool`], [`session::Schedule`] — and the shared
//!   overlap predicate with conflict-counting utilities
//! - **`strategy`**: Six named selection rules behind one
//!   `select(pool) -> Schedule` contract; only earliest-finish is
//!   provably optimal
//! - **`validate`**: Independent feasibility checking, the reference
//!   optimal count (DP), and the optimality ratio
//! - **`generator`**: Seeded synthetic pool generation
//! - **`harness`**: Multi-trial benchmark sweeps producing
//!   [`harness::BenchmarkRecord`] rows and aggregate summaries
//!
//! # Example
//!
//! ```
//! use u_interval::generator::{self, GeneratorConfig};
//! use u_interval::strategy::Strategy;
//! use u_interval::validate;
//!
//! let pool = generator::generate(&GeneratorConfig::default(), 200, 42);
//! let schedule = Strategy::EarliestFinish.select(&pool);
//!
//! assert!(validate::validate(&schedule).feasible);
//! assert_eq!(schedule.len(), validate::reference_optimal_count(&pool));
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), *Algorithm Design*, Ch. 4.1 and 6.1
//! - Cormen et al. (2009), *Introduction to Algorithms*, Ch. 16.1

pub mod generator;
pub mod harness;
pub mod session;
pub mod strategy;
pub mod validate;
