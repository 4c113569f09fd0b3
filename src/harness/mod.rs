//! Benchmark harness.
//!
//! Runs every configured strategy over a matrix of (input size, trial),
//! regenerating the identical seeded pool for each trial, timing only
//! the `select` call, validating every result, and emitting one
//! [`BenchmarkRecord`] per (strategy, trial). [`summarize`] folds the
//! records into per-(strategy, size) statistics for reporting.
//!
//! # Key Types
//!
//! - [`HarnessConfig`]: sweep parameters (sizes, trials, seed,
//!   strategies, cubic-strategy cutoff)
//! - [`HarnessRunner`]: executes the sweep
//! - [`BenchmarkRecord`]: one measurement row
//! - [`StrategySummary`]: aggregated statistics

mod config;
mod runner;
mod summary;
mod types;

pub use config::HarnessConfig;
pub use runner::HarnessRunner;
pub use summary::{summarize, StrategySummary};
pub use types::BenchmarkRecord;
