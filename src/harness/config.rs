//! Harness configuration.

use crate::generator::GeneratorConfig;
use crate::strategy::Strategy;

/// Configuration for one benchmark sweep.
///
/// # Defaults
///
/// ```
/// use u_interval::harness::HarnessConfig;
///
/// let config = HarnessConfig::default();
/// assert_eq!(config.trials_per_size, 10);
/// assert_eq!(config.seed, 42);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_interval::harness::HarnessConfig;
/// use u_interval::strategy::Strategy;
///
/// let config = HarnessConfig::default()
///     .with_sizes(vec![100, 1000])
///     .with_trials_per_size(5)
///     .with_strategies(vec![Strategy::EarliestFinish, Strategy::EarliestStart])
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Input sizes to sweep, in the order they will be run.
    pub sizes: Vec<usize>,

    /// Trials per size. Each trial regenerates its pool from
    /// `seed + trial`, so trial t sees the same pool at every size run
    /// and across repeated sweeps.
    pub trials_per_size: usize,

    /// Base seed for pool generation.
    pub seed: u64,

    /// Strategies to measure, in record order.
    pub strategies: Vec<Strategy>,

    /// Largest size at which [`Strategy::FewestConflicts`] still runs.
    ///
    /// Above this, the cubic strategy is skipped (no record emitted) to
    /// keep total sweep time bounded. Harness policy, not a strategy
    /// defect.
    pub fewest_conflicts_cutoff: usize,

    /// Whether to run the strategies of one trial in parallel (requires
    /// the `parallel` cargo feature; ignored without it).
    ///
    /// Elapsed times are per-invocation wall clock either way, so
    /// co-scheduled strategies can inflate each other's measurements.
    /// Keep this off for timing-sensitive sweeps.
    pub parallel: bool,

    /// Distribution parameters for the generated pools.
    pub generator: GeneratorConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 500, 1000, 2000, 4000, 8000],
            trials_per_size: 10,
            seed: 42,
            strategies: Strategy::ALL.to_vec(),
            fewest_conflicts_cutoff: 500,
            parallel: false,
            generator: GeneratorConfig::default(),
        }
    }
}

impl HarnessConfig {
    /// Sets the size sweep.
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Sets the number of trials per size.
    pub fn with_trials_per_size(mut self, trials: usize) -> Self {
        self.trials_per_size = trials;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the strategies to measure.
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Sets the cubic-strategy size cutoff.
    pub fn with_fewest_conflicts_cutoff(mut self, cutoff: usize) -> Self {
        self.fewest_conflicts_cutoff = cutoff;
        self
    }

    /// Enables or disables parallel strategy evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the generator parameters.
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.sizes.is_empty() {
            return Err("sizes must not be empty".into());
        }
        if self.trials_per_size == 0 {
            return Err("trials_per_size must be at least 1".into());
        }
        if self.strategies.is_empty() {
            return Err("strategies must not be empty".into());
        }
        self.generator.validate()
    }
}
