//! Synthetic session pool generation.
//!
//! Produces reproducible randomized pools for the benchmark harness:
//! arrival instants follow a Beta-skewed distribution over the time
//! window (rush-hour bias toward the early hours), durations are
//! exponential with a floor and a cap, values are uniform. All
//! randomness flows from an explicit seed through a local RNG; there is
//! no process-wide random state.

use crate::session::{Session, SessionPool};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution, Exp};

/// Parameters of the synthetic pool distribution.
///
/// # Defaults
///
/// A 24-hour window in minutes with typical charging-session shapes:
/// mean duration one hour, floored at 15 minutes and capped at three
/// hours, values in 20–80 kWh.
///
/// # Builder Pattern
///
/// ```
/// use u_interval::generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_time_window(720.0)
///     .with_mean_duration(45.0)
///     .with_owner_count(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Length of the scheduling window (e.g., 1440 minutes = 24 h).
    pub time_window: f64,
    /// Mean of the exponential duration component.
    pub mean_duration: f64,
    /// Floor added to every drawn duration.
    pub min_duration: f64,
    /// Cap applied to every drawn duration.
    pub max_duration: f64,
    /// Lower bound of the uniform session value.
    pub value_min: f64,
    /// Upper bound of the uniform session value.
    pub value_max: f64,
    /// Owners cycle as `owner-0 .. owner-{n-1}`.
    pub owner_count: usize,
    /// Alpha parameter of the Beta arrival distribution.
    pub arrival_alpha: f64,
    /// Beta parameter of the Beta arrival distribution. The default
    /// (2, 5) skews arrivals toward the start of the window.
    pub arrival_beta: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            time_window: 1440.0,
            mean_duration: 60.0,
            min_duration: 15.0,
            max_duration: 180.0,
            value_min: 20.0,
            value_max: 80.0,
            owner_count: 100,
            arrival_alpha: 2.0,
            arrival_beta: 5.0,
        }
    }
}

impl GeneratorConfig {
    /// Sets the scheduling window length.
    pub fn with_time_window(mut self, window: f64) -> Self {
        self.time_window = window;
        self
    }

    /// Sets the mean duration.
    pub fn with_mean_duration(mut self, mean: f64) -> Self {
        self.mean_duration = mean;
        self
    }

    /// Sets the duration floor.
    pub fn with_min_duration(mut self, min: f64) -> Self {
        self.min_duration = min;
        self
    }

    /// Sets the duration cap.
    pub fn with_max_duration(mut self, max: f64) -> Self {
        self.max_duration = max;
        self
    }

    /// Sets the uniform value range.
    pub fn with_value_range(mut self, min: f64, max: f64) -> Self {
        self.value_min = min;
        self.value_max = max;
        self
    }

    /// Sets the number of distinct owners.
    pub fn with_owner_count(mut self, count: usize) -> Self {
        self.owner_count = count;
        self
    }

    /// Sets the Beta arrival-distribution shape.
    pub fn with_arrival_shape(mut self, alpha: f64, beta: f64) -> Self {
        self.arrival_alpha = alpha;
        self.arrival_beta = beta;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_window <= 0.0 {
            return Err("time_window must be positive".into());
        }
        if self.mean_duration <= 0.0 {
            return Err("mean_duration must be positive".into());
        }
        if self.min_duration <= 0.0 {
            return Err("min_duration must be positive".into());
        }
        if self.max_duration < self.min_duration {
            return Err("max_duration must be at least min_duration".into());
        }
        if self.value_min >= self.value_max {
            return Err("value_min must be less than value_max".into());
        }
        if self.owner_count == 0 {
            return Err("owner_count must be at least 1".into());
        }
        if self.arrival_alpha <= 0.0 || self.arrival_beta <= 0.0 {
            return Err("arrival shape parameters must be positive".into());
        }
        Ok(())
    }
}

/// Generates a pool of `size` sessions from the given seed.
///
/// The same `(config, size, seed)` triple always regenerates the same
/// pool, which is what makes harness runs comparable.
///
/// # Panics
/// Panics if the configuration is invalid (call
/// [`GeneratorConfig::validate`] first to get a descriptive error).
pub fn generate(config: &GeneratorConfig, size: usize, seed: u64) -> SessionPool {
    config.validate().expect("invalid GeneratorConfig");

    let mut rng = StdRng::seed_from_u64(seed);
    let arrival = Beta::new(config.arrival_alpha, config.arrival_beta)
        .expect("arrival shape validated above");
    let duration_tail = Exp::new(1.0 / config.mean_duration).expect("mean_duration validated above");

    let sessions: Vec<Session> = (0..size)
        .map(|i| {
            let start = arrival.sample(&mut rng) * config.time_window;
            let duration =
                (duration_tail.sample(&mut rng) + config.min_duration).min(config.max_duration);
            let value = rng.random_range(config.value_min..config.value_max);
            Session::new(
                i as u64,
                start,
                start + duration,
                value,
                format!("owner-{}", i % config.owner_count),
            )
        })
        .collect();

    SessionPool::new(sessions).expect("generated durations are strictly positive")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_window() {
        let config = GeneratorConfig::default().with_time_window(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_value_range() {
        let config = GeneratorConfig::default().with_value_range(80.0, 20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_cap_below_floor() {
        let config = GeneratorConfig::default()
            .with_min_duration(60.0)
            .with_max_duration(30.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generated_sessions_are_well_formed() {
        let config = GeneratorConfig::default();
        let pool = generate(&config, 500, 42);

        assert_eq!(pool.len(), 500);
        for s in pool.iter() {
            assert!(s.start < s.finish);
            assert!(s.start >= 0.0 && s.start <= config.time_window);
            let duration = s.duration();
            assert!(duration >= config.min_duration - 1e-9);
            assert!(duration <= config.max_duration + 1e-9);
            assert!(s.value >= config.value_min && s.value < config.value_max);
        }
    }

    #[test]
    fn test_same_seed_reproduces_pool() {
        let config = GeneratorConfig::default();
        let a = generate(&config, 200, 7);
        let b = generate(&config, 200, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = GeneratorConfig::default();
        let a = generate(&config, 200, 7);
        let b = generate(&config, 200, 8);
        assert_ne!(a, b);
    }

    #[test]
    fn test_owner_cycle() {
        let config = GeneratorConfig::default().with_owner_count(3);
        let pool = generate(&config, 7, 1);
        assert_eq!(pool.sessions()[0].owner, "owner-0");
        assert_eq!(pool.sessions()[3].owner, "owner-0");
        assert_eq!(pool.sessions()[5].owner, "owner-2");
    }

    #[test]
    fn test_zero_size_pool() {
        let pool = generate(&GeneratorConfig::default(), 0, 42);
        assert!(pool.is_empty());
    }
}
