//! Hive configuration.
//!
//! [`HiveConfig`] holds the parameters of one colony run.

use crate::error::ConfigError;

/// Configuration for the bee colony.
///
/// # Defaults
///
/// ```
/// use u_abc::hive::HiveConfig;
///
/// let config = HiveConfig::default();
/// assert_eq!(config.numb_bees, 30);
/// assert_eq!(config.max_itrs, 100);
/// assert!(config.max_trials.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_abc::hive::HiveConfig;
///
/// let config = HiveConfig::default()
///     .with_numb_bees(50)
///     .with_max_itrs(200)
///     .with_max_trials(1500.0)
///     .with_seed(42);
/// assert_eq!(config.population_size(), 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HiveConfig {
    /// Requested number of bees.
    ///
    /// Rounded up to the next even number: half the colony are employed
    /// bees, half onlookers.
    pub numb_bees: usize,

    /// Number of generations. A run always executes exactly this many.
    pub max_itrs: usize,

    /// Trials without improvement before a source is abandoned.
    ///
    /// `None` uses `0.6 * population_size * dimensions`.
    pub max_trials: Option<f64>,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a random seed, which the hive records.
    pub seed: Option<u64>,

    /// Log progress of every generation at `info` level.
    pub verbose: bool,
}

impl Default for HiveConfig {
    fn default() -> Self {
        Self {
            numb_bees: 30,
            max_itrs: 100,
            max_trials: None,
            seed: None,
            verbose: false,
        }
    }
}

impl HiveConfig {
    /// Sets the requested number of bees.
    pub fn with_numb_bees(mut self, n: usize) -> Self {
        self.numb_bees = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_itrs(mut self, n: usize) -> Self {
        self.max_itrs = n;
        self
    }

    /// Sets the abandonment limit.
    pub fn with_max_trials(mut self, trials: f64) -> Self {
        self.max_trials = Some(trials);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables per-generation progress logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Actual population size: `numb_bees` rounded up to even.
    pub fn population_size(&self) -> usize {
        self.numb_bees + self.numb_bees % 2
    }

    /// Abandonment limit for a search space of `dimensions` variables.
    pub fn trials_limit(&self, dimensions: usize) -> f64 {
        self.max_trials
            .unwrap_or_else(|| 0.6 * self.population_size() as f64 * dimensions as f64)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size() < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size()));
        }
        if self.max_itrs == 0 {
            return Err(ConfigError::NoIterations);
        }
        if let Some(trials) = self.max_trials {
            if trials.is_nan() || trials < 0.0 {
                return Err(ConfigError::InvalidTrials(trials));
            }
        }
        Ok(())
    }
}
