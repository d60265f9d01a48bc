//! Multi-run driver.

use crate::error::ConfigError;
use crate::hive::{Bee, FitnessHistory, Hive, HiveConfig};
use crate::random::fresh_seed;
use log::info;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome<B: Bee> {
    /// Seed the run's hive was built with.
    pub seed: u64,

    /// Champion of the run.
    pub best: B,

    /// Fitness of every slot after each generation.
    pub fitness_history: FitnessHistory,

    /// Objective evaluations, initial population included.
    pub calls_to_fitness: usize,

    /// Wall-clock time from hive construction to the end of the run.
    pub elapsed: Duration,
}

impl<B: Bee> RunOutcome<B> {
    /// Flattens the outcome into a storable record.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            best_eval_value: self.best.eval_value(),
            violations: self.best.violations(),
            calls_to_fitness: self.calls_to_fitness,
            elapsed_ms: self.elapsed.as_millis() as u64,
        }
    }
}

/// One row of an experiment log.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub seed: u64,
    /// Raw objective of the champion (`NaN` if it is infeasible).
    pub best_eval_value: f64,
    /// Constraint violations of the champion; `None` for unconstrained bees.
    pub violations: Option<usize>,
    pub calls_to_fitness: usize,
    pub elapsed_ms: u64,
}

/// Runs one colony configuration several times with consecutive seeds.
///
/// # Examples
///
/// ```
/// use u_abc::bees::ContinuousBee;
/// use u_abc::experiment::{Experiment, RunStatistics};
/// use u_abc::hive::HiveConfig;
///
/// let sphere = ContinuousBee::new(vec![-5.0; 3], vec![5.0; 3], |x: &[f64]| {
///     x.iter().map(|v| v * v).sum()
/// })
/// .unwrap();
/// let config = HiveConfig::default().with_numb_bees(20).with_max_itrs(50).with_seed(100);
///
/// let outcomes = Experiment::new(sphere, config, 4).unwrap().run();
/// assert_eq!(outcomes.len(), 4);
/// assert_eq!(outcomes[3].seed, 103);
///
/// let stats = RunStatistics::from_outcomes(&outcomes).unwrap();
/// assert!(stats.min <= stats.mean);
/// ```
#[derive(Debug, Clone)]
pub struct Experiment<B: Bee> {
    prototype: B,
    config: HiveConfig,
    runs: usize,
    base_seed: u64,
}

impl<B: Bee> Experiment<B> {
    /// Prepares `runs` runs of `prototype` under `config`.
    ///
    /// `config.seed` becomes the base seed; without one a base seed is
    /// drawn and recorded.
    pub fn new(prototype: B, config: HiveConfig, runs: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        if runs == 0 {
            return Err(ConfigError::NoRuns);
        }
        let base_seed = config.seed.unwrap_or_else(fresh_seed);
        Ok(Self {
            prototype,
            config,
            runs,
            base_seed,
        })
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Seed of run `k`.
    pub fn seed_of(&self, k: usize) -> u64 {
        self.base_seed.wrapping_add(k as u64)
    }

    /// Executes every run and returns the outcomes in run order.
    pub fn run(&self) -> Vec<RunOutcome<B>> {
        info!(
            "experiment: {} runs, base seed {}",
            self.runs, self.base_seed
        );

        #[cfg(feature = "parallel")]
        let outcomes = (0..self.runs)
            .into_par_iter()
            .map(|k| self.run_one(k))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let outcomes = (0..self.runs).map(|k| self.run_one(k)).collect();

        outcomes
    }

    /// Executes run `k` alone; identical to the `k`-th outcome of [`run`](Self::run).
    pub fn run_one(&self, k: usize) -> RunOutcome<B> {
        let seed = self.seed_of(k);
        let start = Instant::now();

        let mut hive = Hive::seeded(self.prototype.clone(), self.config.clone(), seed);
        let result = hive.run();
        let elapsed = start.elapsed();

        info!(
            "run {k} (seed {seed}): best eval value {} after {} evaluations in {:?}",
            result.best.eval_value(),
            result.calls_to_fitness,
            elapsed
        );

        RunOutcome {
            seed,
            best: result.best,
            fitness_history: result.fitness_history,
            calls_to_fitness: result.calls_to_fitness,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bees::{BinaryConstrainedBee, ContinuousBee};

    fn sphere() -> ContinuousBee {
        ContinuousBee::new(vec![-5.0; 2], vec![5.0; 2], |x: &[f64]| {
            x.iter().map(|v| v * v).sum()
        })
        .unwrap()
    }

    fn config() -> HiveConfig {
        HiveConfig::default()
            .with_numb_bees(10)
            .with_max_itrs(20)
            .with_seed(7)
    }

    #[test]
    fn test_rejects_bad_setup() {
        assert_eq!(
            Experiment::new(sphere(), config(), 0).unwrap_err(),
            ConfigError::NoRuns
        );
        assert_eq!(
            Experiment::new(sphere(), config().with_max_itrs(0), 3).unwrap_err(),
            ConfigError::NoIterations
        );
    }

    #[test]
    fn test_consecutive_seeds() {
        let experiment = Experiment::new(sphere(), config(), 3).unwrap();
        assert_eq!(experiment.base_seed(), 7);
        let seeds: Vec<u64> = experiment.run().iter().map(|o| o.seed).collect();
        assert_eq!(seeds, vec![7, 8, 9]);
    }

    #[test]
    fn test_run_matches_single_hive() {
        let experiment = Experiment::new(sphere(), config(), 3).unwrap();
        let outcomes = experiment.run();

        let single = Hive::new(sphere(), config().with_seed(8)).unwrap().run();
        assert_eq!(outcomes[1].fitness_history, single.fitness_history);
        assert_eq!(outcomes[1].best.vector(), single.best.vector());
        assert_eq!(outcomes[1].calls_to_fitness, single.calls_to_fitness);

        let replay = experiment.run_one(2);
        assert_eq!(replay.fitness_history, outcomes[2].fitness_history);
    }

    #[test]
    fn test_runs_are_independent() {
        let outcomes = Experiment::new(sphere(), config(), 2).unwrap().run();
        assert_ne!(outcomes[0].fitness_history, outcomes[1].fitness_history);
        assert!(outcomes
            .iter()
            .all(|o| o.fitness_history.len() == 20 && o.fitness_history[0].len() == 10));
    }

    #[test]
    fn test_random_base_seed_is_recorded() {
        let experiment = Experiment::new(sphere(), HiveConfig::default().with_max_itrs(2), 2).unwrap();
        let outcomes = experiment.run();
        assert_eq!(outcomes[0].seed, experiment.base_seed());
        assert_eq!(outcomes[1].seed, experiment.seed_of(1));
    }

    #[test]
    fn test_summary() {
        let outcome = Experiment::new(sphere(), config(), 1).unwrap().run_one(0);
        let summary = outcome.summary();
        assert_eq!(summary.seed, 7);
        assert_eq!(summary.violations, None);
        assert_eq!(summary.calls_to_fitness, outcome.calls_to_fitness);
        assert_eq!(summary.best_eval_value, outcome.best.eval_value());

        let bee = BinaryConstrainedBee::new(4, |_: &[bool]| 1.0, |bits: &[bool]| usize::from(bits[0])).unwrap();
        let outcome = Experiment::new(bee, config(), 1).unwrap().run_one(0);
        assert_eq!(outcome.summary().violations, Some(0));
    }
}
