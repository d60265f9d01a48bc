//! Convergence curves and run statistics.

use super::runner::RunOutcome;
use crate::hive::Bee;
use u_numflow::stats;

/// Best fitness of each generation (the maximum of each history row).
pub fn best_per_generation(history: &[Vec<f64>]) -> Vec<f64> {
    history
        .iter()
        .map(|row| row.iter().copied().fold(f64::NEG_INFINITY, f64::max))
        .collect()
}

/// Per-generation best fitness of every run, `[runs][generations]`.
pub fn convergence_matrix<B: Bee>(outcomes: &[RunOutcome<B>]) -> Vec<Vec<f64>> {
    outcomes
        .iter()
        .map(|outcome| best_per_generation(&outcome.fitness_history))
        .collect()
}

/// Spread of champion objective values over a set of runs.
///
/// Only feasible champions contribute; `std` is the population standard
/// deviation. Aggregates come from [`u_numflow::stats`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStatistics {
    /// Number of values summarized.
    pub count: usize,
    pub min: f64,
    pub mean: f64,
    pub std: f64,
}

impl RunStatistics {
    /// Summarizes raw values.
    ///
    /// Returns `None` for an empty slice or if any value is not finite.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        Some(Self {
            count: values.len(),
            min: stats::min(values)?,
            mean: stats::mean(values)?,
            std: stats::population_std_dev(values)?,
        })
    }

    /// Summarizes the champion eval values of feasible runs.
    ///
    /// Returns `None` when no run ended with a feasible champion.
    pub fn from_outcomes<B: Bee>(outcomes: &[RunOutcome<B>]) -> Option<Self> {
        let values: Vec<f64> = outcomes
            .iter()
            .filter(|outcome| outcome.best.is_feasible())
            .map(|outcome| outcome.best.eval_value())
            .collect();
        Self::from_values(&values)
    }
}
