//! Core trait definitions for the bee colony.
//!
//! [`Bee`] is the contract between the generic [`Hive`](super::Hive) engine
//! and a solution representation. The hive never looks inside a bee beyond
//! this capability set.

use rand::Rng;
use std::fmt::Debug;

/// Read-only snapshot of the hive handed to [`Bee::crossover`].
///
/// Lets mutation strength depend on search progress (e.g. the shrinking
/// radius of binary bees).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HiveState {
    /// Number of bees in the population (always even).
    pub population_size: usize,

    /// Number of generations of the run.
    pub max_itrs: usize,

    /// Zero-based index of the generation in progress.
    pub current_itr: usize,

    /// Abandonment limit used by the scout phase.
    pub max_trials: f64,
}

/// A candidate solution (food source) in the colony.
///
/// Implementors are plain values: [`Clone`] must produce an independent copy
/// that shares no mutable storage with the original, so a cloned champion is
/// never perturbed by later changes to the population.
///
/// # Fitness convention
///
/// `eval_value` is the raw objective (minimized); `fitness` is a derived
/// "higher is better" score, see [`crate::bees::fitness`].
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone, Debug)]
/// struct Point { x: f64, fitness: f64, eval: f64, counter: usize }
///
/// impl Bee for Point {
///     type Gene = f64;
///     fn randomize<R: Rng>(&mut self, rng: &mut R) { /* resample, evaluate, counter = 0 */ }
///     fn crossover<R: Rng>(&self, other: &Self, _: &HiveState, rng: &mut R) -> Self { /* ... */ }
///     fn is_better(&self, other: &Self) -> bool { self.fitness > other.fitness }
///     // ...
/// }
/// ```
pub trait Bee: Clone + Send + Sync {
    /// Element type of the solution vector (`f64` or `bool`).
    type Gene: Clone + Debug + Send + Sync;

    /// Resamples the vector over the whole domain, re-evaluates it and
    /// resets the abandonment counter to 0.
    ///
    /// Costs one objective evaluation (none for infeasible constrained bees).
    fn randomize<R: Rng>(&mut self, rng: &mut R);

    /// Produces a new, evaluated bee from `self` and a partner.
    ///
    /// Must leave both `self` and `other` untouched.
    fn crossover<R: Rng>(&self, other: &Self, state: &HiveState, rng: &mut R) -> Self;

    /// Strict dominance: `true` iff `self` is better than `other`.
    ///
    /// Irreflexive and antisymmetric.
    fn is_better(&self, other: &Self) -> bool;

    /// Chance of this bee being followed by an onlooker, in `[0, 1]`.
    ///
    /// `population` is the whole hive, including `self`.
    fn probability(&self, population: &[Self]) -> f64;

    /// Probabilities of every bee in `population`, in slot order.
    ///
    /// Must agree with [`probability`](Bee::probability) element by element.
    /// The default calls it once per bee (quadratic); variants override it to
    /// compute the population aggregate only once.
    fn probabilities(population: &[Self]) -> Vec<f64> {
        population
            .iter()
            .map(|bee| bee.probability(population))
            .collect()
    }

    /// Number of decision variables.
    fn dimensions(&self) -> usize;

    /// Current solution vector.
    fn vector(&self) -> &[Self::Gene];

    /// Derived fitness, higher is better.
    fn fitness(&self) -> f64;

    /// Raw objective value, lower is better. `NaN` when not evaluated.
    fn eval_value(&self) -> f64;

    /// Trials since the last improvement.
    fn counter(&self) -> usize;

    /// Overwrites the abandonment counter.
    fn set_counter(&mut self, counter: usize);

    /// Number of violated constraints; `None` for unconstrained bees.
    fn violations(&self) -> Option<usize> {
        None
    }

    /// Whether the bee satisfies every constraint.
    fn is_feasible(&self) -> bool {
        self.violations().is_none_or(|v| v == 0)
    }
}
