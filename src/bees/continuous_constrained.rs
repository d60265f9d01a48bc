//! Continuous bee under caller-defined constraints (modified ABC of
//! Karaboga & Akay, 2011).
//!
//! Infeasible solutions are kept in the population but carry fitness 0 and a
//! `NaN` objective; Deb's rule ranks them below every feasible solution.

use super::continuous::Bounds;
use super::fitness::{debs_rule, fitness_from_value, ConstrainedTotals};
use super::{ConstraintCheck, Objective};
use crate::error::ConfigError;
use crate::hive::{Bee, HiveState};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Default probability of perturbing each dimension during crossover.
pub const DEFAULT_MUTATION_RATE: f64 = 0.5;

/// Real-valued bee for constrained minimization.
///
/// Crossover perturbs every dimension independently with probability `mr`:
/// `v[d] += φ * (v[d] - other[d])`, `φ ~ U(-1, 1)`.
#[derive(Clone)]
pub struct ContinuousConstrainedBee {
    bounds: Arc<Bounds>,
    objective: Objective<f64>,
    check: ConstraintCheck<f64>,
    mr: f64,
    vector: Vec<f64>,
    fitness: f64,
    eval_value: f64,
    counter: usize,
    violations: usize,
}

impl ContinuousConstrainedBee {
    /// Creates an unevaluated prototype bee with `mr = 0.5`.
    ///
    /// Until randomized the prototype counts as maximally infeasible.
    pub fn new<F, C>(
        lower: Vec<f64>,
        upper: Vec<f64>,
        objective: F,
        constraint_violations: C,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
        C: Fn(&[f64]) -> usize + Send + Sync + 'static,
    {
        let bounds = Bounds::new(lower, upper)?;
        Ok(Self {
            vector: bounds.lower().to_vec(),
            bounds: Arc::new(bounds),
            objective: Arc::new(objective),
            check: Arc::new(constraint_violations),
            mr: DEFAULT_MUTATION_RATE,
            fitness: 0.0,
            eval_value: f64::NAN,
            counter: 0,
            violations: usize::MAX,
        })
    }

    /// Sets the per-dimension mutation rate, which must lie in `[0, 1]`.
    pub fn with_mutation_rate(mut self, mr: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&mr) {
            return Err(ConfigError::MutationRate(mr));
        }
        self.mr = mr;
        Ok(self)
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mr
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Checks the constraints, then evaluates the objective only if feasible.
    fn assess(&mut self) {
        self.violations = (self.check)(&self.vector);
        if self.violations == 0 {
            let value = (self.objective)(&self.vector);
            self.eval_value = value;
            self.fitness = fitness_from_value(value);
        } else {
            self.eval_value = f64::NAN;
            self.fitness = 0.0;
        }
    }
}

impl fmt::Debug for ContinuousConstrainedBee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinuousConstrainedBee")
            .field("vector", &self.vector)
            .field("fitness", &self.fitness)
            .field("eval_value", &self.eval_value)
            .field("violations", &self.violations)
            .field("counter", &self.counter)
            .field("mr", &self.mr)
            .finish_non_exhaustive()
    }
}

impl Bee for ContinuousConstrainedBee {
    type Gene = f64;

    fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.vector = self.bounds.sample(rng);
        self.assess();
        self.counter = 0;
    }

    fn crossover<R: Rng>(&self, other: &Self, _state: &HiveState, rng: &mut R) -> Self {
        let mut mutant = self.clone();

        // every flag is drawn before any step size
        let flags: Vec<bool> = (0..self.vector.len())
            .map(|_| rng.random::<f64>() < self.mr)
            .collect();
        for (d, flag) in flags.into_iter().enumerate() {
            if flag {
                let phi = rng.random_range(-1.0..1.0);
                mutant.vector[d] += phi * (self.vector[d] - other.vector[d]);
            }
        }

        self.bounds.clamp(&mut mutant.vector);
        mutant.assess();
        mutant
    }

    fn is_better(&self, other: &Self) -> bool {
        debs_rule(
            (self.violations, self.fitness),
            (other.violations, other.fitness),
        )
    }

    fn probability(&self, population: &[Self]) -> f64 {
        totals(population).probability(self.violations, self.fitness)
    }

    fn probabilities(population: &[Self]) -> Vec<f64> {
        let totals = totals(population);
        population
            .iter()
            .map(|bee| totals.probability(bee.violations, bee.fitness))
            .collect()
    }

    fn dimensions(&self) -> usize {
        self.bounds.len()
    }

    fn vector(&self) -> &[f64] {
        &self.vector
    }

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn eval_value(&self) -> f64 {
        self.eval_value
    }

    fn counter(&self) -> usize {
        self.counter
    }

    fn set_counter(&mut self, counter: usize) {
        self.counter = counter;
    }

    fn violations(&self) -> Option<usize> {
        Some(self.violations)
    }
}

fn totals(population: &[ContinuousConstrainedBee]) -> ConstrainedTotals {
    ConstrainedTotals::collect(population.iter().map(|bee| (bee.violations, bee.fitness)))
}
