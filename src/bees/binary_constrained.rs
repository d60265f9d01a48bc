//! Binary bee under caller-defined constraints.
//!
//! Mutation is the unconstrained DisABC neighbour generator; feasibility
//! handling follows Karaboga & Akay (2011): Deb's rule for dominance and the
//! two-range selection probability.

use super::binary::{mutate, random_bits, ThetaRange};
use super::fitness::{debs_rule, fitness_from_value, ConstrainedTotals};
use super::{ConstraintCheck, Objective};
use crate::error::ConfigError;
use crate::hive::{Bee, HiveState};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Bit-vector bee for constrained minimization.
#[derive(Clone)]
pub struct BinaryConstrainedBee {
    dimensions: usize,
    objective: Objective<bool>,
    check: ConstraintCheck<bool>,
    theta: ThetaRange,
    vector: Vec<bool>,
    fitness: f64,
    eval_value: f64,
    counter: usize,
    violations: usize,
}

impl BinaryConstrainedBee {
    /// Creates an unevaluated all-zero prototype with `theta ∈ [0.5, 0.9]`.
    pub fn new<F, C>(dimensions: usize, objective: F, constraint_violations: C) -> Result<Self, ConfigError>
    where
        F: Fn(&[bool]) -> f64 + Send + Sync + 'static,
        C: Fn(&[bool]) -> usize + Send + Sync + 'static,
    {
        if dimensions == 0 {
            return Err(ConfigError::NoDimensions);
        }
        Ok(Self {
            dimensions,
            objective: Arc::new(objective),
            check: Arc::new(constraint_violations),
            theta: ThetaRange::default(),
            vector: vec![false; dimensions],
            fitness: 0.0,
            eval_value: f64::NAN,
            counter: 0,
            violations: usize::MAX,
        })
    }

    /// Sets the neighbourhood radius bounds.
    pub fn with_theta_range(mut self, theta_min: f64, theta_max: f64) -> Result<Self, ConfigError> {
        self.theta = ThetaRange::new(theta_min, theta_max)?;
        Ok(self)
    }

    pub fn theta_range(&self) -> ThetaRange {
        self.theta
    }

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

impl fmt::Debug for BinaryConstrainedBee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryConstrainedBee")
            .field("vector", &self.vector)
            .field("fitness", &self.fitness)
            .field("eval_value", &self.eval_value)
            .field("violations", &self.violations)
            .field("counter", &self.counter)
            .field("theta", &self.theta)
            .finish_non_exhaustive()
    }
}

impl Bee for BinaryConstrainedBee {
    type Gene = bool;

    fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.vector = random_bits(self.dimensions, rng);
        self.assess();
        self.counter = 0;
    }

    fn crossover<R: Rng>(&self, other: &Self, state: &HiveState, rng: &mut R) -> Self {
        let mut mutant = self.clone();
        mutant.vector = mutate(&self.vector, &other.vector, self.theta.at(state), rng);
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
        self.dimensions
    }

    fn vector(&self) -> &[bool] {
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

fn totals(population: &[BinaryConstrainedBee]) -> ConstrainedTotals {
    ConstrainedTotals::collect(population.iter().map(|bee| (bee.violations, bee.fitness)))
}
