//! Continuous, unconstrained bee (Karaboga's original ABC).

use super::fitness::{fitness_from_value, scaled_probability};
use super::Objective;
use crate::error::ConfigError;
use crate::hive::{Bee, HiveState};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Per-dimension box `[lower, upper]` of a continuous search space.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Validates and builds the box.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, ConfigError> {
        if lower.len() != upper.len() {
            return Err(ConfigError::BoundsLengthMismatch {
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(ConfigError::NoDimensions);
        }
        if let Some((dimension, (&lo, &hi))) = lower
            .iter()
            .zip(&upper)
            .enumerate()
            .find(|(_, (lo, hi))| !(lo <= hi))
        {
            return Err(ConfigError::InvertedBounds {
                dimension,
                lower: lo,
                upper: hi,
            });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Uniform point inside the box.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(&lo, &hi)| lo + rng.random::<f64>() * (hi - lo))
            .collect()
    }

    /// Truncates every coordinate of `vector` to the box.
    pub fn clamp(&self, vector: &mut [f64]) {
        for ((x, &lo), &hi) in vector.iter_mut().zip(&self.lower).zip(&self.upper) {
            if *x < lo {
                *x = lo;
            } else if *x > hi {
                *x = hi;
            }
        }
    }
}

/// Real-valued bee for box-bounded, unconstrained minimization.
///
/// Crossover perturbs one random dimension towards or away from the
/// partner: `v[d] += U(-1, 1) * (v[d] - other[d])`.
///
/// # Examples
///
/// ```
/// use u_abc::bees::ContinuousBee;
/// use u_abc::hive::{Bee, Hive, HiveConfig};
///
/// let sphere = ContinuousBee::new(vec![-5.0; 3], vec![5.0; 3], |x: &[f64]| {
///     x.iter().map(|v| v * v).sum()
/// })
/// .unwrap();
///
/// let config = HiveConfig::default().with_numb_bees(20).with_max_itrs(50).with_seed(3);
/// let result = Hive::new(sphere, config).unwrap().run();
/// assert!(result.best.eval_value() < 1.0);
/// ```
#[derive(Clone)]
pub struct ContinuousBee {
    bounds: Arc<Bounds>,
    objective: Objective<f64>,
    vector: Vec<f64>,
    fitness: f64,
    eval_value: f64,
    counter: usize,
}

impl ContinuousBee {
    /// Creates an unevaluated prototype bee.
    ///
    /// The prototype sits on the lower corner with fitness 0 until the hive
    /// randomizes it.
    pub fn new<F>(lower: Vec<f64>, upper: Vec<f64>, objective: F) -> Result<Self, ConfigError>
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        let bounds = Bounds::new(lower, upper)?;
        Ok(Self {
            vector: bounds.lower().to_vec(),
            bounds: Arc::new(bounds),
            objective: Arc::new(objective),
            fitness: 0.0,
            eval_value: f64::NAN,
            counter: 0,
        })
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn evaluate(&mut self) {
        let value = (self.objective)(&self.vector);
        self.eval_value = value;
        self.fitness = fitness_from_value(value);
    }
}

impl fmt::Debug for ContinuousBee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinuousBee")
            .field("vector", &self.vector)
            .field("fitness", &self.fitness)
            .field("eval_value", &self.eval_value)
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

impl Bee for ContinuousBee {
    type Gene = f64;

    fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.vector = self.bounds.sample(rng);
        self.evaluate();
        self.counter = 0;
    }

    fn crossover<R: Rng>(&self, other: &Self, _state: &HiveState, rng: &mut R) -> Self {
        let mut mutant = self.clone();

        let d = rng.random_range(0..mutant.vector.len());
        let phi = (rng.random::<f64>() - 0.5) * 2.0;
        mutant.vector[d] += phi * (self.vector[d] - other.vector[d]);

        self.bounds.clamp(&mut mutant.vector);
        mutant.evaluate();
        mutant
    }

    fn is_better(&self, other: &Self) -> bool {
        self.fitness > other.fitness
    }

    fn probability(&self, population: &[Self]) -> f64 {
        scaled_probability(self.fitness, max_fitness(population))
    }

    fn probabilities(population: &[Self]) -> Vec<f64> {
        let max = max_fitness(population);
        population
            .iter()
            .map(|bee| scaled_probability(bee.fitness, max))
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
}

fn max_fitness(population: &[ContinuousBee]) -> f64 {
    population
        .iter()
        .map(|bee| bee.fitness)
        .fold(f64::NEG_INFINITY, f64::max)
}
