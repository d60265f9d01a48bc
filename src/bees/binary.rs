//! Binary, unconstrained bee (DisABC).
//!
//! Crossover measures the Jaccard similarity between the bee and its
//! partner, then asks [`branch_and_bound`] how many ones to keep and how
//! many zeros to switch on so that the mutant's dissimilarity to its parent
//! approaches `theta * (1 - similarity)`. `theta` shrinks linearly over the
//! run, narrowing the neighbourhood.
//!
//! # Reference
//!
//! Kashan, Nahavandi & Kashan (2012), "DisABC: A new artificial bee colony
//! algorithm for binary optimization", *Applied Soft Computing* 12(1), 342–352.

use super::bnb::{branch_and_bound, target};
use super::fitness::{fitness_from_value, jaccard, share};
use super::Objective;
use crate::error::ConfigError;
use crate::hive::{Bee, HiveState};
use crate::random::sample_distinct;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Neighbourhood radius bounds `[theta_min, theta_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThetaRange {
    min: f64,
    max: f64,
}

impl Default for ThetaRange {
    fn default() -> Self {
        Self { min: 0.5, max: 0.9 }
    }
}

impl ThetaRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !(min <= max) {
            return Err(ConfigError::ThetaRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Radius at the current generation:
    /// `theta_max - t * (theta_max - theta_min) / max_itrs`.
    pub fn at(&self, state: &HiveState) -> f64 {
        if state.max_itrs == 0 {
            return self.max;
        }
        self.max - state.current_itr as f64 * ((self.max - self.min) / state.max_itrs as f64)
    }
}

/// Builds a DisABC neighbour of `parent` guided by `partner`.
///
/// Exactly `m11` of the parent's ones stay on and `m10` of its zeros are
/// switched on; every other bit is off.
pub(crate) fn mutate<R: Rng>(parent: &[bool], partner: &[bool], theta: f64, rng: &mut R) -> Vec<bool> {
    let similarity = jaccard(parent, partner);
    let (ones, zeros): (Vec<usize>, Vec<usize>) = (0..parent.len()).partition(|&i| parent[i]);

    let plan = branch_and_bound(target(theta, similarity), zeros.len(), ones.len());

    let mut child = vec![false; parent.len()];
    for i in sample_distinct(&ones, plan.m11, rng) {
        child[i] = true;
    }
    for i in sample_distinct(&zeros, plan.m10, rng) {
        child[i] = true;
    }
    child
}

/// Bernoulli(0.5) bit vector.
pub(crate) fn random_bits<R: Rng>(dimensions: usize, rng: &mut R) -> Vec<bool> {
    (0..dimensions).map(|_| rng.random_bool(0.5)).collect()
}

/// Bit-vector bee for unconstrained minimization.
///
/// # Examples
///
/// ```
/// use u_abc::bees::BinaryBee;
/// use u_abc::hive::{Bee, Hive, HiveConfig};
///
/// // OneMax: minimize the number of zero bits
/// let bee = BinaryBee::new(12, |bits: &[bool]| bits.iter().filter(|b| !**b).count() as f64)
///     .unwrap()
///     .with_theta_range(0.3, 0.9)
///     .unwrap();
///
/// let config = HiveConfig::default().with_numb_bees(20).with_max_itrs(100).with_seed(1);
/// let result = Hive::new(bee, config).unwrap().run();
/// assert_eq!(result.best.vector().len(), 12);
/// ```
#[derive(Clone)]
pub struct BinaryBee {
    dimensions: usize,
    objective: Objective<bool>,
    theta: ThetaRange,
    vector: Vec<bool>,
    fitness: f64,
    eval_value: f64,
    counter: usize,
}

impl BinaryBee {
    /// Creates an unevaluated all-zero prototype with `theta ∈ [0.5, 0.9]`.
    pub fn new<F>(dimensions: usize, objective: F) -> Result<Self, ConfigError>
    where
        F: Fn(&[bool]) -> f64 + Send + Sync + 'static,
    {
        if dimensions == 0 {
            return Err(ConfigError::NoDimensions);
        }
        Ok(Self {
            dimensions,
            objective: Arc::new(objective),
            theta: ThetaRange::default(),
            vector: vec![false; dimensions],
            fitness: 0.0,
            eval_value: f64::NAN,
            counter: 0,
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

    fn evaluate(&mut self) {
        let value = (self.objective)(&self.vector);
        self.eval_value = value;
        self.fitness = fitness_from_value(value);
    }
}

impl fmt::Debug for BinaryBee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryBee")
            .field("vector", &self.vector)
            .field("fitness", &self.fitness)
            .field("eval_value", &self.eval_value)
            .field("counter", &self.counter)
            .field("theta", &self.theta)
            .finish_non_exhaustive()
    }
}

impl Bee for BinaryBee {
    type Gene = bool;

    fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.vector = random_bits(self.dimensions, rng);
        self.evaluate();
        self.counter = 0;
    }

    fn crossover<R: Rng>(&self, other: &Self, state: &HiveState, rng: &mut R) -> Self {
        let mut mutant = self.clone();
        mutant.vector = mutate(&self.vector, &other.vector, self.theta.at(state), rng);
        mutant.evaluate();
        mutant
    }

    fn is_better(&self, other: &Self) -> bool {
        self.fitness > other.fitness
    }

    fn probability(&self, population: &[Self]) -> f64 {
        share(self.fitness, total_fitness(population))
    }

    fn probabilities(population: &[Self]) -> Vec<f64> {
        let total = total_fitness(population);
        population
            .iter()
            .map(|bee| share(bee.fitness, total))
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
}

fn total_fitness(population: &[BinaryBee]) -> f64 {
    population.iter().map(|bee| bee.fitness).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_numflow::random::create_rng;

    fn state(current_itr: usize) -> HiveState {
        HiveState {
            population_size: 10,
            max_itrs: 100,
            current_itr,
            max_trials: 12.0,
        }
    }

    fn zeros_counter(n: usize) -> BinaryBee {
        BinaryBee::new(n, |bits: &[bool]| bits.iter().filter(|b| !**b).count() as f64).unwrap()
    }

    fn with_bits(bits: &[u8]) -> BinaryBee {
        let mut bee = zeros_counter(bits.len());
        bee.vector = bits.iter().map(|&b| b == 1).collect();
        bee.evaluate();
        bee
    }

    #[test]
    fn test_theta_validation() {
        assert!(ThetaRange::new(0.5, 0.5).is_ok());
        assert_eq!(
            ThetaRange::new(0.9, 0.5).unwrap_err(),
            ConfigError::ThetaRange { min: 0.9, max: 0.5 }
        );
        assert!(zeros_counter(4).with_theta_range(1.0, 0.2).is_err());
        assert_eq!(BinaryBee::new(0, |_: &[bool]| 0.0).unwrap_err(), ConfigError::NoDimensions);
    }

    #[test]
    fn test_theta_decays_linearly() {
        let theta = ThetaRange::default();
        assert!((theta.at(&state(0)) - 0.9).abs() < 1e-12);
        assert!((theta.at(&state(50)) - 0.7).abs() < 1e-12);
        assert!((theta.at(&state(100)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mutate_counts_follow_plan() {
        let mut rng = create_rng(42);
        let parent = [true, true, true, false, false, false, false, true];
        let partner = [true, false, false, true, false, true, false, true];
        let similarity = jaccard(&parent, &partner);
        let plan = branch_and_bound(target(0.8, similarity), 4, 4);

        for _ in 0..20 {
            let child = mutate(&parent, &partner, 0.8, &mut rng);
            let kept = (0..8).filter(|&i| parent[i] && child[i]).count();
            let switched_on = (0..8).filter(|&i| !parent[i] && child[i]).count();
            assert_eq!(kept, plan.m11);
            assert_eq!(switched_on, plan.m10);
        }
    }

    #[test]
    fn test_lone_zero_bit_is_left_off() {
        let mut rng = create_rng(5);
        for theta in [0.0, 0.5, 0.9] {
            assert_eq!(mutate(&[false], &[false], theta, &mut rng), vec![false]);
            assert_eq!(mutate(&[false], &[true], theta, &mut rng), vec![false]);
        }
    }

    #[test]
    fn test_crossover_is_pure() {
        let mut rng = create_rng(9);
        let a = with_bits(&[1, 0, 1, 1, 0, 0, 1, 0]);
        let b = with_bits(&[0, 0, 1, 0, 1, 1, 1, 0]);
        let (a_before, b_before) = (a.vector().to_vec(), b.vector().to_vec());
        for itr in 0..30 {
            let mutant = a.crossover(&b, &state(itr), &mut rng);
            assert_eq!(a.vector(), a_before.as_slice());
            assert_eq!(b.vector(), b_before.as_slice());
            assert_eq!(mutant.vector().len(), 8);
            let zeros = mutant.vector().iter().filter(|b| !**b).count() as f64;
            assert!((mutant.eval_value() - zeros).abs() < 1e-15);
        }
    }

    #[test]
    fn test_randomize_resets_counter() {
        let mut rng = create_rng(2);
        let mut bee = zeros_counter(16);
        bee.set_counter(40);
        bee.randomize(&mut rng);
        assert_eq!(bee.counter(), 0);
        let zeros = bee.vector().iter().filter(|b| !**b).count() as f64;
        assert!((bee.eval_value() - zeros).abs() < 1e-15);
    }

    #[test]
    fn test_proportional_probabilities() {
        let population = vec![
            with_bits(&[1, 1, 1, 1]),
            with_bits(&[1, 1, 0, 0]),
            with_bits(&[0, 0, 0, 0]),
        ];
        let probabilities = BinaryBee::probabilities(&population);
        let sum: f64 = probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        for (bee, p) in population.iter().zip(&probabilities) {
            assert!((bee.probability(&population) - p).abs() < 1e-15);
        }
        assert!(probabilities[0] > probabilities[1]);
        assert!(probabilities[1] > probabilities[2]);
    }

    #[test]
    fn test_zero_fitness_population_has_zero_probabilities() {
        let bee = BinaryBee::new(3, |_: &[bool]| f64::INFINITY).unwrap();
        let mut rng = create_rng(4);
        let population: Vec<BinaryBee> = (0..4)
            .map(|_| {
                let mut b = bee.clone();
                b.randomize(&mut rng);
                b
            })
            .collect();
        assert!(BinaryBee::probabilities(&population)
            .iter()
            .all(|&p| p == 0.0));
    }
}
