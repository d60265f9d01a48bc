//! Colony execution loop.
//!
//! [`Hive`] owns the population, the champion and the random stream, and
//! drives each generation through three phases:
//! employed bees → onlooker bees → scout bee → champion update.

use super::config::HiveConfig;
use super::types::{Bee, HiveState};
use crate::error::ConfigError;
use crate::random::fresh_seed;
use log::{debug, info, log, warn, Level};
use rand::rngs::SmallRng;
use rand::Rng;
use u_numflow::random::create_rng;

/// Fitness of every slot after every generation: `[max_itrs][population_size]`.
pub type FitnessHistory = Vec<Vec<f64>>;

/// Result of a colony run.
#[derive(Debug, Clone)]
pub struct HiveResult<B: Bee> {
    /// The best bee found during the run (an owned copy).
    pub best: B,

    /// Fitness of every slot after each generation.
    pub fitness_history: FitnessHistory,

    /// Objective evaluations since the hive was built, initial population
    /// included.
    pub calls_to_fitness: usize,

    /// Seed of the random stream, for replaying the run.
    pub seed: u64,

    /// Number of generations executed (always `max_itrs`).
    pub generations: usize,
}

impl<B: Bee> HiveResult<B> {
    /// Raw objective value of the champion.
    pub fn best_eval_value(&self) -> f64 {
        self.best.eval_value()
    }

    /// Whether the champion satisfies every constraint.
    ///
    /// Always `true` for unconstrained bees. A `false` here means no
    /// feasible solution was met within `max_itrs` generations.
    pub fn is_feasible(&self) -> bool {
        self.best.is_feasible()
    }
}

/// An Artificial Bee Colony.
///
/// # Usage
///
/// ```
/// use u_abc::bees::ContinuousBee;
/// use u_abc::hive::{Bee, Hive, HiveConfig};
///
/// let rosenbrock = |v: &[f64]| (1.0 - v[0]).powi(2) + 100.0 * (v[1] - v[0] * v[0]).powi(2);
/// let prototype = ContinuousBee::new(vec![0.0; 2], vec![10.0; 2], rosenbrock).unwrap();
///
/// let config = HiveConfig::default().with_numb_bees(40).with_max_itrs(200).with_seed(42);
/// let mut hive = Hive::new(prototype, config).unwrap();
/// let result = hive.run();
///
/// assert_eq!(result.fitness_history.len(), 200);
/// assert_eq!(result.fitness_history[0].len(), 40);
/// println!("best: {:?} -> {}", result.best.vector(), result.best_eval_value());
/// ```
#[derive(Debug)]
pub struct Hive<B: Bee> {
    config: HiveConfig,
    size: usize,
    max_trials: f64,
    seed: u64,
    rng: SmallRng,
    population: Vec<B>,
    best: B,
    calls_to_fitness: usize,
    current_itr: usize,
}

impl<B: Bee> Hive<B> {
    /// Builds a colony of randomized clones of `prototype`.
    ///
    /// The population holds `config.numb_bees` rounded up to even; each bee
    /// costs one evaluation. The champion starts as a copy of the best
    /// initial bee.
    pub fn new(prototype: B, config: HiveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(fresh_seed);
        Ok(Self::seeded(prototype, config, seed))
    }

    /// Builds a hive from an already validated configuration.
    pub(crate) fn seeded(prototype: B, config: HiveConfig, seed: u64) -> Self {
        let size = config.population_size();
        let mut rng = create_rng(seed);
        let max_trials = config.trials_limit(prototype.dimensions());

        let population: Vec<B> = (0..size)
            .map(|_| {
                let mut bee = prototype.clone();
                bee.randomize(&mut rng);
                bee
            })
            .collect();
        let best = best_of(&population).clone();

        Self {
            config,
            size,
            max_trials,
            seed,
            rng,
            population,
            best,
            calls_to_fitness: size,
            current_itr: 0,
        }
    }

    /// Runs `max_itrs` generations and returns the fitness history.
    ///
    /// Calling `run` again continues from the current population and
    /// champion with generation numbering restarted at 0.
    pub fn run(&mut self) -> HiveResult<B> {
        info!(
            "bee colony run: seed={} bees={} max_itrs={} max_trials={}",
            self.seed, self.size, self.config.max_itrs, self.max_trials
        );

        let mut fitness_history = Vec::with_capacity(self.config.max_itrs);

        for itr in 0..self.config.max_itrs {
            self.current_itr = itr;

            // 1. Employed bees
            for index in 0..self.size {
                self.send_employee(index);
            }

            // 2. Onlooker bees
            self.send_onlookers();

            // 3. Scout bee
            self.send_scout();

            // 4. Champion
            self.find_best();

            // 5. Convergence record
            let row: Vec<f64> = self.population.iter().map(B::fitness).collect();
            self.report(itr, &row);
            fitness_history.push(row);
        }

        if !self.best.is_feasible() {
            warn!(
                "no feasible solution found in {} generations (best violates {:?} constraints)",
                self.config.max_itrs,
                self.best.violations()
            );
        }

        HiveResult {
            best: self.best.clone(),
            fitness_history,
            calls_to_fitness: self.calls_to_fitness,
            seed: self.seed,
            generations: self.config.max_itrs,
        }
    }

    /// Exploits slot `index` with a random partner.
    ///
    /// The mutant replaces the incumbent only if it dominates it; otherwise
    /// the incumbent's abandonment counter grows. Costs one evaluation.
    pub fn send_employee(&mut self, index: usize) {
        let partner = self.partner_of(index);
        let state = self.state();

        let mutant = self.population[index].crossover(&self.population[partner], &state, &mut self.rng);
        self.calls_to_fitness += 1;

        if mutant.is_better(&self.population[index]) {
            self.population[index] = mutant;
            self.population[index].set_counter(0);
        } else {
            let bee = &mut self.population[index];
            bee.set_counter(bee.counter() + 1);
        }
    }

    /// Sends one onlooker per slot to roulette-selected sources.
    fn send_onlookers(&mut self) {
        let mut beta = 0.0;
        for _ in 0..self.size {
            let index = self.select(&mut beta);
            self.send_employee(index);
        }
    }

    /// Cumulative selection probabilities (roulette intervals) and the
    /// largest single probability.
    pub fn compute_probability(&self) -> (Vec<f64>, f64) {
        let probabilities = B::probabilities(&self.population);
        let max_probability = probabilities
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let cumulative = probabilities
            .iter()
            .scan(0.0, |acc, &p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        (cumulative, max_probability)
    }

    /// Roulette-wheel choice of the slot an onlooker follows.
    ///
    /// `beta` is the wheel pointer; it advances by `U(0, 1) * max_probability`
    /// modulo `max_probability` and persists between calls.
    ///
    /// When no slot has a positive probability (every fitness is 0) the
    /// wheel is undefined; the slot is then drawn uniformly and `beta` is
    /// left untouched.
    pub fn select(&mut self, beta: &mut f64) -> usize {
        let (cumulative, max_probability) = self.compute_probability();
        let phi: f64 = self.rng.random();

        if !(max_probability > 0.0 && max_probability.is_finite()) {
            return self.rng.random_range(0..self.size);
        }

        *beta = (*beta + phi * max_probability) % max_probability;

        cumulative
            .iter()
            .position(|&c| *beta < c)
            .unwrap_or(self.size - 1) // floating-point fallback
    }

    /// Abandons the most exhausted source if it is past the trial limit.
    ///
    /// Only the slot with the largest counter (lowest index on ties) is
    /// considered, so at most one bee is replaced per generation. Returns
    /// the replaced slot.
    pub fn send_scout(&mut self) -> Option<usize> {
        let (index, trials) = self
            .population
            .iter()
            .map(B::counter)
            .enumerate()
            .fold((0, 0), |(best_i, best_c), (i, c)| {
                if c > best_c {
                    (i, c)
                } else {
                    (best_i, best_c)
                }
            });

        if trials as f64 > self.max_trials {
            self.population[index].randomize(&mut self.rng);
            self.calls_to_fitness += 1;
            debug!("scout replaced slot {index} after {trials} trials");
            Some(index)
        } else {
            None
        }
    }

    /// Replaces the seed and the random stream.
    ///
    /// The population is kept; only draws made from now on change.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = create_rng(seed);
    }

    /// Snapshot handed to crossover.
    pub fn state(&self) -> HiveState {
        HiveState {
            population_size: self.size,
            max_itrs: self.config.max_itrs,
            current_itr: self.current_itr,
            max_trials: self.max_trials,
        }
    }

    /// The best bee observed so far.
    pub fn best(&self) -> &B {
        &self.best
    }

    pub fn population(&self) -> &[B] {
        &self.population
    }

    pub fn calls_to_fitness(&self) -> usize {
        self.calls_to_fitness
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &HiveConfig {
        &self.config
    }

    /// Uniform partner index distinct from `index`.
    fn partner_of(&mut self, index: usize) -> usize {
        let partner = self.rng.random_range(0..self.size - 1);
        if partner >= index {
            partner + 1
        } else {
            partner
        }
    }

    /// Clones any bee that beats the champion.
    fn find_best(&mut self) {
        for bee in &self.population {
            if bee.is_better(&self.best) {
                self.best = bee.clone();
            }
        }
    }

    fn report(&self, itr: usize, row: &[f64]) {
        let level = if self.config.verbose {
            Level::Info
        } else {
            Level::Debug
        };
        if !log::log_enabled!(level) {
            return;
        }
        let best = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let worst = row.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = row.iter().sum::<f64>() / row.len() as f64;
        log!(
            level,
            "# Iter = {itr} | best fitness = {best} | mean fitness = {mean} | worst fitness = {worst} | best eval value so far = {}",
            self.best.eval_value()
        );
    }
}

/// First bee that no other bee beats, scanning in slot order.
fn best_of<B: Bee>(population: &[B]) -> &B {
    let mut best = &population[0];
    for bee in &population[1..] {
        if bee.is_better(best) {
            best = bee;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
