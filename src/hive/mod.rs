//! Artificial Bee Colony engine.
//!
//! A generic colony built on one trait. Users pick (or implement) a
//! [`Bee`] describing how a solution is randomized, mutated against a
//! partner and compared; the [`Hive`] runs the employed, onlooker and scout
//! phases for a fixed number of generations.
//!
//! # Core Traits
//!
//! - [`Bee`]: A food source with its abandonment counter
//!
//! # Key Types
//!
//! - [`HiveConfig`]: Colony parameters (bees, generations, trial limit, seed)
//! - [`Hive`]: Owns the population and executes the loop
//! - [`HiveResult`]: Champion, per-generation fitness history, evaluation count
//! - [`HiveState`]: Progress snapshot visible to crossover
//!
//! # References
//!
//! - Karaboga (2005), *An idea based on honey bee swarm for numerical optimization*,
//!   Technical Report TR06, Erciyes University
//! - Karaboga & Akay (2011), "A modified Artificial Bee Colony (ABC) algorithm
//!   for constrained optimization problems", *Applied Soft Computing* 11(3)

mod config;
mod runner;
mod types;

pub use config::HiveConfig;
pub use runner::{FitnessHistory, Hive, HiveResult};
pub use types::{Bee, HiveState};
