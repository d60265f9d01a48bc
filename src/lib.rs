//! Artificial Bee Colony optimization.
//!
//! Provides a generic ABC engine and four ready-made solution
//! representations:
//!
//! - **Hive**: The colony loop of Karaboga (2005): employed bees exploit
//!   their food source, onlookers follow roulette-selected sources, and a
//!   scout abandons the most exhausted one.
//! - **Bees**: Continuous and binary search spaces, each with an optional
//!   constrained variant ranked by Deb's feasibility rule. Binary bees use
//!   the DisABC operator with a small branch-and-bound sub-solver.
//! - **Experiments**: Independent multi-run driver with convergence
//!   statistics, parallel under the `parallel` feature.
//!
//! Every run owns a single seeded random stream; the same seed reproduces
//! the same run bit for bit.
//!
//! # Quick Start
//!
//! ```
//! use u_abc::bees::ContinuousBee;
//! use u_abc::hive::{Bee, Hive, HiveConfig};
//!
//! let sphere = ContinuousBee::new(vec![-5.0; 2], vec![5.0; 2], |x: &[f64]| {
//!     x.iter().map(|v| v * v).sum()
//! })
//! .unwrap();
//!
//! let config = HiveConfig::default().with_numb_bees(30).with_max_itrs(100).with_seed(7);
//! let result = Hive::new(sphere, config).unwrap().run();
//! assert!(result.best.eval_value() < 1e-3);
//! ```
//!
//! # Features
//!
//! - `parallel`: run experiment repetitions on rayon's thread pool
//! - `serde`: derive `Serialize`/`Deserialize` for configuration and records

pub mod bees;
pub mod error;
pub mod experiment;
pub mod hive;
pub mod random;

pub use error::ConfigError;
