//! Repeated independent runs.
//!
//! Stochastic optimizers are compared over many seeds, not one. An
//! [`Experiment`] runs the same prototype and configuration `runs` times,
//! run `k` on a private hive seeded with `base_seed + k`, so any single run
//! can be replayed on its own.
//!
//! With the `parallel` feature the runs are spread over rayon's thread pool;
//! results come back in run order either way.
//!
//! # Key Types
//!
//! - [`Experiment`]: Multi-run driver
//! - [`RunOutcome`]: Champion and history of one run
//! - [`RunSummary`]: Flat, serializable record of one run
//! - [`RunStatistics`]: Spread of champion values across runs
//!
//! # Submodules
//!
//! - [`stats`]: Convergence curves and summary statistics

mod runner;
pub mod stats;

pub use runner::{Experiment, RunOutcome, RunSummary};
pub use stats::RunStatistics;
