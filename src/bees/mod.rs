//! Solution representations for the bee colony.
//!
//! Four [`Bee`](crate::hive::Bee) implementations cover the combinations of
//! continuous/binary search spaces with and without constraints:
//!
//! | Type | Vector | Crossover | Dominance |
//! |---|---|---|---|
//! | [`ContinuousBee`] | `f64` in a box | one random dimension | fitness |
//! | [`ContinuousConstrainedBee`] | `f64` in a box | each dimension with prob. `mr` | Deb's rule |
//! | [`BinaryBee`] | bits | DisABC + branch-and-bound | fitness |
//! | [`BinaryConstrainedBee`] | bits | DisABC + branch-and-bound | Deb's rule |
//!
//! The variants share no base type; common math lives in [`fitness`] and
//! [`bnb`] as free functions.
//!
//! # Problem boundary
//!
//! A bee sees its problem only through two injected pure functions: the
//! objective (minimized) and, for constrained bees, the number of violated
//! constraints. They are held behind an [`Arc`] so clones share the
//! immutable function, never mutable state.

pub mod bnb;
pub mod fitness;

mod binary;
mod binary_constrained;
mod continuous;
mod continuous_constrained;

use std::sync::Arc;

pub use binary::{BinaryBee, ThetaRange};
pub use binary_constrained::BinaryConstrainedBee;
pub use continuous::{Bounds, ContinuousBee};
pub use continuous_constrained::{ContinuousConstrainedBee, DEFAULT_MUTATION_RATE};

/// Objective function over a solution vector; lower is better.
pub type Objective<G> = Arc<dyn Fn(&[G]) -> f64 + Send + Sync>;

/// Number of constraints a solution vector violates; 0 means feasible.
pub type ConstraintCheck<G> = Arc<dyn Fn(&[G]) -> usize + Send + Sync>;
