//! Construction-time configuration errors.
//!
//! Every fallible constructor in the crate ([`crate::hive::Hive::new`], the
//! bee constructors, [`crate::hive::HiveConfig::validate`]) reports through
//! [`ConfigError`]. Once a hive is built, a run has no error path.

use thiserror::Error;

/// Invalid parameters detected while building bees or a hive.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `lower` and `upper` bound vectors have different lengths.
    #[error("'lower' and 'upper' must have the same length (got {lower} and {upper})")]
    BoundsLengthMismatch { lower: usize, upper: usize },

    /// A lower bound is greater than its upper bound.
    #[error("lower bound {lower} exceeds upper bound {upper} in dimension {dimension}")]
    InvertedBounds {
        dimension: usize,
        lower: f64,
        upper: f64,
    },

    /// The search space has no dimensions.
    #[error("search space must have at least one dimension")]
    NoDimensions,

    /// `theta_min` is greater than `theta_max`.
    #[error("theta_min ({min}) must be smaller than or equal to theta_max ({max})")]
    ThetaRange { min: f64, max: f64 },

    /// Mutation rate outside `[0, 1]`.
    #[error("mutation rate must lie in [0, 1], got {0}")]
    MutationRate(f64),

    /// Fewer than two bees: employed bees need a distinct partner.
    #[error("hive needs at least two bees, got {0}")]
    PopulationTooSmall(usize),

    /// `max_itrs` is zero.
    #[error("max_itrs must be at least 1")]
    NoIterations,

    /// `max_trials` is negative or NaN.
    #[error("max_trials must be a non-negative number, got {0}")]
    InvalidTrials(f64),

    /// An experiment asked for zero runs.
    #[error("experiment needs at least one run")]
    NoRuns,
}
