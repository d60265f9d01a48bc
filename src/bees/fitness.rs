//! Fitness transform, dominance and selection probabilities shared by the
//! bee variants.
//!
//! # References
//!
//! - Karaboga (2005), "An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization", Technical Report TR06
//! - Deb (2000), "An efficient constraint handling method for genetic
//!   algorithms"
//! - Karaboga & Akay (2011), "A modified artificial bee colony (ABC)
//!   algorithm for constrained optimization problems"

/// Maps a raw (minimized) objective value to a "higher is better" fitness.
///
/// `1 / (1 + v)` for `v >= 0`, `1 + |v|` for `v < 0`. The mapping is strictly
/// decreasing in `v`. An objective of `+inf` or `NaN` yields `0`, the worst
/// fitness.
///
/// ```
/// use u_abc::bees::fitness::fitness_from_value;
///
/// assert_eq!(fitness_from_value(0.0), 1.0);
/// assert_eq!(fitness_from_value(1.0), 0.5);
/// assert_eq!(fitness_from_value(-2.0), 3.0);
/// assert_eq!(fitness_from_value(f64::INFINITY), 0.0);
/// ```
pub fn fitness_from_value(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else if value >= 0.0 {
        1.0 / (1.0 + value)
    } else {
        1.0 + value.abs()
    }
}

/// Deb's feasibility rule: `true` iff `a` dominates `b`.
///
/// Arguments are `(violations, fitness)` pairs.
///
/// 1. A feasible solution beats any infeasible one.
/// 2. Between two feasible solutions, the higher fitness wins.
/// 3. Between two infeasible solutions, fewer violations win.
pub fn debs_rule(a: (usize, f64), b: (usize, f64)) -> bool {
    let (a_violations, a_fitness) = a;
    let (b_violations, b_fitness) = b;
    match (a_violations == 0, b_violations == 0) {
        (true, true) => a_fitness > b_fitness,
        (true, false) => true,
        (false, true) => false,
        (false, false) => a_violations < b_violations,
    }
}

/// `numerator / denominator`, or 0 when the denominator is not positive.
///
/// Guards the shares computed over a population whose fitness sums to 0
/// (every objective infinite, or every bee infeasible).
pub(crate) fn share(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Classic ABC probability: `0.9 * fitness / max_fitness + 0.1`.
pub(crate) fn scaled_probability(fitness: f64, max_fitness: f64) -> f64 {
    0.9 * share(fitness, max_fitness) + 0.1
}

/// Population aggregates of the two-range constrained scheme.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConstrainedTotals {
    pub fitness: f64,
    pub violations: usize,
}

impl ConstrainedTotals {
    /// Sums fitness and violations over `(violations, fitness)` pairs.
    pub fn collect(pairs: impl Iterator<Item = (usize, f64)>) -> Self {
        pairs.fold(Self::default(), |acc, (v, f)| Self {
            fitness: acc.fitness + f,
            violations: acc.violations.saturating_add(v),
        })
    }

    /// Feasible bees land in `[0.5, 1]`, infeasible ones in `[0, 0.5]`.
    ///
    /// Infeasible bees carry fitness 0, so the fitness total equals the
    /// feasible total.
    pub fn probability(&self, violations: usize, fitness: f64) -> f64 {
        if violations == 0 {
            0.5 + 0.5 * share(fitness, self.fitness)
        } else {
            0.5 * (1.0 - share(violations as f64, self.violations as f64))
        }
    }
}

/// Jaccard similarity `m11 / (m11 + m10 + m01)` between two bit vectors.
///
/// Two vectors with no set bit at all are identical and score 1.
///
/// # Panics
/// Panics if the vectors differ in length.
pub fn jaccard(a: &[bool], b: &[bool]) -> f64 {
    assert_eq!(a.len(), b.len(), "bit vectors must have equal length");
    let (mut m11, mut m10, mut m01) = (0usize, 0usize, 0usize);
    for (&x, &y) in a.iter().zip(b) {
        match (x, y) {
            (true, true) => m11 += 1,
            (true, false) => m10 += 1,
            (false, true) => m01 += 1,
            (false, false) => {}
        }
    }
    let union = m11 + m10 + m01;
    if union == 0 {
        1.0
    } else {
        m11 as f64 / union as f64
    }
}
