//! Branch-and-bound choice of bit-flip counts for binary mutation.
//!
//! Solves the small integer program of DisABC's neighbourhood generator:
//!
//! ```text
//! min | 1 - m11 / (m11 + m10 + m01) - A |
//! s.t. m11 + m01 = n1
//!      0 <= m11 <= n1,  0 <= m10 < n0
//! ```
//!
//! where `n1`/`n0` count the ones/zeros of the bee being mutated and
//! `A = theta * (1 - similarity)` is the target dissimilarity.
//!
//! # Reference
//!
//! Kashan, Nahavandi & Kashan (2012), "DisABC: A new artificial bee colony
//! algorithm for binary optimization", *Applied Soft Computing* 12(1), 342–352.

/// Bit-flip counts chosen by [`branch_and_bound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipPlan {
    /// Ones of the parent kept at 1.
    pub m11: usize,
    /// Zeros of the parent turned to 1.
    pub m10: usize,
    /// Ones of the parent turned to 0.
    pub m01: usize,
}

/// Target dissimilarity `A = theta * (1 - similarity)`.
pub fn target(theta: f64, similarity: f64) -> f64 {
    theta * (1.0 - similarity)
}

/// Picks `(m11, m10, m01)` minimizing the distance to `target`.
///
/// Enumerates `m11` ascending, then `m10` ascending; a candidate replaces the
/// incumbent only on strict improvement, so the first pair wins ties. For a
/// fixed `m11` the score is a valley in `m10` (the dissimilarity term only
/// grows with `m10`), so the row is abandoned as soon as the score rises.
///
/// When nothing can be enumerated (no zero to switch on, or a lone zero
/// bit) the fallback `m11 = n1, m10 = 0` leaves the parent unchanged. The
/// fallback honours `m10 < n0` too: starting from `m10 = n0` instead would
/// switch on the only bit of a one-bit all-zero vector.
///
/// # Complexity
/// O(n0 · n1) worst case.
pub fn branch_and_bound(target: f64, n0: usize, n1: usize) -> FlipPlan {
    let mut best = FlipPlan {
        m11: n1,
        m10: 0,
        m01: 0,
    };
    let mut best_score = f64::INFINITY;

    for m11 in 0..=n1 {
        let m01 = n1 - m11;
        let mut previous = f64::INFINITY;
        for m10 in 0..n0 {
            let total = m11 + m10 + m01;
            if total == 0 {
                continue;
            }
            let score = (1.0 - m11 as f64 / total as f64 - target).abs();
            if score > previous {
                // past the bottom of the valley: the rest of the row is worse
                break;
            }
            previous = score;
            if score < best_score {
                best_score = score;
                best = FlipPlan { m11, m10, m01 };
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Plain exhaustive enumeration, no pruning.
    fn exhaustive(target: f64, n0: usize, n1: usize) -> FlipPlan {
        let mut best = FlipPlan {
            m11: n1,
            m10: 0,
            m01: 0,
        };
        let mut best_score = f64::INFINITY;
        for m11 in 0..=n1 {
            let m01 = n1 - m11;
            for m10 in 0..n0 {
                let total = m11 + m10 + m01;
                if total == 0 {
                    continue;
                }
                let score = (1.0 - m11 as f64 / total as f64 - target).abs();
                if score < best_score {
                    best_score = score;
                    best = FlipPlan { m11, m10, m01 };
                }
            }
        }
        best
    }

    #[test]
    fn test_zero_target_keeps_everything() {
        // A = 0 means "stay identical": keep every one, switch no zero on
        let plan = branch_and_bound(0.0, 5, 4);
        assert_eq!(plan, FlipPlan { m11: 4, m10: 0, m01: 0 });
    }

    #[test]
    fn test_full_dissimilarity() {
        // A = 1 is reached by dropping every one (m11 = 0)
        let plan = branch_and_bound(1.0, 3, 3);
        assert_eq!(plan.m11, 0);
        assert_eq!(plan.m01, 3);
        assert_eq!(plan.m10, 0);
    }

    #[test]
    fn test_half_dissimilarity() {
        // n1 = 2: keeping one of two ones gives 1 - 1/2 = 0.5 exactly
        let plan = branch_and_bound(0.5, 4, 2);
        assert_eq!(plan, FlipPlan { m11: 1, m10: 0, m01: 1 });
    }

    #[test]
    fn test_no_zeros_falls_back() {
        let plan = branch_and_bound(0.4, 0, 6);
        assert_eq!(plan, FlipPlan { m11: 6, m10: 0, m01: 0 });
    }

    #[test]
    fn test_no_ones() {
        // Only m10 can move; every candidate scores |1 - A|, first wins
        let plan = branch_and_bound(0.3, 5, 0);
        assert_eq!(plan, FlipPlan { m11: 0, m10: 1, m01: 0 });
    }

    #[test]
    fn test_lone_zero_bit_falls_back() {
        let plan = branch_and_bound(0.7, 1, 0);
        assert_eq!(plan, FlipPlan { m11: 0, m10: 0, m01: 0 });
    }

    #[test]
    fn test_empty_vector() {
        let plan = branch_and_bound(0.3, 0, 0);
        assert_eq!(plan, FlipPlan { m11: 0, m10: 0, m01: 0 });
    }

    proptest! {
        #[test]
        fn prop_plan_respects_bounds(
            theta in 0.0f64..1.0,
            similarity in 0.0f64..=1.0,
            n0 in 1usize..40,
            n1 in 0usize..40,
        ) {
            let plan = branch_and_bound(target(theta, similarity), n0, n1);
            prop_assert!(plan.m11 <= n1);
            prop_assert!(plan.m10 < n0);
            prop_assert_eq!(plan.m11 + plan.m01, n1);
        }

        #[test]
        fn prop_pruning_matches_exhaustive(
            a in 0.0f64..1.0,
            n0 in 0usize..30,
            n1 in 0usize..30,
        ) {
            prop_assert_eq!(branch_and_bound(a, n0, n1), exhaustive(a, n0, n1));
        }
    }
}
