//! Seed handling and index sampling.
//!
//! Streams themselves come from [`u_numflow::random::create_rng`]; every run
//! owns exactly one, and nothing in the crate touches a thread-local or
//! global generator once a hive is built.

use rand::Rng;

/// Draws a fresh seed from the operating system backed thread generator.
///
/// Used only when the caller did not supply a seed; the drawn value is
/// recorded so the run can be replayed.
pub fn fresh_seed() -> u64 {
    rand::random()
}

/// Picks `amount` distinct elements of `candidates` uniformly at random.
///
/// Order of the returned values is unspecified.
///
/// # Panics
/// Panics if `amount > candidates.len()`.
pub fn sample_distinct<R: Rng>(candidates: &[usize], amount: usize, rng: &mut R) -> Vec<usize> {
    assert!(
        amount <= candidates.len(),
        "cannot sample {amount} of {} candidates",
        candidates.len()
    );
    rand::seq::index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| candidates[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_numflow::random::create_rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = create_rng(42);
        let candidates = [3, 5, 8, 13, 21];
        let picked = sample_distinct(&candidates, 3, &mut rng);
        assert_eq!(picked.len(), 3);
        for (i, x) in picked.iter().enumerate() {
            assert!(candidates.contains(x));
            assert!(!picked[i + 1..].contains(x), "duplicate in {picked:?}");
        }
    }

    #[test]
    fn test_sample_all_and_none() {
        let mut rng = create_rng(1);
        let mut all = sample_distinct(&[4, 2, 9], 3, &mut rng);
        all.sort_unstable();
        assert_eq!(all, vec![2, 4, 9]);
        assert!(sample_distinct(&[4, 2, 9], 0, &mut rng).is_empty());
    }

    #[test]
    #[should_panic(expected = "cannot sample")]
    fn test_sample_too_many_panics() {
        let mut rng = create_rng(1);
        sample_distinct(&[1, 2], 3, &mut rng);
    }
}
