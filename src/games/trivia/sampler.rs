//! Uniform sampling without replacement.

use rand::Rng;
use tracing::{debug, instrument, warn};

use super::types::{Clue, RawClue};

/// The pool is smaller than the number of items asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SampleError {
    /// Sampling requested more items than the pool holds.
    #[display("Requested {} items but only {} available", requested, available)]
    InsufficientData {
        /// Items requested.
        requested: usize,
        /// Items in the pool.
        available: usize,
    },
}

impl std::error::Error for SampleError {}

/// Draws `count` distinct elements of `pool` uniformly at random.
///
/// The result order is random. `pool` is never modified.
///
/// # Errors
///
/// Returns [`SampleError::InsufficientData`] when `count > pool.len()`.
#[instrument(level = "debug", skip(pool, rng), fields(available = pool.len()))]
pub fn sample<T: Clone, R: Rng + ?Sized>(
    pool: &[T],
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>, SampleError> {
    if count > pool.len() {
        warn!("Pool too small to sample from");
        return Err(SampleError::InsufficientData {
            requested: count,
            available: pool.len(),
        });
    }
    let picked = rand::seq::index::sample(rng, pool.len(), count)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect();
    Ok(picked)
}

/// Picks `count` clues from `pool`, each starting hidden.
///
/// Clues with a blank question or answer are not eligible.
///
/// # Errors
///
/// Returns [`SampleError::InsufficientData`] when fewer than `count` playable
/// clues are available.
#[instrument(level = "debug", skip(pool, rng), fields(pool = pool.len()))]
pub fn sample_clues<R: Rng + ?Sized>(
    pool: &[RawClue],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Clue>, SampleError> {
    let playable: Vec<Clue> = pool.iter().filter_map(Clue::from_raw).collect();
    if playable.len() < pool.len() {
        debug!(
            dropped = pool.len() - playable.len(),
            "Skipping blank clues"
        );
    }
    sample(&playable, count, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_zero_from_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let picked = sample::<u8, _>(&[], 0, &mut rng).unwrap();
        assert!(picked.is_empty());
    }

    #[test]
    fn test_blank_clues_do_not_count() {
        let mut rng = StdRng::seed_from_u64(0);
        let pool = vec![
            RawClue::new("Q1", "A1"),
            RawClue::new("  ", "A2"),
            RawClue::new("Q3", ""),
        ];
        let err = sample_clues(&pool, 2, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SampleError::InsufficientData {
                requested: 2,
                available: 1
            }
        );
    }
}
