//! Random ladders for freeplay and timed runs

use super::{Puzzle, PuzzleError};
use crate::dictionary::{Bucket, DictionaryCache};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// How many times to redraw the target if it matches the start
pub const RANDOM_PAIR_ATTEMPTS: usize = 10;

/// Draw a random start/target pair of `length` letters from the dictionary
///
/// # Errors
/// Returns `PuzzleError` if the word list cannot be loaded, is empty, or no
/// distinct target turns up within `RANDOM_PAIR_ATTEMPTS` draws.
pub async fn random_puzzle<R: Rng + ?Sized>(
    cache: &DictionaryCache,
    length: usize,
    rng: &mut R,
) -> Result<Puzzle, PuzzleError> {
    let bucket = cache.bucket(length).await?;
    pick_pair(&bucket, rng)
}

/// Pick a random start/target pair from one bucket
///
/// # Errors
/// Returns `PuzzleError::EmptyBucket` or `PuzzleError::NoDistinctPair`.
pub fn pick_pair<R: Rng + ?Sized>(bucket: &Bucket, rng: &mut R) -> Result<Puzzle, PuzzleError> {
    let words = bucket.words();
    let start = words
        .choose(rng)
        .ok_or(PuzzleError::EmptyBucket(bucket.length()))?;

    for _ in 0..RANDOM_PAIR_ATTEMPTS {
        if let Some(target) = words.choose(rng)
            && target != start
        {
            return Ok(Puzzle {
                start: start.clone(),
                target: target.clone(),
            });
        }
    }

    Err(PuzzleError::NoDistinctPair(bucket.length()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pick_pair_returns_distinct_words_of_length() {
        let bucket = Bucket::parse(4, "COLD\nWARM\nGOLD\nCORD");
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let puzzle = pick_pair(&bucket, &mut rng).unwrap();
            assert_ne!(puzzle.start, puzzle.target);
            assert!(bucket.contains(puzzle.start.text()));
            assert!(bucket.contains(puzzle.target.text()));
        }
    }

    #[test]
    fn pick_pair_empty_bucket() {
        let bucket = Bucket::empty(4);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            pick_pair(&bucket, &mut rng),
            Err(PuzzleError::EmptyBucket(4))
        ));
    }

    #[test]
    fn pick_pair_single_word_exhausts_retries() {
        let bucket = Bucket::parse(3, "CAT");
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            pick_pair(&bucket, &mut rng),
            Err(PuzzleError::NoDistinctPair(3))
        ));
    }

    #[tokio::test]
    async fn random_puzzle_from_embedded_lists() {
        let cache = DictionaryCache::embedded();
        let mut rng = StdRng::seed_from_u64(42);

        let puzzle = random_puzzle(&cache, 5, &mut rng).await.unwrap();
        assert_eq!(puzzle.start.len(), 5);
        assert_eq!(puzzle.target.len(), 5);
        assert_ne!(puzzle.start, puzzle.target);
    }

    #[tokio::test]
    async fn random_puzzle_missing_length() {
        let cache = DictionaryCache::embedded();
        let mut rng = StdRng::seed_from_u64(42);

        let result = random_puzzle(&cache, 12, &mut rng).await;
        assert!(matches!(result, Err(PuzzleError::Dictionary(_))));
    }
}
