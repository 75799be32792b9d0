//! Breadth-first ladder search
//!
//! Each level loads the buckets its frontier can reach (one shorter, same,
//! one longer) and expands the frontier in parallel. The first time the
//! target is reached gives a shortest ladder.

use super::SolverError;
use crate::core::{Word, is_one_morph};
use crate::dictionary::{Bucket, DictionaryCache, DictionaryError, is_supported_length};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Search depth used by the CLI when none is given
pub const DEFAULT_MAX_MOVES: usize = 12;

/// A sequence of words, each one move from the last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of moves, one less than the number of words
    #[must_use]
    pub fn moves(&self) -> usize {
        self.words.len().saturating_sub(1)
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Find a shortest ladder from `start` to `target` within `max_moves`
///
/// Returns `Ok(None)` when no ladder exists within the limit. Word lists
/// that fail to load are treated as empty.
///
/// # Errors
/// Returns `SolverError` if either word is malformed.
pub async fn shortest_ladder(
    cache: &DictionaryCache,
    start: &str,
    target: &str,
    max_moves: usize,
) -> Result<Option<Ladder>, SolverError> {
    let start = Word::new(start)?;
    let target = Word::new(target)?;

    if start == target {
        return Ok(Some(Ladder { words: vec![start] }));
    }

    let mut parents: FxHashMap<Word, Word> = FxHashMap::default();
    let mut visited: FxHashSet<Word> = FxHashSet::default();
    visited.insert(start.clone());
    let mut frontier = vec![start];
    let mut buckets: FxHashMap<usize, Arc<Bucket>> = FxHashMap::default();

    for depth in 1..=max_moves {
        load_reachable(cache, &frontier, &mut buckets).await;

        let (seen, lists) = (&visited, &buckets);
        let steps: Vec<(Word, Word)> = frontier
            .par_iter()
            .flat_map_iter(move |word| {
                neighbours(word, lists)
                    .filter(move |next| !seen.contains(*next))
                    .map(move |next| (word.clone(), next.clone()))
            })
            .collect();

        let mut next_frontier = Vec::new();
        for (parent, child) in steps {
            if !visited.insert(child.clone()) {
                continue;
            }
            parents.insert(child.clone(), parent);
            if child == target {
                debug!(depth, explored = visited.len(), "ladder found");
                return Ok(Some(rebuild(&parents, child)));
            }
            next_frontier.push(child);
        }

        if next_frontier.is_empty() {
            debug!(depth, explored = visited.len(), "search exhausted");
            return Ok(None);
        }
        frontier = next_frontier;
    }

    debug!(max_moves, explored = visited.len(), "move limit reached");
    Ok(None)
}

async fn load_reachable(
    cache: &DictionaryCache,
    frontier: &[Word],
    buckets: &mut FxHashMap<usize, Arc<Bucket>>,
) {
    let lengths: FxHashSet<usize> = frontier
        .iter()
        .flat_map(|w| [w.len().saturating_sub(1), w.len(), w.len() + 1])
        .filter(|&l| is_supported_length(l) && !buckets.contains_key(&l))
        .collect();

    for length in lengths {
        let bucket = match cache.bucket(length).await {
            Ok(bucket) => bucket,
            Err(DictionaryError::UnsupportedLength(_)) => continue,
            Err(e) => {
                warn!(length, error = %e, "word list unavailable, searching without it");
                Arc::new(Bucket::empty(length))
            }
        };
        buckets.insert(length, bucket);
    }
}

fn neighbours<'a>(
    word: &'a Word,
    buckets: &'a FxHashMap<usize, Arc<Bucket>>,
) -> impl Iterator<Item = &'a Word> + 'a {
    let len = word.len();
    [len.saturating_sub(1), len, len + 1]
        .into_iter()
        .filter_map(move |l| buckets.get(&l))
        .flat_map(|bucket| bucket.words())
        .filter(move |candidate| is_one_morph(word.text(), candidate.text()))
}

fn rebuild(parents: &FxHashMap<Word, Word>, end: Word) -> Ladder {
    let mut words = vec![end];
    while let Some(parent) = words.last().and_then(|w| parents.get(w)) {
        words.push(parent.clone());
    }
    words.reverse();
    Ladder { words }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PUZZLES;

    fn assert_valid(ladder: &Ladder, start: &str, target: &str) {
        let words = ladder.words();
        assert_eq!(words.first().map(Word::text), Some(start));
        assert_eq!(words.last().map(Word::text), Some(target));
        for pair in words.windows(2) {
            assert!(
                is_one_morph(pair[0].text(), pair[1].text()),
                "{} → {} is not a single move",
                pair[0],
                pair[1]
            );
        }
    }

    #[tokio::test]
    async fn every_daily_puzzle_is_solvable() {
        let cache = DictionaryCache::embedded();
        for &(start, target) in PUZZLES {
            let ladder = shortest_ladder(&cache, start, target, DEFAULT_MAX_MOVES)
                .await
                .unwrap()
                .unwrap_or_else(|| panic!("{start} → {target} has no ladder"));
            assert_valid(&ladder, start, target);
        }
    }

    #[tokio::test]
    async fn finds_shortest_lengths() {
        let cache = DictionaryCache::embedded();

        let one = shortest_ladder(&cache, "code", "rode", 5).await.unwrap().unwrap();
        assert_eq!(one.moves(), 1);

        let two = shortest_ladder(&cache, "fool", "four", 5).await.unwrap().unwrap();
        assert_eq!(two.moves(), 2);

        let stone = shortest_ladder(&cache, "stone", "shore", 5).await.unwrap().unwrap();
        assert_eq!(stone.moves(), 2);

        let cold = shortest_ladder(&cache, "cold", "warm", 8).await.unwrap().unwrap();
        assert!(cold.moves() <= 4);
        assert_valid(&cold, "COLD", "WARM");
    }

    #[tokio::test]
    async fn respects_move_limit() {
        let cache = DictionaryCache::embedded();
        assert_eq!(shortest_ladder(&cache, "fool", "four", 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn same_word_is_zero_moves() {
        let cache = DictionaryCache::embedded();
        let ladder = shortest_ladder(&cache, "cat", "CAT", 3).await.unwrap().unwrap();
        assert_eq!(ladder.moves(), 0);
        assert_eq!(ladder.to_string(), "CAT");
    }

    #[tokio::test]
    async fn unknown_target_has_no_ladder() {
        let cache = DictionaryCache::embedded();
        assert_eq!(shortest_ladder(&cache, "cold", "qzqz", 4).await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_word_is_an_error() {
        let cache = DictionaryCache::embedded();
        assert!(matches!(
            shortest_ladder(&cache, "c0ld", "warm", 4).await,
            Err(SolverError::InvalidWord(_))
        ));
    }

    #[test]
    fn ladder_display() {
        let ladder = Ladder {
            words: ["FOOL", "FOUL", "FOUR"]
                .iter()
                .map(|w| Word::new(w).unwrap())
                .collect(),
        };
        assert_eq!(ladder.to_string(), "FOOL → FOUL → FOUR");
        assert_eq!(ladder.moves(), 2);
    }
}
