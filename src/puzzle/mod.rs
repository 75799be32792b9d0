//! Puzzles: start/target pairs
//!
//! The fixed daily list, the day-id selector, and random ladders drawn from
//! the dictionary for freeplay and timed runs.

mod daily;
mod random;

use crate::core::{Word, WordError};
use crate::dictionary::DictionaryError;
use std::fmt;
use thiserror::Error;

pub use daily::{DailyPuzzle, DayId, PUZZLES, day_id, day_id_now, puzzle_for_day, today_puzzle};
pub use random::{RANDOM_PAIR_ATTEMPTS, pick_pair, random_puzzle};

/// A ladder to solve: reach `target` starting from `start`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    pub start: Word,
    pub target: Word,
}

/// Errors building a puzzle
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("Start and target are both {0}")]
    SameWords(Word),

    #[error("No {0}-letter words to choose from")]
    EmptyBucket(usize),

    #[error("Could not pick two different {0}-letter words")]
    NoDistinctPair(usize),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

impl Puzzle {
    /// Build a puzzle from raw text
    ///
    /// # Errors
    /// Returns `PuzzleError` if either word is invalid or both are the same.
    ///
    /// # Examples
    /// ```
    /// use morphonyms::puzzle::Puzzle;
    ///
    /// let puzzle = Puzzle::new("cold", "warm").unwrap();
    /// assert_eq!(puzzle.start.text(), "COLD");
    /// assert!(Puzzle::new("cold", "COLD").is_err());
    /// ```
    pub fn new(start: &str, target: &str) -> Result<Self, PuzzleError> {
        let start = Word::new(start)?;
        let target = Word::new(target)?;
        if start == target {
            return Err(PuzzleError::SameWords(start));
        }
        Ok(Self { start, target })
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.target)
    }
}
