//! Ladder solving command
//!
//! Finds a shortest ladder between two words.

use crate::core::normalize;
use crate::dictionary::DictionaryCache;
use crate::solver::{Ladder, SolverError, shortest_ladder};

/// Result of a ladder search
pub struct SolveResult {
    pub start: String,
    pub target: String,
    pub max_moves: usize,
    /// `None` if no ladder exists within `max_moves`
    pub ladder: Option<Ladder>,
}

/// Search for a shortest ladder from `start` to `target`
///
/// # Errors
///
/// Returns an error if either word is malformed.
pub async fn solve_ladder(
    cache: &DictionaryCache,
    start: &str,
    target: &str,
    max_moves: usize,
) -> Result<SolveResult, SolverError> {
    let ladder = shortest_ladder(cache, start, target, max_moves).await?;

    Ok(SolveResult {
        start: normalize(start),
        target: normalize(target),
        max_moves,
        ladder,
    })
}
