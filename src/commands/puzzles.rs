//! Puzzle list command
//!
//! Solves every entry of the daily rotation to show its par.

use crate::dictionary::DictionaryCache;
use crate::puzzle::PUZZLES;
use crate::solver::{DEFAULT_MAX_MOVES, Ladder, SolverError, shortest_ladder};

/// One entry of the rotation with its shortest ladder
pub struct PuzzleReport {
    pub index: usize,
    pub start: &'static str,
    pub target: &'static str,
    /// `None` if the puzzle cannot be solved with the loaded word lists
    pub ladder: Option<Ladder>,
}

/// Solve each bundled puzzle
///
/// # Errors
///
/// Returns an error if a bundled puzzle word is malformed.
pub async fn puzzle_reports(cache: &DictionaryCache) -> Result<Vec<PuzzleReport>, SolverError> {
    let mut reports = Vec::with_capacity(PUZZLES.len());
    for (index, &(start, target)) in PUZZLES.iter().enumerate() {
        let ladder = shortest_ladder(cache, start, target, DEFAULT_MAX_MOVES).await?;
        reports.push(PuzzleReport {
            index,
            start,
            target,
            ladder,
        });
    }
    Ok(reports)
}
