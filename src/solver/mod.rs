//! Shortest-ladder search
//!
//! Breadth-first search over dictionary words where edges are single moves.
//! Used to show par for a puzzle and to check that bundled puzzles are
//! solvable.

mod ladder;

use crate::core::WordError;
use thiserror::Error;

pub use ladder::{DEFAULT_MAX_MOVES, Ladder, shortest_ladder};

/// Errors setting up a search
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),
}
