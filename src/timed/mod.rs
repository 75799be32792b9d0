//! Timed mode
//!
//! Solve as many random ladders as possible. Each solve scores a point and
//! restarts the clock on a fresh ladder; the run ends when the clock runs
//! out, the player stops, or no new ladder can be generated.

mod controller;
mod countdown;

use thiserror::Error;

use crate::puzzle::PuzzleError;

pub use controller::{
    FinishReason, RunState, RunSummary, SolveProgress, TickOutcome, TimedRunController,
    TimedSettings,
};
pub use countdown::Countdown;

/// Errors starting or continuing a timed run
#[derive(Debug, Error)]
pub enum TimedError {
    #[error("A run is already in progress")]
    AlreadyRunning,

    #[error("Run duration must be at least one second")]
    ZeroDuration,

    #[error("Couldn't load dictionary for that length: {0}")]
    Ladder(#[from] PuzzleError),
}
