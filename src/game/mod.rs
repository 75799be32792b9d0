//! Game sessions and mode rules
//!
//! [`GameSession`] owns the path for one ladder, the [`ModeRules`] variants
//! decide what a solve means, and [`Game`] ties both to a shared dictionary
//! cache for a front end to drive.

mod mode;
mod runner;
mod session;

use std::fmt;

pub use mode::{DailyMode, FreeplayMode, Mode, ModeRules, SolveAction, TimedMode};
pub use runner::Game;
pub use session::{GameSession, GameState, GuessOutcome};

/// The three ways to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Daily,
    Freeplay,
    Timed,
}

impl ModeKind {
    /// Parse a mode name: "daily", "freeplay" (or "free"), "timed"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "freeplay" | "free" => Some(Self::Freeplay),
            "timed" => Some(Self::Timed),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Freeplay => "freeplay",
            Self::Timed => "timed",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
