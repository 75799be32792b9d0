//! Timed run state machine
//!
//! ```text
//! Idle --start--> Running --clock hits zero--> Expired
//!                    |  \--stop / ladder failure--> Idle
//!                    \--solve: score + 1, new ladder, clock reset
//! ```
//!
//! The controller owns its countdown handle and cancels it whenever a run
//! finishes, so no tick can touch a finished run.

use super::{Countdown, TimedError};
use crate::dictionary::DictionaryCache;
use crate::puzzle::{Puzzle, random_puzzle};
use crate::stats::{BestUpdate, PersonalBests};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, warn};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Word length and per-ladder time for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedSettings {
    pub length: usize,
    /// Seconds allowed per ladder
    pub duration: u32,
}

impl Default for TimedSettings {
    fn default() -> Self {
        Self {
            length: 4,
            duration: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Expired,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// The clock reached zero
    Expired,
    /// The player stopped the run
    Stopped,
    /// No new ladder could be generated after a solve
    LadderFailed,
}

impl FinishReason {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Expired => "⏰ Time's up! Run ended.",
            Self::Stopped => "Run stopped.",
            Self::LadderFailed => "Dictionary error. Run ended.",
        }
    }
}

/// Final result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub settings: TimedSettings,
    pub score: u32,
    pub reason: FinishReason,
    pub best: BestUpdate,
    /// False if the personal best could not be read or written
    pub saved: bool,
}

impl RunSummary {
    /// Status line for the player
    #[must_use]
    pub fn message(&self) -> String {
        if self.best.improved {
            format!("{} New PR: {}", self.reason.message(), self.score)
        } else {
            format!(
                "{} Score: {} • PR: {}",
                self.reason.message(),
                self.score,
                self.best.best
            )
        }
    }
}

/// Result of one clock tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No run in progress
    Idle,
    /// Seconds left on the current ladder
    Remaining(u32),
    /// The clock ran out
    Finished(RunSummary),
}

/// Result of solving the current ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveProgress {
    /// No run in progress; nothing scored
    NotRunning,
    /// Scored; play continues on `puzzle` with a full clock
    NextLadder { score: u32, puzzle: Puzzle },
    /// Scored, but the run had to end
    Finished(RunSummary),
}

/// Owner of one timed run at a time
pub struct TimedRunController {
    settings: TimedSettings,
    state: RunState,
    score: u32,
    remaining: u32,
    bests: PersonalBests,
    rng: StdRng,
    countdown: Option<Countdown>,
}

impl TimedRunController {
    pub fn new(bests: PersonalBests) -> Self {
        Self::with_rng(bests, StdRng::from_os_rng())
    }

    /// Use a specific random source for ladder generation
    #[must_use]
    pub fn with_rng(bests: PersonalBests, rng: StdRng) -> Self {
        let settings = TimedSettings::default();
        Self {
            settings,
            state: RunState::Idle,
            score: 0,
            remaining: settings.duration,
            bests,
            rng,
            countdown: None,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> TimedSettings {
        self.settings
    }

    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Seconds left on the current ladder
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Stored best for the current settings
    #[must_use]
    pub fn personal_best(&self) -> u32 {
        self.bests
            .load(self.settings.length, self.settings.duration)
            .into_value()
    }

    /// Change length or duration between runs
    ///
    /// # Errors
    /// Returns `TimedError` while a run is in progress or for a zero duration.
    pub fn configure(&mut self, settings: TimedSettings) -> Result<(), TimedError> {
        if self.is_running() {
            return Err(TimedError::AlreadyRunning);
        }
        if settings.duration == 0 {
            return Err(TimedError::ZeroDuration);
        }
        self.settings = settings;
        self.remaining = settings.duration;
        Ok(())
    }

    /// Begin a run on a fresh random ladder
    ///
    /// On success the score is 0, the clock is full and ticking. On failure
    /// the controller is left idle with its previous settings.
    ///
    /// # Errors
    /// Returns `TimedError` if a run is in progress, the duration is zero, or
    /// no ladder of the requested length can be generated.
    pub async fn start(
        &mut self,
        settings: TimedSettings,
        cache: &DictionaryCache,
    ) -> Result<Puzzle, TimedError> {
        let previous = self.settings;
        self.configure(settings)?;
        self.state = RunState::Idle;

        let puzzle = match random_puzzle(cache, settings.length, &mut self.rng).await {
            Ok(puzzle) => puzzle,
            Err(e) => {
                self.settings = previous;
                self.remaining = previous.duration;
                return Err(e.into());
            }
        };

        self.state = RunState::Running;
        self.score = 0;
        self.remaining = settings.duration;
        self.countdown = Some(Countdown::every(TICK_PERIOD));

        info!(
            length = settings.length,
            duration = settings.duration,
            %puzzle,
            "timed run started"
        );
        Ok(puzzle)
    }

    /// Advance the clock by one second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            TickOutcome::Finished(self.finish(FinishReason::Expired))
        } else {
            TickOutcome::Remaining(self.remaining)
        }
    }

    /// Wait for the countdown's next tick and apply it
    ///
    /// Returns `Idle` at once when no run is in progress.
    pub async fn next_tick(&mut self) -> TickOutcome {
        let Some(countdown) = self.countdown.as_mut() else {
            return TickOutcome::Idle;
        };
        if !countdown.tick().await {
            return TickOutcome::Idle;
        }
        self.tick()
    }

    /// Score the solved ladder and move on to the next one
    pub async fn record_solve(&mut self, cache: &DictionaryCache) -> SolveProgress {
        if !self.is_running() {
            return SolveProgress::NotRunning;
        }

        self.score += 1;
        debug!(score = self.score, "ladder solved");

        match random_puzzle(cache, self.settings.length, &mut self.rng).await {
            Ok(puzzle) => {
                self.remaining = self.settings.duration;
                SolveProgress::NextLadder {
                    score: self.score,
                    puzzle,
                }
            }
            Err(e) => {
                warn!(error = %e, "could not generate next ladder");
                SolveProgress::Finished(self.finish(FinishReason::LadderFailed))
            }
        }
    }

    /// End the run at the player's request
    ///
    /// Returns `None` if no run was in progress.
    pub fn stop(&mut self) -> Option<RunSummary> {
        self.is_running()
            .then(|| self.finish(FinishReason::Stopped))
    }

    fn finish(&mut self, reason: FinishReason) -> RunSummary {
        if let Some(mut countdown) = self.countdown.take() {
            countdown.cancel();
        }

        self.state = match reason {
            FinishReason::Expired => RunState::Expired,
            FinishReason::Stopped | FinishReason::LadderFailed => RunState::Idle,
        };

        let outcome = self
            .bests
            .submit(self.settings.length, self.settings.duration, self.score);
        let saved = !outcome.is_recovered();

        let summary = RunSummary {
            settings: self.settings,
            score: self.score,
            reason,
            best: outcome.into_value(),
            saved,
        };
        info!(
            score = summary.score,
            best = summary.best.best,
            new_best = summary.best.improved,
            ?reason,
            "timed run finished"
        );
        summary
    }
}
