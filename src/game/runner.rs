//! Front-end facing game driver
//!
//! Every operation returns the status line to show; the front end only
//! renders and forwards input.

use super::{GameSession, GuessOutcome, Mode, ModeKind, ModeRules, SolveAction};
use crate::dictionary::{DictionaryCache, MAX_WORD_LENGTH, MIN_WORD_LENGTH, is_supported_length};
use crate::output::share_text;
use crate::puzzle::Puzzle;
use crate::timed::{TickOutcome, TimedSettings};
use std::sync::Arc;
use tracing::debug;

/// A session, its mode and the dictionary they share
pub struct Game {
    session: GameSession,
    mode: Mode,
    cache: Arc<DictionaryCache>,
}

impl Game {
    /// Begin playing `puzzle` under `mode`, warming the dictionary around it
    pub async fn new(mode: Mode, puzzle: Puzzle, cache: Arc<DictionaryCache>) -> Self {
        let mut game = Self {
            session: GameSession::new(puzzle.clone()),
            mode,
            cache,
        };
        game.load_puzzle(puzzle).await;
        game
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn mode_mut(&mut self) -> &mut Mode {
        &mut self.mode
    }

    #[must_use]
    pub fn cache(&self) -> &DictionaryCache {
        &self.cache
    }

    /// True while a timed run is counting down
    #[must_use]
    pub const fn is_run_active(&self) -> bool {
        matches!(&self.mode, Mode::Timed(timed) if timed.controller().is_running())
    }

    /// Swap in a new ladder and warm the word lengths it will need
    pub async fn load_puzzle(&mut self, puzzle: Puzzle) {
        let start_len = puzzle.start.len();
        let target_len = puzzle.target.len();
        self.session.restart(puzzle);

        let start = self.cache.warm(start_len).await;
        if target_len != start_len {
            self.cache.warm(target_len).await;
        }
        debug!(loaded = ?start.loaded, failed = ?start.failed, "dictionary warmed");
    }

    /// Submit a guess and report the result
    pub async fn submit(&mut self, raw: &str) -> String {
        let outcome = self.session.submit(raw, &self.cache).await;
        let GuessOutcome::Solved { moves } = outcome else {
            return outcome.message().unwrap_or_default();
        };

        let action = self.mode.on_solve(moves, &self.cache).await;
        let message = action.message().to_string();
        if let SolveAction::NextLadder { puzzle, .. } = action {
            self.load_puzzle(puzzle).await;
        }
        message
    }

    /// Start the current ladder over
    pub fn reset(&mut self) -> String {
        self.session.reset();
        String::new()
    }

    /// New random ladder in freeplay
    pub async fn next_random(&mut self) -> String {
        let Mode::Freeplay(freeplay) = &mut self.mode else {
            return "Random ladders are only available in freeplay.".to_string();
        };
        match freeplay.next_random(&self.cache).await {
            Ok(puzzle) => {
                self.load_puzzle(puzzle).await;
                String::new()
            }
            Err(e) => {
                debug!(error = %e, "random ladder failed");
                "Couldn't load dictionary for that length.".to_string()
            }
        }
    }

    /// Change the freeplay word length and draw a ladder of that length
    pub async fn set_length(&mut self, length: usize) -> String {
        let Mode::Freeplay(freeplay) = &mut self.mode else {
            return "Word length can only be changed in freeplay.".to_string();
        };
        if !is_supported_length(length) {
            return format!("Word length must be between {MIN_WORD_LENGTH} and {MAX_WORD_LENGTH}.");
        }
        freeplay.set_length(length);
        self.next_random().await
    }

    /// Player-chosen ladder in freeplay
    pub async fn custom(&mut self, start: &str, target: &str) -> String {
        if self.mode.kind() != ModeKind::Freeplay {
            return "Custom ladders are only available in freeplay.".to_string();
        }
        match Puzzle::new(start, target) {
            Ok(puzzle) => {
                self.load_puzzle(puzzle).await;
                String::new()
            }
            Err(e) => e.to_string(),
        }
    }

    /// Begin a timed run
    pub async fn start_run(&mut self, settings: TimedSettings) -> String {
        let Mode::Timed(timed) = &mut self.mode else {
            return "Runs are only available in timed mode.".to_string();
        };
        match timed.start(settings, &self.cache).await {
            Ok(puzzle) => {
                self.load_puzzle(puzzle).await;
                "Go!".to_string()
            }
            Err(e) => e.to_string(),
        }
    }

    /// End the timed run early
    pub fn stop_run(&mut self) -> String {
        let Mode::Timed(timed) = &mut self.mode else {
            return "Runs are only available in timed mode.".to_string();
        };
        timed
            .controller_mut()
            .stop()
            .map_or_else(|| "No run in progress.".to_string(), |s| s.message())
    }

    /// Replace the mode and its ladder
    ///
    /// An active timed run is stopped first, so its countdown is cancelled and
    /// its score submitted. Returns that run's summary line, if any.
    pub async fn switch_mode(&mut self, mode: Mode, puzzle: Puzzle) -> String {
        let stopped = match &mut self.mode {
            Mode::Timed(timed) => timed.controller_mut().stop().map(|s| s.message()),
            _ => None,
        };
        debug!(from = %self.mode.kind(), to = %mode.kind(), "switching mode");
        self.mode = mode;
        self.load_puzzle(puzzle).await;
        stopped.unwrap_or_default()
    }

    /// Wait for the next countdown tick
    ///
    /// Never resolves unless a timed run is active, so it can sit in a
    /// `select!` next to input.
    pub async fn next_tick(&mut self) -> TickOutcome {
        match &mut self.mode {
            Mode::Timed(timed) if timed.controller().is_running() => {
                timed.controller_mut().next_tick().await
            }
            _ => std::future::pending().await,
        }
    }

    /// Emoji share card for the current path
    #[must_use]
    pub fn share(&self) -> String {
        let day = match &self.mode {
            Mode::Daily(daily) => Some(daily.daily().id),
            _ => None,
        };
        share_text(self.mode.kind(), day, self.session.path())
    }
}
