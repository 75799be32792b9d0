//! Per-mode completion rules
//!
//! Each mode decides what a solve means: daily records a streak, freeplay
//! just reports, timed scores and moves on. [`Mode`] selects one at runtime
//! while keeping static dispatch.

use super::ModeKind;
use crate::dictionary::DictionaryCache;
use crate::output::plural_moves;
use crate::puzzle::{DailyPuzzle, Puzzle, PuzzleError, random_puzzle};
use crate::stats::StatsStore;
use crate::timed::{RunSummary, SolveProgress, TimedError, TimedRunController, TimedSettings};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// What the session should do after the target is reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveAction {
    /// The ladder is done; stay on it until reset
    Finished { message: String },
    /// Continue on a fresh ladder
    NextLadder { puzzle: Puzzle, message: String },
    /// A timed run ended while moving to the next ladder
    RunEnded { summary: RunSummary, message: String },
}

impl SolveAction {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Finished { message }
            | Self::NextLadder { message, .. }
            | Self::RunEnded { message, .. } => message,
        }
    }
}

/// Completion contract shared by every mode
#[allow(async_fn_in_trait)]
pub trait ModeRules {
    /// Short name shown to the player
    fn label(&self) -> &'static str;

    /// React to the current ladder being solved in `moves` moves
    async fn on_solve(&mut self, moves: usize, cache: &DictionaryCache) -> SolveAction;
}

/// Today's fixed puzzle with streak tracking
pub struct DailyMode {
    daily: DailyPuzzle,
    stats: StatsStore,
}

impl DailyMode {
    pub fn new(daily: DailyPuzzle, stats: StatsStore) -> Self {
        Self { daily, stats }
    }

    #[must_use]
    pub const fn daily(&self) -> &DailyPuzzle {
        &self.daily
    }

    /// Current streak, 0 if unreadable
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.stats.load().into_value().streak
    }
}

impl ModeRules for DailyMode {
    fn label(&self) -> &'static str {
        "Daily"
    }

    async fn on_solve(&mut self, moves: usize, _cache: &DictionaryCache) -> SolveAction {
        // The win counts for the puzzle's day, even if midnight has passed
        let stats = self.stats.record_win(self.daily.id).into_value();
        SolveAction::Finished {
            message: format!(
                "Nice! Solved in {}. Streak: {}",
                plural_moves(moves),
                stats.streak
            ),
        }
    }
}

/// Player-chosen or random ladders with no scoring
pub struct FreeplayMode {
    length: usize,
    rng: StdRng,
}

impl FreeplayMode {
    pub fn new(length: usize) -> Self {
        Self::with_rng(length, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_rng(length: usize, rng: StdRng) -> Self {
        Self { length, rng }
    }

    /// Word length used for random ladders
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    /// Draw a random ladder of the configured length
    ///
    /// # Errors
    /// Returns `PuzzleError` if no ladder of that length can be generated.
    pub async fn next_random(&mut self, cache: &DictionaryCache) -> Result<Puzzle, PuzzleError> {
        random_puzzle(cache, self.length, &mut self.rng).await
    }
}

impl ModeRules for FreeplayMode {
    fn label(&self) -> &'static str {
        "Freeplay"
    }

    async fn on_solve(&mut self, moves: usize, _cache: &DictionaryCache) -> SolveAction {
        SolveAction::Finished {
            message: format!("Solved in {}.", plural_moves(moves)),
        }
    }
}

/// Score as many ladders as possible against the clock
pub struct TimedMode {
    controller: TimedRunController,
}

impl TimedMode {
    pub fn new(controller: TimedRunController) -> Self {
        Self { controller }
    }

    #[must_use]
    pub const fn controller(&self) -> &TimedRunController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TimedRunController {
        &mut self.controller
    }

    /// Start a run and return its first ladder
    ///
    /// # Errors
    /// See [`TimedRunController::start`].
    pub async fn start(
        &mut self,
        settings: TimedSettings,
        cache: &DictionaryCache,
    ) -> Result<Puzzle, TimedError> {
        self.controller.start(settings, cache).await
    }
}

impl ModeRules for TimedMode {
    fn label(&self) -> &'static str {
        "Timed"
    }

    async fn on_solve(&mut self, moves: usize, cache: &DictionaryCache) -> SolveAction {
        match self.controller.record_solve(cache).await {
            SolveProgress::NextLadder { score, puzzle } => SolveAction::NextLadder {
                puzzle,
                message: format!("✅ {score} solved — next!"),
            },
            SolveProgress::Finished(summary) => SolveAction::RunEnded {
                message: summary.message(),
                summary,
            },
            // Solved outside a run: nothing to score
            SolveProgress::NotRunning => SolveAction::Finished {
                message: format!("Solved in {}.", plural_moves(moves)),
            },
        }
    }
}

/// Runtime choice of mode
pub enum Mode {
    Daily(DailyMode),
    Freeplay(FreeplayMode),
    Timed(TimedMode),
}

impl Mode {
    #[must_use]
    pub const fn kind(&self) -> ModeKind {
        match self {
            Self::Daily(_) => ModeKind::Daily,
            Self::Freeplay(_) => ModeKind::Freeplay,
            Self::Timed(_) => ModeKind::Timed,
        }
    }
}

impl ModeRules for Mode {
    fn label(&self) -> &'static str {
        match self {
            Self::Daily(m) => m.label(),
            Self::Freeplay(m) => m.label(),
            Self::Timed(m) => m.label(),
        }
    }

    async fn on_solve(&mut self, moves: usize, cache: &DictionaryCache) -> SolveAction {
        match self {
            Self::Daily(m) => m.on_solve(moves, cache).await,
            Self::Freeplay(m) => m.on_solve(moves, cache).await,
            Self::Timed(m) => m.on_solve(moves, cache).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DirectorySource;
    use crate::puzzle::puzzle_for_day;
    use crate::stats::PersonalBests;
    use crate::storage::MemoryStore;
    use crate::timed::{FinishReason, TimedSettings};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn timed_mode() -> (TimedMode, PersonalBests) {
        let bests = PersonalBests::new(Arc::new(MemoryStore::new()));
        let controller = TimedRunController::with_rng(bests.clone(), StdRng::seed_from_u64(3));
        (TimedMode::new(controller), bests)
    }

    #[tokio::test]
    async fn daily_solve_records_streak_for_puzzle_day() {
        let cache = DictionaryCache::embedded();
        let stats = StatsStore::new(Arc::new(MemoryStore::new()));
        let mut mode = DailyMode::new(puzzle_for_day(20_000), stats.clone());

        let action = mode.on_solve(4, &cache).await;

        assert_eq!(action.message(), "Nice! Solved in 4 moves. Streak: 1");
        assert_eq!(stats.load().into_value().last_win_day_id, Some(20_000));
        assert_eq!(mode.streak(), 1);

        // Solving the same day again does not inflate the streak
        mode.on_solve(2, &cache).await;
        assert_eq!(mode.streak(), 1);
    }

    #[tokio::test]
    async fn daily_streak_continues_across_days() {
        let cache = DictionaryCache::embedded();
        let stats = StatsStore::new(Arc::new(MemoryStore::new()));

        DailyMode::new(puzzle_for_day(99), stats.clone())
            .on_solve(3, &cache)
            .await;
        let action = DailyMode::new(puzzle_for_day(100), stats.clone())
            .on_solve(3, &cache)
            .await;

        assert_eq!(action.message(), "Nice! Solved in 3 moves. Streak: 2");
    }

    #[tokio::test]
    async fn freeplay_solve_is_plain_message() {
        let cache = DictionaryCache::embedded();
        let mut mode = FreeplayMode::with_rng(4, StdRng::seed_from_u64(1));

        assert_eq!(
            mode.on_solve(5, &cache).await,
            SolveAction::Finished {
                message: "Solved in 5 moves.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn freeplay_next_random_uses_length() {
        let cache = DictionaryCache::embedded();
        let mut mode = FreeplayMode::with_rng(3, StdRng::seed_from_u64(8));

        let puzzle = mode.next_random(&cache).await.unwrap();
        assert_eq!(puzzle.start.len(), 3);
        assert_eq!(puzzle.target.len(), 3);
        assert_ne!(puzzle.start, puzzle.target);

        mode.set_length(5);
        assert_eq!(mode.next_random(&cache).await.unwrap().start.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn timed_solve_moves_to_next_ladder() {
        let cache = DictionaryCache::embedded();
        let (mut mode, _) = timed_mode();
        mode.start(TimedSettings::default(), &cache).await.unwrap();

        let action = mode.on_solve(3, &cache).await;
        let SolveAction::NextLadder { puzzle, message } = action else {
            panic!("expected a new ladder");
        };
        assert_eq!(message, "✅ 1 solved — next!");
        assert_eq!(puzzle.start.len(), 4);
        assert_eq!(mode.controller().score(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn timed_ladder_failure_ends_run() {
        let cache = DictionaryCache::embedded();
        let empty = TempDir::new().unwrap();
        let broken = DictionaryCache::new(DirectorySource::new(empty.path()));
        let (mut mode, bests) = timed_mode();
        mode.start(TimedSettings::default(), &cache).await.unwrap();

        let SolveAction::RunEnded { summary, message } = mode.on_solve(2, &broken).await else {
            panic!("expected the run to end");
        };
        assert_eq!(summary.reason, FinishReason::LadderFailed);
        assert_eq!(message, "Dictionary error. Run ended. New PR: 1");
        assert_eq!(bests.load(4, 60).into_value(), 1);
    }

    #[tokio::test]
    async fn timed_solve_without_run_does_not_score() {
        let cache = DictionaryCache::embedded();
        let (mut mode, _) = timed_mode();

        let action = mode.on_solve(1, &cache).await;
        assert_eq!(action.message(), "Solved in 1 move.");
        assert_eq!(mode.controller().score(), 0);
    }

    #[test]
    fn mode_dispatch_labels() {
        let stats = StatsStore::new(Arc::new(MemoryStore::new()));
        let daily = Mode::Daily(DailyMode::new(puzzle_for_day(0), stats));
        let freeplay = Mode::Freeplay(FreeplayMode::with_rng(4, StdRng::seed_from_u64(0)));

        assert_eq!(daily.label(), "Daily");
        assert_eq!(daily.kind(), ModeKind::Daily);
        assert_eq!(freeplay.label(), "Freeplay");
        assert_eq!(freeplay.kind(), ModeKind::Freeplay);
    }
}
