//! Command implementations

pub mod check;
pub mod daily;
pub mod play;
pub mod puzzles;
pub mod solve;

pub use check::{CheckResult, check_move};
pub use daily::{DailyInfo, daily_info, daily_info_for};
pub use play::{Input, ModeBuilder, PlayOptions, new_game, parse_input, run_play};
pub use puzzles::{PuzzleReport, puzzle_reports};
pub use solve::{SolveResult, solve_ladder};
