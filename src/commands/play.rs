//! Interactive play mode
//!
//! Reads guesses and slash commands from stdin. In timed mode the countdown
//! runs alongside input, so ticks are printed while waiting for a guess.

use crate::dictionary::DictionaryCache;
use crate::game::{DailyMode, FreeplayMode, Game, Mode, ModeKind, TimedMode};
use crate::output::display::{
    print_board, print_help, print_play_banner, print_prompt, print_share, print_status,
    print_tick,
};
use crate::puzzle::{Puzzle, today_puzzle};
use crate::stats::{PersonalBests, StatsStore};
use crate::storage::KeyValueStore;
use crate::timed::{TickOutcome, TimedError, TimedRunController, TimedSettings};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

/// Ladder shown before the first random or timed ladder
const OPENING_PUZZLE: (&str, &str) = ("COLD", "WARM");

/// Settings for an interactive session
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub mode: ModeKind,
    pub freeplay_length: usize,
    pub timed: TimedSettings,
}

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Guess(String),
    Reset,
    Next,
    Custom { start: String, target: String },
    Length(usize),
    SwitchMode(ModeKind),
    Start { length: Option<usize>, duration: Option<u32> },
    Stop,
    Share,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line; anything not starting with `/` is a guess
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    let Some(command) = line.strip_prefix('/') else {
        return Input::Guess(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match parts.next().unwrap_or_default().to_ascii_lowercase().as_str() {
        "reset" | "r" => Input::Reset,
        "next" | "n" => Input::Next,
        "new" => match (parts.next(), parts.next()) {
            (Some(start), Some(target)) => Input::Custom {
                start: start.to_string(),
                target: target.to_string(),
            },
            _ => Input::Unknown(line.to_string()),
        },
        "start" => Input::Start {
            length: parts.next().and_then(|p| p.parse().ok()),
            duration: parts.next().and_then(|p| p.parse().ok()),
        },
        "length" | "len" => match parts.next().and_then(|p| p.parse().ok()) {
            Some(length) => Input::Length(length),
            None => Input::Unknown(line.to_string()),
        },
        "mode" | "m" => match parts.next().and_then(ModeKind::from_name) {
            Some(kind) => Input::SwitchMode(kind),
            None => Input::Unknown(line.to_string()),
        },
        "stop" => Input::Stop,
        "share" => Input::Share,
        "help" | "h" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}

/// Builds modes on demand, remembering the player's latest choices
pub struct ModeBuilder {
    store: Arc<dyn KeyValueStore>,
    options: PlayOptions,
}

impl ModeBuilder {
    pub fn new(store: Arc<dyn KeyValueStore>, options: PlayOptions) -> Self {
        Self { store, options }
    }

    #[must_use]
    pub const fn options(&self) -> PlayOptions {
        self.options
    }

    /// Remember the length random freeplay ladders should use
    pub fn set_freeplay_length(&mut self, length: usize) {
        self.options.freeplay_length = length;
    }

    /// A fresh mode of `kind` and the ladder it opens on
    ///
    /// # Errors
    ///
    /// Returns an error if the timed settings are invalid.
    pub async fn build(
        &self,
        kind: ModeKind,
        cache: &DictionaryCache,
    ) -> Result<(Mode, Puzzle), TimedError> {
        let opening = || Puzzle::new(OPENING_PUZZLE.0, OPENING_PUZZLE.1);
        let store = Arc::clone(&self.store);

        match kind {
            ModeKind::Daily => {
                let daily = today_puzzle();
                let puzzle = daily.puzzle.clone();
                Ok((Mode::Daily(DailyMode::new(daily, StatsStore::new(store))), puzzle))
            }
            ModeKind::Freeplay => {
                let mut freeplay = FreeplayMode::new(self.options.freeplay_length);
                let puzzle = match freeplay.next_random(cache).await {
                    Ok(puzzle) => puzzle,
                    Err(e) => {
                        warn!(error = %e, "no random ladder, using the opening puzzle");
                        opening()?
                    }
                };
                Ok((Mode::Freeplay(freeplay), puzzle))
            }
            ModeKind::Timed => {
                let mut controller = TimedRunController::new(PersonalBests::new(store));
                controller.configure(self.options.timed)?;
                Ok((Mode::Timed(TimedMode::new(controller)), opening()?))
            }
        }
    }
}

/// Build a game in the builder's starting mode
///
/// # Errors
///
/// Returns an error if the timed settings are invalid.
pub async fn new_game(
    cache: Arc<DictionaryCache>,
    modes: &ModeBuilder,
) -> Result<Game, TimedError> {
    let (mode, puzzle) = modes.build(modes.options().mode, &cache).await?;
    Ok(Game::new(mode, puzzle, cache).await)
}

/// Run the interactive loop until `/quit` or end of input
///
/// # Errors
///
/// Returns an error if stdin or stdout fail, or the game cannot be set up.
pub async fn run_play(
    cache: Arc<DictionaryCache>,
    store: Arc<dyn KeyValueStore>,
    options: PlayOptions,
) -> anyhow::Result<()> {
    let mut modes = ModeBuilder::new(store, options);
    let mut game = new_game(cache, &modes).await?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_play_banner(&game);
    print_board(&game);
    print_prompt()?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_input(&mut game, &mut modes, parse_input(&line)).await {
                    break;
                }
                print_prompt()?;
            }
            tick = game.next_tick() => match tick {
                TickOutcome::Remaining(seconds) => {
                    if seconds <= 5 || seconds % 10 == 0 {
                        print_tick(seconds);
                        print_prompt()?;
                    }
                }
                TickOutcome::Finished(summary) => {
                    print_status(&summary.message());
                    print_board(&game);
                    print_prompt()?;
                }
                TickOutcome::Idle => {}
            },
        }
    }

    // Leaving mid-run counts as stopping it
    if game.is_run_active() {
        print_status(&game.stop_run());
    }
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Apply one input; false means quit
async fn handle_input(game: &mut Game, modes: &mut ModeBuilder, input: Input) -> bool {
    debug!(?input, "input");
    let status = match input {
        Input::Empty => return true,
        Input::Quit => return false,
        Input::Help => {
            print_help(game.mode().kind());
            return true;
        }
        Input::Share => {
            print_share(&game.share());
            return true;
        }
        Input::Guess(word) => game.submit(&word).await,
        Input::Reset => game.reset(),
        Input::Next => game.next_random().await,
        Input::Custom { start, target } => game.custom(&start, &target).await,
        Input::Length(length) => {
            let status = game.set_length(length).await;
            if let Mode::Freeplay(freeplay) = game.mode() {
                modes.set_freeplay_length(freeplay.length());
            }
            status
        }
        Input::SwitchMode(kind) => {
            let built = modes.build(kind, game.cache()).await;
            match built {
                Ok((mode, puzzle)) => {
                    let stopped = game.switch_mode(mode, puzzle).await;
                    print_play_banner(game);
                    stopped
                }
                Err(e) => e.to_string(),
            }
        }
        Input::Start { length, duration } => {
            let base = match game.mode() {
                Mode::Timed(timed) => timed.controller().settings(),
                _ => TimedSettings::default(),
            };
            let settings = TimedSettings {
                length: length.unwrap_or(base.length),
                duration: duration.unwrap_or(base.duration),
            };
            game.start_run(settings).await
        }
        Input::Stop => game.stop_run(),
        Input::Unknown(line) => format!("Unknown command: {line} (try /help)"),
    };

    if !status.is_empty() {
        print_status(&status);
    }
    print_board(game);
    true
}
