//! Morphonyms - CLI
//!
//! Word-ladder puzzles in the terminal: daily puzzle with streaks, freeplay
//! and timed runs, plus move checking and ladder solving.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use morphonyms::{
    commands::{PlayOptions, check_move, daily_info, puzzle_reports, run_play, solve_ladder},
    config::GameConfig,
    dictionary::{
        DictionaryCache, DirectorySource, MAX_WORD_LENGTH, MIN_WORD_LENGTH, is_supported_length,
    },
    game::ModeKind,
    output::{print_check_result, print_daily_info, print_puzzle_reports, print_solve_result},
    solver::DEFAULT_MAX_MOVES,
    stats::StatsStore,
    storage::{FileStore, KeyValueStore},
    timed::TimedSettings,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "morphonyms",
    about = "Word ladders: add one, drop one, change one, or swap two letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of <length>.txt word lists (default: bundled lists)
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Directory for streaks and personal bests
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: <config dir>/morphonyms/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Mode: daily (default), freeplay, timed
        #[arg(short, long, default_value = "daily", value_parser = ["daily", "freeplay", "free", "timed"])]
        mode: String,

        /// Word length for freeplay and timed ladders
        #[arg(short, long)]
        length: Option<usize>,

        /// Seconds per ladder in timed mode
        #[arg(short = 't', long)]
        duration: Option<u32>,
    },

    /// Check whether one word reaches another in a single move
    Check {
        /// Current word
        from: String,
        /// Candidate next word
        to: String,
    },

    /// Find a shortest ladder between two words
    Solve {
        start: String,
        target: String,

        /// Give up after this many moves
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_MOVES)]
        max_moves: usize,
    },

    /// Show today's puzzle, its par and your streak
    Daily,

    /// List the daily rotation with par for each puzzle
    Puzzles,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Build the dictionary cache from the flag, config, or bundled lists
fn build_cache(cli: &Cli, config: &GameConfig) -> Arc<DictionaryCache> {
    let dir = cli.dict.clone().or_else(|| config.dictionary_dir.clone());
    let cache = match dir {
        Some(dir) => {
            info!(dir = %dir.display(), "using word lists from directory");
            DictionaryCache::new(DirectorySource::new(dir))
        }
        None => DictionaryCache::embedded(),
    };
    Arc::new(cache)
}

fn build_store(cli: &Cli, config: &GameConfig) -> Result<Arc<dyn KeyValueStore>> {
    let dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.data_dir()?,
    };
    debug!(dir = %dir.display(), "data directory");
    Ok(Arc::new(FileStore::new(dir)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let cache = build_cache(&cli, &config);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play {
        mode: "daily".to_string(),
        length: None,
        duration: None,
    });

    match command {
        Commands::Play {
            mode,
            length,
            duration,
        } => {
            let mode = ModeKind::from_name(&mode).unwrap_or(ModeKind::Daily);
            if let Some(length) = length {
                ensure!(
                    is_supported_length(length),
                    "Word length must be between {MIN_WORD_LENGTH} and {MAX_WORD_LENGTH}"
                );
            }
            let store = build_store(&cli, &config)?;
            let options = PlayOptions {
                mode,
                freeplay_length: length.unwrap_or(config.freeplay_length),
                timed: TimedSettings {
                    length: length.unwrap_or(config.timed_length),
                    duration: duration.unwrap_or(config.timed_duration),
                },
            };
            run_play(cache, store, options).await
        }
        Commands::Check { from, to } => {
            let result = check_move(&cache, &from, &to).await;
            print_check_result(&result);
            Ok(())
        }
        Commands::Solve {
            start,
            target,
            max_moves,
        } => {
            let result = solve_ladder(&cache, &start, &target, max_moves).await?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Daily => {
            let stats = StatsStore::new(build_store(&cli, &config)?);
            let info = daily_info(&cache, &stats).await;
            print_daily_info(&info);
            Ok(())
        }
        Commands::Puzzles => {
            let reports = puzzle_reports(&cache).await?;
            print_puzzle_reports(&reports);
            Ok(())
        }
    }
}
