//! Display functions for command results and the play screen

use super::formatters::{format_path, format_remaining, plural_moves};
use crate::commands::{CheckResult, DailyInfo, PuzzleReport, SolveResult};
use crate::core::classify;
use crate::game::{Game, GameState, Mode, ModeKind, ModeRules};
use crate::outcome::Outcome;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of checking a move
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} → {}",
        result.from.bright_yellow().bold(),
        result.to.bright_yellow().bold()
    );

    match result.kind {
        Some(kind) => println!("  Move:       {} {}", "✓".green(), kind.describe()),
        None => println!(
            "  Move:       {} not a single add, drop, change, or swap",
            "✗".red()
        ),
    }

    match &result.in_dictionary {
        Outcome::Ok(true) => println!("  Dictionary: {} found", "✓".green()),
        Outcome::Ok(false) => println!("  Dictionary: {} not found", "✗".red()),
        Outcome::Recovered { reason, .. } => {
            println!("  Dictionary: {} unavailable ({reason})", "?".yellow());
        }
    }

    println!();
    if result.is_playable() {
        println!("{}", "Playable move".green().bold());
    } else {
        println!("{}", "Not playable".red().bold());
    }
}

/// Print the result of a ladder search
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.bright_yellow().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.ladder {
        Some(ladder) => {
            for (i, pair) in ladder.words().windows(2).enumerate() {
                let kind = classify(pair[0].text(), pair[1].text())
                    .map_or("", |k| k.describe());
                println!("  {}. {} → {}  {}", i + 1, pair[0], pair[1], kind.dimmed());
            }
            println!();
            println!(
                "{}",
                format!("✅ Shortest ladder: {}", plural_moves(ladder.moves()))
                    .green()
                    .bold()
            );
        }
        None => println!(
            "{}",
            format!("❌ No ladder within {}", plural_moves(result.max_moves))
                .red()
                .bold()
        ),
    }
}

/// Print today's puzzle summary
pub fn print_daily_info(info: &DailyInfo) {
    println!(
        "\n{} #{}",
        "Morphonyms daily".bright_cyan().bold(),
        info.daily.id
    );
    println!(
        "  Puzzle: {}",
        info.daily.puzzle.to_string().bright_yellow().bold()
    );
    match info.par {
        Some(par) => println!("  Par:    {}", plural_moves(par)),
        None => println!("  Par:    unknown"),
    }
    println!("  Streak: {}", info.stats.streak);
    if let Some(last) = info.stats.last_win_day_id {
        let note = if last == info.daily.id {
            "solved today".green()
        } else {
            format!("last win #{last}").normal()
        };
        println!("          {note}");
    }
    println!();
}

/// Print the daily rotation with par for each puzzle
pub fn print_puzzle_reports(reports: &[PuzzleReport]) {
    println!("\n{}", "Daily rotation".bright_cyan().bold());
    for report in reports {
        let par = report
            .ladder
            .as_ref()
            .map_or_else(|| "unsolvable".red().to_string(), |l| plural_moves(l.moves()));
        println!(
            "  {:>2}. {:<6} → {:<6} {}",
            report.index,
            report.start,
            report.target,
            par
        );
        if let Some(ladder) = &report.ladder {
            println!("      {}", ladder.to_string().dimmed());
        }
    }
    println!();
}

/// Print the play-mode banner and rules
pub fn print_play_banner(game: &Game) {
    println!("\n{}", "╔══════════════════════════════════════════╗".cyan());
    println!("{}", "║               Morphonyms                 ║".cyan());
    println!("{}", "╚══════════════════════════════════════════╝".cyan());
    println!(
        "\n{} mode. Each move: add one, drop one, change one, or swap two letters.",
        game.mode().label().bold()
    );
    println!("Every step must be in the dictionary. Type /help for commands.\n");
}

/// Print the current ladder, path and mode details
pub fn print_board(game: &Game) {
    let session = game.session();
    let puzzle = session.puzzle();

    let details = match game.mode() {
        Mode::Daily(daily) => format!("#{} • Streak {}", daily.daily().id, daily.streak()),
        Mode::Freeplay(freeplay) => format!("{}-letter random", freeplay.length()),
        Mode::Timed(timed) => {
            let run = timed.controller();
            let clock = if run.is_running() {
                format_remaining(run.remaining())
            } else {
                "—".to_string()
            };
            format!(
                "Score {} • PR {} • {}",
                run.score(),
                run.personal_best(),
                clock
            )
        }
    };

    println!(
        "\n{} {}  {}",
        game.mode().label().bold(),
        details.dimmed(),
        puzzle.to_string().bright_yellow().bold()
    );
    println!(
        "  Path: {}  ({})",
        format_path(session.path()),
        plural_moves(session.moves())
    );
    if session.state() == GameState::Won {
        println!("  {}", "Solved!".green().bold());
    }
}

/// Print a status line
pub fn print_status(message: &str) {
    println!("{}", message.bright_white().bold());
}

/// Print the countdown
pub fn print_tick(seconds: u32) {
    let label = format!("⏱  {}", format_remaining(seconds));
    if seconds <= 5 {
        println!("\n{}", label.red().bold());
    } else {
        println!("\n{}", label.yellow());
    }
}

/// Print a share card
pub fn print_share(card: &str) {
    println!("\n{card}\n");
}

/// Print the input prompt without a newline
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed.
pub fn print_prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

/// Print the commands available in `mode`
pub fn print_help(mode: ModeKind) {
    println!("\nType a word to play it. Commands:");
    println!("  /reset          start this ladder over");
    if mode == ModeKind::Freeplay {
        println!("  /next           new random ladder");
        println!("  /length N       random ladders of N letters");
        println!("  /new A B        play from A to B");
    }
    if mode == ModeKind::Timed {
        println!("  /start [L] [S]  start a run (length L, S seconds per ladder)");
        println!("  /stop           end the run");
    }
    println!("  /mode M         switch to daily, freeplay or timed");
    println!("  /share          show a share card");
    println!("  /quit           leave\n");
}
