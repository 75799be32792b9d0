//! Plain-text formatting helpers

use crate::core::Word;
use crate::game::ModeKind;
use crate::puzzle::DayId;

/// Link appended to share cards
pub const SHARE_URL: &str = "https://morphonyms.vercel.app";

/// "1 move", "3 moves"
#[must_use]
pub fn plural_moves(moves: usize) -> String {
    if moves == 1 {
        "1 move".to_string()
    } else {
        format!("{moves} moves")
    }
}

/// Words joined with arrows
#[must_use]
pub fn format_path(path: &[Word]) -> String {
    path.iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Emoji result card for sharing
///
/// Daily results carry the day id; other modes carry the mode name. One
/// green square per move, at least one.
///
/// # Examples
/// ```
/// use morphonyms::core::Word;
/// use morphonyms::game::ModeKind;
/// use morphonyms::output::formatters::share_text;
///
/// let path: Vec<Word> = ["FOOL", "FOUL", "FOUR"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let card = share_text(ModeKind::Freeplay, None, &path);
/// assert!(card.starts_with("Morphonyms (freeplay) — 2 moves\n🟩🟩\n"));
/// ```
#[must_use]
pub fn share_text(mode: ModeKind, day: Option<DayId>, path: &[Word]) -> String {
    let moves = path.len().saturating_sub(1);
    let header = match (mode, day) {
        (ModeKind::Daily, Some(day)) => format!("Morphonyms #{day} — {}", plural_moves(moves)),
        _ => format!("Morphonyms ({mode}) — {}", plural_moves(moves)),
    };
    let bar = "🟩".repeat(moves.max(1));

    format!("{header}\n{bar}\nPath: {}\n{SHARE_URL}", format_path(path))
}

/// Seconds as a countdown label
#[must_use]
pub fn format_remaining(seconds: u32) -> String {
    format!("{seconds}s")
}
