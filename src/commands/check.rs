//! Move check command
//!
//! Reports whether one word reaches another in a single move and whether the
//! destination is a dictionary word.

use crate::core::{MorphKind, classify, normalize};
use crate::dictionary::DictionaryCache;
use crate::outcome::Outcome;

/// Result of checking a move
pub struct CheckResult {
    pub from: String,
    pub to: String,
    /// `None` if the move is not a single step
    pub kind: Option<MorphKind>,
    pub in_dictionary: Outcome<bool>,
}

impl CheckResult {
    /// Whether the move would be accepted in play
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.kind.is_some() && *self.in_dictionary.value()
    }
}

/// Classify the move from `from` to `to` and look `to` up
pub async fn check_move(cache: &DictionaryCache, from: &str, to: &str) -> CheckResult {
    let kind = classify(from, to);
    let in_dictionary = cache.contains(to).await;

    CheckResult {
        from: normalize(from),
        to: normalize(to),
        kind,
        in_dictionary,
    }
}
