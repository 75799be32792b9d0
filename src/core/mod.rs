//! Core domain types for word ladders
//!
//! Word normalization and the single-move rule. Everything here is pure and
//! has no knowledge of dictionaries or game state.

mod morph;
mod word;

pub use morph::{MorphKind, classify, is_one_morph};
pub use word::{Word, WordError, normalize};
