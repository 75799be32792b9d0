//! Dictionary word lists and the length-partitioned cache
//!
//! Word lists are addressed by length: one newline-delimited list of
//! upper-case words per supported length. Lists are fetched on demand from a
//! [`WordSource`] and held by a [`DictionaryCache`].

mod bucket;
mod cache;
mod embedded;
mod source;

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

pub use bucket::Bucket;
pub use cache::{DictionaryCache, WarmReport};
pub use embedded::EMBEDDED_LISTS;
pub use source::{DirectorySource, EmbeddedSource, WordSource};

/// Shortest word length with a word list
pub const MIN_WORD_LENGTH: usize = 2;

/// Longest word length with a word list
pub const MAX_WORD_LENGTH: usize = 15;

/// Whether a word list can exist for this length
#[must_use]
pub const fn is_supported_length(length: usize) -> bool {
    length >= MIN_WORD_LENGTH && length <= MAX_WORD_LENGTH
}

/// Errors loading a word list
///
/// Cloneable so one failed load can be handed to every requester waiting on it.
#[derive(Debug, Clone, Error)]
pub enum DictionaryError {
    #[error("Word length {0} is outside the supported range {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH}")]
    UnsupportedLength(usize),

    #[error("No word list available for length {0}")]
    Unavailable(usize),

    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },
}
