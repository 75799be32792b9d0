//! Ladder word representation
//!
//! A Word is a trimmed, upper-cased, purely alphabetic string.

use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// Canonicalize raw input into comparable word form
///
/// Trims surrounding whitespace and upper-cases. Total and idempotent:
/// `normalize(&normalize(x)) == normalize(x)`.
///
/// # Examples
/// ```
/// use morphonyms::core::normalize;
///
/// assert_eq!(normalize("  cold\n"), "COLD");
/// assert_eq!(normalize(&normalize(" Warm ")), normalize(" Warm "));
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

/// A normalized ladder word
///
/// Equality and hashing are on the normalized text, so `Word::new("cold")`
/// equals `Word::new("COLD")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word is empty")]
    Empty,
    #[error("Word must contain only letters A-Z, got '{0}'")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from raw text
    ///
    /// # Errors
    /// Returns `WordError` if the normalized text is empty or contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use morphonyms::core::Word;
    ///
    /// let word = Word::new(" cold ").unwrap();
    /// assert_eq!(word.text(), "COLD");
    ///
    /// assert!(Word::new("c0ld").is_err());
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self(text))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Get the word as bytes (always ASCII)
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash and Eq are derived from the inner String, so lookups by &str agree
impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}
