//! A single-length word list
//!
//! Parsed once from raw text and immutable afterwards.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// All known words of one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    length: usize,
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Bucket {
    /// An empty bucket for `length`
    #[must_use]
    pub fn empty(length: usize) -> Self {
        Self {
            length,
            words: Vec::new(),
            index: FxHashSet::default(),
        }
    }

    /// Parse a newline-delimited word list
    ///
    /// Each line is normalized. Lines that are blank, non-alphabetic, or of
    /// the wrong length are skipped silently, as are duplicates.
    ///
    /// # Examples
    /// ```
    /// use morphonyms::dictionary::Bucket;
    ///
    /// let bucket = Bucket::parse(4, "cold\nWARM\r\nto\nc0de\n\ngold");
    /// assert_eq!(bucket.len(), 3);
    /// assert!(bucket.contains("COLD"));
    /// assert!(!bucket.contains("TO"));
    /// ```
    #[must_use]
    pub fn parse(length: usize, text: &str) -> Self {
        let mut index = FxHashSet::default();
        let mut words = Vec::new();

        for word in text
            .lines()
            .filter_map(|line| Word::new(line).ok())
            .filter(|word| word.len() == length)
        {
            if index.insert(word.clone()) {
                words.push(word);
            }
        }

        words.sort_unstable();

        Self {
            length,
            words,
            index,
        }
    }

    /// Word length this bucket holds
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Membership test on normalized text
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// All words, sorted
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
