//! Single-move rule
//!
//! A move turns one word into another by exactly one of:
//! - Substitution: change one letter (`COLD` -> `GOLD`)
//! - Transposition: swap two letters, any distance apart (`COLD` -> `CLOD`)
//! - Insertion: add one letter anywhere (`COLD` -> `COLDS`)
//! - Deletion: drop one letter anywhere (`COLDS` -> `COLD`)
//!
//! Repeating the current word is never a move.

use super::word::normalize;
use std::fmt;

/// The kind of a legal single move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphKind {
    Substitution,
    Transposition,
    Insertion,
    Deletion,
}

impl MorphKind {
    /// Short human-readable description of the move
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Substitution => "change one letter",
            Self::Transposition => "swap two letters",
            Self::Insertion => "add one letter",
            Self::Deletion => "drop one letter",
        }
    }
}

impl fmt::Display for MorphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Substitution => "substitution",
            Self::Transposition => "transposition",
            Self::Insertion => "insertion",
            Self::Deletion => "deletion",
        };
        write!(f, "{name}")
    }
}

/// Returns true iff `b` is reachable from `a` in exactly one move
///
/// Both inputs are normalized first, so case and surrounding whitespace
/// never matter.
///
/// # Examples
/// ```
/// use morphonyms::core::is_one_morph;
///
/// assert!(is_one_morph("COLD", "GOLD"));   // change
/// assert!(is_one_morph("COLD", "CLOD"));   // swap
/// assert!(is_one_morph("COLD", "COLDS"));  // add
/// assert!(is_one_morph("COLDS", "COLD"));  // drop
/// assert!(!is_one_morph("COLD", "cold"));  // no-op
/// assert!(!is_one_morph("COLD", "WARM"));
/// ```
#[must_use]
pub fn is_one_morph(a: &str, b: &str) -> bool {
    classify(a, b).is_some()
}

/// Classify the move from `a` to `b`, or `None` if it is not a single move
#[must_use]
pub fn classify(a: &str, b: &str) -> Option<MorphKind> {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();

    if a == b {
        return None;
    }

    let (la, lb) = (a.len(), b.len());

    if la == lb {
        classify_same_length(&a, &b)
    } else if lb == la + 1 {
        is_single_insertion(&a, &b).then_some(MorphKind::Insertion)
    } else if la == lb + 1 {
        // Dropping a letter from `a` is inserting it into `b`
        is_single_insertion(&b, &a).then_some(MorphKind::Deletion)
    } else {
        None
    }
}

/// Substitution or transposition between equal-length words
fn classify_same_length(a: &[char], b: &[char]) -> Option<MorphKind> {
    let mut diffs = [0usize; 2];
    let mut count = 0;

    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        if x != y {
            if count == 2 {
                return None;
            }
            diffs[count] = i;
            count += 1;
        }
    }

    match count {
        1 => Some(MorphKind::Substitution),
        2 => {
            let [i, j] = diffs;
            (a[i] == b[j] && a[j] == b[i]).then_some(MorphKind::Transposition)
        }
        _ => None,
    }
}

/// True iff `longer` is `shorter` with exactly one extra character
///
/// Forward two-pointer scan: on the first mismatch skip one character of
/// `longer`; a second mismatch fails. Skipping at the first mismatch is
/// always safe, since any valid insertion point lies at or before it.
fn is_single_insertion(shorter: &[char], longer: &[char]) -> bool {
    debug_assert_eq!(shorter.len() + 1, longer.len());

    let (mut i, mut j) = (0, 0);
    let mut skipped = false;

    while i < shorter.len() && j < longer.len() {
        if shorter[i] == longer[j] {
            i += 1;
            j += 1;
        } else if skipped {
            return false;
        } else {
            skipped = true;
            j += 1;
        }
    }

    true
}
