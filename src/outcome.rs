//! Recoverable-failure results
//!
//! The engine never lets a dictionary or storage failure stop the game.
//! Instead of swallowing errors, operations that fail open return an
//! [`Outcome`] so callers (and tests) can see which path was taken.

use std::fmt;

/// A value that was either produced normally or substituted after a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation succeeded
    Ok(T),
    /// The operation failed; `value` is the default or best-effort result
    Recovered { value: T, reason: String },
}

impl<T> Outcome<T> {
    /// Build a recovered outcome from any displayable error
    pub fn recovered(value: T, reason: impl fmt::Display) -> Self {
        Self::Recovered {
            value,
            reason: reason.to_string(),
        }
    }

    /// Borrow the carried value regardless of path
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Ok(value) | Self::Recovered { value, .. } => value,
        }
    }

    /// Take the carried value regardless of path
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Ok(value) | Self::Recovered { value, .. } => value,
        }
    }

    /// True if a failure was absorbed
    #[must_use]
    pub const fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }

    /// The absorbed failure, if any
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Recovered { reason, .. } => Some(reason),
        }
    }

    /// Transform the carried value, keeping the path
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Recovered { value, reason } => Outcome::Recovered {
                value: f(value),
                reason,
            },
        }
    }
}
