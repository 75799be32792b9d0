//! Timed-mode personal bests
//!
//! One integer record per `(word length, run duration)`, stored as a plain
//! decimal string.

use crate::outcome::Outcome;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Storage key for the best score at `length` letters and `duration` seconds
///
/// # Examples
/// ```
/// use morphonyms::stats::personal_best_key;
///
/// assert_eq!(personal_best_key(4, 60), "morph_timed_pr_4_60");
/// assert_ne!(personal_best_key(4, 30), personal_best_key(3, 40));
/// ```
#[must_use]
pub fn personal_best_key(length: usize, duration: u32) -> String {
    format!("morph_timed_pr_{length}_{duration}")
}

/// Result of submitting a finished run's score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestUpdate {
    /// Best before this run
    pub previous: u32,
    /// Best after this run: `max(previous, score)`
    pub best: u32,
    /// True if this run set a new best
    pub improved: bool,
}

/// Owner of the persisted personal-best records
#[derive(Clone)]
pub struct PersonalBests {
    store: Arc<dyn KeyValueStore>,
}

impl PersonalBests {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Best score for a combination, 0 if none recorded
    #[must_use]
    pub fn load(&self, length: usize, duration: u32) -> Outcome<u32> {
        let key = personal_best_key(length, duration);
        match self.store.get(&key) {
            Ok(None) => Outcome::Ok(0),
            Ok(Some(raw)) => match raw.trim().parse::<u32>() {
                Ok(best) => Outcome::Ok(best),
                Err(e) => {
                    warn!(%key, error = %e, "personal best is corrupt, using 0");
                    Outcome::recovered(0, e)
                }
            },
            Err(e) => {
                warn!(%key, error = %e, "could not read personal best, using 0");
                Outcome::recovered(0, e)
            }
        }
    }

    /// Compare `score` to the stored best and persist it if higher
    pub fn submit(&self, length: usize, duration: u32, score: u32) -> Outcome<BestUpdate> {
        let loaded = self.load(length, duration);
        let previous = *loaded.value();

        if score <= previous {
            return loaded.map(|previous| BestUpdate {
                previous,
                best: previous,
                improved: false,
            });
        }

        let update = BestUpdate {
            previous,
            best: score,
            improved: true,
        };
        info!(length, duration, score, previous, "new personal best");

        let key = personal_best_key(length, duration);
        match self.store.set(&key, &score.to_string()) {
            Ok(()) => loaded.map(|_| update),
            Err(e) => {
                warn!(%key, error = %e, "could not save personal best");
                Outcome::recovered(update, e)
            }
        }
    }
}
