//! Daily win streak
//!
//! A win on the day after the last win extends the streak; a second win on
//! the same day changes nothing; any gap starts over at one.

use crate::outcome::Outcome;
use crate::puzzle::DayId;
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key for the streak record
pub const STATS_KEY: &str = "morph_stats";

/// Streak record, stored as `{"lastWinDayId": .., "streak": ..}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub last_win_day_id: Option<DayId>,
    #[serde(default)]
    pub streak: u32,
}

impl Stats {
    /// Apply a win on `day`
    ///
    /// # Examples
    /// ```
    /// use morphonyms::stats::Stats;
    ///
    /// let first = Stats::default().record_win(100);
    /// assert_eq!(first.streak, 1);
    /// assert_eq!(first.record_win(100), first);          // same day
    /// assert_eq!(first.record_win(101).streak, 2);       // next day
    /// assert_eq!(first.record_win(105).streak, 1);       // gap
    /// ```
    #[must_use]
    pub fn record_win(self, day: DayId) -> Self {
        match self.last_win_day_id {
            Some(last) if last == day => self,
            Some(last) if last == day - 1 => Self {
                last_win_day_id: Some(day),
                streak: self.streak.saturating_add(1),
            },
            _ => Self {
                last_win_day_id: Some(day),
                streak: 1,
            },
        }
    }
}

/// Owner of the persisted streak record
#[derive(Clone)]
pub struct StatsStore {
    store: Arc<dyn KeyValueStore>,
}

impl StatsStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the stored stats
    ///
    /// No record yields `(none, 0)`. An unreadable or undecodable record
    /// yields the same default as `Recovered`.
    #[must_use]
    pub fn load(&self) -> Outcome<Stats> {
        let raw = match self.store.get(STATS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Outcome::Ok(Stats::default()),
            Err(e) => {
                warn!(error = %e, "could not read stats, using defaults");
                return Outcome::recovered(Stats::default(), e);
            }
        };

        match serde_json::from_str(&raw) {
            Ok(stats) => Outcome::Ok(stats),
            Err(e) => {
                warn!(error = %e, "stats record is corrupt, using defaults");
                Outcome::recovered(Stats::default(), e)
            }
        }
    }

    /// Record a win on `day` and persist the result
    ///
    /// The returned stats are always the updated ones; `Recovered` means the
    /// previous record could not be read or the new one could not be saved.
    pub fn record_win(&self, day: DayId) -> Outcome<Stats> {
        let loaded = self.load();
        let previous = *loaded.value();
        let next = previous.record_win(day);

        if next == previous {
            debug!(day, "win already recorded today");
            return loaded;
        }

        debug!(day, streak = next.streak, "recording daily win");
        match self.save(next) {
            Ok(()) => match loaded {
                Outcome::Ok(_) => Outcome::Ok(next),
                Outcome::Recovered { reason, .. } => Outcome::recovered(next, reason),
            },
            Err(reason) => {
                warn!(%reason, "could not save stats");
                Outcome::recovered(next, reason)
            }
        }
    }

    fn save(&self, stats: Stats) -> Result<(), String> {
        let json = serde_json::to_string(&stats).map_err(|e| e.to_string())?;
        self.store.set(STATS_KEY, &json).map_err(|e| e.to_string())
    }
}
