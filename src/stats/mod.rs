//! Player statistics
//!
//! Daily win streaks and timed-mode personal bests, persisted through a
//! [`KeyValueStore`](crate::storage::KeyValueStore). Both fail open: a
//! storage problem never reaches the player, but the returned
//! [`Outcome`](crate::outcome::Outcome) records that it happened.

mod personal_best;
mod streak;

pub use personal_best::{BestUpdate, PersonalBests, personal_best_key};
pub use streak::{STATS_KEY, Stats, StatsStore};
