//! Daily puzzle selection
//!
//! Every player sees the same puzzle on the same local calendar day. The day
//! id is the local-midnight timestamp floored to whole days since the Unix
//! epoch, and indexes the fixed puzzle list modulo its length.

use super::Puzzle;
use chrono::{DateTime, Local, NaiveTime, TimeZone};

/// Count of days since the Unix epoch, changing at local midnight
pub type DayId = i64;

const MS_PER_DAY: i64 = 86_400_000;

/// The fixed daily rotation as `(start, target)` pairs
///
/// Every ladder here is solvable with the bundled word lists.
pub const PUZZLES: &[(&str, &str)] = &[
    ("COLD", "WARM"),  // classic ladder
    ("FOOL", "FOUR"),  // two moves
    ("CODE", "RODE"),  // one-move gimme
    ("HEAD", "TAIL"),
    ("LOVE", "HATE"),
    ("CAT", "DOG"),
    ("STONE", "SHORE"),
];

/// A puzzle together with the day it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    pub id: DayId,
    pub puzzle: Puzzle,
}

/// Day id for the calendar day of `moment` in its own timezone
///
/// Computes `floor(local_midnight_ms / 86_400_000)`. Constant within one
/// local calendar day and one greater on the next.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use morphonyms::puzzle::day_id;
///
/// let morning = Utc.with_ymd_and_hms(1970, 1, 2, 8, 0, 0).unwrap();
/// let night = Utc.with_ymd_and_hms(1970, 1, 2, 23, 59, 59).unwrap();
/// assert_eq!(day_id(&morning), 1);
/// assert_eq!(day_id(&night), 1);
/// ```
#[must_use]
pub fn day_id<Tz: TimeZone>(moment: &DateTime<Tz>) -> DayId {
    let midnight = moment.date_naive().and_time(NaiveTime::MIN);

    // A DST jump can skip local midnight; fall back to the naive instant
    let midnight_ms = moment
        .timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .map_or_else(
            || midnight.and_utc().timestamp_millis(),
            |dt| dt.timestamp_millis(),
        );

    midnight_ms.div_euclid(MS_PER_DAY)
}

/// Day id for the current moment in the system timezone
#[must_use]
pub fn day_id_now() -> DayId {
    day_id(&Local::now())
}

/// The puzzle for a given day
///
/// # Panics
/// Will not panic - every entry of `PUZZLES` is covered by tests.
#[must_use]
pub fn puzzle_for_day(id: DayId) -> DailyPuzzle {
    let index = id.rem_euclid(PUZZLES.len() as i64) as usize;
    let (start, target) = PUZZLES[index];

    DailyPuzzle {
        id,
        puzzle: Puzzle::new(start, target).expect("bundled puzzles are valid"),
    }
}

/// Today's puzzle
#[must_use]
pub fn today_puzzle() -> DailyPuzzle {
    puzzle_for_day(day_id_now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};

    #[test]
    fn epoch_is_day_zero() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(day_id(&epoch), 0);
    }

    #[test]
    fn stable_within_a_day() {
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let start = tz.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let expected = day_id(&start);

        for hours in [1, 6, 12, 18, 23] {
            let later = start + Duration::hours(hours);
            assert_eq!(day_id(&later), expected, "+{hours}h");
        }
        let last_second = start + Duration::seconds(86_399);
        assert_eq!(day_id(&last_second), expected);
    }

    #[test]
    fn increments_by_one_per_day() {
        let tz = FixedOffset::west_opt(7 * 3600).unwrap();
        let mut moment = tz.with_ymd_and_hms(2023, 12, 30, 13, 30, 0).unwrap();
        let mut previous = day_id(&moment);

        for _ in 0..10 {
            moment += Duration::days(1);
            let current = day_id(&moment);
            assert_eq!(current, previous + 1);
            previous = current;
        }
    }

    #[test]
    fn changes_at_local_midnight() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let before = tz.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap();
        let after = tz.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(day_id(&after), day_id(&before) + 1);
    }

    #[test]
    fn local_midnight_floors_to_whole_days() {
        // Local midnight at UTC+2 is 22:00 UTC the evening before
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = tz.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let utc_day_before = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(day_id(&local), day_id(&utc_day_before));
    }

    #[test]
    fn every_bundled_puzzle_is_valid() {
        for (i, &(start, target)) in PUZZLES.iter().enumerate() {
            assert!(Puzzle::new(start, target).is_ok(), "puzzle {i} invalid");
        }
    }

    #[test]
    fn puzzle_for_day_cycles_through_list() {
        let len = PUZZLES.len() as i64;
        assert_eq!(puzzle_for_day(0).puzzle, puzzle_for_day(len).puzzle);
        assert_eq!(puzzle_for_day(3).puzzle, puzzle_for_day(3 + 5 * len).puzzle);
        assert_ne!(puzzle_for_day(0).puzzle, puzzle_for_day(1).puzzle);
    }

    #[test]
    fn puzzle_for_day_matches_index() {
        let daily = puzzle_for_day(PUZZLES.len() as i64 * 100);
        assert_eq!(daily.puzzle.start.text(), "COLD");
        assert_eq!(daily.puzzle.target.text(), "WARM");
        assert_eq!(daily.id, PUZZLES.len() as i64 * 100);
    }

    #[test]
    fn puzzle_for_negative_day() {
        let daily = puzzle_for_day(-1);
        let (start, _) = PUZZLES[PUZZLES.len() - 1];
        assert_eq!(daily.puzzle.start.text(), start);
    }

    #[test]
    fn today_is_deterministic() {
        let first = today_puzzle();
        let second = today_puzzle();
        // Guard against the test straddling midnight
        if first.id == second.id {
            assert_eq!(first.puzzle, second.puzzle);
        }
    }
}
