//! Daily puzzle summary command

use crate::dictionary::DictionaryCache;
use crate::puzzle::{DailyPuzzle, today_puzzle};
use crate::solver::{DEFAULT_MAX_MOVES, shortest_ladder};
use crate::stats::{Stats, StatsStore};
use tracing::warn;

/// Today's puzzle with the player's streak and the puzzle's par
pub struct DailyInfo {
    pub daily: DailyPuzzle,
    pub stats: Stats,
    /// Fewest moves needed, if a ladder was found
    pub par: Option<usize>,
}

/// Summarize today's puzzle
pub async fn daily_info(cache: &DictionaryCache, stats: &StatsStore) -> DailyInfo {
    daily_info_for(cache, stats, today_puzzle()).await
}

/// Summarize a given day's puzzle
pub async fn daily_info_for(
    cache: &DictionaryCache,
    stats: &StatsStore,
    daily: DailyPuzzle,
) -> DailyInfo {
    let par = match shortest_ladder(
        cache,
        daily.puzzle.start.text(),
        daily.puzzle.target.text(),
        DEFAULT_MAX_MOVES,
    )
    .await
    {
        Ok(ladder) => ladder.map(|l| l.moves()),
        Err(e) => {
            warn!(error = %e, "could not compute par");
            None
        }
    };

    DailyInfo {
        daily,
        stats: stats.load().into_value(),
        par,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::puzzle_for_day;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn reports_par_and_streak() {
        let cache = DictionaryCache::embedded();
        let stats = StatsStore::new(Arc::new(MemoryStore::new()));
        stats.record_win(1);
        stats.record_win(2);

        // Day 1 of the rotation is FOOL -> FOUR
        let info = daily_info_for(&cache, &stats, puzzle_for_day(1)).await;

        assert_eq!(info.daily.puzzle.start.text(), "FOOL");
        assert_eq!(info.par, Some(2));
        assert_eq!(info.stats.streak, 2);
    }
}
