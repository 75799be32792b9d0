//! Length-partitioned dictionary cache
//!
//! Each word length owns one slot. A slot starts absent, becomes in-flight
//! while its single load runs, and holds an immutable [`Bucket`] once loaded.
//! Concurrent requesters for the same length wait on the one in-flight load
//! and observe the same result, success or failure; different lengths load
//! independently.
//!
//! Failed loads are not cached, so a later request retries the source.

use super::{Bucket, DictionaryError, EmbeddedSource, WordSource, is_supported_length};
use crate::core::normalize;
use crate::outcome::Outcome;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info, warn};

type LoadResult = Result<Arc<Bucket>, DictionaryError>;

enum Slot {
    Loading(watch::Receiver<Option<LoadResult>>),
    Loaded(Arc<Bucket>),
}

/// An in-flight load whose loader was dropped before publishing
fn is_abandoned(rx: &watch::Receiver<Option<LoadResult>>) -> bool {
    rx.has_changed().is_err() && rx.borrow().is_none()
}

enum Claim {
    Ready(Arc<Bucket>),
    Wait(watch::Receiver<Option<LoadResult>>),
    Load(watch::Sender<Option<LoadResult>>),
}

/// On-demand cache of per-length word lists
///
/// Construct one per session and share it by `Arc`.
pub struct DictionaryCache {
    source: Arc<dyn WordSource>,
    slots: Mutex<FxHashMap<usize, Slot>>,
}

/// Result of warming the lengths around a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarmReport {
    /// `(length, word count)` for every bucket now available
    pub loaded: Vec<(usize, usize)>,
    /// `(length, reason)` for lengths that failed and were treated as empty
    pub failed: Vec<(usize, String)>,
}

impl WarmReport {
    /// True if every requested length loaded
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl DictionaryCache {
    /// Create a cache over any word source
    pub fn new(source: impl WordSource + 'static) -> Self {
        Self::with_source(Arc::new(source))
    }

    /// Create a cache over a shared source
    #[must_use]
    pub fn with_source(source: Arc<dyn WordSource>) -> Self {
        Self {
            source,
            slots: Mutex::new(FxHashMap::default()),
        }
    }

    /// Create a cache over the word lists bundled in the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    fn lock_slots(&self) -> std::sync::MutexGuard<'_, FxHashMap<usize, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Join the slot for `length`, becoming its loader if nothing usable is there
    fn claim(&self, length: usize) -> Claim {
        let mut slots = self.lock_slots();
        match slots.get(&length) {
            Some(Slot::Loaded(bucket)) => return Claim::Ready(Arc::clone(bucket)),
            Some(Slot::Loading(rx)) if !is_abandoned(rx) => {
                return Claim::Wait(rx.clone());
            }
            _ => {}
        }
        let (tx, rx) = watch::channel(None);
        slots.insert(length, Slot::Loading(rx));
        Claim::Load(tx)
    }

    fn loaded_bucket(&self, length: usize) -> Option<Arc<Bucket>> {
        match self.lock_slots().get(&length) {
            Some(Slot::Loaded(bucket)) => Some(Arc::clone(bucket)),
            _ => None,
        }
    }

    /// Get the bucket for `length`, loading it if necessary
    ///
    /// Reuses an in-flight load for the same length if one exists, and shares
    /// its failure too.
    ///
    /// # Errors
    /// Returns `DictionaryError` if the length is unsupported or the source
    /// fails. Nothing is cached on failure.
    pub async fn bucket(&self, length: usize) -> Result<Arc<Bucket>, DictionaryError> {
        if !is_supported_length(length) {
            return Err(DictionaryError::UnsupportedLength(length));
        }

        loop {
            match self.claim(length) {
                Claim::Ready(bucket) => return Ok(bucket),
                Claim::Load(tx) => return self.load_into(length, tx).await,
                Claim::Wait(mut rx) => {
                    let published = rx
                        .wait_for(Option::is_some)
                        .await
                        .ok()
                        .and_then(|result| (*result).clone());
                    if let Some(result) = published {
                        return result;
                    }
                    // Loader went away without a result; claim again
                }
            }
        }
    }

    async fn load_into(
        &self,
        length: usize,
        tx: watch::Sender<Option<LoadResult>>,
    ) -> LoadResult {
        let result = self.load(length).await;
        {
            let mut slots = self.lock_slots();
            match &result {
                Ok(bucket) => {
                    slots.insert(length, Slot::Loaded(Arc::clone(bucket)));
                }
                Err(_) => {
                    slots.remove(&length);
                }
            }
        }
        tx.send_replace(Some(result.clone()));
        result
    }

    async fn load(&self, length: usize) -> LoadResult {
        debug!(length, source = %self.source.describe(), "loading word list");

        let text = self.source.fetch(length).await.inspect_err(|e| {
            warn!(length, error = %e, "word list unavailable");
        })?;

        let bucket = Bucket::parse(length, &text);
        info!(length, words = bucket.len(), "word list loaded");
        Ok(Arc::new(bucket))
    }

    /// Fast-path membership check against already-loaded buckets
    ///
    /// Returns false when the bucket for the word's length is not loaded yet,
    /// so a false here is not authoritative.
    #[must_use]
    pub fn contains_sync(&self, word: &str) -> bool {
        let word = normalize(word);
        self.loaded_bucket(word.len())
            .is_some_and(|bucket| bucket.contains(&word))
    }

    /// Authoritative membership check, loading the bucket if needed
    ///
    /// A load failure is absorbed: the outcome is `Recovered` with `false`.
    pub async fn contains_async(&self, word: &str) -> Outcome<bool> {
        let word = normalize(word);
        if word.is_empty() {
            return Outcome::Ok(false);
        }

        match self.bucket(word.len()).await {
            Ok(bucket) => Outcome::Ok(bucket.contains(&word)),
            // No list can exist for this length, so the word is simply absent
            Err(DictionaryError::UnsupportedLength(_)) => Outcome::Ok(false),
            Err(e) => Outcome::recovered(false, e),
        }
    }

    /// Membership check: cached fast path first, then load
    pub async fn contains(&self, word: &str) -> Outcome<bool> {
        if self.contains_sync(word) {
            return Outcome::Ok(true);
        }
        self.contains_async(word).await
    }

    /// Load the buckets for `length - 1`, `length` and `length + 1`
    ///
    /// Lengths outside the supported range are skipped. A failing length is
    /// reported as empty without failing the others.
    pub async fn warm(&self, length: usize) -> WarmReport {
        let (below, at, above) = tokio::join!(
            self.warm_one(length.checked_sub(1)),
            self.warm_one(Some(length)),
            self.warm_one(length.checked_add(1)),
        );

        let mut report = WarmReport::default();
        for result in [below, at, above].into_iter().flatten() {
            match result {
                Ok((l, count)) => report.loaded.push((l, count)),
                Err((l, reason)) => report.failed.push((l, reason)),
            }
        }
        report
    }

    async fn warm_one(
        &self,
        length: Option<usize>,
    ) -> Option<Result<(usize, usize), (usize, String)>> {
        let length = length.filter(|&l| is_supported_length(l))?;
        Some(
            self.bucket(length)
                .await
                .map(|bucket| (length, bucket.len()))
                .map_err(|e| (length, e.to_string())),
        )
    }

    /// Whether the bucket for `length` is loaded
    #[must_use]
    pub fn is_loaded(&self, length: usize) -> bool {
        self.loaded_bucket(length).is_some()
    }

    /// Lengths with a loaded bucket, ascending
    #[must_use]
    pub fn loaded_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .lock_slots()
            .iter()
            .filter(|(_, slot)| matches!(slot, Slot::Loaded(_)))
            .map(|(&length, _)| length)
            .collect();
        lengths.sort_unstable();
        lengths
    }
}

impl std::fmt::Debug for DictionaryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryCache")
            .field("source", &self.source.describe())
            .field("loaded", &self.loaded_lengths())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rustc_hash::FxHashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// In-memory source that counts fetches and can be told to fail
    struct CountingSource {
        lists: FxHashMap<usize, &'static str>,
        fetches: Arc<AtomicUsize>,
        delay: Duration,
    }

    impl CountingSource {
        fn new(lists: &[(usize, &'static str)]) -> (Self, Arc<AtomicUsize>) {
            let fetches = Arc::new(AtomicUsize::new(0));
            let source = Self {
                lists: lists.iter().copied().collect(),
                fetches: Arc::clone(&fetches),
                delay: Duration::from_millis(50),
            };
            (source, fetches)
        }
    }

    #[async_trait]
    impl WordSource for CountingSource {
        fn describe(&self) -> String {
            "counting".to_string()
        }

        async fn fetch(&self, length: usize) -> Result<String, DictionaryError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.lists
                .get(&length)
                .map(|text| (*text).to_string())
                .ok_or(DictionaryError::Unavailable(length))
        }
    }

    fn demo_lists() -> [(usize, &'static str); 3] {
        [
            (3, "COD\nCOT\nOLD"),
            (4, "COLD\nGOLD\nCLOD\nWARM"),
            (5, "COLDS\nWORLD"),
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_lookups_share_one_load() {
        let (source, fetches) = CountingSource::new(&demo_lists());
        let cache = DictionaryCache::new(source);

        let (a, b) = tokio::join!(cache.contains_async("COLD"), cache.contains_async("WARM"));

        assert_eq!(a, Outcome::Ok(true));
        assert_eq!(b, Outcome::Ok(true));
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_lookups_share_one_failed_load() {
        let (source, fetches) = CountingSource::new(&demo_lists());
        let cache = DictionaryCache::new(source);

        let (a, b, c) = tokio::join!(
            cache.contains_async("STONES"),
            cache.contains_async("PLANET"),
            cache.contains_async("BRIDGE"),
        );

        for outcome in [a, b, c] {
            assert!(outcome.is_recovered());
            assert!(!outcome.into_value());
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert!(!cache.is_loaded(6));

        // Not cached: a later lookup goes back to the source
        cache.contains_async("STONES").await;
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_load_is_taken_over() {
        let (source, fetches) = CountingSource::new(&demo_lists());
        let cache = DictionaryCache::new(source);

        let first = tokio::time::timeout(Duration::from_millis(10), cache.bucket(4)).await;
        assert!(first.is_err());
        assert!(!cache.is_loaded(4));

        assert_eq!(cache.bucket(4).await.unwrap().len(), 4);
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_requesters_observe_same_bucket() {
        let (source, _) = CountingSource::new(&demo_lists());
        let cache = DictionaryCache::new(source);

        let (a, b) = tokio::join!(cache.bucket(4), cache.bucket(4));
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
    }

    #[tokio::test(start_paused = true)]
    async fn sync_lookup_is_false_until_loaded() {
        let (source, _) = CountingSource::new(&demo_lists());
        let cache = DictionaryCache::new(source);

        assert!(!cache.contains_sync("GOLD"));
        assert!(!cache.is_loaded(4));

        assert_eq!(cache.contains_async("gold").await, Outcome::Ok(true));

        assert!(cache.contains_sync("GOLD"));
        assert!(cache.contains_sync(" gold "));
        assert!(!cache.contains_sync("BOLD"));
    }

    #[tokio::test(start_paused = true)]
    async fn loaded_bucket_is_not_refetched() {
        let (source, fetches) = CountingSource::new(&demo_lists());
        let cache = DictionaryCache::new(source);

        cache.contains_async("COLD").await;
        cache.contains_async("GOLD").await;
        cache.contains("CLOD").await;

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn load_failure_fails_open() {
        let (source, _) = CountingSource::new(&demo_lists());
        let cache = DictionaryCache::new(source);

        let outcome = cache.contains_async("STONES").await;
        assert!(outcome.is_recovered());
        assert!(!outcome.into_value());
        assert!(!cache.is_loaded(6));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_load_is_retried() {
        let (source, fetches) = CountingSource::new(&demo_lists());
        let cache = DictionaryCache::new(source);

        cache.contains_async("STONES").await;
        cache.contains_async("STONES").await;

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn unsupported_length_is_absent_without_fetching() {
        let (source, fetches) = CountingSource::new(&demo_lists());
        let cache = DictionaryCache::new(source);

        assert_eq!(cache.contains_async("A").await, Outcome::Ok(false));
        assert_eq!(cache.contains_async("").await, Outcome::Ok(false));
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn warm_loads_neighbouring_lengths() {
        let (source, fetches) = CountingSource::new(&demo_lists());
        let cache = DictionaryCache::new(source);

        let report = cache.warm(4).await;

        assert!(report.is_complete());
        assert_eq!(report.loaded, vec![(3, 3), (4, 4), (5, 2)]);
        assert_eq!(cache.loaded_lengths(), vec![3, 4, 5]);
        assert_eq!(fetches.load(Ordering::SeqCst), 3);
        assert!(cache.contains_sync("COLDS"));
        assert!(cache.contains_sync("OLD"));
    }

    #[tokio::test(start_paused = true)]
    async fn warm_reports_failed_lengths_as_empty() {
        let (source, _) = CountingSource::new(&demo_lists());
        let cache = DictionaryCache::new(source);

        let report = cache.warm(5).await;

        assert!(!report.is_complete());
        assert_eq!(report.loaded, vec![(4, 4), (5, 2)]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, 6);
        assert!(cache.contains_sync("WORLD"));
    }

    #[tokio::test(start_paused = true)]
    async fn warm_clamps_to_supported_range() {
        let (source, fetches) = CountingSource::new(&[(2, "AT\nTO"), (3, "CAT")]);
        let cache = DictionaryCache::new(source);

        let report = cache.warm(2).await;

        assert_eq!(report.loaded, vec![(2, 2), (3, 1)]);
        assert!(report.is_complete());
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn embedded_cache_knows_daily_words() {
        let cache = DictionaryCache::embedded();
        for word in ["COLD", "WARM", "FOOL", "FOUR", "CODE", "RODE"] {
            assert_eq!(cache.contains(word).await, Outcome::Ok(true), "{word}");
        }
        assert_eq!(cache.contains("QZXV").await, Outcome::Ok(false));
    }
}
