//! History store: the persistent, newest-first list of generated plans.
//!
//! The whole history is one JSON array stored under a single key of the
//! `KeyValueStore` port. Storage failures never reach callers: they are
//! logged and the best available sequence is returned instead. Persistence
//! is best-effort; an `append` whose write fails is simply not durable.
//!
//! There is no locking. Two overlapping `append` calls each read, prepend
//! and write the whole array; whichever write lands last wins.

mod seed;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::error::StorageError;
use crate::ports::KeyValueStore;
use crate::trip::ItineraryPlan;

pub use seed::seed_plans;

/// Storage key holding the serialized history.
pub const HISTORY_KEY: &str = "trip-planner-history";

/// One row of the history listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    /// Position in the history, 0 = newest.
    pub index: usize,
    /// Plan title.
    pub title: String,
    /// Number of days.
    pub day_count: usize,
    /// Date of the first day.
    pub first_date: Option<String>,
    /// Date of the last day.
    pub last_date: Option<String>,
    /// Activities across all days.
    pub activity_count: usize,
}

impl HistorySummary {
    fn of(index: usize, plan: &ItineraryPlan) -> Self {
        Self {
            index,
            title: plan.title.clone(),
            day_count: plan.days.len(),
            first_date: plan.first_date().map(String::from),
            last_date: plan.last_date().map(String::from),
            activity_count: plan.activity_count(),
        }
    }
}

/// Persistent, insertion-ordered (newest first) collection of plans.
///
/// Constructed once and shared; it is the only writer of the history key.
#[derive(Clone)]
pub struct HistoryStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl HistoryStore {
    /// Creates a store over `storage` using [`HISTORY_KEY`].
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(storage, HISTORY_KEY)
    }

    /// Creates a store using a custom key.
    #[must_use]
    pub fn with_key(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Reads the history.
    ///
    /// Empty storage is seeded with [`seed_plans`] and the seed is returned.
    /// A read or decode failure is logged and yields an empty list; in that
    /// case nothing is seeded.
    #[must_use]
    pub fn load(&self) -> Vec<ItineraryPlan> {
        match self.read() {
            Ok(Some(plans)) => plans,
            Ok(None) => self.seed(),
            Err(e) => {
                error!(key = %self.key, error = %e, "history unavailable, showing empty history");
                Vec::new()
            }
        }
    }

    /// Writes the example plans if storage holds no history yet.
    ///
    /// Returns `true` if the seed was written by this call.
    pub fn seed_if_empty(&self) -> bool {
        match self.read() {
            Ok(None) => !self.seed().is_empty(),
            Ok(Some(_)) => false,
            Err(e) => {
                error!(key = %self.key, error = %e, "cannot check history before seeding");
                false
            }
        }
    }

    /// Puts `plan` at the front of the history and persists the result.
    ///
    /// Returns the new sequence. If the write fails the failure is logged and
    /// a fresh [`load`](Self::load) is returned, which will not contain `plan`.
    pub fn append(&self, plan: ItineraryPlan) -> Vec<ItineraryPlan> {
        let mut plans = self.load();
        plans.insert(0, plan);
        match self.write(&plans) {
            Ok(()) => {
                debug!(key = %self.key, len = plans.len(), "history appended");
                plans
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "plan not saved to history");
                self.load()
            }
        }
    }

    /// Returns the plan at `index` (0 = newest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ItineraryPlan> {
        self.load().into_iter().nth(index)
    }

    /// Summaries of every stored plan, newest first.
    #[must_use]
    pub fn summaries(&self) -> Vec<HistorySummary> {
        self.load().iter().enumerate().map(|(i, p)| HistorySummary::of(i, p)).collect()
    }

    fn seed(&self) -> Vec<ItineraryPlan> {
        let plans = seed_plans();
        match self.write(&plans) {
            Ok(()) => {
                info!(key = %self.key, count = plans.len(), "seeded empty history with examples");
                plans
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "could not seed history");
                Vec::new()
            }
        }
    }

    fn read(&self) -> Result<Option<Vec<ItineraryPlan>>, StorageError> {
        let blob = self.storage.get(&self.key).map_err(|e| StorageError::Read(e.to_string()))?;
        match blob {
            None => Ok(None),
            Some(blob) if blob.is_empty() => Ok(None),
            Some(blob) => serde_json::from_str(&blob)
                .map(Some)
                .map_err(|e| StorageError::Read(format!("stored history is malformed: {e}"))),
        }
    }

    fn write(&self, plans: &[ItineraryPlan]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(plans).map_err(|e| StorageError::Write(e.to_string()))?;
        self.storage.set(&self.key, &blob).map_err(|e| StorageError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::adapters::memory::MemoryKeyValueStore;
    use crate::ports::PortError;

    /// Store whose reads and writes can be made to fail.
    #[derive(Default)]
    struct FlakyStore {
        blob: Mutex<Option<String>>,
        fail_reads: AtomicBool,
        fail_writes: AtomicBool,
        writes: AtomicUsize,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PortError> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err("storage offline".into());
            }
            Ok(self.blob.lock().unwrap().clone())
        }

        fn set(&self, _key: &str, value: &str) -> Result<(), PortError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err("quota exceeded".into());
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            *self.blob.lock().unwrap() = Some(value.to_string());
            Ok(())
        }
    }

    fn plan(title: &str) -> ItineraryPlan {
        ItineraryPlan { title: title.into(), days: Vec::new() }
    }

    fn titles(plans: &[ItineraryPlan]) -> Vec<&str> {
        plans.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn empty_storage_is_seeded_once() {
        let storage = Arc::new(FlakyStore::default());
        let store = HistoryStore::new(storage.clone());

        let first = store.load();
        let second = store.load();

        assert_eq!(first, seed_plans());
        assert_eq!(first, second);
        assert_eq!(storage.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn append_prepends_in_call_order() {
        let store = HistoryStore::new(Arc::new(MemoryKeyValueStore::new()));
        let before = store.load();

        store.append(plan("p1"));
        store.append(plan("p2"));
        let after = store.append(plan("p3"));

        assert_eq!(titles(&after[..3]), vec!["p3", "p2", "p1"]);
        assert_eq!(&after[3..], &before[..]);
        assert_eq!(store.load(), after);
    }

    #[test]
    fn append_keeps_duplicates() {
        let store = HistoryStore::new(Arc::new(MemoryKeyValueStore::new()));
        let base = store.load().len();
        store.append(plan("Same"));
        let plans = store.append(plan("Same"));
        assert_eq!(plans.len(), base + 2);
        assert_eq!(titles(&plans[..2]), vec!["Same", "Same"]);
    }

    #[test]
    fn read_failure_yields_empty_history_without_seeding() {
        let storage = Arc::new(FlakyStore::default());
        storage.fail_reads.store(true, Ordering::SeqCst);
        let store = HistoryStore::new(storage.clone());

        assert!(store.load().is_empty());
        assert!(!store.seed_if_empty());
        assert_eq!(storage.writes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn malformed_blob_is_an_error_not_empty_state() {
        let storage = Arc::new(FlakyStore::default());
        *storage.blob.lock().unwrap() = Some("{not json".into());
        let store = HistoryStore::new(storage.clone());

        assert!(store.load().is_empty());
        assert_eq!(storage.writes.load(Ordering::SeqCst), 0);
        assert_eq!(storage.blob.lock().unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn write_failure_returns_fresh_load() {
        let storage = Arc::new(FlakyStore::default());
        let store = HistoryStore::new(storage.clone());
        let seeded = store.load();

        storage.fail_writes.store(true, Ordering::SeqCst);
        let result = store.append(plan("lost"));

        assert_eq!(result, seeded);
        assert_eq!(store.load(), seeded);
    }

    #[test]
    fn seed_write_failure_yields_empty_history() {
        let storage = Arc::new(FlakyStore::default());
        storage.fail_writes.store(true, Ordering::SeqCst);
        let store = HistoryStore::new(storage);
        assert!(store.load().is_empty());
    }

    #[test]
    fn seed_if_empty_reports_whether_it_wrote() {
        let store = HistoryStore::new(Arc::new(MemoryKeyValueStore::new()));
        assert!(store.seed_if_empty());
        assert!(!store.seed_if_empty());
    }

    #[test]
    fn summaries_and_lookup_follow_history_order() {
        let store = HistoryStore::new(Arc::new(MemoryKeyValueStore::new()));
        store.append(plan("Newest"));

        let summaries = store.summaries();
        assert_eq!(summaries[0].index, 0);
        assert_eq!(summaries[0].title, "Newest");
        assert_eq!(summaries[0].first_date, None);
        assert_eq!(summaries[1].title, "Historical Journey through Delhi");
        assert_eq!(summaries[1].day_count, 1);
        assert_eq!(summaries[1].activity_count, 3);
        assert_eq!(summaries[1].first_date.as_deref(), Some("2024-08-15"));

        assert_eq!(store.get(0).map(|p| p.title), Some("Newest".to_string()));
        assert!(store.get(99).is_none());
    }
}
