//! Best-effort persistence of the task store into one named slot.
//!
//! # Responsibility
//! - Write the full store after every mutation (write-through).
//! - Load the store once at startup, falling back to an empty store.
//!
//! # Invariants
//! - `load` never returns an error; absent or corrupt slots yield an empty store.
//! - `save` never returns an error; failures are logged and dropped.

use crate::model::task_store::TaskStore;
use crate::repo::slot_repo::SlotRepository;
use crate::repo::task_codec::{decode_store, encode_store};
use log::{debug, info, warn};

/// Slot key used unless the caller picks another one.
pub const DEFAULT_SLOT_KEY: &str = "PersistentTasks";

pub struct TaskPersistence<R: SlotRepository> {
    repo: R,
    slot_key: String,
}

impl<R: SlotRepository> TaskPersistence<R> {
    pub fn new(repo: R) -> Self {
        Self::with_slot_key(repo, DEFAULT_SLOT_KEY)
    }

    pub fn with_slot_key(repo: R, slot_key: impl Into<String>) -> Self {
        Self {
            repo,
            slot_key: slot_key.into(),
        }
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Overwrites the slot with the encoded `store`.
    pub fn save(&self, store: &TaskStore) {
        let bytes = match encode_store(store) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("event=store_save module=repo status=error stage=encode error={err}");
                return;
            }
        };

        match self.repo.write_slot(&self.slot_key, &bytes) {
            Ok(()) => debug!(
                "event=store_save module=repo status=ok days={} tasks={} bytes={}",
                store.day_count(),
                store.task_count(),
                bytes.len()
            ),
            Err(err) => warn!("event=store_save module=repo status=error stage=write error={err}"),
        }
    }

    /// Reads the slot, substituting an empty store for anything unusable.
    pub fn load(&self) -> TaskStore {
        let bytes = match self.repo.read_slot(&self.slot_key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("event=store_load module=repo status=empty reason=absent");
                return TaskStore::new();
            }
            Err(err) => {
                warn!("event=store_load module=repo status=fallback stage=read error={err}");
                return TaskStore::new();
            }
        };

        match decode_store(&bytes) {
            Ok(store) => {
                info!(
                    "event=store_load module=repo status=ok days={} tasks={}",
                    store.day_count(),
                    store.task_count()
                );
                store
            }
            Err(err) => {
                warn!("event=store_load module=repo status=fallback stage=decode error={err}");
                TaskStore::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskPersistence, DEFAULT_SLOT_KEY};
    use crate::model::day_key::DayKey;
    use crate::model::task_store::TaskStore;
    use crate::repo::slot_repo::{MemorySlotRepository, SlotRepository};
    use chrono::NaiveDate;

    #[test]
    fn absent_slot_loads_empty_store() {
        let persistence = TaskPersistence::new(MemorySlotRepository::new());
        assert_eq!(persistence.load(), TaskStore::new());
        assert_eq!(persistence.slot_key(), DEFAULT_SLOT_KEY);
    }

    #[test]
    fn corrupt_slot_loads_empty_store() {
        let repo = MemorySlotRepository::new();
        repo.write_slot(DEFAULT_SLOT_KEY, b"not json at all").unwrap();

        let persistence = TaskPersistence::new(&repo);
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let day = DayKey::from_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        let mut store = TaskStore::new();
        store.add(day, "X").unwrap();

        let persistence = TaskPersistence::with_slot_key(MemorySlotRepository::new(), "custom");
        persistence.save(&store);

        assert!(persistence.repo().has_slot("custom"));
        assert!(!persistence.repo().has_slot(DEFAULT_SLOT_KEY));
        assert_eq!(persistence.load(), store);
    }
}
