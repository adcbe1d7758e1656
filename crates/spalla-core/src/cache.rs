//! Best-effort local persistence cache.
//!
//! A string-keyed get/set/remove store holding serialized snapshots of the
//! task and reminder collections, used as a fallback when the remote store
//! is unreachable. Caching is never a correctness requirement: every
//! failure here degrades silently to "no offline cache".

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use log::debug;
use serde_json::Value;

use crate::error::{CoreError, Result};
use crate::models::raw::RawTask;
use crate::models::{RawReminder, Reminder, Task};

/// Cache slot holding the task collection.
pub const TASKS_KEY: &str = "spalla_tasks";
/// Cache slot holding the reminder collection.
pub const REMINDERS_KEY: &str = "spalla_reminders";

/// Synchronous string-keyed storage, the shape of the browser-local store
/// the dashboard originally cached into.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> std::io::Result<()>;
    fn remove(&self, key: &str);
}

/// One file per key under a directory; the default backing store.
#[derive(Debug)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Default cache directory per the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/spalla/cache` or `~/.local/share/spalla/cache`.
    pub fn default_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("spalla")
            .create_data_directory("cache")
            .map_err(|e| CoreError::XdgDirectory(e.to_string()))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for DirStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.path_for(key));
    }
}

/// In-memory store: used by tests and as the degraded fallback when no
/// cache directory is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> std::io::Result<()> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Serializes the task and reminder collections into named cache slots.
#[derive(Clone)]
pub struct LocalCache {
    store: Arc<dyn KvStore>,
}

impl LocalCache {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Cache in the default XDG directory, degrading to a process-local
    /// in-memory store when the directory cannot be created.
    pub fn default_location() -> Self {
        match DirStore::default_dir() {
            Ok(dir) => Self::new(Arc::new(DirStore::new(dir))),
            Err(e) => {
                debug!("cache directory unavailable, caching in memory only: {e}");
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Writes the full task collection snapshot. Failures are swallowed.
    pub fn save_tasks(&self, tasks: &[Task]) {
        self.save_slot(TASKS_KEY, tasks);
    }

    /// Reads the task collection snapshot.
    ///
    /// A missing or corrupt slot yields an empty collection. Individual
    /// records are revalidated: anything without a non-empty id and title
    /// is dropped silently rather than rejecting the whole load.
    pub fn load_tasks(&self) -> Vec<Task> {
        self.load_slot(TASKS_KEY, |value| {
            serde_json::from_value::<RawTask>(value)
                .ok()
                .and_then(RawTask::into_task)
        })
    }

    /// Writes the reminder collection snapshot. Failures are swallowed.
    pub fn save_reminders(&self, reminders: &[Reminder]) {
        self.save_slot(REMINDERS_KEY, reminders);
    }

    /// Reads the reminder collection snapshot, dropping invalid records.
    pub fn load_reminders(&self) -> Vec<Reminder> {
        self.load_slot(REMINDERS_KEY, |value| {
            serde_json::from_value::<RawReminder>(value)
                .ok()
                .and_then(RawReminder::into_reminder)
        })
    }

    fn save_slot<T: serde::Serialize>(&self, key: &str, records: &[T]) {
        match serde_json::to_string(records) {
            Ok(serialized) => {
                if let Err(e) = self.store.set(key, &serialized) {
                    debug!("cache write for '{key}' failed: {e}");
                }
            }
            Err(e) => debug!("cache serialization for '{key}' failed: {e}"),
        }
    }

    fn load_slot<T>(&self, key: &str, resolve: impl Fn(Value) -> Option<T>) -> Vec<T> {
        let Some(serialized) = self.store.get(key) else {
            return Vec::new();
        };
        let Ok(Value::Array(values)) = serde_json::from_str::<Value>(&serialized) else {
            debug!("cache slot '{key}' is corrupt, ignoring");
            return Vec::new();
        };
        values.into_iter().filter_map(resolve).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raw::RawTask;

    fn task(id: &str, title: &str) -> Task {
        RawTask {
            id: Some(id.into()),
            titulo: Some(title.into()),
            ..Default::default()
        }
        .into_task()
        .expect("task")
    }

    #[test]
    fn round_trip_preserves_valid_tasks() {
        let cache = LocalCache::in_memory();
        let tasks = vec![task("a", "Primeira"), task("b", "Segunda")];
        cache.save_tasks(&tasks);
        assert_eq!(cache.load_tasks(), tasks);
    }

    #[test]
    fn missing_slot_loads_empty() {
        let cache = LocalCache::in_memory();
        assert!(cache.load_tasks().is_empty());
        assert!(cache.load_reminders().is_empty());
    }

    #[test]
    fn corrupt_slot_loads_empty() {
        let store = Arc::new(MemoryStore::default());
        store.set(TASKS_KEY, "{not json").expect("set");
        let cache = LocalCache::new(store);
        assert!(cache.load_tasks().is_empty());
    }

    #[test]
    fn invalid_records_are_dropped_not_fatal() {
        let store = Arc::new(MemoryStore::default());
        store
            .set(
                TASKS_KEY,
                r#"[{"id":"a","titulo":"Válida"},{"id":"","titulo":"Sem id"},{"titulo":"Também sem id"},42]"#,
            )
            .expect("set");
        let cache = LocalCache::new(store);
        let tasks = cache.load_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "a");
    }

    #[test]
    fn dir_store_round_trips_on_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = LocalCache::new(Arc::new(DirStore::new(dir.path().to_path_buf())));
        let tasks = vec![task("a", "Em disco")];
        cache.save_tasks(&tasks);
        assert_eq!(cache.load_tasks(), tasks);
    }
}
