//! Builder for loading and configuring the task board.

use std::path::{Path, PathBuf};

use log::{info, warn};
use tokio::task;

use super::TaskBoard;
use crate::cache::LocalCache;
use crate::categorize::categorize_all;
use crate::dates::Clock;
use crate::error::{CoreError, Result};
use crate::models::{Mentee, MenteeDirectory, Task};
use crate::store::Store;
use crate::sync::SyncQueue;

/// Builder for creating and configuring [`TaskBoard`] instances.
#[derive(Default)]
pub struct BoardBuilder {
    store_path: Option<PathBuf>,
    cache: Option<LocalCache>,
    clock: Option<Clock>,
}

impl BoardBuilder {
    /// Creates a new builder with default settings: no store, XDG cache
    /// location, system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store database path. Without one the board runs offline on
    /// the local cache only.
    pub fn with_store_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.store_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the local cache.
    pub fn with_cache(mut self, cache: LocalCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Pins the "today" reference.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Returns the default store path following the XDG Base Directory
    /// specification: `$XDG_DATA_HOME/spalla/spalla.db`.
    pub fn default_store_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("spalla")
            .place_data_file("spalla.db")
            .map_err(|e| CoreError::XdgDirectory(e.to_string()))
    }

    /// Builds the board, loading in the fallback order the dashboard always
    /// used: remote store, then local cache, then empty. The loaded
    /// collection is auto-categorized and the cache rewritten.
    pub async fn build(self) -> Result<TaskBoard> {
        let cache = self.cache.unwrap_or_else(LocalCache::default_location);
        let clock = self.clock.unwrap_or_default();

        let (mut tasks, mentees, sync) = match self.store_path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| CoreError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }
                let loaded = Self::load_from_store(path.clone()).await;
                let sync = SyncQueue::new(path);
                match loaded {
                    Ok((tasks, mentees)) => {
                        if tasks.is_empty() {
                            // An empty store defers to whatever the cache
                            // still holds.
                            (cache.load_tasks(), mentees, sync)
                        } else {
                            info!("loaded {} tasks from store", tasks.len());
                            (tasks, mentees, sync)
                        }
                    }
                    Err(e) => {
                        warn!("store unreachable, falling back to local cache: {e}");
                        (cache.load_tasks(), Vec::new(), sync)
                    }
                }
            }
            None => (cache.load_tasks(), Vec::new(), SyncQueue::offline()),
        };

        let directory = MenteeDirectory::new(&mentees);
        let assigned = categorize_all(&mut tasks, &directory);
        if assigned > 0 {
            info!("auto-categorized {assigned} tasks");
        }
        cache.save_tasks(&tasks);

        Ok(TaskBoard::new(tasks, mentees, clock, cache, sync))
    }

    async fn load_from_store(path: PathBuf) -> Result<(Vec<Task>, Vec<Mentee>)> {
        task::spawn_blocking(move || {
            let store = Store::open(&path)?;
            Ok((store.list_tasks()?, store.list_mentees()?))
        })
        .await
        .map_err(|e| CoreError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
