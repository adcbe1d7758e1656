//! The task board: application state and its operations.
//!
//! [`TaskBoard`] is the single owned state struct for the task core. It
//! holds the in-memory task collection, the mentee reference data, the
//! filter state, the fixed clock, the local cache, and the sync queue; every
//! handler works through it instead of ambient globals.
//!
//! ## Submodules
//!
//! - [`builder`]: loading order (store → cache → empty) and configuration
//! - [`task_ops`]: task CRUD and status transitions
//! - [`child_ops`]: subtasks, checklist, comments, tags, handoffs, parents
//! - [`views`]: filtered/grouped/column projections and stats
//!
//! ## Mutation pattern
//!
//! Every mutating operation is optimistic: the in-memory collection changes
//! first, the cache is rewritten, and one [`SyncOp`](crate::sync::SyncOp)
//! is dispatched fire-and-forget. Only pre-I/O validation (an empty title,
//! an unknown id) can fail an operation.

use crate::cache::LocalCache;
use crate::dates::Clock;
use crate::models::{BoardFilter, Mentee, Task};
use crate::sync::SyncQueue;

pub mod builder;
pub mod child_ops;
pub mod task_ops;
pub mod views;


pub use builder::BoardBuilder;
pub use child_ops::ChildKind;
pub use views::{BoardColumns, BoardStats, MenteeTaskView};

/// Application state for the task core.
pub struct TaskBoard {
    tasks: Vec<Task>,
    mentees: Vec<Mentee>,
    /// Current view filter; mutate freely between view calls.
    pub filter: BoardFilter,
    clock: Clock,
    cache: LocalCache,
    sync: SyncQueue,
}

impl TaskBoard {
    pub(crate) fn new(
        tasks: Vec<Task>,
        mentees: Vec<Mentee>,
        clock: Clock,
        cache: LocalCache,
        sync: SyncQueue,
    ) -> Self {
        Self {
            tasks,
            mentees,
            filter: BoardFilter::default(),
            clock,
            cache,
            sync,
        }
    }

    /// A board with no store behind it, loading whatever the cache holds.
    pub fn offline(cache: LocalCache, clock: Clock) -> Self {
        let mut tasks = cache.load_tasks();
        let directory = crate::models::MenteeDirectory::new(&[]);
        crate::categorize::categorize_all(&mut tasks, &directory);
        Self::new(tasks, Vec::new(), clock, cache, SyncQueue::offline())
    }

    /// The full in-memory task collection.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The mentee reference data.
    pub fn mentees(&self) -> &[Mentee] {
        &self.mentees
    }

    /// The fixed "today" reference.
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Looks up a task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Awaits all in-flight sync dispatches; call once before shutdown.
    pub async fn drain_sync(&self) {
        self.sync.drain().await;
    }

    pub(crate) fn persist(&self) {
        self.cache.save_tasks(&self.tasks);
    }
}
