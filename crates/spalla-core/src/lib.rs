//! Core library for the Spalla mentoring task board.
//!
//! This crate holds the task/board model of the Spalla dashboard: the
//! in-memory task collection with its filtered, grouped, kanban, and
//! timeline projections; the first-match-wins auto-categorization rules;
//! the best-effort local cache; and the fire-and-forget synchronization of
//! edits to a table-like store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    TaskBoard    │───▶│    SyncQueue    │───▶│      Store      │
//! │ (state + views) │    │ (fire & forget) │    │    (SQLite)     │
//! └────────┬────────┘    └─────────────────┘    └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   LocalCache    │  best-effort snapshot, fallback on load
//! └─────────────────┘
//! ```
//!
//! Mutations are optimistic: the in-memory state changes first, the cache
//! is rewritten, and the store write happens in the background with a
//! log-only failure policy. Only pre-I/O validation can fail an operation.
//!
//! # Quick Start
//!
//! ```rust
//! use spalla_core::{params::CreateTask, BoardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = BoardBuilder::new()
//!     .with_store_path(Some("tasks.db"))
//!     .build()
//!     .await?;
//!
//! let task = board.create_task(CreateTask {
//!     title: "Revisar dossiê".to_string(),
//!     ..Default::default()
//! })?;
//! println!("{task}");
//!
//! for task in board.filtered_tasks() {
//!     println!("{}", task.as_line());
//! }
//!
//! board.drain_sync().await;
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod cache;
pub mod categorize;
pub mod dates;
pub mod display;
pub mod error;
pub mod gantt;
pub mod models;
pub mod params;
pub mod reminders;
pub mod store;
pub mod sync;

// Re-export commonly used types
pub use board::{BoardBuilder, BoardColumns, BoardStats, ChildKind, MenteeTaskView, TaskBoard};
pub use cache::LocalCache;
pub use dates::Clock;
pub use error::{CoreError, Result};
pub use gantt::{GanttRange, GanttWindow};
pub use models::{
    BoardFilter, GroupKey, Mentee, Phase, Priority, Reminder, ReminderFilter, StatusFilter, Task,
    TaskStatus,
};
pub use reminders::ReminderBook;
pub use store::Store;
pub use sync::{SyncOp, SyncQueue};
