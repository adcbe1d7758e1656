//! Fire-and-forget synchronization of board mutations to the store.
//!
//! Every mutating board operation enqueues one [`SyncOp`] and moves on; the
//! caller never observes the outcome. The delivery policy is deliberate and
//! named: **log-only, no retry**. A failed op is logged at `warn!` and
//! dropped; there is no outbox persistence and no reconciliation. The
//! authoritative state after a failure is whatever the next full load
//! observes.
//!
//! The queue tracks in-flight dispatches so a process can [`drain`] them
//! before exiting; within a session nothing ever waits on them.
//!
//! [`drain`]: SyncQueue::drain

use std::path::PathBuf;
use std::sync::Mutex;

use jiff::Timestamp;
use log::{debug, warn};
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::models::{ChecklistItem, Comment, Handoff, Task, TaskStatus};
use crate::store::Store;

/// One store mutation, captured with everything needed to apply it later.
#[derive(Debug, Clone)]
pub enum SyncOp {
    UpsertTask(Box<Task>),
    UpdateStatus {
        id: String,
        status: TaskStatus,
        updated_at: Timestamp,
    },
    UpdateTags {
        id: String,
        tags: Vec<String>,
    },
    UpdateAssignee {
        id: String,
        assignee: String,
        updated_at: Timestamp,
    },
    UpdateParent {
        id: String,
        parent: Option<String>,
    },
    DeleteTask {
        id: String,
    },
    ReplaceSubtasks {
        id: String,
        items: Vec<ChecklistItem>,
    },
    ReplaceChecklist {
        id: String,
        items: Vec<ChecklistItem>,
    },
    InsertComment {
        id: String,
        comment: Comment,
    },
    DeleteComment {
        comment_id: String,
    },
    InsertHandoff {
        id: String,
        handoff: Handoff,
    },
}

impl SyncOp {
    /// Short label for log lines.
    pub fn describe(&self) -> &'static str {
        match self {
            SyncOp::UpsertTask(_) => "upsert task",
            SyncOp::UpdateStatus { .. } => "update status",
            SyncOp::UpdateTags { .. } => "update tags",
            SyncOp::UpdateAssignee { .. } => "update assignee",
            SyncOp::UpdateParent { .. } => "update parent",
            SyncOp::DeleteTask { .. } => "delete task",
            SyncOp::ReplaceSubtasks { .. } => "replace subtasks",
            SyncOp::ReplaceChecklist { .. } => "replace checklist",
            SyncOp::InsertComment { .. } => "insert comment",
            SyncOp::DeleteComment { .. } => "delete comment",
            SyncOp::InsertHandoff { .. } => "insert handoff",
        }
    }

    /// Applies the op against an open store.
    pub fn apply(self, store: &mut Store) -> Result<()> {
        match self {
            SyncOp::UpsertTask(task) => store.upsert_task(&task),
            SyncOp::UpdateStatus {
                id,
                status,
                updated_at,
            } => store.update_status(&id, status, updated_at),
            SyncOp::UpdateTags { id, tags } => store.update_tags(&id, &tags),
            SyncOp::UpdateAssignee {
                id,
                assignee,
                updated_at,
            } => store.update_assignee(&id, &assignee, updated_at),
            SyncOp::UpdateParent { id, parent } => store.update_parent(&id, parent.as_deref()),
            SyncOp::DeleteTask { id } => store.delete_task(&id),
            SyncOp::ReplaceSubtasks { id, items } => store.replace_subtasks(&id, &items),
            SyncOp::ReplaceChecklist { id, items } => store.replace_checklist(&id, &items),
            SyncOp::InsertComment { id, comment } => store.insert_comment(&id, &comment),
            SyncOp::DeleteComment { comment_id } => store.delete_comment(&comment_id),
            SyncOp::InsertHandoff { id, handoff } => store.insert_handoff(&id, &handoff),
        }
    }
}

/// Dispatches sync ops in the background, never blocking the caller.
pub struct SyncQueue {
    store_path: Option<PathBuf>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl SyncQueue {
    /// A queue backed by the store at the given path.
    pub fn new(store_path: PathBuf) -> Self {
        Self {
            store_path: Some(store_path),
            in_flight: Mutex::new(Vec::new()),
        }
    }

    /// A queue with no store: every dispatch is a no-op. This is the
    /// disconnected mode of the original client.
    pub fn offline() -> Self {
        Self {
            store_path: None,
            in_flight: Mutex::new(Vec::new()),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.store_path.is_none()
    }

    /// Enqueues an op and returns immediately.
    ///
    /// Outside a tokio runtime the op is dropped with a warning; the board
    /// state is already updated locally either way.
    pub fn dispatch(&self, op: SyncOp) {
        let Some(path) = self.store_path.clone() else {
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("sync '{}' dispatched outside a runtime; dropping", op.describe());
            return;
        };

        let label = op.describe();
        let handle = runtime.spawn(async move {
            let outcome = tokio::task::spawn_blocking(move || {
                let mut store = Store::open(&path)?;
                op.apply(&mut store)
            })
            .await;

            match outcome {
                Ok(Ok(())) => debug!("sync '{label}' applied"),
                Ok(Err(e)) => warn!("sync '{label}' failed, not retrying: {e}"),
                Err(e) => warn!("sync '{label}' task join error: {e}"),
            }
        });

        if let Ok(mut in_flight) = self.in_flight.lock() {
            in_flight.push(handle);
        }
    }

    /// Awaits every in-flight dispatch. Called once at process shutdown
    /// (and by tests that need determinism); never on the mutation path.
    pub async fn drain(&self) {
        let handles: Vec<JoinHandle<()>> = match self.in_flight.lock() {
            Ok(mut in_flight) => in_flight.drain(..).collect(),
            Err(_) => return,
        };
        for handle in handles {
            let _ = handle.await;
        }
    }
}
