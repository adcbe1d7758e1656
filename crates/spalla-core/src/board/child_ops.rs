//! Nested-entity operations: subtasks, checklist, comments, tags,
//! handoffs, and parent links.
//!
//! All of these follow the same optimistic pattern as the task operations.
//! Subtask and checklist edits dispatch a wholesale replace of the stored
//! collection.

use jiff::Timestamp;
use uuid::Uuid;

use super::TaskBoard;
use crate::categorize::PRINCIPAL_FULL_NAME;
use crate::error::{CoreError, Result};
use crate::models::{ChecklistItem, Comment, Handoff, Task};
use crate::params::HandoffTask;
use crate::sync::SyncOp;

/// Which of the two ordered child collections an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Subtask,
    Checklist,
}

impl ChildKind {
    fn items(self, task: &mut Task) -> &mut Vec<ChecklistItem> {
        match self {
            ChildKind::Subtask => &mut task.subtasks,
            ChildKind::Checklist => &mut task.checklist,
        }
    }

    fn replace_op(self, task: &Task) -> SyncOp {
        match self {
            ChildKind::Subtask => SyncOp::ReplaceSubtasks {
                id: task.id.clone(),
                items: task.subtasks.clone(),
            },
            ChildKind::Checklist => SyncOp::ReplaceChecklist {
                id: task.id.clone(),
                items: task.checklist.clone(),
            },
        }
    }
}

impl TaskBoard {
    /// Appends an entry to a task's subtask or checklist collection.
    pub fn add_child_item(&mut self, id: &str, kind: ChildKind, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::invalid_input("texto", "item text must not be empty"));
        }
        let task = self.find_mut(id)?;
        kind.items(task).push(ChecklistItem {
            text: text.to_string(),
            done: false,
        });
        let op = kind.replace_op(task);
        self.sync.dispatch(op);
        self.persist();
        Ok(())
    }

    /// Toggles the done flag of an entry; returns its new state.
    pub fn toggle_child_item(&mut self, id: &str, kind: ChildKind, index: usize) -> Result<bool> {
        let task = self.find_mut(id)?;
        let items = kind.items(task);
        let item = items.get_mut(index).ok_or_else(|| {
            CoreError::invalid_input("index", format!("no item at position {index}"))
        })?;
        item.done = !item.done;
        let done = item.done;
        let op = kind.replace_op(task);
        self.sync.dispatch(op);
        self.persist();
        Ok(done)
    }

    /// Removes an entry by position.
    pub fn remove_child_item(&mut self, id: &str, kind: ChildKind, index: usize) -> Result<()> {
        let task = self.find_mut(id)?;
        let items = kind.items(task);
        if index >= items.len() {
            return Err(CoreError::invalid_input(
                "index",
                format!("no item at position {index}"),
            ));
        }
        items.remove(index);
        let op = kind.replace_op(task);
        self.sync.dispatch(op);
        self.persist();
        Ok(())
    }

    /// Adds a comment authored by the principal.
    pub fn add_comment(&mut self, id: &str, text: &str) -> Result<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::invalid_input("texto", "comment must not be empty"));
        }
        let task = self.find_mut(id)?;
        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            author: PRINCIPAL_FULL_NAME.to_string(),
            text: text.to_string(),
            timestamp: Timestamp::now(),
        };
        task.comments.push(comment.clone());

        self.sync.dispatch(SyncOp::InsertComment {
            id: id.to_string(),
            comment: comment.clone(),
        });
        self.persist();
        Ok(comment)
    }

    /// Deletes a comment by its id.
    pub fn delete_comment(&mut self, id: &str, comment_id: &str) -> Result<()> {
        let task = self.find_mut(id)?;
        let before = task.comments.len();
        task.comments.retain(|c| c.id != comment_id);
        if task.comments.len() == before {
            return Err(CoreError::CommentNotFound {
                id: comment_id.to_string(),
            });
        }

        self.sync.dispatch(SyncOp::DeleteComment {
            comment_id: comment_id.to_string(),
        });
        self.persist();
        Ok(())
    }

    /// Adds a tag; returns whether it was new. Matching is case-sensitive
    /// and the set stays deduplicated.
    pub fn add_tag(&mut self, id: &str, tag: &str) -> Result<bool> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(CoreError::invalid_input("tag", "tag must not be empty"));
        }
        let task = self.find_mut(id)?;
        let added = if task.tags.iter().any(|t| t == tag) {
            false
        } else {
            task.tags.push(tag.to_string());
            true
        };
        let op = SyncOp::UpdateTags {
            id: task.id.clone(),
            tags: task.tags.clone(),
        };
        self.sync.dispatch(op);
        self.persist();
        Ok(added)
    }

    /// Removes a tag; returns whether it was present.
    pub fn remove_tag(&mut self, id: &str, tag: &str) -> Result<bool> {
        let task = self.find_mut(id)?;
        let before = task.tags.len();
        task.tags.retain(|t| t != tag);
        let removed = task.tags.len() != before;
        let op = SyncOp::UpdateTags {
            id: task.id.clone(),
            tags: task.tags.clone(),
        };
        self.sync.dispatch(op);
        self.persist();
        Ok(removed)
    }

    /// Records a responsibility handoff and reassigns the task to the
    /// recipient. The trail is append-only.
    pub fn add_handoff(&mut self, id: &str, params: HandoffTask) -> Result<Task> {
        let to = params.to.trim().to_string();
        if to.is_empty() {
            return Err(CoreError::invalid_input("to", "recipient must not be empty"));
        }
        let task = self.find_mut(id)?;
        let from = params
            .from
            .or_else(|| task.assignee.clone())
            .unwrap_or_else(|| "equipe".to_string());
        let handoff = Handoff {
            from,
            to: to.clone(),
            note: params.note,
            date: Timestamp::now(),
        };
        task.handoffs.push(handoff.clone());
        task.assignee = Some(to.clone());
        task.updated_at = Timestamp::now();
        let updated = task.clone();

        self.sync.dispatch(SyncOp::InsertHandoff {
            id: updated.id.clone(),
            handoff,
        });
        self.sync.dispatch(SyncOp::UpdateAssignee {
            id: updated.id.clone(),
            assignee: to,
            updated_at: updated.updated_at,
        });
        self.persist();
        Ok(updated)
    }

    /// Sets or clears a task's parent. The reference is soft: the parent
    /// is not required to exist.
    pub fn set_parent(&mut self, id: &str, parent_id: Option<String>) -> Result<()> {
        let task = self.find_mut(id)?;
        task.parent_task_id = parent_id.clone();
        let op = SyncOp::UpdateParent {
            id: task.id.clone(),
            parent: parent_id,
        };
        self.sync.dispatch(op);
        self.persist();
        Ok(())
    }

    /// Tasks grouped one level under the given parent.
    pub fn child_tasks(&self, id: &str) -> Vec<&Task> {
        self.tasks()
            .iter()
            .filter(|t| t.parent_task_id.as_deref() == Some(id))
            .collect()
    }

    /// The parent of a task, when the reference resolves.
    pub fn parent_task(&self, id: &str) -> Option<&Task> {
        let parent_id = self.task(id)?.parent_task_id.as_deref()?;
        self.task(parent_id)
    }
}
