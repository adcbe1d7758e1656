//! Task CRUD and status transitions.

use jiff::Timestamp;
use uuid::Uuid;

use super::TaskBoard;
use crate::categorize::categorize;
use crate::error::{CoreError, Result};
use crate::models::{ChecklistItem, MenteeDirectory, Origin, Task, TaskStatus};
use crate::params::{CreateTask, UpdateTask};
use crate::sync::SyncOp;

impl TaskBoard {
    pub(crate) fn find_mut(&mut self, id: &str) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::TaskNotFound { id: id.to_string() })
    }

    /// Creates a task with a fresh client-side id.
    ///
    /// The trimmed title must be non-empty; this is the only validation
    /// that happens before any I/O. Tasks created without a preset space
    /// are auto-categorized immediately.
    pub fn create_task(&mut self, params: CreateTask) -> Result<Task> {
        let title = params.title.trim().to_string();
        if title.is_empty() {
            return Err(CoreError::invalid_input("titulo", "title must not be empty"));
        }

        let now = Timestamp::now();
        let as_items = |texts: Vec<String>| -> Vec<ChecklistItem> {
            texts
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(|text| ChecklistItem { text, done: false })
                .collect()
        };

        let mut task = Task {
            id: Uuid::new_v4().to_string(),
            title,
            description: params.description,
            assignee: params.assignee,
            accompanist: params.accompanist,
            mentee_name: params.mentee_name,
            priority: params.priority,
            status: TaskStatus::Pending,
            start_date: params.start_date,
            due_date: params.due_date,
            doc_link: params.doc_link,
            space_id: params.space_id,
            list_id: params.list_id,
            origin: Origin::Manual,
            parent_task_id: params.parent_task_id,
            subtasks: as_items(params.subtasks),
            checklist: as_items(params.checklist),
            comments: Vec::new(),
            tags: crate::models::raw::dedup_tags(params.tags),
            handoffs: Vec::new(),
            attachments: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let directory = MenteeDirectory::new(&self.mentees);
        categorize(&mut task, &directory);

        self.sync.dispatch(SyncOp::UpsertTask(Box::new(task.clone())));
        if !task.subtasks.is_empty() {
            self.sync.dispatch(SyncOp::ReplaceSubtasks {
                id: task.id.clone(),
                items: task.subtasks.clone(),
            });
        }
        if !task.checklist.is_empty() {
            self.sync.dispatch(SyncOp::ReplaceChecklist {
                id: task.id.clone(),
                items: task.checklist.clone(),
            });
        }

        self.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// Applies field edits to a task, stamping the update timestamp.
    pub fn update_task(&mut self, id: &str, params: UpdateTask) -> Result<Task> {
        if let Some(title) = &params.title {
            if title.trim().is_empty() {
                return Err(CoreError::invalid_input("titulo", "title must not be empty"));
            }
        }

        let task = self.find_mut(id)?;
        if let Some(title) = params.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = params.description {
            task.description = Some(description);
        }
        if let Some(assignee) = params.assignee {
            task.assignee = Some(assignee);
        }
        if let Some(accompanist) = params.accompanist {
            task.accompanist = Some(accompanist);
        }
        if let Some(mentee_name) = params.mentee_name {
            task.mentee_name = Some(mentee_name);
        }
        if let Some(priority) = params.priority {
            task.priority = priority;
        }
        if let Some(start_date) = params.start_date {
            task.start_date = Some(start_date);
        }
        if let Some(due_date) = params.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(doc_link) = params.doc_link {
            task.doc_link = Some(doc_link);
        }
        // Manual space/list assignment overrides categorization for good.
        if let Some(space_id) = params.space_id {
            task.space_id = Some(space_id);
        }
        if let Some(list_id) = params.list_id {
            task.list_id = Some(list_id);
        }
        task.updated_at = Timestamp::now();
        let updated = task.clone();

        self.sync
            .dispatch(SyncOp::UpsertTask(Box::new(updated.clone())));
        self.sync.dispatch(SyncOp::ReplaceSubtasks {
            id: updated.id.clone(),
            items: updated.subtasks.clone(),
        });
        self.sync.dispatch(SyncOp::ReplaceChecklist {
            id: updated.id.clone(),
            items: updated.checklist.clone(),
        });

        self.persist();
        Ok(updated)
    }

    /// Sets a task's status. Any transition is permitted, including
    /// reopening a done task.
    pub fn set_status(&mut self, id: &str, status: TaskStatus) -> Result<Task> {
        let task = self.find_mut(id)?;
        task.status = status;
        task.updated_at = Timestamp::now();
        let updated = task.clone();

        self.sync.dispatch(SyncOp::UpdateStatus {
            id: updated.id.clone(),
            status,
            updated_at: updated.updated_at,
        });
        self.persist();
        Ok(updated)
    }

    /// Removes a task optimistically; the remote delete is fire-and-forget
    /// and expected (not guaranteed) to cascade to child collections.
    pub fn delete_task(&mut self, id: &str) -> Result<Task> {
        let position = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::TaskNotFound { id: id.to_string() })?;
        let removed = self.tasks.remove(position);

        self.sync.dispatch(SyncOp::DeleteTask {
            id: removed.id.clone(),
        });
        self.persist();
        Ok(removed)
    }
}
