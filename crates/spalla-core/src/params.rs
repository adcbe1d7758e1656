//! Parameter structures for board operations.
//!
//! These structs carry operation inputs across interface layers without
//! framework-specific derives: the CLI defines its own clap wrappers and
//! converts into these. Serde derives are kept so parameters can also move
//! through serialized channels.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::Priority;

/// Inputs for creating a task.
///
/// The title is the only required field; everything else mirrors the task
/// form's optional inputs. Space/list may be preset to override
/// auto-categorization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub accompanist: Option<String>,
    pub mentee_name: Option<String>,
    pub priority: Priority,
    pub start_date: Option<Date>,
    pub due_date: Option<Date>,
    pub doc_link: Option<String>,
    pub space_id: Option<String>,
    pub list_id: Option<String>,
    pub parent_task_id: Option<String>,
    pub tags: Vec<String>,
    pub subtasks: Vec<String>,
    pub checklist: Vec<String>,
}

/// Field edits for an existing task; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub accompanist: Option<String>,
    pub mentee_name: Option<String>,
    pub priority: Option<Priority>,
    pub start_date: Option<Date>,
    pub due_date: Option<Date>,
    pub doc_link: Option<String>,
    pub space_id: Option<String>,
    pub list_id: Option<String>,
}

/// Inputs for a responsibility handoff.
///
/// When `from` is omitted the task's current assignee is recorded as the
/// giving side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandoffTask {
    pub from: Option<String>,
    pub to: String,
    pub note: Option<String>,
}

/// Inputs for creating a reminder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateReminder {
    pub text: String,
    pub date: Option<Date>,
    pub priority: Priority,
    pub mentee_name: Option<String>,
}
