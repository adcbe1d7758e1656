//! Task model definition and related functionality.
//!
//! Field names keep the Portuguese wire representation of the existing
//! store and local cache via serde renames; the Rust-side names are the
//! English equivalents. Optional fields are resolved once at the ingestion
//! boundary ([`crate::models::raw`]) rather than re-derived at every read
//! site.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Origin, Priority, TaskStatus};

/// A unit of work on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Opaque unique id, generated client-side on creation
    pub id: String,

    /// Title of the task; never empty once saved
    #[serde(rename = "titulo")]
    pub title: String,

    /// Free-form description
    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Primary assignee name
    #[serde(rename = "responsavel", default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Secondary "accompanying" assignee
    #[serde(rename = "acompanhante", default, skip_serializing_if = "Option::is_none")]
    pub accompanist: Option<String>,

    /// Associated mentee, matched by name (soft reference)
    #[serde(rename = "mentorado_nome", default, skip_serializing_if = "Option::is_none")]
    pub mentee_name: Option<String>,

    /// Priority; defaults to normal when absent or unrecognized
    #[serde(rename = "prioridade", default)]
    pub priority: Priority,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,

    /// Start date
    #[serde(rename = "data_inicio", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    /// End date / deadline (the source data's `data_fim`/`prazo` pair,
    /// normalized to one field at ingestion)
    #[serde(rename = "data_fim", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,

    /// Free-text document link
    #[serde(rename = "doc_link", default, skip_serializing_if = "Option::is_none")]
    pub doc_link: Option<String>,

    /// Organizational space id; assigned once by categorization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,

    /// List id within the space
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,

    /// Where the task entered the system
    #[serde(rename = "fonte", default)]
    pub origin: Origin,

    /// Optional one-level grouping under another task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_task_id: Option<String>,

    /// Subtasks, insertion order significant
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<ChecklistItem>,

    /// Checklist items, insertion order significant
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<ChecklistItem>,

    /// Comments, insertion order significant
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,

    /// Tags: case-sensitive, deduplicated
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Append-only audit trail of responsibility transfers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub handoffs: Vec<Handoff>,

    /// Unused placeholder, kept for wire compatibility
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Task {
    /// Whether the task is overdue: still pending with a due date strictly
    /// before `today`.
    pub fn is_overdue(&self, today: Date) -> bool {
        self.status == TaskStatus::Pending && self.due_date.is_some_and(|d| d < today)
    }

    /// Checklist completion summary; `None` for an empty checklist.
    pub fn checklist_progress(&self) -> Option<ChecklistProgress> {
        if self.checklist.is_empty() {
            return None;
        }
        let total = self.checklist.len();
        let done = self.checklist.iter().filter(|c| c.done).count();
        Some(ChecklistProgress {
            done,
            total,
            pct: ((done as f64 / total as f64) * 100.0).round() as u32,
        })
    }
}

/// A subtask or checklist entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Entry text (`texto` in store rows, `text` in cached data)
    #[serde(rename = "text", alias = "texto")]
    pub text: String,

    #[serde(default)]
    pub done: bool,
}

/// A comment on a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: String,

    pub author: String,

    #[serde(rename = "text", alias = "texto")]
    pub text: String,

    #[serde(alias = "created_at")]
    pub timestamp: Timestamp,
}

/// A recorded transfer of task ownership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Handoff {
    #[serde(rename = "from", alias = "from_person")]
    pub from: String,

    #[serde(rename = "to", alias = "to_person")]
    pub to: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(alias = "created_at")]
    pub date: Timestamp,
}

/// Checklist completion summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistProgress {
    pub done: usize,
    pub total: usize,
    /// Rounded completion percentage
    pub pct: u32,
}
