//! Tolerant ingestion types for cached and stored records.
//!
//! Data written by earlier versions of the dashboard is duck-typed: dates
//! appear in two formats and under two field names (`data_fim`/`prazo`),
//! child-entry text appears as `texto` or `text`, and enums may carry
//! unrecognized labels. Everything is resolved here, once, into the
//! canonical [`Task`] shape. A record that cannot produce a non-empty id
//! and title is dropped rather than failing the surrounding load.

use serde::Deserialize;

use crate::dates::parse_date;
use super::{ChecklistItem, Comment, Handoff, Task};

/// A task record as found in a cache slot or a loosely-shaped payload.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTask {
    pub id: Option<String>,
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub responsavel: Option<String>,
    pub acompanhante: Option<String>,
    pub mentorado_nome: Option<String>,
    pub prioridade: Option<String>,
    pub status: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub prazo: Option<String>,
    pub doc_link: Option<String>,
    pub space_id: Option<String>,
    pub list_id: Option<String>,
    pub fonte: Option<String>,
    pub parent_task_id: Option<String>,
    pub subtasks: Vec<RawItem>,
    pub checklist: Vec<RawItem>,
    pub comments: Vec<RawComment>,
    pub tags: Vec<String>,
    pub handoffs: Vec<RawHandoff>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A subtask/checklist entry with either text field name.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawItem {
    #[serde(alias = "texto")]
    pub text: Option<String>,
    pub done: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawComment {
    pub id: Option<String>,
    pub author: Option<String>,
    #[serde(alias = "texto")]
    pub text: Option<String>,
    #[serde(alias = "created_at")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawHandoff {
    #[serde(alias = "from_person")]
    pub from: Option<String>,
    #[serde(alias = "to_person")]
    pub to: Option<String>,
    pub note: Option<String>,
    #[serde(alias = "created_at")]
    pub date: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl RawTask {
    /// Resolves the record into the canonical task shape.
    ///
    /// Returns `None` when id or title is missing or empty. Unrecognized
    /// status, priority, and date values degrade to their defaults.
    pub fn into_task(self) -> Option<Task> {
        let id = non_empty(self.id)?;
        let title = non_empty(self.titulo)?;

        Some(Task {
            id,
            title,
            description: non_empty(self.descricao),
            assignee: non_empty(self.responsavel),
            accompanist: non_empty(self.acompanhante),
            mentee_name: non_empty(self.mentorado_nome),
            priority: self
                .prioridade
                .and_then(|p| p.parse().ok())
                .unwrap_or_default(),
            status: self.status.and_then(|s| s.parse().ok()).unwrap_or_default(),
            start_date: self.data_inicio.as_deref().and_then(parse_date),
            // The two deadline field names are interchangeable in the
            // source data; data_fim wins when both are present.
            due_date: self
                .data_fim
                .as_deref()
                .and_then(parse_date)
                .or_else(|| self.prazo.as_deref().and_then(parse_date)),
            doc_link: non_empty(self.doc_link),
            space_id: non_empty(self.space_id),
            list_id: non_empty(self.list_id),
            origin: self.fonte.unwrap_or_default().into(),
            parent_task_id: non_empty(self.parent_task_id),
            subtasks: self.subtasks.into_iter().filter_map(RawItem::into_item).collect(),
            checklist: self.checklist.into_iter().filter_map(RawItem::into_item).collect(),
            comments: self
                .comments
                .into_iter()
                .filter_map(RawComment::into_comment)
                .collect(),
            tags: dedup_tags(self.tags),
            handoffs: self
                .handoffs
                .into_iter()
                .filter_map(RawHandoff::into_handoff)
                .collect(),
            attachments: Vec::new(),
            created_at: self
                .created_at
                .and_then(|s| s.parse().ok())
                .unwrap_or(jiff::Timestamp::UNIX_EPOCH),
            updated_at: self
                .updated_at
                .and_then(|s| s.parse().ok())
                .unwrap_or(jiff::Timestamp::UNIX_EPOCH),
        })
    }
}

impl RawItem {
    fn into_item(self) -> Option<ChecklistItem> {
        Some(ChecklistItem {
            text: non_empty(self.text)?,
            done: self.done,
        })
    }
}

impl RawComment {
    fn into_comment(self) -> Option<Comment> {
        Some(Comment {
            id: non_empty(self.id)?,
            author: self.author.unwrap_or_default(),
            text: non_empty(self.text)?,
            timestamp: self
                .timestamp
                .and_then(|s| s.parse().ok())
                .unwrap_or(jiff::Timestamp::UNIX_EPOCH),
        })
    }
}

impl RawHandoff {
    fn into_handoff(self) -> Option<Handoff> {
        Some(Handoff {
            from: self.from.unwrap_or_default(),
            to: non_empty(self.to)?,
            note: non_empty(self.note),
            date: self
                .date
                .and_then(|s| s.parse().ok())
                .unwrap_or(jiff::Timestamp::UNIX_EPOCH),
        })
    }
}

/// Deduplicates tags preserving first-seen order; matching is
/// case-sensitive.
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
