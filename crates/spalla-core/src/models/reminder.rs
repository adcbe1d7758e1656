//! Standalone reminder model.
//!
//! Reminders are fully client-local: they never touch the remote store and
//! live only in the local cache slot.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::dates::parse_date;
use super::Priority;

/// A lightweight dated note, independent of the task board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    pub id: String,

    #[serde(rename = "texto")]
    pub text: String,

    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,

    #[serde(rename = "prioridade", default)]
    pub priority: Priority,

    #[serde(rename = "mentorado_nome", default, skip_serializing_if = "Option::is_none")]
    pub mentee_name: Option<String>,

    #[serde(rename = "concluido", default)]
    pub done: bool,

    pub created_at: Timestamp,
}

/// A reminder as found in the cache slot.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawReminder {
    pub id: Option<String>,
    pub texto: Option<String>,
    pub data: Option<String>,
    pub prioridade: Option<String>,
    pub mentorado_nome: Option<String>,
    pub concluido: bool,
    pub created_at: Option<String>,
}

impl RawReminder {
    /// Resolves the record; `None` when id or text is missing or empty.
    pub fn into_reminder(self) -> Option<Reminder> {
        let id = self.id.filter(|s| !s.trim().is_empty())?;
        let text = self
            .texto
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())?;

        Some(Reminder {
            id,
            text,
            date: self.data.as_deref().and_then(parse_date),
            priority: self
                .prioridade
                .and_then(|p| p.parse().ok())
                .unwrap_or_default(),
            mentee_name: self.mentorado_nome.filter(|s| !s.trim().is_empty()),
            done: self.concluido,
            created_at: self
                .created_at
                .and_then(|s| s.parse().ok())
                .unwrap_or(Timestamp::UNIX_EPOCH),
        })
    }
}
