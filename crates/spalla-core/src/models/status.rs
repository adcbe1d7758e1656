//! Status, priority, and origin enumerations for tasks.
//!
//! Wire representations keep the Portuguese labels used by the existing
//! store and cached data, so records written by earlier versions of the
//! dashboard load unchanged.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses.
///
/// Transitions are free-form label changes: any status may move directly to
/// any other, including reopening a done task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TaskStatus {
    /// Task has not been started
    #[default]
    #[serde(rename = "pendente")]
    Pending,

    /// Task is being worked on
    #[serde(rename = "em_andamento")]
    InProgress,

    /// Task has been completed
    #[serde(rename = "concluida")]
    Done,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pendente" => Ok(TaskStatus::Pending),
            "em_andamento" | "em-andamento" => Ok(TaskStatus::InProgress),
            "concluida" | "concluída" => Ok(TaskStatus::Done),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// Wire/store string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pendente",
            TaskStatus::InProgress => "em_andamento",
            TaskStatus::Done => "concluida",
        }
    }

    /// Status with a consistent icon for display.
    ///
    /// # Icons Used
    /// - `○ Pendente` - Circle for pending tasks
    /// - `➤ Em andamento` - Arrow for active tasks
    /// - `✓ Concluída` - Checkmark for completed tasks
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "○ Pendente",
            TaskStatus::InProgress => "➤ Em andamento",
            TaskStatus::Done => "✓ Concluída",
        }
    }
}

/// Task priority, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgente,
    Alta,
    #[default]
    Normal,
    Baixa,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "urgente" => Ok(Priority::Urgente),
            "alta" => Ok(Priority::Alta),
            "normal" => Ok(Priority::Normal),
            "baixa" => Ok(Priority::Baixa),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Wire/store string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgente => "urgente",
            Priority::Alta => "alta",
            Priority::Normal => "normal",
            Priority::Baixa => "baixa",
        }
    }

    /// Sort rank: `urgente` first, `baixa` last.
    ///
    /// Unrecognized or missing priorities are treated as [`Priority::Normal`]
    /// at the ingestion boundary, so the rank is total over all tasks.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgente => 0,
            Priority::Alta => 1,
            Priority::Normal => 2,
            Priority::Baixa => 3,
        }
    }
}

/// Where a task entered the system.
///
/// The tag set is open-ended: unrecognized tags from older data survive
/// round-trips via [`Origin::Other`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum Origin {
    /// Created through the task form
    #[default]
    Manual,
    /// Agreed with the mentee during a session
    TarefasAcordadas,
    /// Derived from a call analysis
    AnaliseCall,
    /// Direction from the principal
    Direcionamento,
    /// Dossier pipeline
    Dossie,
    /// Any other tag carried through from the source data
    Other(String),
}

impl Origin {
    /// Wire/store string representation.
    pub fn as_str(&self) -> &str {
        match self {
            Origin::Manual => "manual",
            Origin::TarefasAcordadas => "tarefas_acordadas",
            Origin::AnaliseCall => "analise_call",
            Origin::Direcionamento => "direcionamento",
            Origin::Dossie => "dossie",
            Origin::Other(tag) => tag,
        }
    }
}

impl From<String> for Origin {
    fn from(s: String) -> Self {
        match s.as_str() {
            "manual" | "" => Origin::Manual,
            "tarefas_acordadas" => Origin::TarefasAcordadas,
            "analise_call" => Origin::AnaliseCall,
            "direcionamento" => Origin::Direcionamento,
            "dossie" => Origin::Dossie,
            _ => Origin::Other(s),
        }
    }
}

impl From<Origin> for String {
    fn from(origin: Origin) -> Self {
        origin.as_str().to_string()
    }
}
