//! Operation result wrappers.

use std::fmt;

use crate::models::Task;

/// Confirmation for a newly created task.
pub struct CreateResult(pub Task);

impl fmt::Display for CreateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tarefa criada")?;
        writeln!(f)?;
        write!(f, "{}", self.0)
    }
}

/// Confirmation for an updated task, with an optional change list.
pub struct UpdateResult {
    task: Task,
    changes: Vec<String>,
}

impl UpdateResult {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(task: Task, changes: Vec<String>) -> Self {
        Self { task, changes }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tarefa atualizada")?;
        writeln!(f)?;
        if !self.changes.is_empty() {
            writeln!(f, "Alterações:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", self.task)
    }
}

/// Confirmation for a removed task.
pub struct DeleteResult(pub Task);

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tarefa removida: {} (ID: {})", self.0.title, self.0.id)
    }
}

/// A short success or failure line.
pub struct OperationStatus {
    success: bool,
    message: String,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.success { "✓" } else { "✗" };
        writeln!(f, "{mark} {}", self.message)
    }
}
