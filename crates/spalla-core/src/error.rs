//! Error types for the task board library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all board operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store connection or query errors
    #[error("Store error: {message}")]
    Store {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: String },
    /// Comment not found on a task
    #[error("Comment with ID {id} not found")]
    CommentNotFound { id: String },
    /// Reminder not found for the given ID
    #[error("Reminder with ID {id} not found")]
    ReminderNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CoreError {
    /// Creates a store error with a message and its rusqlite source.
    pub fn store_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Store {
            message: message.to_string(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Extension trait for mapping rusqlite Results into `CoreError` with a
/// short context message.
pub trait StoreResultExt<T> {
    /// Map store errors with a message.
    fn store_context(self, message: &str) -> Result<T>;
}

impl<T> StoreResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn store_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CoreError::store_error(message, e))
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, CoreError>;
