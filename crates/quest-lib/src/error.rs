//! Error types for `quest-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for quest-lib operations.
#[derive(Error, Debug)]
pub enum QuestError {
    // === Quest Errors ===
    /// Quest with the specified ID was not found.
    #[error("Quest not found: {id}")]
    QuestNotFound { id: i64 },

    // === Validation Errors ===
    /// Invalid status value.
    #[error("Invalid status: {status} (expected Uncharted or Discovered)")]
    InvalidStatus { status: String },

    /// Invalid priority value.
    #[error("Invalid priority: {priority} (expected Low, Medium or High)")]
    InvalidPriority { priority: String },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === Storage Errors ===
    /// Generic storage error, including an exhausted id space.
    #[error("Storage error: {0}")]
    Storage(String),

    /// File not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuestError {
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    /// True when the operation targeted an id that is not in the journal.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::QuestNotFound { .. })
    }
}

/// Result type using `QuestError`.
pub type Result<T> = std::result::Result<T, QuestError>;
