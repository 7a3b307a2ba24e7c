//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not merge or
//! file-set rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while realizing a file set.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Existing content at a patch target is not a JSON object.
    #[error("Cannot parse existing document {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },

    /// A document could not be serialized.
    #[error("Cannot serialize document for {path}: {reason}")]
    SerializeFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory adapter state is unusable (lock poisoned).
    #[error("Filesystem adapter lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ParseFailed { path, .. } => vec![
                format!("{} is not valid JSON", path.display()),
                "Fix the syntax or move the file aside, then run again".into(),
                "Entries written before this one were kept".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that no directory sits where a file is expected".into(),
            ],
            Self::StoreLockError => vec!["The in-memory filesystem is unusable".into()],
            Self::SerializeFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ParseFailed { .. } => ErrorCategory::Parse,
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::StoreLockError | Self::SerializeFailed { .. } => ErrorCategory::Internal,
        }
    }
}
