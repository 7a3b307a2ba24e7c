//! Unified error handling for Strata Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Strata Core operations.
#[derive(Debug, Error, Clone)]
pub enum StrataError {
    /// Merge or file-set rule violations. Nothing was written for the
    /// offending entry.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Parse and filesystem failures.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Options could not be loaded.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl StrataError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check the options file and STRATA_* environment variables".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Merge
                | crate::domain::ErrorCategory::FileSet
                | crate::domain::ErrorCategory::Input => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for caller display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid patch or file set.
    Validation,
    /// Existing file is not a usable document.
    Parse,
    /// The filesystem refused an operation.
    Io,
    Configuration,
    /// Unexpected adapter or serializer failure.
    Internal,
}

/// Convenient result type alias.
pub type StrataResult<T> = Result<T, StrataError>;
