// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports can be kept after the call fails)
/// - Categorizable (for caller display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Merge Validation Errors
    // ========================================================================
    /// A list slated for identity merge holds an element without a usable
    /// `name` field.
    #[error("{path}: element {index} of list '{key}' has no non-empty 'name' field")]
    MissingIdentity {
        path: String,
        key: String,
        index: usize,
    },

    /// A patch could not be applied because a root was not a map.
    #[error("{path}: cannot merge into a {found}, expected an object")]
    MergeRootNotMap { path: String, found: &'static str },

    // ========================================================================
    // FileSet Errors
    // ========================================================================
    #[error("Duplicate path in file set: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the target root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Empty path in file set")]
    EmptyPath,

    // ========================================================================
    // Initializer Input Errors
    // ========================================================================
    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingIdentity { path, key, .. } => vec![
                format!("Every element of '{}' in {} needs a 'name' field", key, path),
                "The file on disk was left untouched".into(),
            ],
            Self::MergeRootNotMap { path, .. } => vec![
                format!("{} must contain a JSON object at the top level", path),
                "Fix or remove the file and run again".into(),
            ],
            Self::DuplicatePath { path } => vec![format!(
                "'{}' appears more than once; combine the entries",
                path
            )],
            Self::AbsolutePathNotAllowed { .. } | Self::PathEscapesRoot { .. } => {
                vec!["File set paths must be relative to the target root".into()]
            }
            Self::InvalidServiceName { .. } => {
                vec!["Provide a service name, for example: 'Light Level'".into()]
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for caller display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingIdentity { .. } | Self::MergeRootNotMap { .. } => ErrorCategory::Merge,
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::EmptyPath => ErrorCategory::FileSet,
            Self::InvalidServiceName { .. } => ErrorCategory::Input,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Merge,
    FileSet,
    Input,
}
