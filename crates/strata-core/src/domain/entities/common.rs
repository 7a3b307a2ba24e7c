use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Segment separators. `\\` counts too, as it does on Windows.
const SEPARATORS: [char; 2] = ['/', '\\'];

/// A POSIX-style path guaranteed to stay inside the materialization root.
///
/// Invariant: never absolute, never contains a `..` component. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path is absolute or escapes the root (use `try_new` for
    /// fallible construction).
    pub fn new(path: impl Into<String>) -> Self {
        match Self::try_new(path) {
            Ok(p) => p,
            Err(e) => panic!("invalid RelativePath: {e}"),
        }
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_empty() {
            return Err(DomainError::EmptyPath);
        }
        if path.starts_with(SEPARATORS) || Path::new(&path).is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed { path });
        }
        if path.split(SEPARATORS).any(|segment| segment == "..") {
            return Err(DomainError::PathEscapesRoot { path });
        }
        Ok(Self(path))
    }

    /// Resolve this path under `root`, one segment at a time.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let mut resolved = root.to_path_buf();
        for segment in self.0.split(SEPARATORS) {
            match Path::new(segment).components().next() {
                Some(Component::Normal(_)) => resolved.push(segment),
                // "" and "." segments
                _ => {}
            }
        }
        resolved
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl TryFrom<String> for RelativePath {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
