use std::collections::HashSet;

use crate::domain::{document::Document, entities::common::RelativePath, error::DomainError};

/// How a structured entry meets an existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Written only when absent (or when forced).
    #[default]
    Create,
    /// Merged into whatever is on disk; always written.
    Patch,
}

/// Content of one file set entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryContent {
    /// Written verbatim as UTF-8.
    Text(String),
    /// Serialized as JSON.
    Document { document: Document, mode: WriteMode },
}

impl EntryContent {
    pub fn is_patch(&self) -> bool {
        matches!(
            self,
            Self::Document {
                mode: WriteMode::Patch,
                ..
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileSetEntry {
    pub path: RelativePath,
    pub content: EntryContent,
}

impl FileSetEntry {
    pub fn is_patch(&self) -> bool {
        self.content.is_patch()
    }
}

/// Declarative set of files to realize under a root directory.
///
/// Entries are applied in insertion order. This is plain data: it is built
/// up front and handed to the materializer, which keeps nothing of it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSet {
    name: String,
    entries: Vec<FileSetEntry>,
}

impl FileSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, path: impl Into<RelativePath>, content: EntryContent) {
        self.entries.push(FileSetEntry {
            path: path.into(),
            content,
        });
    }

    /// Plain text, created if absent.
    pub fn with_text(mut self, path: impl Into<RelativePath>, text: impl Into<String>) -> Self {
        self.add(path, EntryContent::Text(text.into()));
        self
    }

    /// Structured document, created if absent.
    pub fn with_document(
        mut self,
        path: impl Into<RelativePath>,
        document: impl Into<Document>,
    ) -> Self {
        self.add(
            path,
            EntryContent::Document {
                document: document.into(),
                mode: WriteMode::Create,
            },
        );
        self
    }

    /// Structured document merged into the existing file.
    pub fn with_patch(mut self, path: impl Into<RelativePath>, document: impl Into<Document>) -> Self {
        self.add(
            path,
            EntryContent::Document {
                document: document.into(),
                mode: WriteMode::Patch,
            },
        );
        self
    }

    /// Append every entry of `other` after this set's entries.
    pub fn extend(mut self, other: FileSet) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Reject duplicate paths. An empty set is valid.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(DomainError::DuplicatePath {
                    path: entry.path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> impl Iterator<Item = &FileSetEntry> {
        self.entries.iter()
    }

    pub fn patches(&self) -> impl Iterator<Item = &FileSetEntry> {
        self.entries.iter().filter(|e| e.is_patch())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
