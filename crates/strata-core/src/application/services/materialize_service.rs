//! Materialize Service - realizes file sets on disk.
//!
//! Each entry is handled exactly once, in file-set order:
//!
//! | exists | patch | force | action                                   |
//! |--------|-------|-------|------------------------------------------|
//! | no     | no    | any   | create parents, write content            |
//! | yes    | no    | no    | skip                                     |
//! | yes    | no    | yes   | overwrite (prior content never read)     |
//! | any    | yes   | any   | read, merge, write back                  |
//!
//! The first failure stops the call. Entries written before it stay on
//! disk; there is no rollback.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
    },
    domain::{
        Document, DomainValidator as validator, EntryContent, FileSet, FileSetEntry, IgnoreUpdate,
        RelativePath, WriteMode, merge, merge_ignore_lines,
    },
    error::{StrataError, StrataResult},
};

fn default_spaces() -> usize {
    4
}

/// Options for one materialization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializeOptions {
    /// Overwrite existing non-patch files.
    #[serde(default)]
    pub force: bool,
    /// Indent width for structured documents.
    #[serde(default = "default_spaces")]
    pub spaces: usize,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self {
            force: false,
            spaces: default_spaces(),
        }
    }
}

impl MaterializeOptions {
    pub fn forced(mut self) -> Self {
        self.force = true;
        self
    }

    pub fn with_spaces(mut self, spaces: usize) -> Self {
        self.spaces = spaces;
        self
    }
}

/// What happened to one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Nothing existed; the file was written.
    Created,
    /// A file existed and was left alone.
    Skipped,
    /// A file existed and was replaced (`force`).
    Overwritten,
    /// An existing document was merged and rewritten.
    Merged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub path: RelativePath,
    pub outcome: EntryOutcome,
}

/// Result of a successful materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    root: PathBuf,
    entries: Vec<EntryReport>,
}

impl MaterializeReport {
    /// The effective (absolute) root the file set was written under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[EntryReport] {
        &self.entries
    }

    pub fn outcome_of(&self, path: &str) -> Option<EntryOutcome> {
        self.entries
            .iter()
            .find(|e| e.path.as_str() == path)
            .map(|e| e.outcome)
    }

    pub fn count(&self, outcome: EntryOutcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }
}

/// File-set materializer.
pub struct MaterializeService {
    filesystem: Box<dyn Filesystem>,
}

impl MaterializeService {
    /// Create a new materialize service on top of a filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Realize `file_set` under `root`.
    ///
    /// A relative `root` is resolved against the current working directory;
    /// the root is created when missing.
    #[instrument(
        skip_all,
        fields(
            file_set = %file_set.name(),
            root = %root.as_ref().display(),
            force = options.force
        )
    )]
    pub fn materialize(
        &self,
        root: impl AsRef<Path>,
        file_set: &FileSet,
        options: &MaterializeOptions,
    ) -> StrataResult<MaterializeReport> {
        validator::validate_file_set(file_set).map_err(StrataError::Domain)?;

        let root = self.prepare_root(root.as_ref())?;
        let mut entries = Vec::with_capacity(file_set.entry_count());

        for entry in file_set.entries() {
            let outcome = self.apply(&root, entry, options)?;
            entries.push(EntryReport {
                path: entry.path.clone(),
                outcome,
            });
        }

        let report = MaterializeReport { root, entries };
        info!(
            created = report.count(EntryOutcome::Created),
            skipped = report.count(EntryOutcome::Skipped),
            overwritten = report.count(EntryOutcome::Overwritten),
            merged = report.count(EntryOutcome::Merged),
            "File set materialized"
        );
        Ok(report)
    }

    /// Make sure the ignore list at `root/file` mentions every token.
    ///
    /// Returns whether the file was written.
    #[instrument(skip_all, fields(file = %file))]
    pub fn merge_ignore_list<S: AsRef<str>>(
        &self,
        root: &Path,
        file: &RelativePath,
        tokens: &[S],
    ) -> StrataResult<bool> {
        let path = file.resolve(root);
        let existing = self.filesystem.read_file(&path)?;

        match merge_ignore_lines(existing.as_deref(), tokens) {
            IgnoreUpdate::Create(content) => {
                debug!(path = %path.display(), "write");
                self.write_with_parents(&path, &content)?;
                Ok(true)
            }
            IgnoreUpdate::Append(content) => {
                debug!(path = %path.display(), "update");
                self.filesystem.write_file(&path, &content)?;
                Ok(true)
            }
            IgnoreUpdate::Unchanged => {
                debug!(path = %path.display(), "already up to date");
                Ok(false)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn prepare_root(&self, root: &Path) -> StrataResult<PathBuf> {
        let root = std::path::absolute(root).map_err(|e| ApplicationError::FilesystemError {
            path: root.to_path_buf(),
            reason: format!("Failed to resolve root: {e}"),
        })?;
        self.filesystem.create_dir_all(&root)?;
        Ok(root)
    }

    /// Apply the decision table to one entry.
    fn apply(
        &self,
        root: &Path,
        entry: &FileSetEntry,
        options: &MaterializeOptions,
    ) -> StrataResult<EntryOutcome> {
        let path = entry.path.resolve(root);

        match &entry.content {
            EntryContent::Document {
                document,
                mode: WriteMode::Patch,
            } => self.patch(&path, &entry.path, document, options),

            content => {
                let existed = self.filesystem.exists(&path);
                if existed && !options.force {
                    debug!(path = %path.display(), "skip, already exists");
                    return Ok(EntryOutcome::Skipped);
                }

                let text = match content {
                    EntryContent::Text(text) => text.clone(),
                    EntryContent::Document { document, .. } => {
                        serialize(&path, document, options)?
                    }
                };
                debug!(path = %path.display(), "write");
                self.write_with_parents(&path, &text)?;

                Ok(if existed {
                    EntryOutcome::Overwritten
                } else {
                    EntryOutcome::Created
                })
            }
        }
    }

    /// Read-merge-write for a patch entry.
    fn patch(
        &self,
        path: &Path,
        relative: &RelativePath,
        source: &Document,
        options: &MaterializeOptions,
    ) -> StrataResult<EntryOutcome> {
        debug!(path = %path.display(), "patch");

        let existing = self.filesystem.read_file(path)?;
        let target = match existing.as_deref() {
            Some(text) => parse_existing(path, text)?,
            None => Document::empty_map(),
        };

        let merged = merge(target, source.clone()).map_err(|e| e.at(relative))?;
        let text = serialize(path, &merged, options)?;

        debug!(path = %path.display(), "write");
        self.write_with_parents(path, &text)?;

        Ok(if existing.is_some() {
            EntryOutcome::Merged
        } else {
            EntryOutcome::Created
        })
    }

    fn write_with_parents(&self, path: &Path, content: &str) -> StrataResult<()> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)
    }
}

fn parse_existing(path: &Path, text: &str) -> StrataResult<Document> {
    let document = Document::parse(text).map_err(|e| ApplicationError::ParseFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !document.is_map() {
        return Err(ApplicationError::ParseFailed {
            path: path.to_path_buf(),
            reason: format!("expected a JSON object, found a {}", document.kind()),
        }
        .into());
    }
    Ok(document)
}

fn serialize(path: &Path, document: &Document, options: &MaterializeOptions) -> StrataResult<String> {
    document.to_pretty_string(options.spaces).map_err(|e| {
        ApplicationError::SerializeFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}
