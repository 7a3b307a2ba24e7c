//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{FileSet, ServiceName};
use crate::error::StrataResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths handed to the port are already resolved under the target root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Write UTF-8 content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()>;

    /// Read a file. `Ok(None)` when nothing exists at `path`.
    fn read_file(&self, path: &Path) -> StrataResult<Option<String>>;

    /// Check if anything (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the file sets a project initializer applies.
///
/// Implemented by:
/// - `strata_adapters::BuiltinCatalog` (file sets shipped with Strata)
pub trait FileSetCatalog: Send + Sync {
    /// Project skeleton written by `init`.
    fn project(&self) -> FileSet;

    /// Simulator support; patches editor and package manifests.
    fn simulator(&self) -> FileSet;

    /// Stub for a custom service definition.
    fn service(&self, name: &ServiceName) -> FileSet;

    /// Name of the ignore-list file kept up to date by `init`.
    fn ignore_file(&self) -> &str;

    /// Tokens the ignore list must mention.
    fn ignore_tokens(&self) -> Vec<String>;
}
