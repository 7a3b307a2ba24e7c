//! Infrastructure adapters for Strata.
//!
//! This crate implements the ports defined in `strata_core::application::ports`
//! and carries the process-level concerns (logging, options loading) a
//! program embedding Strata needs.

pub mod builtin_file_sets;
pub mod filesystem;
pub mod logging;
pub mod settings;

// Re-export commonly used adapters
pub use builtin_file_sets::BuiltinCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use logging::init_logging;
pub use settings::{SettingsLoader, load_options};

use strata_core::application::{InitService, MaterializeService};

/// Materializer over the local filesystem.
pub fn local_materializer() -> MaterializeService {
    MaterializeService::new(Box::new(LocalFilesystem::new()))
}

/// Initializer over the local filesystem with the built-in file sets.
pub fn local_initializer() -> InitService {
    InitService::new(local_materializer(), Box::new(BuiltinCatalog::new()))
}
