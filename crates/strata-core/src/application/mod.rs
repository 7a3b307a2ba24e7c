//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (MaterializeService, InitService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Merge rules and file
//! set invariants live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    EntryOutcome, EntryReport, InitReport, InitService, MaterializeOptions, MaterializeReport,
    MaterializeService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{FileSetCatalog, Filesystem};

pub use error::ApplicationError;
