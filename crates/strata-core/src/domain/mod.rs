// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Strata.
//!
//! This module contains pure logic and performs no I/O. Reading and writing
//! files is done through ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Value semantics**: Documents and file sets are Clone + PartialEq
//! - **Exhaustive matching**: Documents are a tagged tree, never duck-typed
//!
// Public API - what the world sees
pub mod document;
pub mod entities;
pub mod error;
pub mod ignore_list;
pub mod merge;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use document::{Document, DocumentMap, Scalar};
pub use entities::{
    common::RelativePath,
    file_set::{EntryContent, FileSet, FileSetEntry, WriteMode},
    service_name::ServiceName,
};
pub use error::{DomainError, ErrorCategory};
pub use ignore_list::{IgnoreUpdate, merge_ignore_lines};
pub use merge::{IDENTITY_KEY, MergeError, identity_of, merge};

pub use validation::DomainValidator;
