//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Strata, which
//! writes declarative file sets into a project directory without clobbering
//! what is already there.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (MaterializeService, InitService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Filesystem, FileSetCatalog)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     strata-adapters (Infrastructure)    │
//! │ (LocalFilesystem, MemoryFilesystem, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │     (Document, merge, FileSet, ..)      │
//! │             No I/O                      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strata_core::prelude::*;
//! use serde_json::json;
//!
//! let set = FileSet::new("vscode")
//!     .with_text("README.md", "# app\n")
//!     .with_patch(
//!         ".vscode/launch.json",
//!         json!({ "configurations": [{ "name": "Run", "type": "node" }] }),
//!     );
//!
//! // `filesystem` is any `Filesystem` adapter
//! let service = MaterializeService::new(filesystem);
//! service.materialize("./app", &set, &MaterializeOptions::default())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EntryOutcome, InitReport, InitService, MaterializeOptions, MaterializeReport,
        MaterializeService,
        ports::{FileSetCatalog, Filesystem},
    };
    pub use crate::domain::{
        Document, EntryContent, FileSet, RelativePath, ServiceName, WriteMode, merge,
    };
    pub use crate::error::{StrataError, StrataResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
