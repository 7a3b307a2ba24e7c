//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `strata-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `FileSetCatalog`: File sets supplied to the initializer

pub mod output;

pub use output::{FileSetCatalog, Filesystem};

#[cfg(test)]
pub use output::MockFilesystem;
