//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "materialize a file set" or "add a service".

pub mod init_service;
pub mod materialize_service;

pub use init_service::{InitReport, InitService};
pub use materialize_service::{
    EntryOutcome, EntryReport, MaterializeOptions, MaterializeReport, MaterializeService,
};
