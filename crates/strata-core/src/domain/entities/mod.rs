pub mod common;
pub mod file_set;
pub mod service_name;

pub use common::*;
pub use file_set::*;
pub use service_name::*;

pub use crate::domain::DomainError;
