use crate::domain::{entities::FileSet, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_file_set(file_set: &FileSet) -> Result<(), DomainError> {
        file_set.validate()
    }
}
