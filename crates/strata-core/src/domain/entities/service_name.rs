use std::fmt;

use crate::domain::error::DomainError;

/// Display name of a custom service plus the identifier derived from it.
///
/// The identifier is the display name lowercased with all whitespace removed,
/// so `"Light Level"` becomes `lightlevel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceName {
    display: String,
    id: String,
}

impl ServiceName {
    pub fn parse(display: &str) -> Result<Self, DomainError> {
        let display = display.trim();
        if display.is_empty() {
            return Err(DomainError::InvalidServiceName {
                name: display.into(),
                reason: "name is required".into(),
            });
        }

        let id: String = display
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        if id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(DomainError::InvalidServiceName {
                name: display.into(),
                reason: "name cannot contain path separators or start with '.'".into(),
            });
        }

        Ok(Self {
            display: display.into(),
            id,
        })
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
