use super::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Caller-assigned department identifier.
pub type DepartmentId = i64;

/// Organizational unit referenced by employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub location: String,
}

impl Department {
    pub fn new(id: DepartmentId, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
        }
    }

    /// Checks the rules enforced before any write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id == 0 {
            return Err(ValidationError::ReservedId {
                entity: "department",
            });
        }
        Ok(())
    }
}
