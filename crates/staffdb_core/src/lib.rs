//! Department/employee persistence over SQLite.
//!
//! Stores take an injected [`ConnectionSource`] and open one connection per
//! operation.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{ConnectionSource, DbError, DbResult, SqliteConnectionSource};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::department::{Department, DepartmentId};
pub use model::employee::{Employee, EmployeeId, FullName, Position};
pub use model::validation::ValidationError;
pub use repo::department_repo::{DepartmentStore, SqliteDepartmentStore};
pub use repo::employee_repo::{EmployeeStore, SqliteEmployeeStore};
pub use repo::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
