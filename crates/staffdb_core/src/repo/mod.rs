//! Store contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define one store contract per entity.
//! - Keep statement text, parameter order and row hydration inside this
//!   module.
//!
//! # Invariants
//! - Every operation acquires its own connection and drops it before
//!   returning, on success and failure alike.
//! - "Nothing matched" is `Ok(None)` / `Ok(vec![])`, never an error.

use crate::db::{ConnectionSource, DbError};
use crate::model::validation::ValidationError;
use log::{debug, error};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub mod department_repo;
pub mod employee_repo;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a single store operation.
#[derive(Debug)]
pub enum StoreError {
    /// Connection acquisition, statement execution or row traversal failed.
    Db(DbError),
    /// Input rejected before any SQL was issued.
    Validation(ValidationError),
    /// A stored row cannot be turned into a domain value.
    InvalidData(String),
}

impl StoreError {
    /// Stable code used in `error_code=` log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "db_failed",
            Self::Validation(_) => "validation_failed",
            Self::InvalidData(_) => "invalid_data",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Runs `op` on a freshly acquired connection and logs the outcome.
///
/// The connection is dropped when `op` returns, whatever the result.
pub(crate) fn with_connection<C, T>(
    source: &C,
    event: &'static str,
    op: impl FnOnce(&Connection) -> StoreResult<T>,
) -> StoreResult<T>
where
    C: ConnectionSource + ?Sized,
{
    let started_at = Instant::now();
    let result = source
        .create_connection()
        .map_err(StoreError::from)
        .and_then(|conn| op(&conn));

    match &result {
        Ok(_) => debug!(
            "event={event} module=repo status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event={event} module=repo status=error duration_ms={} error_code={} error={}",
            started_at.elapsed().as_millis(),
            err.code(),
            err
        ),
    }

    result
}

/// Maps an optional reference column to the domain `Option`.
///
/// Both SQL `NULL` and the `0` sentinel mean "no reference".
pub(crate) fn reference_from_db(value: Option<i64>) -> Option<i64> {
    value.filter(|id| *id != NO_REFERENCE)
}

/// Writes the `0` sentinel for an absent reference.
pub(crate) fn reference_to_db(value: Option<i64>) -> i64 {
    value.unwrap_or(NO_REFERENCE)
}

const NO_REFERENCE: i64 = 0;
