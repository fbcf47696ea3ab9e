//! SQLite connection sourcing and schema bootstrap.
//!
//! # Responsibility
//! - Vend ready-to-use SQLite connections to the store layer.
//! - Apply schema migrations before a connection is handed out.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Stores never open connections themselves; they go through a
//!   [`ConnectionSource`].

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod source;

pub use open::{open_db, DEFAULT_BUSY_TIMEOUT};
pub use source::{ConnectionSource, SqliteConnectionSource};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
