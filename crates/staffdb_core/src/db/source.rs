//! Connection sources handed to stores.
//!
//! # Responsibility
//! - Define the single seam through which stores obtain connections.
//! - Provide the file-backed SQLite source used in production and tests.
//!
//! # Invariants
//! - Every `create_connection` call returns a fresh, migrated connection.
//! - Sources own no per-call state; the caller scopes and drops the
//!   returned connection.

use super::open::{open_db, DEFAULT_BUSY_TIMEOUT};
use super::DbResult;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Vends one live connection per call, or fails.
pub trait ConnectionSource {
    fn create_connection(&self) -> DbResult<Connection>;
}

impl<T: ConnectionSource + ?Sized> ConnectionSource for &T {
    fn create_connection(&self) -> DbResult<Connection> {
        (**self).create_connection()
    }
}

impl<T: ConnectionSource + ?Sized> ConnectionSource for Box<T> {
    fn create_connection(&self) -> DbResult<Connection> {
        (**self).create_connection()
    }
}

impl<T: ConnectionSource + ?Sized> ConnectionSource for Arc<T> {
    fn create_connection(&self) -> DbResult<Connection> {
        (**self).create_connection()
    }
}

/// File-backed SQLite connection source.
#[derive(Debug, Clone)]
pub struct SqliteConnectionSource {
    path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteConnectionSource {
    /// Creates a source for the database file at `path`.
    ///
    /// Nothing is opened until the first `create_connection` call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Overrides how long a connection waits on a locked database.
    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn busy_timeout(&self) -> Duration {
        self.busy_timeout
    }
}

impl ConnectionSource for SqliteConnectionSource {
    fn create_connection(&self) -> DbResult<Connection> {
        open_db(&self.path, self.busy_timeout)
    }
}
