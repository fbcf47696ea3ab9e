#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rusqlite::Connection;
use staffdb_core::{
    ConnectionSource, DbResult, Department, Employee, FullName, Position, SqliteConnectionSource,
};
use std::cell::Cell;
use tempfile::TempDir;

/// File-backed database living in its own temp directory.
pub struct TestDb {
    _dir: TempDir,
    pub source: SqliteConnectionSource,
}

impl TestDb {
    /// Opens a side connection for fixture writes and assertions.
    pub fn raw(&self) -> Connection {
        self.source.create_connection().unwrap()
    }
}

pub fn setup() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let source = SqliteConnectionSource::new(dir.path().join("staff.db"));
    TestDb { _dir: dir, source }
}

/// Counts acquisitions and can run a callback right before the n-th one,
/// standing in for a concurrent writer.
pub struct ProbeSource<'a> {
    inner: &'a SqliteConnectionSource,
    calls: Cell<usize>,
    interleave_at: Option<(usize, Box<dyn Fn(&Connection) + 'a>)>,
}

impl<'a> ProbeSource<'a> {
    pub fn new(inner: &'a SqliteConnectionSource) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
            interleave_at: None,
        }
    }

    pub fn interleaving(
        inner: &'a SqliteConnectionSource,
        call: usize,
        writer: impl Fn(&Connection) + 'a,
    ) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
            interleave_at: Some((call, Box::new(writer))),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ConnectionSource for ProbeSource<'_> {
    fn create_connection(&self) -> DbResult<Connection> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if let Some((at, writer)) = &self.interleave_at {
            if *at == call {
                writer(&self.inner.create_connection()?);
            }
        }
        self.inner.create_connection()
    }
}

pub fn sales() -> Department {
    Department::new(10, "SALES", "NY")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn employee(id: i64, first: &str, last: &str, position: Position) -> Employee {
    Employee::new(
        id,
        FullName::new(first, last, None),
        position,
        date(2020, 1, 1),
        Decimal::from(1000),
    )
}
