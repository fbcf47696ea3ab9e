//! Department store contract and SQLite implementation.
//!
//! # Invariants
//! - `save` is check-then-write over two separate connections; it is not
//!   atomic, and a concurrent insert of the same id between the two steps
//!   surfaces as a duplicate-key `StoreError::Db`.
//! - `delete` of a missing id succeeds.

use super::{with_connection, StoreError, StoreResult};
use crate::db::ConnectionSource;
use crate::model::department::{Department, DepartmentId};
use log::debug;
use rusqlite::{params, Row};

const ID: &str = "ID";
const NAME: &str = "NAME";
const LOCATION: &str = "LOCATION";

const GET_BY_ID: &str = "SELECT * FROM DEPARTMENT WHERE ID = ?";
const GET_ALL: &str = "SELECT * FROM DEPARTMENT";
const INSERT: &str = "INSERT INTO DEPARTMENT (ID, NAME, LOCATION) VALUES (?,?,?)";
const UPDATE: &str = "UPDATE DEPARTMENT SET NAME = ?, LOCATION = ? WHERE ID = ?";
const DELETE: &str = "DELETE FROM DEPARTMENT WHERE ID = ?";

/// Persistence contract for departments.
pub trait DepartmentStore {
    fn get_by_id(&self, id: DepartmentId) -> StoreResult<Option<Department>>;
    fn get_all(&self) -> StoreResult<Vec<Department>>;
    /// Inserts or updates depending on whether `id` already exists, and
    /// returns the value unchanged.
    fn save(&self, department: Department) -> StoreResult<Department>;
    fn delete(&self, department: &Department) -> StoreResult<()>;
}

/// SQLite-backed department store.
pub struct SqliteDepartmentStore<C> {
    source: C,
}

impl<C: ConnectionSource> SqliteDepartmentStore<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    fn insert(&self, department: &Department) -> StoreResult<()> {
        with_connection(&self.source, "department_insert", |conn| {
            conn.execute(
                INSERT,
                params![
                    department.id,
                    department.name.as_str(),
                    department.location.as_str()
                ],
            )?;
            Ok(())
        })
    }

    fn update(&self, department: &Department) -> StoreResult<()> {
        with_connection(&self.source, "department_update", |conn| {
            conn.execute(
                UPDATE,
                params![
                    department.name.as_str(),
                    department.location.as_str(),
                    department.id
                ],
            )?;
            Ok(())
        })
    }
}

impl<C: ConnectionSource> DepartmentStore for SqliteDepartmentStore<C> {
    fn get_by_id(&self, id: DepartmentId) -> StoreResult<Option<Department>> {
        with_connection(&self.source, "department_get_by_id", |conn| {
            let mut stmt = conn.prepare(GET_BY_ID)?;
            let mut rows = stmt.query([id])?;
            if let Some(row) = rows.next()? {
                return Ok(Some(parse_department_row(row)?));
            }
            Ok(None)
        })
    }

    fn get_all(&self) -> StoreResult<Vec<Department>> {
        with_connection(&self.source, "department_get_all", |conn| {
            let mut stmt = conn.prepare(GET_ALL)?;
            let mut rows = stmt.query([])?;
            let mut departments = Vec::new();
            while let Some(row) = rows.next()? {
                departments.push(parse_department_row(row)?);
            }
            Ok(departments)
        })
    }

    fn save(&self, department: Department) -> StoreResult<Department> {
        department.validate()?;

        if self.get_by_id(department.id)?.is_some() {
            self.update(&department)?;
            debug!(
                "event=department_save module=repo status=ok path=update id={}",
                department.id
            );
        } else {
            self.insert(&department)?;
            debug!(
                "event=department_save module=repo status=ok path=insert id={}",
                department.id
            );
        }

        Ok(department)
    }

    fn delete(&self, department: &Department) -> StoreResult<()> {
        with_connection(&self.source, "department_delete", |conn| {
            conn.execute(DELETE, [department.id])?;
            Ok(())
        })
    }
}

fn parse_department_row(row: &Row<'_>) -> Result<Department, StoreError> {
    Ok(Department {
        id: row.get(ID)?,
        name: row.get(NAME)?,
        location: row.get(LOCATION)?,
    })
}
