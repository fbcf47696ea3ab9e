//! Employee store contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD and upsert for employees.
//! - Relationship lookups by department and by manager.
//!
//! # Invariants
//! - Every read path hydrates rows through `parse_employee_row`.
//! - Absent references are written as `0`; `NULL` and `0` both read back
//!   as `None`, so sentinel rows never match a real filter id.
//! - Insert and update bind parameters in different orders; the order
//!   follows the placeholders of each statement.

use super::{reference_from_db, reference_to_db, with_connection, StoreError, StoreResult};
use crate::db::ConnectionSource;
use crate::model::department::Department;
use crate::model::employee::{Employee, EmployeeId, FullName, Position};
use crate::model::validation::ValidationError;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use rusqlite::{params, Connection, Params, Row};

const ID: &str = "ID";
const FIRST_NAME: &str = "FIRSTNAME";
const LAST_NAME: &str = "LASTNAME";
const MIDDLE_NAME: &str = "MIDDLENAME";
const POSITION: &str = "POSITION";
const MANAGER: &str = "MANAGER";
const HIREDATE: &str = "HIREDATE";
const SALARY: &str = "SALARY";
const DEPARTMENT: &str = "DEPARTMENT";

const HIREDATE_FORMAT: &str = "%Y-%m-%d";

const GET_BY_ID: &str = "SELECT * FROM EMPLOYEE WHERE ID = ?";
const GET_ALL: &str = "SELECT * FROM EMPLOYEE";
const GET_ALL_BY_DEPARTMENT: &str = "SELECT * FROM EMPLOYEE WHERE DEPARTMENT = ?";
const GET_ALL_BY_MANAGER: &str = "SELECT * FROM EMPLOYEE WHERE MANAGER = ?";
const INSERT: &str = "INSERT INTO EMPLOYEE (ID, FIRSTNAME, LASTNAME, MIDDLENAME, \
    POSITION, MANAGER, HIREDATE, SALARY, DEPARTMENT) \
    VALUES (?,?,?,?,?,?,?,?,?)";
const UPDATE: &str = "UPDATE EMPLOYEE SET FIRSTNAME = ?, LASTNAME = ?, MIDDLENAME = ?, \
    POSITION = ?, MANAGER = ?, HIREDATE = ?, SALARY = ?, DEPARTMENT = ? WHERE ID = ?";
const DELETE: &str = "DELETE FROM EMPLOYEE WHERE ID = ?";

/// Persistence contract for employees.
pub trait EmployeeStore {
    fn get_by_id(&self, id: EmployeeId) -> StoreResult<Option<Employee>>;
    fn get_all(&self) -> StoreResult<Vec<Employee>>;
    /// Inserts or updates depending on whether `id` already exists, and
    /// returns the value unchanged. References are written on both paths.
    fn save(&self, employee: Employee) -> StoreResult<Employee>;
    fn delete(&self, employee: &Employee) -> StoreResult<()>;
    /// Employees whose department reference equals `department.id`.
    fn get_by_department(&self, department: &Department) -> StoreResult<Vec<Employee>>;
    /// Direct reports of `manager`.
    fn get_by_manager(&self, manager: &Employee) -> StoreResult<Vec<Employee>>;
}

/// SQLite-backed employee store.
pub struct SqliteEmployeeStore<C> {
    source: C,
}

impl<C: ConnectionSource> SqliteEmployeeStore<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    fn insert(&self, employee: &Employee) -> StoreResult<()> {
        let salary = employee.salary_units()?;
        with_connection(&self.source, "employee_insert", |conn| {
            conn.execute(
                INSERT,
                params![
                    employee.id,
                    employee.full_name.first_name.as_str(),
                    employee.full_name.last_name.as_str(),
                    employee.full_name.middle_name.as_deref(),
                    position_to_db(employee.position),
                    reference_to_db(employee.manager_id),
                    hire_date_to_db(employee.hire_date),
                    salary,
                    reference_to_db(employee.department_id),
                ],
            )?;
            Ok(())
        })
    }

    fn update(&self, employee: &Employee) -> StoreResult<()> {
        let salary = employee.salary_units()?;
        with_connection(&self.source, "employee_update", |conn| {
            conn.execute(
                UPDATE,
                params![
                    employee.full_name.first_name.as_str(),
                    employee.full_name.last_name.as_str(),
                    employee.full_name.middle_name.as_deref(),
                    position_to_db(employee.position),
                    reference_to_db(employee.manager_id),
                    hire_date_to_db(employee.hire_date),
                    salary,
                    reference_to_db(employee.department_id),
                    employee.id,
                ],
            )?;
            Ok(())
        })
    }
}

impl<C: ConnectionSource> EmployeeStore for SqliteEmployeeStore<C> {
    fn get_by_id(&self, id: EmployeeId) -> StoreResult<Option<Employee>> {
        with_connection(&self.source, "employee_get_by_id", |conn| {
            let mut stmt = conn.prepare(GET_BY_ID)?;
            let mut rows = stmt.query([id])?;
            if let Some(row) = rows.next()? {
                return Ok(Some(parse_employee_row(row)?));
            }
            Ok(None)
        })
    }

    fn get_all(&self) -> StoreResult<Vec<Employee>> {
        with_connection(&self.source, "employee_get_all", |conn| {
            query_employees(conn, GET_ALL, [])
        })
    }

    fn save(&self, employee: Employee) -> StoreResult<Employee> {
        employee.validate()?;

        if self.get_by_id(employee.id)?.is_some() {
            self.update(&employee)?;
            debug!(
                "event=employee_save module=repo status=ok path=update id={}",
                employee.id
            );
        } else {
            self.insert(&employee)?;
            debug!(
                "event=employee_save module=repo status=ok path=insert id={}",
                employee.id
            );
        }

        Ok(employee)
    }

    fn delete(&self, employee: &Employee) -> StoreResult<()> {
        with_connection(&self.source, "employee_delete", |conn| {
            conn.execute(DELETE, [employee.id])?;
            Ok(())
        })
    }

    fn get_by_department(&self, department: &Department) -> StoreResult<Vec<Employee>> {
        if department.id == 0 {
            return Err(ValidationError::ReservedId {
                entity: "department",
            }
            .into());
        }
        with_connection(&self.source, "employee_get_by_department", |conn| {
            query_employees(conn, GET_ALL_BY_DEPARTMENT, [department.id])
        })
    }

    fn get_by_manager(&self, manager: &Employee) -> StoreResult<Vec<Employee>> {
        if manager.id == 0 {
            return Err(ValidationError::ReservedId { entity: "employee" }.into());
        }
        with_connection(&self.source, "employee_get_by_manager", |conn| {
            query_employees(conn, GET_ALL_BY_MANAGER, [manager.id])
        })
    }
}

fn query_employees(
    conn: &Connection,
    sql: &str,
    params: impl Params,
) -> StoreResult<Vec<Employee>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut employees = Vec::new();
    while let Some(row) = rows.next()? {
        employees.push(parse_employee_row(row)?);
    }
    Ok(employees)
}

fn parse_employee_row(row: &Row<'_>) -> StoreResult<Employee> {
    let id: EmployeeId = row.get(ID)?;

    let position_text: String = row.get(POSITION)?;
    let position = parse_position(&position_text).ok_or_else(|| {
        StoreError::InvalidData(format!(
            "invalid position `{position_text}` in EMPLOYEE.POSITION for id {id}"
        ))
    })?;

    let hire_date_text: String = row.get(HIREDATE)?;
    let hire_date = NaiveDate::parse_from_str(&hire_date_text, HIREDATE_FORMAT).map_err(|_| {
        StoreError::InvalidData(format!(
            "invalid hire date `{hire_date_text}` in EMPLOYEE.HIREDATE for id {id}"
        ))
    })?;

    Ok(Employee {
        id,
        full_name: FullName {
            first_name: row.get(FIRST_NAME)?,
            last_name: row.get(LAST_NAME)?,
            middle_name: row.get(MIDDLE_NAME)?,
        },
        position,
        hire_date,
        salary: Decimal::from(row.get::<_, i64>(SALARY)?),
        manager_id: reference_from_db(row.get(MANAGER)?),
        department_id: reference_from_db(row.get(DEPARTMENT)?),
    })
}

fn hire_date_to_db(date: NaiveDate) -> String {
    date.format(HIREDATE_FORMAT).to_string()
}

fn position_to_db(position: Position) -> &'static str {
    match position {
        Position::President => "PRESIDENT",
        Position::Director => "DIRECTOR",
        Position::Manager => "MANAGER",
        Position::Analyst => "ANALYST",
        Position::Salesman => "SALESMAN",
        Position::Clerk => "CLERK",
    }
}

fn parse_position(value: &str) -> Option<Position> {
    match value {
        "PRESIDENT" => Some(Position::President),
        "DIRECTOR" => Some(Position::Director),
        "MANAGER" => Some(Position::Manager),
        "ANALYST" => Some(Position::Analyst),
        "SALESMAN" => Some(Position::Salesman),
        "CLERK" => Some(Position::Clerk),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_position, position_to_db};
    use crate::model::employee::Position;

    #[test]
    fn position_names_match_stored_values() {
        for position in [
            Position::President,
            Position::Director,
            Position::Manager,
            Position::Analyst,
            Position::Salesman,
            Position::Clerk,
        ] {
            assert_eq!(parse_position(position_to_db(position)), Some(position));
        }
    }

    #[test]
    fn unknown_or_lowercase_position_is_rejected() {
        assert_eq!(parse_position("manager"), None);
        assert_eq!(parse_position("JANITOR"), None);
    }
}
