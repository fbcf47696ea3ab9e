//! Employee domain model.
//!
//! # Invariants
//! - `manager_id` and `department_id` are weak references: they are never
//!   resolved or validated against existing rows.
//! - `salary` is a non-negative whole amount of currency units.

use super::department::DepartmentId;
use super::validation::ValidationError;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-assigned employee identifier.
pub type EmployeeId = i64;

/// Closed set of job positions shared with the existing schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    President,
    Director,
    Manager,
    Analyst,
    Salesman,
    Clerk,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
}

impl FullName {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        middle_name: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: FullName,
    pub position: Position,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
    /// Direct manager. `None` for the top of the hierarchy.
    pub manager_id: Option<EmployeeId>,
    pub department_id: Option<DepartmentId>,
}

impl Employee {
    /// Creates an employee with no manager and no department.
    pub fn new(
        id: EmployeeId,
        full_name: FullName,
        position: Position,
        hire_date: NaiveDate,
        salary: Decimal,
    ) -> Self {
        Self {
            id,
            full_name,
            position,
            hire_date,
            salary,
            manager_id: None,
            department_id: None,
        }
    }

    pub fn reporting_to(mut self, manager_id: EmployeeId) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    pub fn in_department(mut self, department_id: DepartmentId) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Checks the rules enforced before any write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id == 0 {
            return Err(ValidationError::ReservedId { entity: "employee" });
        }
        if self.manager_id == Some(0) {
            return Err(ValidationError::ReservedReference { field: "manager_id" });
        }
        if self.department_id == Some(0) {
            return Err(ValidationError::ReservedReference {
                field: "department_id",
            });
        }
        self.salary_units()?;
        Ok(())
    }

    /// Salary as the integer amount stored in the `SALARY` column.
    pub fn salary_units(&self) -> Result<i64, ValidationError> {
        if self.salary.is_sign_negative() && !self.salary.is_zero() {
            return Err(ValidationError::NegativeSalary);
        }
        if !self.salary.fract().is_zero() {
            return Err(ValidationError::FractionalSalary);
        }
        self.salary
            .to_i64()
            .ok_or(ValidationError::SalaryOutOfRange)
    }
}
