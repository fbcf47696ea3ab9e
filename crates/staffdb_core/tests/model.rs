use chrono::NaiveDate;
use rust_decimal::Decimal;
use staffdb_core::{Department, Employee, FullName, Position, ValidationError};

fn clerk(id: i64) -> Employee {
    Employee::new(
        id,
        FullName::new("ANN", "LEE", None),
        Position::Clerk,
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        Decimal::from(1200),
    )
}

#[test]
fn employee_new_has_no_references() {
    let employee = clerk(3);

    assert_eq!(employee.manager_id, None);
    assert_eq!(employee.department_id, None);
    assert!(employee.validate().is_ok());

    let placed = employee.reporting_to(1).in_department(10);
    assert_eq!(placed.manager_id, Some(1));
    assert_eq!(placed.department_id, Some(10));
}

#[test]
fn zero_ids_are_reserved() {
    assert_eq!(
        Department::new(0, "X", "Y").validate(),
        Err(ValidationError::ReservedId {
            entity: "department"
        })
    );
    assert_eq!(
        clerk(0).validate(),
        Err(ValidationError::ReservedId { entity: "employee" })
    );

    let mut zero_department = clerk(3);
    zero_department.department_id = Some(0);
    assert_eq!(
        zero_department.validate(),
        Err(ValidationError::ReservedReference {
            field: "department_id"
        })
    );
}

#[test]
fn salary_must_be_whole_and_non_negative() {
    let mut employee = clerk(3);
    assert_eq!(employee.salary_units(), Ok(1200));

    employee.salary = Decimal::new(12005, 1);
    assert_eq!(employee.validate(), Err(ValidationError::FractionalSalary));

    employee.salary = Decimal::from(-5);
    assert_eq!(employee.validate(), Err(ValidationError::NegativeSalary));

    employee.salary = Decimal::ZERO;
    assert_eq!(employee.salary_units(), Ok(0));

    employee.salary = Decimal::new(150000, 2);
    assert_eq!(employee.salary_units(), Ok(1500));
}

#[test]
fn employee_serialization_uses_expected_wire_fields() {
    let employee = clerk(3).reporting_to(1);

    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["position"], "CLERK");
    assert_eq!(json["hire_date"], "2020-01-01");
    assert_eq!(json["manager_id"], 1);
    assert!(json["department_id"].is_null());
    assert_eq!(json["full_name"]["first_name"], "ANN");

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, employee);
}
