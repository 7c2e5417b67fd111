//! Per-employee payroll entry assembly.

use rust_decimal::Decimal;

use crate::models::{Employee, PayrollEntry};

use super::net_salary::calculate_net_salary;

/// Builds the payroll entry for one employee row.
///
/// The employee's `base_salary` is treated as gross pay.
///
/// # Examples
///
/// ```
/// use payroll_records::calculation::build_payroll_entry;
/// use payroll_records::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 7,
///     first_name: "Ana".to_string(),
///     last_name: "Li".to_string(),
///     age: 30,
///     dept_id: 1,
///     base_salary: 1000,
///     hire_date: None,
/// };
///
/// let entry = build_payroll_entry(&employee);
/// assert_eq!(entry.full_name, "Ana Li");
/// assert_eq!(entry.net, Decimal::new(8582, 1));
/// ```
pub fn build_payroll_entry(employee: &Employee) -> PayrollEntry {
    let result = calculate_net_salary(Decimal::from(employee.base_salary));

    PayrollEntry {
        id: employee.id,
        full_name: employee.full_name(),
        department_id: employee.dept_id,
        gross: result.gross,
        cnss: result.cnss,
        irpp: result.irpp,
        net: result.net,
        hire_date: employee.hire_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(base_salary: i64) -> Employee {
        Employee {
            id: 12,
            first_name: "Mouna".to_string(),
            last_name: "Trabelsi".to_string(),
            age: 35,
            dept_id: 2,
            base_salary,
            hire_date: NaiveDate::from_ymd_opt(2021, 9, 15),
        }
    }

    #[test]
    fn test_entry_copies_identity_fields() {
        let entry = build_payroll_entry(&create_test_employee(1500));

        assert_eq!(entry.id, 12);
        assert_eq!(entry.full_name, "Mouna Trabelsi");
        assert_eq!(entry.department_id, 2);
        assert_eq!(entry.hire_date, NaiveDate::from_ymd_opt(2021, 9, 15));
    }

    #[test]
    fn test_entry_amounts_follow_calculator() {
        let entry = build_payroll_entry(&create_test_employee(1500));

        assert_eq!(entry.gross, dec("1500"));
        assert_eq!(entry.cnss, dec("137.70"));
        assert_eq!(entry.irpp, dec("75.00"));
        assert_eq!(entry.net, dec("1287.30"));
    }

    #[test]
    fn test_entry_without_hire_date() {
        let mut employee = create_test_employee(900);
        employee.hire_date = None;

        assert_eq!(build_payroll_entry(&employee).hire_date, None);
    }
}
