//! Employee record types.
//!
//! [`Employee`] is the row as the store returns it; [`NewEmployee`] is the
//! validated field set handed to the store on insert.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier, immutable once created.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: i64,
    /// Reference to a department in the catalog.
    pub dept_id: i64,
    /// Gross pay figure the payroll report is derived from.
    pub base_salary: i64,
    /// Date of hire, serialized as `YYYY-MM-DD` or `null`.
    pub hire_date: Option<NaiveDate>,
}

impl Employee {
    /// Returns the first and last name joined by a single space.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_records::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     first_name: "Ana".to_string(),
    ///     last_name: "Li".to_string(),
    ///     age: 30,
    ///     dept_id: 1,
    ///     base_salary: 1000,
    ///     hire_date: None,
    /// };
    /// assert_eq!(employee.full_name(), "Ana Li");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A validated set of fields for inserting an employee.
///
/// `hire_date` is carried as the caller sent it; the store decides whether
/// the text is an acceptable date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: i64,
    /// Reference to a department in the catalog.
    pub dept_id: i64,
    /// Gross pay figure.
    pub base_salary: i64,
    /// Optional hire date text, expected as `YYYY-MM-DD`.
    pub hire_date: Option<String>,
}
