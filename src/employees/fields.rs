//! Updatable employee fields and their value coercion rules.
//!
//! Callers send loosely typed JSON. Each [`EmployeeField`] knows how to turn
//! a raw value into a typed [`FieldUpdate`], so the store only ever sees
//! column names from this closed set.

use serde_json::Value;

use crate::error::{ServiceError, ServiceResult};

/// A column that create and partial update are allowed to write.
///
/// `id` is deliberately absent: it is assigned by the store and never
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    /// `first_name`, text.
    FirstName,
    /// `last_name`, text.
    LastName,
    /// `age`, integer.
    Age,
    /// `dept_id`, integer.
    DeptId,
    /// `base_salary`, integer.
    BaseSalary,
    /// `hire_date`, date text or null.
    HireDate,
}

impl EmployeeField {
    /// Every updatable field, in column order.
    pub const ALL: [EmployeeField; 6] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::Age,
        EmployeeField::DeptId,
        EmployeeField::BaseSalary,
        EmployeeField::HireDate,
    ];

    /// Fields a create request must carry.
    pub const REQUIRED: [EmployeeField; 5] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::Age,
        EmployeeField::DeptId,
        EmployeeField::BaseSalary,
    ];

    /// Looks a field up by its JSON key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// The JSON key, which is also the column name.
    pub fn key(self) -> &'static str {
        match self {
            EmployeeField::FirstName => "first_name",
            EmployeeField::LastName => "last_name",
            EmployeeField::Age => "age",
            EmployeeField::DeptId => "dept_id",
            EmployeeField::BaseSalary => "base_salary",
            EmployeeField::HireDate => "hire_date",
        }
    }

    /// Coerces a raw value into a typed update for this field.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_records::employees::{EmployeeField, FieldUpdate};
    /// use serde_json::json;
    ///
    /// let update = EmployeeField::Age.coerce(&json!("42")).unwrap();
    /// assert_eq!(update, FieldUpdate::Age(42));
    ///
    /// assert!(EmployeeField::Age.coerce(&json!("abc")).is_err());
    /// ```
    pub fn coerce(self, value: &Value) -> ServiceResult<FieldUpdate> {
        let key = self.key();
        Ok(match self {
            EmployeeField::FirstName => FieldUpdate::FirstName(coerce_text(key, value)?),
            EmployeeField::LastName => FieldUpdate::LastName(coerce_text(key, value)?),
            EmployeeField::Age => FieldUpdate::Age(coerce_integer(key, value)?),
            EmployeeField::DeptId => FieldUpdate::DeptId(coerce_integer(key, value)?),
            EmployeeField::BaseSalary => FieldUpdate::BaseSalary(coerce_integer(key, value)?),
            EmployeeField::HireDate => FieldUpdate::HireDate(coerce_optional_date_text(key, value)?),
        })
    }
}

/// A typed value destined for one employee column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// New given name.
    FirstName(String),
    /// New family name.
    LastName(String),
    /// New age.
    Age(i64),
    /// New department reference.
    DeptId(i64),
    /// New gross salary.
    BaseSalary(i64),
    /// New hire date text, or `None` to clear it.
    HireDate(Option<String>),
}

impl FieldUpdate {
    /// The field this update writes.
    pub fn field(&self) -> EmployeeField {
        match self {
            FieldUpdate::FirstName(_) => EmployeeField::FirstName,
            FieldUpdate::LastName(_) => EmployeeField::LastName,
            FieldUpdate::Age(_) => EmployeeField::Age,
            FieldUpdate::DeptId(_) => EmployeeField::DeptId,
            FieldUpdate::BaseSalary(_) => EmployeeField::BaseSalary,
            FieldUpdate::HireDate(_) => EmployeeField::HireDate,
        }
    }

    /// The column this update writes.
    pub fn column(&self) -> &'static str {
        self.field().key()
    }
}

/// Coerces a JSON value to an integer the way a permissive `int()` would.
///
/// Accepts integers, floats (truncated toward zero), booleans, and strings
/// holding an optionally signed decimal integer with surrounding whitespace.
pub fn coerce_integer(field: &str, value: &Value) -> ServiceResult<i64> {
    let invalid = || ServiceError::invalid_field(field, "must be integer");

    match value {
        Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                return Ok(n);
            }
            let float = number.as_f64().ok_or_else(invalid)?;
            let truncated = float.trunc();
            if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64
            {
                Ok(truncated as i64)
            } else {
                Err(invalid())
            }
        }
        Value::Bool(flag) => Ok(i64::from(*flag)),
        Value::String(text) => text.trim().parse::<i64>().map_err(|_| invalid()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(invalid()),
    }
}

/// Coerces a JSON value to text. Numbers are rendered as written.
pub fn coerce_text(field: &str, value: &Value) -> ServiceResult<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(ServiceError::invalid_field(field, "must be text")),
    }
}

/// Coerces a JSON value to optional date text. The format is not checked.
pub fn coerce_optional_date_text(field: &str, value: &Value) -> ServiceResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        _ => Err(ServiceError::invalid_field(
            field,
            "must be a YYYY-MM-DD string or null",
        )),
    }
}
