//! Validation of create and partial-update request bodies.
//!
//! Both entry points finish all coercion before returning, so a rejected
//! body never produces a statement against the store.

use serde_json::{Map, Value};

use crate::error::{ServiceError, ServiceResult};
use crate::models::NewEmployee;

use super::fields::{
    EmployeeField, FieldUpdate, coerce_integer, coerce_optional_date_text, coerce_text,
};

/// Validates a create body and produces the insert field set.
///
/// All five required keys must be present; the first absent one (in column
/// order) is reported. `hire_date` is optional and its format is not checked.
///
/// # Examples
///
/// ```
/// use payroll_records::employees::validate_new_employee;
/// use serde_json::json;
///
/// let body = json!({
///     "first_name": "Ana",
///     "last_name": "Li",
///     "age": 30,
///     "dept_id": "1",
///     "base_salary": 1000
/// });
/// let record = validate_new_employee(body.as_object().unwrap()).unwrap();
/// assert_eq!(record.dept_id, 1);
/// assert_eq!(record.hire_date, None);
/// ```
pub fn validate_new_employee(body: &Map<String, Value>) -> ServiceResult<NewEmployee> {
    if let Some(missing) = EmployeeField::REQUIRED
        .iter()
        .find(|field| !body.contains_key(field.key()))
    {
        return Err(ServiceError::MissingField {
            field: missing.key().to_string(),
        });
    }

    let first_name = coerce_text("first_name", &body["first_name"])?;
    let last_name = coerce_text("last_name", &body["last_name"])?;
    let age = coerce_integer("age", &body["age"])?;
    let dept_id = coerce_integer("dept_id", &body["dept_id"])?;
    let base_salary = coerce_integer("base_salary", &body["base_salary"])?;
    let hire_date = match body.get(EmployeeField::HireDate.key()) {
        Some(value) => coerce_optional_date_text("hire_date", value)?,
        None => None,
    };

    Ok(NewEmployee {
        first_name,
        last_name,
        age,
        dept_id,
        base_salary,
        hire_date,
    })
}

/// Builds the typed field set for a partial update.
///
/// Keys outside the updatable set are dropped silently. Keys are coerced in
/// the order they arrived, and the first failure aborts the whole update.
/// An empty result is a [`ServiceError::NoValidFields`].
///
/// # Examples
///
/// ```
/// use payroll_records::employees::{build_field_updates, FieldUpdate};
/// use serde_json::json;
///
/// let body = json!({"age": "31", "nickname": "ignored"});
/// let updates = build_field_updates(body.as_object().unwrap()).unwrap();
/// assert_eq!(updates, vec![FieldUpdate::Age(31)]);
/// ```
pub fn build_field_updates(body: &Map<String, Value>) -> ServiceResult<Vec<FieldUpdate>> {
    let updates = body
        .iter()
        .filter_map(|(key, value)| EmployeeField::from_key(key).map(|field| (field, value)))
        .map(|(field, value)| field.coerce(value))
        .collect::<ServiceResult<Vec<_>>>()?;

    if updates.is_empty() {
        return Err(ServiceError::NoValidFields);
    }

    Ok(updates)
}
