//! Employee record operations.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use crate::models::Employee;
use crate::store::EmployeeStore;

use super::validation::{build_field_updates, validate_new_employee};

/// Parses the optional `dept_id` list filter.
///
/// An absent or empty value means "no filter".
///
/// # Examples
///
/// ```
/// use payroll_records::employees::parse_dept_filter;
///
/// assert_eq!(parse_dept_filter(Some("2")).unwrap(), Some(2));
/// assert_eq!(parse_dept_filter(Some("")).unwrap(), None);
/// assert_eq!(parse_dept_filter(None).unwrap(), None);
/// assert!(parse_dept_filter(Some("two")).is_err());
/// ```
pub fn parse_dept_filter(raw: Option<&str>) -> ServiceResult<Option<i64>> {
    match raw {
        None | Some("") => Ok(None),
        Some(text) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ServiceError::InvalidQuery {
                param: "dept_id".to_string(),
                message: "dept_id must be integer".to_string(),
            }),
    }
}

/// Validates employee writes and forwards them to the store.
///
/// Validation always completes before the store is called, so a rejected
/// request never touches persisted data.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Lists employees, optionally restricted to one department.
    pub async fn list(&self, dept_id: Option<i64>) -> ServiceResult<Vec<Employee>> {
        self.store.list(dept_id).await
    }

    /// Fetches one employee.
    pub async fn get(&self, id: i64) -> ServiceResult<Employee> {
        self.store
            .get(id)
            .await?
            .ok_or(ServiceError::EmployeeNotFound { id })
    }

    /// Validates a create body, inserts it, and returns the new id.
    pub async fn create(&self, body: &Map<String, Value>) -> ServiceResult<i64> {
        let record = validate_new_employee(body)?;
        let id = self.store.insert(&record).await?;
        info!(id, dept_id = record.dept_id, "Employee created");
        Ok(id)
    }

    /// Applies a partial update to an existing employee.
    ///
    /// Unknown keys are ignored; see
    /// [`build_field_updates`](super::build_field_updates).
    pub async fn update(&self, id: i64, body: &Map<String, Value>) -> ServiceResult<()> {
        let changes = build_field_updates(body)?;
        debug!(id, fields = changes.len(), "Applying employee update");

        match self.store.update(id, &changes).await? {
            0 => Err(ServiceError::EmployeeNotFound { id }),
            _ => {
                info!(id, "Employee updated");
                Ok(())
            }
        }
    }

    /// Deletes an employee.
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        match self.store.delete(id).await? {
            0 => Err(ServiceError::EmployeeNotFound { id }),
            _ => {
                info!(id, "Employee deleted");
                Ok(())
            }
        }
    }
}
