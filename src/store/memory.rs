//! In-memory employee store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::employees::FieldUpdate;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{Employee, NewEmployee};

use super::EmployeeStore;

#[derive(Debug, Default)]
struct Rows {
    by_id: BTreeMap<i64, Employee>,
    last_id: i64,
}

/// Employee rows held in process memory, ordered by id.
///
/// Ids start at 1 and are never reused, matching an auto-increment key.
/// On write, `hire_date` text is parsed the way a `DATE` column would and
/// integer fields must fit the 32-bit `INT` columns.
///
/// # Example
///
/// ```
/// use payroll_records::models::NewEmployee;
/// use payroll_records::store::{EmployeeStore, MemoryStore};
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = MemoryStore::new();
/// let id = store
///     .insert(&NewEmployee {
///         first_name: "Ana".to_string(),
///         last_name: "Li".to_string(),
///         age: 30,
///         dept_id: 1,
///         base_salary: 1000,
///         hire_date: None,
///     })
///     .await
///     .unwrap();
/// assert_eq!(id, 1);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<Rows>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given rows.
    ///
    /// New ids continue after the largest seeded id.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let by_id: BTreeMap<i64, Employee> = employees.into_iter().map(|e| (e.id, e)).collect();
        let last_id = by_id.keys().next_back().copied().unwrap_or(0);
        Self {
            rows: RwLock::new(Rows { by_id, last_id }),
        }
    }
}

fn parse_hire_date(text: Option<&str>) -> ServiceResult<Option<NaiveDate>> {
    text.map(|raw| {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ServiceError::StoreRejected {
            message: format!("Incorrect date value: '{}' for column 'hire_date'", raw),
        })
    })
    .transpose()
}

/// Integer columns hold 32-bit values, as the `INT` columns of the MySQL schema do.
fn check_int_column(column: &str, value: i64) -> ServiceResult<()> {
    i32::try_from(value)
        .map(|_| ())
        .map_err(|_| ServiceError::StoreRejected {
            message: format!("Out of range value for column '{}'", column),
        })
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn ping(&self) -> ServiceResult<()> {
        Ok(())
    }

    async fn list(&self, dept_id: Option<i64>) -> ServiceResult<Vec<Employee>> {
        let rows = self.rows.read().await;
        Ok(rows
            .by_id
            .values()
            .filter(|employee| dept_id.is_none_or(|dept| employee.dept_id == dept))
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> ServiceResult<Option<Employee>> {
        Ok(self.rows.read().await.by_id.get(&id).cloned())
    }

    async fn insert(&self, record: &NewEmployee) -> ServiceResult<i64> {
        check_int_column("age", record.age)?;
        check_int_column("dept_id", record.dept_id)?;
        check_int_column("base_salary", record.base_salary)?;
        let hire_date = parse_hire_date(record.hire_date.as_deref())?;

        let mut rows = self.rows.write().await;
        rows.last_id += 1;
        let id = rows.last_id;
        rows.by_id.insert(
            id,
            Employee {
                id,
                first_name: record.first_name.clone(),
                last_name: record.last_name.clone(),
                age: record.age,
                dept_id: record.dept_id,
                base_salary: record.base_salary,
                hire_date,
            },
        );
        Ok(id)
    }

    async fn update(&self, id: i64, changes: &[FieldUpdate]) -> ServiceResult<u64> {
        let mut rows = self.rows.write().await;
        let Some(employee) = rows.by_id.get_mut(&id) else {
            return Ok(0);
        };

        // A rejected value must leave the row unchanged.
        let mut parsed_dates = Vec::new();
        for change in changes {
            match change {
                FieldUpdate::Age(value)
                | FieldUpdate::DeptId(value)
                | FieldUpdate::BaseSalary(value) => check_int_column(change.column(), *value)?,
                FieldUpdate::HireDate(text) => {
                    parsed_dates.push(parse_hire_date(text.as_deref())?);
                }
                FieldUpdate::FirstName(_) | FieldUpdate::LastName(_) => {}
            }
        }
        let mut parsed_dates = parsed_dates.into_iter();

        for change in changes {
            match change {
                FieldUpdate::FirstName(value) => employee.first_name = value.clone(),
                FieldUpdate::LastName(value) => employee.last_name = value.clone(),
                FieldUpdate::Age(value) => employee.age = *value,
                FieldUpdate::DeptId(value) => employee.dept_id = *value,
                FieldUpdate::BaseSalary(value) => employee.base_salary = *value,
                FieldUpdate::HireDate(_) => employee.hire_date = parsed_dates.next().flatten(),
            }
        }
        Ok(1)
    }

    async fn delete(&self, id: i64) -> ServiceResult<u64> {
        let removed = self.rows.write().await.by_id.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
