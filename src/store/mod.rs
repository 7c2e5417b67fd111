//! Record store adapter.
//!
//! The [`EmployeeStore`] trait is the only way the service reaches
//! persisted employee rows. Every method is one parameterized statement
//! that returns rows or an affected-row count; failures surface as
//! [`ServiceError::StoreUnavailable`](crate::error::ServiceError::StoreUnavailable)
//! or [`ServiceError::StoreRejected`](crate::error::ServiceError::StoreRejected).
//!
//! Two backends are provided: [`MySqlStore`] over a `sqlx` connection pool
//! and [`MemoryStore`] for tests and store-less deployments.

mod memory;
mod mysql;

use async_trait::async_trait;

use crate::employees::FieldUpdate;
use crate::error::ServiceResult;
use crate::models::{Employee, NewEmployee};

pub use memory::MemoryStore;
pub use mysql::{MySqlStore, update_statement};

/// Persistence operations for employee rows.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Checks that the store is reachable.
    async fn ping(&self) -> ServiceResult<()>;

    /// Returns all employees, or those in one department, in store order.
    async fn list(&self, dept_id: Option<i64>) -> ServiceResult<Vec<Employee>>;

    /// Returns the employee with the given id, if any.
    async fn get(&self, id: i64) -> ServiceResult<Option<Employee>>;

    /// Inserts a new employee and returns the assigned id.
    async fn insert(&self, record: &NewEmployee) -> ServiceResult<i64>;

    /// Applies `changes` to the row with the given id in a single statement.
    ///
    /// Returns the number of rows matched. `changes` must not be empty.
    async fn update(&self, id: i64, changes: &[FieldUpdate]) -> ServiceResult<u64>;

    /// Deletes the row with the given id and returns the number removed.
    async fn delete(&self, id: i64) -> ServiceResult<u64>;
}
