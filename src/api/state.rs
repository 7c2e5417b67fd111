//! Application state for the payroll records API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::employees::EmployeeService;
use crate::models::Department;
use crate::payroll::PayrollAggregator;
use crate::store::EmployeeStore;

/// Shared application state.
///
/// Holds the record store and the department catalog. Neither carries
/// per-request data; every request gets its own store connection.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EmployeeStore>,
    departments: Arc<[Department]>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: Arc<dyn EmployeeStore>, departments: Vec<Department>) -> Self {
        Self {
            store,
            departments: departments.into(),
        }
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }

    /// Returns an employee service over the shared store.
    pub fn employees(&self) -> EmployeeService {
        EmployeeService::new(Arc::clone(&self.store))
    }

    /// Returns a payroll aggregator over the shared store.
    pub fn payroll(&self) -> PayrollAggregator {
        PayrollAggregator::new(Arc::clone(&self.store))
    }

    /// Returns the department catalog.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }
}
