//! Payroll reports.
//!
//! [`PayrollAggregator`] reads employee rows from the store and runs each one
//! through [`build_payroll_entry`]. Reports are computed per request and never
//! written back.

use std::sync::Arc;

use tracing::debug;

use crate::calculation::build_payroll_entry;
use crate::error::{ServiceError, ServiceResult};
use crate::models::PayrollEntry;
use crate::store::EmployeeStore;

/// Builds payroll reports from stored employee rows.
#[derive(Clone)]
pub struct PayrollAggregator {
    store: Arc<dyn EmployeeStore>,
}

impl PayrollAggregator {
    /// Creates an aggregator over the given store.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Returns the payroll entry for one employee.
    pub async fn report_for(&self, id: i64) -> ServiceResult<PayrollEntry> {
        let employee = self
            .store
            .get(id)
            .await?
            .ok_or(ServiceError::EmployeeNotFound { id })?;
        Ok(build_payroll_entry(&employee))
    }

    /// Returns a payroll entry for every employee, in store order.
    pub async fn fleet_report(&self) -> ServiceResult<Vec<PayrollEntry>> {
        let employees = self.store.list(None).await?;
        debug!(employees = employees.len(), "Building fleet payroll report");
        Ok(employees.iter().map(build_payroll_entry).collect())
    }
}
