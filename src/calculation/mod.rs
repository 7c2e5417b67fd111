//! Calculation logic for the payroll records service.
//!
//! This module contains the pure gross-to-net calculator and the transform
//! that turns one employee row into a payroll entry. Nothing here touches
//! the store.

mod net_salary;
mod payroll_entry;

pub use net_salary::{
    AMOUNT_DECIMAL_PLACES, NetSalaryResult, calculate_net_salary, cnss_employee_rate, irpp_rate,
    round_amount,
};
pub use payroll_entry::build_payroll_entry;
