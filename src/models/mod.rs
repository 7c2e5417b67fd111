//! Core data models for the payroll records service.
//!
//! This module contains the record types shared by the store, the
//! validator and the payroll report builders.

mod department;
mod employee;
mod payroll_entry;

pub use department::{Department, default_departments};
pub use employee::{Employee, NewEmployee};
pub use payroll_entry::PayrollEntry;
