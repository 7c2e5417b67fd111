//! Employee record service with a payroll derivation engine.
//!
//! This crate validates and stores employee records through a pluggable
//! record store, and derives net pay (CNSS and IRPP deductions) from each
//! employee's gross salary on demand.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod employees;
pub mod error;
pub mod logging;
pub mod models;
pub mod payroll;
pub mod store;
