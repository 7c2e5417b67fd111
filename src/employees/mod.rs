//! Employee validation and mutation.
//!
//! Incoming bodies are loosely typed JSON objects. This module turns them
//! into typed insert records and field updates, then drives the store.

mod fields;
mod service;
mod validation;

pub use fields::{
    EmployeeField, FieldUpdate, coerce_integer, coerce_optional_date_text, coerce_text,
};
pub use service::{EmployeeService, parse_dept_filter};
pub use validation::{build_field_updates, validate_new_employee};
