//! HTTP API module for the payroll records service.
//!
//! This module provides the REST endpoints for employee records, payroll
//! reports, the department catalog and the health check.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ListEmployeesQuery, body_object};
pub use response::{
    ApiError, ApiErrorResponse, CreatedResponse, DeletedResponse, HealthResponse, UpdatedResponse,
};
pub use state::AppState;
