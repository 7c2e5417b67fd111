//! HTTP request handlers for the payroll records API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::employees::parse_dept_filter;
use crate::error::ServiceError;

use super::request::{ListEmployeesQuery, body_object};
use super::response::{
    ApiErrorResponse, CreatedResponse, DeletedResponse, HealthResponse, UpdatedResponse,
};
use super::state::AppState;

type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/payroll", get(fleet_payroll))
        .route("/payroll/:id", get(employee_payroll))
        .route("/departments", get(list_departments))
        .route("/healthz", get(health))
        .with_state(state)
}

/// Logs a failed request and converts the error into a response.
fn reject(correlation_id: Uuid, error: ServiceError) -> ApiErrorResponse {
    if error.is_store_failure() {
        warn!(correlation_id = %correlation_id, error = %error, "Store failure");
    } else {
        info!(correlation_id = %correlation_id, error = %error, "Request rejected");
    }
    error.into()
}

/// Extracts an employee id from the path; anything non-numeric is a 404.
fn employee_id(path: Result<Path<i64>, PathRejection>) -> HandlerResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiErrorResponse::unknown_employee_path())
}

/// Handler for GET /employees.
async fn list_employees(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let query = ListEmployeesQuery::from_pairs(pairs);

    let dept_id =
        parse_dept_filter(query.dept_id.as_deref()).map_err(|e| reject(correlation_id, e))?;
    let employees = state
        .employees()
        .list(dept_id)
        .await
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        ?dept_id,
        count = employees.len(),
        "Listed employees"
    );
    Ok(Json(employees))
}

/// Handler for GET /employees/{id}.
async fn get_employee(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let id = employee_id(path)?;

    let employee = state
        .employees()
        .get(id)
        .await
        .map_err(|e| reject(correlation_id, e))?;
    Ok(Json(employee))
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create request");

    let body = body_object(payload);
    let id = state
        .employees()
        .create(&body)
        .await
        .map_err(|e| reject(correlation_id, e))?;

    info!(correlation_id = %correlation_id, id, "Create completed");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Handler for PUT /employees/{id}.
async fn update_employee(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let id = employee_id(path)?;
    info!(correlation_id = %correlation_id, id, "Processing update request");

    let body = body_object(payload);
    state
        .employees()
        .update(id, &body)
        .await
        .map_err(|e| reject(correlation_id, e))?;

    Ok(Json(UpdatedResponse { updated: id }))
}

/// Handler for DELETE /employees/{id}.
async fn delete_employee(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let id = employee_id(path)?;
    info!(correlation_id = %correlation_id, id, "Processing delete request");

    state
        .employees()
        .delete(id)
        .await
        .map_err(|e| reject(correlation_id, e))?;

    Ok(Json(DeletedResponse { deleted: id }))
}

/// Handler for GET /payroll.
async fn fleet_payroll(State(state): State<AppState>) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();

    let report = state
        .payroll()
        .fleet_report()
        .await
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        entries = report.len(),
        "Fleet payroll report built"
    );
    Ok(Json(report))
}

/// Handler for GET /payroll/{id}.
async fn employee_payroll(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> HandlerResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let id = employee_id(path)?;

    let entry = state
        .payroll()
        .report_for(id)
        .await
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        id,
        net = %entry.net,
        "Payroll entry built"
    );
    Ok(Json(entry))
}

/// Handler for GET /departments.
async fn list_departments(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.departments().to_vec())
}

/// Handler for GET /healthz.
///
/// Any store failure is reported as a 500 here, regardless of its class.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.store().ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::up())),
        Err(error) => {
            warn!(error = %error, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::down(error.to_string())),
            )
        }
    }
}
