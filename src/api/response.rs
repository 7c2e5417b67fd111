//! Response types for the payroll records API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`ServiceError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Body returned by `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// The id assigned by the store.
    pub id: i64,
}

/// Body returned by `PUT /employees/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedResponse {
    /// The id that was updated.
    pub updated: i64,
}

/// Body returned by `DELETE /employees/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// The id that was deleted.
    pub deleted: i64,
}

/// Body returned by `GET /healthz`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `down`.
    pub status: String,
    /// `up` when the store answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<String>,
    /// The store failure, when down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    /// A healthy response.
    pub fn up() -> Self {
        Self {
            status: "ok".to_string(),
            db: Some("up".to_string()),
            error: None,
        }
    }

    /// An unhealthy response carrying the store's error.
    pub fn down(error: impl Into<String>) -> Self {
        Self {
            status: "down".to_string(),
            db: None,
            error: Some(error.into()),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// The response for a path segment that is not a valid employee id.
    pub fn unknown_employee_path() -> Self {
        ApiErrorResponse {
            status: StatusCode::NOT_FOUND,
            error: ApiError::new("EMPLOYEE_NOT_FOUND", "employee not found"),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        let message = error.to_string();
        match error {
            ServiceError::MissingField { field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_FIELD",
                    message,
                    format!("Required field '{}' was not provided in the request", field),
                ),
            },
            ServiceError::InvalidField { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_FIELD",
                    message,
                    format!("The value supplied for '{}' has the wrong type", field),
                ),
            },
            ServiceError::NoValidFields => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NO_VALID_FIELDS",
                    message,
                    "Updatable fields: first_name, last_name, age, dept_id, base_salary, hire_date",
                ),
            },
            ServiceError::InvalidQuery { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_QUERY", message),
            },
            ServiceError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", message),
            },
            ServiceError::StoreUnavailable { .. } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "STORE_UNAVAILABLE",
                    "Record store unavailable",
                    message,
                ),
            },
            ServiceError::StoreRejected { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Record store error", message),
            },
            ServiceError::ConfigNotFound { .. } | ServiceError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let errors = vec![
            ServiceError::MissingField {
                field: "age".to_string(),
            },
            ServiceError::invalid_field("age", "must be integer"),
            ServiceError::NoValidFields,
            ServiceError::InvalidQuery {
                param: "dept_id".to_string(),
                message: "dept_id must be integer".to_string(),
            },
        ];

        for error in errors {
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = ServiceError::EmployeeNotFound { id: 3 }.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[test]
    fn test_store_failures_are_server_errors() {
        let unavailable: ApiErrorResponse = ServiceError::StoreUnavailable {
            message: "connection refused".to_string(),
        }
        .into();
        assert_eq!(unavailable.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(unavailable.error.details.as_deref(), Some("Store unavailable: connection refused"));

        let rejected: ApiErrorResponse = ServiceError::StoreRejected {
            message: "bad date".to_string(),
        }
        .into();
        assert_eq!(rejected.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(rejected.error.code, "STORE_ERROR");
    }

    #[test]
    fn test_missing_field_message_names_field() {
        let response: ApiErrorResponse = ServiceError::MissingField {
            field: "dept_id".to_string(),
        }
        .into();
        assert_eq!(response.error.message, "Missing field: dept_id");
    }

    #[test]
    fn test_health_bodies() {
        let up = serde_json::to_value(HealthResponse::up()).unwrap();
        assert_eq!(up, serde_json::json!({"status": "ok", "db": "up"}));

        let down = serde_json::to_value(HealthResponse::down("refused")).unwrap();
        assert_eq!(down, serde_json::json!({"status": "down", "error": "refused"}));
    }
}
