//! Error types for the payroll records service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a request or the startup sequence can run into.

use thiserror::Error;

/// The main error type for the payroll records service.
///
/// Validation variants are client faults and are always raised before any
/// statement reaches the store. Store variants carry the driver message.
///
/// # Example
///
/// ```
/// use payroll_records::error::ServiceError;
///
/// let error = ServiceError::MissingField {
///     field: "first_name".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing field: first_name");
/// assert!(error.is_validation());
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required field was absent from a create request.
    #[error("Missing field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A field value could not be coerced to the type its column needs.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A partial update carried no field from the updatable set.
    #[error("no valid fields to update")]
    NoValidFields,

    /// A query-string parameter was malformed.
    #[error("Invalid query parameter '{param}': {message}")]
    InvalidQuery {
        /// The offending parameter.
        param: String,
        /// A description of what made the parameter invalid.
        message: String,
    },

    /// No employee row exists for the given id.
    #[error("employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: i64,
    },

    /// The store could not be reached (connection or pool failure).
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        /// The driver's description of the failure.
        message: String,
    },

    /// The store was reached but refused the statement.
    #[error("Store rejected statement: {message}")]
    StoreRejected {
        /// The driver's description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl ServiceError {
    /// Returns true for the client-fault variants that map to a 400.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::MissingField { .. }
                | ServiceError::InvalidField { .. }
                | ServiceError::NoValidFields
                | ServiceError::InvalidQuery { .. }
        )
    }

    /// Returns true for failures raised by the record store.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            ServiceError::StoreUnavailable { .. } | ServiceError::StoreRejected { .. }
        )
    }

    /// Shorthand for an [`ServiceError::InvalidField`] error.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ServiceError::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(db_error) => ServiceError::StoreRejected {
                message: db_error.to_string(),
            },
            other => ServiceError::StoreUnavailable {
                message: other.to_string(),
            },
        }
    }
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
