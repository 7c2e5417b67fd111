//! Configuration types for the payroll records service.
//!
//! These structures are deserialized from `service.yaml` and
//! `departments.yaml`. Every field has a default, so a partial file is valid.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::models::Department;

/// Top-level contents of `service.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Record store settings.
    pub database: DatabaseConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:5001`.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5001".to_string(),
        }
    }
}

/// Which store implementation backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// A MySQL database reached over a connection pool.
    #[default]
    Mysql,
    /// Rows kept in process memory; lost on restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Ok(StoreBackend::Mysql),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Mysql => write!(f, "mysql"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Record store connection parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Store implementation.
    pub backend: StoreBackend,
    /// Database host (`MYSQL_HOST`).
    pub host: String,
    /// Database port (`MYSQL_PORT`).
    pub port: u16,
    /// Database name (`MYSQL_DB`).
    pub database: String,
    /// Login user (`MYSQL_USER`).
    pub user: String,
    /// Login password (`MYSQL_PASSWORD`).
    pub password: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// Whether to create the `employees` table at startup.
    pub ensure_schema: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            host: "mysql-employee".to_string(),
            port: 3306,
            database: "employees_db".to_string(),
            user: "root".to_string(),
            password: "root".to_string(),
            max_connections: 10,
            ensure_schema: true,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: "info".to_string(),
        }
    }
}

/// Contents of `departments.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentsConfig {
    /// The catalog, served in file order.
    pub departments: Vec<Department>,
}
