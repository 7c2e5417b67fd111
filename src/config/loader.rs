//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading service
//! configuration from YAML files and environment variables.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Department, default_departments};

use super::types::{
    DatabaseConfig, DepartmentsConfig, LoggingConfig, ServerConfig, ServiceConfig,
};

/// Loads and provides access to service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── service.yaml      # Listener, store and logging settings (required)
/// └── departments.yaml  # Department catalog (optional)
/// ```
///
/// # Environment Overrides
///
/// [`ConfigLoader::apply_env`] reads `MYSQL_HOST`, `MYSQL_PORT`, `MYSQL_DB`,
/// `MYSQL_USER`, `MYSQL_PASSWORD`, `STORE_BACKEND`, `BIND_ADDR` and
/// `LOG_FORMAT`, each replacing the matching file or default value.
///
/// # Example
///
/// ```no_run
/// use payroll_records::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?
///     .apply_env(|key| std::env::var(key).ok())?;
/// println!("Store host: {}", loader.database().host);
/// # Ok::<(), payroll_records::error::ServiceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    service: ServiceConfig,
    departments: Vec<Department>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns `ConfigNotFound` if `service.yaml` is missing and
    /// `ConfigParseError` if any present file is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();

        let service = Self::load_yaml::<ServiceConfig>(&path.join("service.yaml"))?;

        let departments_path = path.join("departments.yaml");
        let departments = if departments_path.exists() {
            Self::load_yaml::<DepartmentsConfig>(&departments_path)?.departments
        } else {
            default_departments()
        };

        Ok(Self {
            service,
            departments,
        })
    }

    /// Returns a loader holding the built-in defaults.
    pub fn defaults() -> Self {
        Self {
            service: ServiceConfig::default(),
            departments: default_departments(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ServiceResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ServiceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ServiceError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Applies environment overrides using `lookup` to read variables.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_records::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::defaults()
    ///     .apply_env(|key| (key == "MYSQL_HOST").then(|| "db.internal".to_string()))
    ///     .unwrap();
    /// assert_eq!(loader.database().host, "db.internal");
    /// assert_eq!(loader.database().database, "employees_db");
    /// ```
    pub fn apply_env<F>(mut self, lookup: F) -> ServiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = &mut self.service.database;
        if let Some(host) = lookup("MYSQL_HOST") {
            database.host = host;
        }
        if let Some(port) = lookup("MYSQL_PORT") {
            database.port = parse_env("MYSQL_PORT", &port)?;
        }
        if let Some(name) = lookup("MYSQL_DB") {
            database.database = name;
        }
        if let Some(user) = lookup("MYSQL_USER") {
            database.user = user;
        }
        if let Some(password) = lookup("MYSQL_PASSWORD") {
            database.password = password;
        }
        if let Some(backend) = lookup("STORE_BACKEND") {
            database.backend = parse_env("STORE_BACKEND", &backend)?;
        }
        if let Some(bind_addr) = lookup("BIND_ADDR") {
            self.service.server.bind_addr = bind_addr;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.service.logging.format = parse_env("LOG_FORMAT", &format)?;
        }
        Ok(self)
    }

    /// Returns the whole service configuration.
    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }

    /// Returns the listener settings.
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Returns the store settings.
    pub fn database(&self) -> &DatabaseConfig {
        &self.service.database
    }

    /// Returns the logging settings.
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Returns the department catalog.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }
}

fn parse_env<T>(key: &str, raw: &str) -> ServiceResult<T>
where
    T: FromStr,
    T::Err: ToString,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ServiceError::ConfigParseError {
            path: format!("${}", key),
            message: e.to_string(),
        })
}
