//! Configuration loading and management for the payroll records service.
//!
//! This module loads listener, store and logging settings plus the department
//! catalog from YAML files, with environment variables taking precedence.
//!
//! # Example
//!
//! ```no_run
//! use payroll_records::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Serving on {}", config.server().bind_addr);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DatabaseConfig, DepartmentsConfig, LogFormat, LoggingConfig, ServerConfig, ServiceConfig,
    StoreBackend,
};
