//! Configuration loading and management for the payroll engine.
//!
//! This module loads the server address, document store location and
//! calculation settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Reading data from {}", config.config().data.path.display());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{DataConfig, PayrollConfig, PayrollSettings, ServerConfig};
