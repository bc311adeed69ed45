//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::AggregationOptions;
use crate::error::{PayrollError, PayrollResult};

use super::types::{PayrollConfig, PayrollSettings};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "PAYROLL_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "./config/payroll.yaml";

/// Loads and provides access to the payroll configuration.
///
/// # File Layout
///
/// ```text
/// server:
///   bind_address: 127.0.0.1:8080
/// data:
///   path: ./data/db.json
/// payroll:
///   time_source: attendance        # or shift_completion
///   overnight_policy: wrap_midnight # or zero
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Serving on {}", loader.config().server.bind_address);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A required field is missing
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        info!(path = %path_str, data = %config.data.path.display(), "Loaded payroll configuration");
        Ok(Self { config })
    }

    /// Loads the file named by `PAYROLL_CONFIG`, or the default path.
    pub fn from_env() -> PayrollResult<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    fn parse(content: &str, path: &str) -> PayrollResult<PayrollConfig> {
        serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the calculation settings.
    pub fn payroll(&self) -> &PayrollSettings {
        &self.config.payroll
    }

    /// Aggregation options derived from the calculation settings.
    pub fn aggregation_options(&self) -> AggregationOptions {
        AggregationOptions {
            overnight_policy: self.config.payroll.overnight_policy,
        }
    }
}
