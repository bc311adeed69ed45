//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::{OvernightPolicy, TimeSourceKind};

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Where the document store lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the json-server style `db.json` file.
    pub path: PathBuf,
}

/// Payroll calculation settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PayrollSettings {
    /// Which time data base pay is computed from.
    #[serde(default)]
    pub time_source: TimeSourceKind,
    /// How to treat check-outs earlier than check-ins.
    #[serde(default)]
    pub overnight_policy: OvernightPolicy,
}

/// The complete payroll engine configuration.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{OvernightPolicy, TimeSourceKind};
///
/// let config: PayrollConfig = serde_yaml::from_str(
///     "data:\n  path: ./data/db.json\npayroll:\n  overnight_policy: zero\n",
/// )
/// .unwrap();
/// assert_eq!(config.server.bind_address, "127.0.0.1:8080");
/// assert_eq!(config.payroll.time_source, TimeSourceKind::Attendance);
/// assert_eq!(config.payroll.overnight_policy, OvernightPolicy::Zero);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store settings.
    pub data: DataConfig,
    /// Calculation settings.
    #[serde(default)]
    pub payroll: PayrollSettings,
}
