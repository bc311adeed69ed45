//! Error types for the payroll engine.
//!
//! The aggregation itself never fails. These errors belong to the layers
//! around it: configuration loading, data retrieval and request validation.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
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

    /// The backing data store could not be read.
    #[error("Data source unavailable: {source_name}")]
    DataSourceUnavailable {
        /// A description of the data source (usually a file path).
        source_name: String,
    },

    /// The backing data store contained data that could not be decoded.
    #[error("Failed to decode data source '{source_name}': {message}")]
    DataSourceParseError {
        /// A description of the data source.
        source_name: String,
        /// A description of the decode error.
        message: String,
    },

    /// A payroll period string was not in `YYYY-MM` form.
    #[error("Invalid payroll period '{value}': expected YYYY-MM")]
    InvalidPeriod {
        /// The rejected value.
        value: String,
    },

    /// An adjustment carried an amount that cannot be aggregated.
    #[error("Invalid adjustment for employee '{employee_id}': {message}")]
    InvalidAdjustment {
        /// The employee the adjustment was tagged with.
        employee_id: String,
        /// A description of what made the adjustment invalid.
        message: String,
    },

    /// No employee exists with the requested identifier.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        employee_id: String,
    },

    /// A request was well-formed JSON but semantically invalid.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
