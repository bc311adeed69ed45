//! Request types for the payroll engine API.
//!
//! The `/payroll/calculate` endpoint takes every collection inline. Records
//! use the same field names as the document store, so an export of
//! `db.json` can be posted as-is.

use serde::Deserialize;

use crate::calculation::{AggregationOptions, TimeSource, aggregate_payroll};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    Adjustment, AttendanceRecord, Employee, OvernightPolicy, PayrollPeriod, PayrollReport,
    ShiftCompletion,
};

/// Request body for `POST /payroll/calculate`.
///
/// At most one of `attendance` and `shift_completions` may be given. With
/// neither, every employee gets a zero base pay.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationRequest {
    /// The month to aggregate.
    pub period: PayrollPeriod,
    /// The employees to produce rows for.
    pub employees: Vec<Employee>,
    /// Check-in/check-out records.
    #[serde(default)]
    pub attendance: Option<Vec<AttendanceRecord>>,
    /// Shift tallies.
    #[serde(default)]
    pub shift_completions: Option<Vec<ShiftCompletion>>,
    /// Bonus and penalty entries.
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
    /// Overrides the configured overnight policy for this request.
    #[serde(default)]
    pub overnight_policy: Option<OvernightPolicy>,
}

impl CalculationRequest {
    /// Checks the request for inputs the aggregation cannot accept.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.attendance.is_some() && self.shift_completions.is_some() {
            return Err(PayrollError::InvalidRequest {
                message: "supply either attendance or shift_completions, not both".to_string(),
            });
        }
        self.adjustments.iter().try_for_each(Adjustment::validate)
    }

    /// Validates the request and aggregates it into a report.
    pub fn into_report(self, defaults: &AggregationOptions) -> PayrollResult<PayrollReport> {
        self.validate()?;

        let options = AggregationOptions {
            overnight_policy: self.overnight_policy.unwrap_or(defaults.overnight_policy),
        };
        let employees: Vec<Employee> = self
            .employees
            .into_iter()
            .filter(Employee::is_active)
            .collect();

        let source = match (&self.attendance, &self.shift_completions) {
            (_, Some(tallies)) => TimeSource::ShiftCompletion(tallies),
            (Some(records), None) => TimeSource::Attendance(records),
            (None, None) => TimeSource::Attendance(&[]),
        };
        let kind = source.kind();
        let breakdowns =
            aggregate_payroll(&employees, source, &self.adjustments, self.period, &options);

        Ok(PayrollReport::new(self.period, kind, breakdowns))
    }
}
