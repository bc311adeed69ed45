//! Payroll service: retrieval plus aggregation.
//!
//! The service owns the retrieval side of a payroll run. It takes one
//! snapshot of the [`PayrollRepository`], leaves out soft-deleted
//! employees, and only then hands the collections to the pure calculation
//! functions. A retrieval failure aborts the run before any aggregation.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::info;

use crate::calculation::{
    AggregationOptions, TimeSource, WorkforceInputs, aggregate_payroll, calculate_daily_pay,
    workforce_report,
};
use crate::config::PayrollSettings;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    DailyPay, Employee, EmployeeId, PayrollPeriod, PayrollReport, TimeSourceKind,
    WorkforceReport,
};
use crate::repository::{PayrollRepository, StoreDocument};

/// Runs payroll computations against a repository.
#[derive(Clone)]
pub struct PayrollService {
    repository: Arc<dyn PayrollRepository>,
    settings: PayrollSettings,
}

impl PayrollService {
    /// Creates a service reading from `repository`.
    pub fn new(repository: Arc<dyn PayrollRepository>, settings: PayrollSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// The calculation settings in use.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    fn options(&self) -> AggregationOptions {
        AggregationOptions {
            overnight_policy: self.settings.overnight_policy,
        }
    }

    fn active_snapshot(&self) -> PayrollResult<StoreDocument> {
        let mut document = self.repository.snapshot()?;
        document.employees.retain(Employee::is_active);
        Ok(document)
    }

    /// Computes the payroll report for `period`.
    ///
    /// Returns one row per active employee, in store order.
    pub fn run(&self, period: PayrollPeriod) -> PayrollResult<PayrollReport> {
        let started = Instant::now();

        let document = self.active_snapshot()?;
        let time_source = match self.settings.time_source {
            TimeSourceKind::Attendance => TimeSource::Attendance(&document.attendances),
            TimeSourceKind::ShiftCompletion => {
                TimeSource::ShiftCompletion(&document.shift_completions)
            }
        };

        let breakdowns = aggregate_payroll(
            &document.employees,
            time_source,
            &document.adjustments,
            period,
            &self.options(),
        );

        let report = PayrollReport::new(period, self.settings.time_source, breakdowns);
        info!(
            period = %period,
            time_source = ?report.time_source,
            employees = report.totals.employees,
            net_pay = %report.totals.net_pay,
            duration_us = started.elapsed().as_micros(),
            "Payroll run completed"
        );
        Ok(report)
    }

    /// Computes what one employee earned on one date.
    pub fn daily_pay(&self, employee_id: &EmployeeId, date: NaiveDate) -> PayrollResult<DailyPay> {
        let document = self.active_snapshot()?;
        let employee = document
            .employees
            .iter()
            .find(|employee| &employee.id == employee_id)
            .ok_or_else(|| PayrollError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })?;

        Ok(calculate_daily_pay(
            employee,
            &document.attendances,
            date,
            self.settings.overnight_policy,
        ))
    }

    /// Computes the workforce report for `period`.
    pub fn workforce(&self, period: PayrollPeriod) -> PayrollResult<WorkforceReport> {
        let document = self.repository.snapshot()?;

        Ok(workforce_report(
            WorkforceInputs {
                employees: &document.employees,
                branches: &document.branches,
                positions: &document.positions,
                attendance: &document.attendances,
            },
            period,
            self.settings.overnight_policy,
        ))
    }
}
