//! Payroll result models.
//!
//! This module contains the [`SalaryBreakdown`] row produced by the aggregator,
//! the [`PayrollReport`] that wraps a whole run, and the [`DailyPay`] figure
//! for a single working day.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ids::EmployeeId;
use super::period::PayrollPeriod;

/// Which kind of time data a payroll run was computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSourceKind {
    /// Check-in/check-out records, paid per hour.
    #[default]
    Attendance,
    /// Shift tallies, paid per shift.
    ShiftCompletion,
}

/// One employee's pay for one period.
///
/// Use [`SalaryBreakdown::new`] so that `net_pay` always equals
/// `base_pay + bonus_total - penalty_total`, saturating at the `Decimal`
/// bounds.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EmployeeId, SalaryBreakdown};
/// use rust_decimal::Decimal;
///
/// let row = SalaryBreakdown::new(
///     EmployeeId::new("1"),
///     "Nguyen Van A".to_string(),
///     Decimal::new(9, 0),
///     Decimal::new(450_000, 0),
///     Decimal::new(200_000, 0),
///     Decimal::new(50_000, 0),
/// );
/// assert_eq!(row.net_pay, Decimal::new(600_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The employee this row is for.
    pub employee_id: EmployeeId,
    /// The employee's full name.
    pub employee_name: String,
    /// Hours worked in the period (zero for shift-completion runs).
    pub worked_hours: Decimal,
    /// Pay derived from worked time, before adjustments.
    pub base_pay: Decimal,
    /// Sum of bonuses in the period.
    pub bonus_total: Decimal,
    /// Sum of penalties in the period.
    pub penalty_total: Decimal,
    /// Base pay plus bonuses minus penalties. May be negative.
    pub net_pay: Decimal,
}

impl SalaryBreakdown {
    /// Builds a row, deriving the net pay.
    pub fn new(
        employee_id: EmployeeId,
        employee_name: String,
        worked_hours: Decimal,
        base_pay: Decimal,
        bonus_total: Decimal,
        penalty_total: Decimal,
    ) -> Self {
        Self {
            employee_id,
            employee_name,
            worked_hours,
            base_pay,
            bonus_total,
            penalty_total,
            net_pay: base_pay
                .saturating_add(bonus_total)
                .saturating_sub(penalty_total),
        }
    }
}

/// Column sums over a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of rows.
    pub employees: usize,
    /// Total hours worked.
    pub worked_hours: Decimal,
    /// Total base pay.
    pub base_pay: Decimal,
    /// Total bonuses.
    pub bonus_total: Decimal,
    /// Total penalties.
    pub penalty_total: Decimal,
    /// Total net pay.
    pub net_pay: Decimal,
}

impl PayrollTotals {
    /// Sums every column of the given rows.
    pub fn from_breakdowns(rows: &[SalaryBreakdown]) -> Self {
        rows.iter().fold(
            Self {
                employees: rows.len(),
                ..Self::default()
            },
            |mut totals, row| {
                totals.worked_hours = totals.worked_hours.saturating_add(row.worked_hours);
                totals.base_pay = totals.base_pay.saturating_add(row.base_pay);
                totals.bonus_total = totals.bonus_total.saturating_add(row.bonus_total);
                totals.penalty_total = totals.penalty_total.saturating_add(row.penalty_total);
                totals.net_pay = totals.net_pay.saturating_add(row.net_pay);
                totals
            },
        )
    }
}

/// The complete result of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this run.
    pub calculation_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The month the run covers.
    pub period: PayrollPeriod,
    /// The kind of time data used for base pay.
    pub time_source: TimeSourceKind,
    /// One row per employee, in input order.
    pub breakdowns: Vec<SalaryBreakdown>,
    /// Column sums over `breakdowns`.
    pub totals: PayrollTotals,
}

impl PayrollReport {
    /// Wraps aggregated rows into a report stamped with a fresh id and time.
    pub fn new(
        period: PayrollPeriod,
        time_source: TimeSourceKind,
        breakdowns: Vec<SalaryBreakdown>,
    ) -> Self {
        let totals = PayrollTotals::from_breakdowns(&breakdowns);
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            period,
            time_source,
            breakdowns,
            totals,
        }
    }
}

/// Pay earned by one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPay {
    /// The employee.
    pub employee_id: EmployeeId,
    /// The employee's full name.
    pub employee_name: String,
    /// The working date.
    pub date: NaiveDate,
    /// Hours worked on that date.
    pub worked_hours: Decimal,
    /// The hourly rate applied (zero when the employee has none).
    pub hourly_rate: Decimal,
    /// Worked hours times hourly rate.
    pub amount: Decimal,
}
