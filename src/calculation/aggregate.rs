//! Payroll aggregation.
//!
//! Turns employees, their time records and their adjustments into one
//! [`SalaryBreakdown`] per employee for a period. The aggregation is a pure
//! function of its inputs: it borrows everything, performs no I/O, and has no
//! failure mode. Records that reference unknown employees are never looked
//! up and so drop out on their own.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{
    Adjustment, AttendanceRecord, Employee, EmployeeId, OvernightPolicy, PayrollPeriod,
    SalaryBreakdown, ShiftCompletion, TimeSourceKind,
};

use super::adjustments::totals_by_employee;
use super::hours::{minutes_to_hours, pay_for_minutes, round_money};

/// The time data base pay is computed from.
///
/// The two representations are alternatives; a run uses exactly one.
#[derive(Debug, Clone, Copy)]
pub enum TimeSource<'a> {
    /// Check-in/check-out records, paid at the employee's hourly rate.
    Attendance(&'a [AttendanceRecord]),
    /// Shift tallies, paid days x shifts x coefficient.
    ShiftCompletion(&'a [ShiftCompletion]),
}

impl TimeSource<'_> {
    /// Which representation this is.
    pub fn kind(&self) -> TimeSourceKind {
        match self {
            TimeSource::Attendance(_) => TimeSourceKind::Attendance,
            TimeSource::ShiftCompletion(_) => TimeSourceKind::ShiftCompletion,
        }
    }
}

/// Tunables for an aggregation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationOptions {
    /// How to treat check-outs earlier than check-ins.
    pub overnight_policy: OvernightPolicy,
}

#[derive(Debug, Clone, Copy, Default)]
struct BasePay {
    worked_hours: Decimal,
    amount: Decimal,
}

/// Computes one salary breakdown per employee for `period`.
///
/// The output has the same length and order as `employees`. An employee with
/// no time records and no adjustments in the period gets an all-zero row.
///
/// # Algorithm
///
/// 1. Attendance records are grouped by employee, keeping only those dated
///    within `period`; worked minutes are summed per employee.
/// 2. Base pay is minutes x hourly rate / 60 for attendance, or the sum of
///    days x shifts x coefficient over the employee's tallies covering
///    `period` for shift completion.
/// 3. Bonuses and penalties tagged with this employee and `period` are summed.
/// 4. Net pay is base pay + bonuses - penalties, and may be negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{aggregate_payroll, AggregationOptions, TimeSource};
/// use payroll_engine::models::{AttendanceRecord, Employee, EmployeeId};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: EmployeeId::new("E1"),
///     full_name: "Nguyen Van A".to_string(),
///     employee_code: None,
///     hourly_rate: Some(Decimal::new(50_000, 0)),
///     basic_salary: Decimal::ZERO,
///     branch_id: None,
///     position_id: None,
///     status: None,
///     deleted: false,
/// };
/// let attendance = vec![AttendanceRecord {
///     id: None,
///     shift_id: None,
///     employee_id: EmployeeId::new("E1"),
///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     check_in: NaiveTime::from_hms_opt(8, 0, 0),
///     check_out: NaiveTime::from_hms_opt(17, 0, 0),
/// }];
///
/// let rows = aggregate_payroll(
///     &[employee],
///     TimeSource::Attendance(&attendance),
///     &[],
///     "2024-06".parse().unwrap(),
///     &AggregationOptions::default(),
/// );
/// assert_eq!(rows[0].worked_hours, Decimal::new(9, 0));
/// assert_eq!(rows[0].base_pay, Decimal::new(450_000, 0));
/// ```
pub fn aggregate_payroll(
    employees: &[Employee],
    time_source: TimeSource<'_>,
    adjustments: &[Adjustment],
    period: PayrollPeriod,
    options: &AggregationOptions,
) -> Vec<SalaryBreakdown> {
    let base_pay = match time_source {
        TimeSource::Attendance(records) => {
            attendance_base_pay(employees, records, period, options.overnight_policy)
        }
        TimeSource::ShiftCompletion(tallies) => shift_completion_base_pay(tallies, period),
    };
    let adjustment_totals = totals_by_employee(adjustments, period);

    employees
        .iter()
        .map(|employee| {
            let base = base_pay.get(&employee.id).copied().unwrap_or_default();
            let adjustments = adjustment_totals
                .get(&employee.id)
                .copied()
                .unwrap_or_default();

            SalaryBreakdown::new(
                employee.id.clone(),
                employee.full_name.clone(),
                base.worked_hours,
                base.amount,
                adjustments.bonus,
                adjustments.penalty,
            )
        })
        .collect()
}

/// Sums worked minutes per employee over the records dated within `period`.
pub(crate) fn minutes_by_employee(
    records: &[AttendanceRecord],
    period: PayrollPeriod,
    policy: OvernightPolicy,
) -> HashMap<&EmployeeId, i64> {
    let mut minutes: HashMap<&EmployeeId, i64> = HashMap::new();
    for record in records.iter().filter(|r| period.contains_date(r.date)) {
        *minutes.entry(&record.employee_id).or_insert(0) += record.worked_minutes(policy);
    }
    minutes
}

fn attendance_base_pay<'a>(
    employees: &'a [Employee],
    records: &[AttendanceRecord],
    period: PayrollPeriod,
    policy: OvernightPolicy,
) -> HashMap<&'a EmployeeId, BasePay> {
    let minutes = minutes_by_employee(records, period, policy);

    employees
        .iter()
        .filter_map(|employee| {
            let worked = *minutes.get(&employee.id)?;
            let rate = employee.hourly_rate.unwrap_or(Decimal::ZERO);
            Some((
                &employee.id,
                BasePay {
                    worked_hours: minutes_to_hours(worked),
                    amount: pay_for_minutes(worked, rate),
                },
            ))
        })
        .collect()
}

fn shift_completion_base_pay(
    tallies: &[ShiftCompletion],
    period: PayrollPeriod,
) -> HashMap<&EmployeeId, BasePay> {
    let mut base: HashMap<&EmployeeId, BasePay> = HashMap::new();
    for tally in tallies.iter().filter(|t| t.covers(period)) {
        let entry = base.entry(&tally.employee_id).or_default();
        entry.amount = entry.amount.saturating_add(tally.pay());
    }
    for entry in base.values_mut() {
        entry.amount = round_money(entry.amount);
    }
    base
}
