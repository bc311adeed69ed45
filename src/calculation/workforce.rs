//! Monthly workforce statistics.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::{
    AttendanceRecord, Branch, Employee, HeadcountEntry, OvernightPolicy, PayrollPeriod, Position,
    WorkforceReport,
};

use super::aggregate::minutes_by_employee;
use super::hours::{pay_for_minutes, round_money};

/// Reference and attendance data a workforce report is computed from.
#[derive(Debug, Clone, Copy)]
pub struct WorkforceInputs<'a> {
    /// All employees, including soft-deleted ones.
    pub employees: &'a [Employee],
    /// Branches to count headcount against.
    pub branches: &'a [Branch],
    /// Positions to count headcount against.
    pub positions: &'a [Position],
    /// Attendance records; only those in the period are used.
    pub attendance: &'a [AttendanceRecord],
}

/// Computes staffing and labour-cost figures for `period`.
///
/// Soft-deleted employees are left out of headcount, salary average and
/// labour cost. Absent days are the expected working days of every employee
/// who checked in at least once in the month (one per calendar day) minus
/// the number of attendance records, floored at zero.
pub fn workforce_report(
    inputs: WorkforceInputs<'_>,
    period: PayrollPeriod,
    policy: OvernightPolicy,
) -> WorkforceReport {
    let active: Vec<&Employee> = inputs.employees.iter().filter(|e| e.is_active()).collect();

    let headcount_by_branch = inputs
        .branches
        .iter()
        .map(|branch| HeadcountEntry {
            id: branch.id.to_string(),
            name: branch.name.clone(),
            count: active
                .iter()
                .filter(|e| e.branch_id.as_ref() == Some(&branch.id))
                .count(),
        })
        .collect();

    let headcount_by_position = inputs
        .positions
        .iter()
        .map(|position| HeadcountEntry {
            id: position.id.to_string(),
            name: position.name.clone(),
            count: active
                .iter()
                .filter(|e| e.position_id.as_ref() == Some(&position.id))
                .count(),
        })
        .collect();

    let average_basic_salary = if active.is_empty() {
        Decimal::ZERO
    } else {
        let total = active
            .iter()
            .fold(Decimal::ZERO, |sum, e| sum.saturating_add(e.basic_salary));
        round_money(total / Decimal::from(active.len()))
    };

    let in_period: Vec<&AttendanceRecord> = inputs
        .attendance
        .iter()
        .filter(|r| period.contains_date(r.date))
        .collect();
    let total_shifts = in_period.len();
    let attending: HashSet<_> = in_period.iter().map(|r| &r.employee_id).collect();
    let expected_days = attending.len() as u64 * u64::from(period.days_in_month());
    let absent_days = expected_days.saturating_sub(total_shifts as u64);

    let minutes = minutes_by_employee(inputs.attendance, period, policy);
    let labour_cost = active
        .iter()
        .filter_map(|employee| {
            let worked = *minutes.get(&employee.id)?;
            Some(pay_for_minutes(
                worked,
                employee.hourly_rate.unwrap_or(Decimal::ZERO),
            ))
        })
        .fold(Decimal::ZERO, Decimal::saturating_add);

    WorkforceReport {
        period,
        headcount_by_branch,
        headcount_by_position,
        active_employees: active.len(),
        average_basic_salary,
        total_shifts,
        absent_days,
        labour_cost,
    }
}
