//! Shift-completion records.
//!
//! Some stores track work as a per-employee tally (days worked, shifts per
//! day, pay coefficient) rather than as individual check-ins.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::EmployeeId;
use super::period::PayrollPeriod;

/// A tally of completed shifts for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftCompletion {
    /// The employee the tally belongs to.
    pub employee_id: EmployeeId,
    /// The month the tally covers. A tally without a period applies to any month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<PayrollPeriod>,
    /// Number of days worked.
    pub days_worked: u32,
    /// Number of shifts worked per day.
    pub shifts_per_day: u32,
    /// Pay per shift.
    pub pay_coefficient: Decimal,
}

impl ShiftCompletion {
    /// Returns true if the tally counts toward `period`.
    pub fn covers(&self, period: PayrollPeriod) -> bool {
        self.period.is_none_or(|own| own == period)
    }

    /// Pay earned by this tally: days worked x shifts per day x coefficient.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{EmployeeId, ShiftCompletion};
    /// use rust_decimal::Decimal;
    ///
    /// let tally = ShiftCompletion {
    ///     employee_id: EmployeeId::new("1"),
    ///     period: None,
    ///     days_worked: 22,
    ///     shifts_per_day: 2,
    ///     pay_coefficient: Decimal::new(150_000, 0),
    /// };
    /// assert_eq!(tally.pay(), Decimal::new(6_600_000, 0));
    /// ```
    pub fn pay(&self) -> Decimal {
        Decimal::from(self.days_worked)
            .saturating_mul(Decimal::from(self.shifts_per_day))
            .saturating_mul(self.pay_coefficient)
    }
}
