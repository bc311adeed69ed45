//! Bonus and penalty adjustments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::ids::EmployeeId;
use super::period::PayrollPeriod;

/// Whether an adjustment adds to or subtracts from net pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Added to net pay.
    Bonus,
    /// Subtracted from net pay.
    Penalty,
}

/// A bonus or penalty for one employee in one period.
///
/// The amount is always non-negative; the sign is carried by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    /// The employee the adjustment applies to.
    pub employee_id: EmployeeId,
    /// The month the adjustment belongs to.
    #[serde(alias = "month")]
    pub period: PayrollPeriod,
    /// Bonus or penalty.
    pub kind: AdjustmentKind,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Optional free-text reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Adjustment {
    /// Checks that the amount is non-negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Adjustment, AdjustmentKind, EmployeeId};
    /// use rust_decimal::Decimal;
    ///
    /// let adjustment = Adjustment {
    ///     employee_id: EmployeeId::new("1"),
    ///     period: "2024-06".parse().unwrap(),
    ///     kind: AdjustmentKind::Penalty,
    ///     amount: Decimal::new(-5, 0),
    ///     reason: None,
    /// };
    /// assert!(adjustment.validate().is_err());
    /// ```
    pub fn validate(&self) -> PayrollResult<()> {
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(PayrollError::InvalidAdjustment {
                employee_id: self.employee_id.to_string(),
                message: format!("amount must not be negative, got {}", self.amount),
            });
        }
        Ok(())
    }

    /// Returns true if this adjustment belongs to the employee and period.
    pub fn applies_to(&self, employee_id: &EmployeeId, period: PayrollPeriod) -> bool {
        &self.employee_id == employee_id && self.period == period
    }
}
