//! Bonus and penalty totals.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Adjustment, AdjustmentKind, EmployeeId, PayrollPeriod};

/// Bonus and penalty sums for one employee in one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdjustmentTotals {
    /// Sum of bonus amounts.
    pub bonus: Decimal,
    /// Sum of penalty amounts.
    pub penalty: Decimal,
}

impl AdjustmentTotals {
    fn add(&mut self, adjustment: &Adjustment) {
        match adjustment.kind {
            AdjustmentKind::Bonus => self.bonus = self.bonus.saturating_add(adjustment.amount),
            AdjustmentKind::Penalty => {
                self.penalty = self.penalty.saturating_add(adjustment.amount)
            }
        }
    }
}

/// Sums the adjustments of one employee in one period.
///
/// Adjustments for other employees or other periods are ignored.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::adjustment_totals;
/// use payroll_engine::models::{Adjustment, AdjustmentKind, EmployeeId};
/// use rust_decimal::Decimal;
///
/// let june = "2024-06".parse().unwrap();
/// let adjustments = vec![
///     Adjustment {
///         employee_id: EmployeeId::new("1"),
///         period: june,
///         kind: AdjustmentKind::Bonus,
///         amount: Decimal::new(200_000, 0),
///         reason: None,
///     },
///     Adjustment {
///         employee_id: EmployeeId::new("1"),
///         period: "2024-07".parse().unwrap(),
///         kind: AdjustmentKind::Bonus,
///         amount: Decimal::new(999, 0),
///         reason: None,
///     },
/// ];
///
/// let totals = adjustment_totals(&adjustments, &EmployeeId::new("1"), june);
/// assert_eq!(totals.bonus, Decimal::new(200_000, 0));
/// assert_eq!(totals.penalty, Decimal::ZERO);
/// ```
pub fn adjustment_totals(
    adjustments: &[Adjustment],
    employee_id: &EmployeeId,
    period: PayrollPeriod,
) -> AdjustmentTotals {
    totals_by_employee(adjustments, period)
        .get(employee_id)
        .copied()
        .unwrap_or_default()
}

/// Groups the period's adjustments by employee and sums them.
pub(crate) fn totals_by_employee(
    adjustments: &[Adjustment],
    period: PayrollPeriod,
) -> HashMap<&EmployeeId, AdjustmentTotals> {
    let mut grouped: HashMap<&EmployeeId, AdjustmentTotals> = HashMap::new();
    for adjustment in adjustments.iter().filter(|a| a.period == period) {
        grouped
            .entry(&adjustment.employee_id)
            .or_default()
            .add(adjustment);
    }
    grouped
}
