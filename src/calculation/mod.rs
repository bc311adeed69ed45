//! Calculation logic for the payroll engine.
//!
//! This module contains the pure computations: worked-time arithmetic,
//! bonus/penalty totals, the monthly payroll aggregation, single-day pay and
//! the monthly workforce report. Nothing here performs I/O.

mod adjustments;
mod aggregate;
mod daily_pay;
mod hours;
mod workforce;

pub use adjustments::{AdjustmentTotals, adjustment_totals};
pub use aggregate::{AggregationOptions, TimeSource, aggregate_payroll};
pub use daily_pay::calculate_daily_pay;
pub use hours::{
    MONEY_SCALE, minutes_to_hours, pay_for_minutes, round_money, worked_hours, worked_minutes,
};
pub use workforce::{WorkforceInputs, workforce_report};
