//! Worked-time arithmetic.
//!
//! Time is summed in whole minutes and only converted to hours or money at
//! the end, so that summing many short records does not accumulate
//! rounding error.
//!
//! Money arithmetic across the calculation layer saturates at
//! [`Decimal::MAX`] and [`Decimal::MIN`] instead of overflowing.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AttendanceRecord, OvernightPolicy};

/// Decimal places kept on money amounts and reported hours.
pub const MONEY_SCALE: u32 = 2;

const MINUTES_PER_HOUR: i64 = 60;

/// Sums the worked minutes of a set of attendance records.
///
/// Incomplete records count as zero; overnight records follow `policy`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::worked_minutes;
/// use payroll_engine::models::{AttendanceRecord, EmployeeId, OvernightPolicy};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let records = vec![
///     AttendanceRecord {
///         id: None,
///         shift_id: None,
///         employee_id: EmployeeId::new("1"),
///         date,
///         check_in: NaiveTime::from_hms_opt(8, 0, 0),
///         check_out: NaiveTime::from_hms_opt(12, 0, 0),
///     },
///     AttendanceRecord {
///         id: None,
///         shift_id: None,
///         employee_id: EmployeeId::new("1"),
///         date,
///         check_in: NaiveTime::from_hms_opt(13, 0, 0),
///         check_out: None,
///     },
/// ];
/// assert_eq!(worked_minutes(records.iter(), OvernightPolicy::WrapMidnight), 240);
/// ```
pub fn worked_minutes<'a, I>(records: I, policy: OvernightPolicy) -> i64
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records
        .into_iter()
        .map(|record| record.worked_minutes(policy))
        .sum()
}

/// Total worked hours over `records`, rounded once at the end.
pub fn worked_hours<'a, I>(records: I, policy: OvernightPolicy) -> Decimal
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    minutes_to_hours(worked_minutes(records, policy))
}

/// Converts minutes to hours, rounded to [`MONEY_SCALE`] places.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    round_money(Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR))
}

/// Pay for `minutes` of work at `hourly_rate`, rounded to [`MONEY_SCALE`] places.
///
/// Equivalent to hours x rate, but multiplies before dividing so that
/// fractional hours stay exact.
pub fn pay_for_minutes(minutes: i64, hourly_rate: Decimal) -> Decimal {
    let scaled = hourly_rate.saturating_mul(Decimal::from(minutes));
    round_money(scaled / Decimal::from(MINUTES_PER_HOUR))
}

/// Rounds a money amount half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
