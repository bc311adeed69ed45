//! Pay for a single working day.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, DailyPay, Employee, OvernightPolicy};

use super::hours::{minutes_to_hours, pay_for_minutes, worked_minutes};

/// Computes what `employee` earned on `date` from their attendance records.
///
/// Records belonging to other employees or other dates are ignored. Uses the
/// same hour and rounding rules as the monthly aggregation.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_daily_pay;
/// use payroll_engine::models::{AttendanceRecord, Employee, EmployeeId, OvernightPolicy};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: EmployeeId::new("1"),
///     full_name: "Nguyen Van A".to_string(),
///     employee_code: None,
///     hourly_rate: Some(Decimal::new(40_000, 0)),
///     basic_salary: Decimal::ZERO,
///     branch_id: None,
///     position_id: None,
///     status: None,
///     deleted: false,
/// };
/// let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let records = vec![AttendanceRecord {
///     id: None,
///     shift_id: None,
///     employee_id: EmployeeId::new("1"),
///     date,
///     check_in: NaiveTime::from_hms_opt(9, 0, 0),
///     check_out: NaiveTime::from_hms_opt(13, 30, 0),
/// }];
///
/// let pay = calculate_daily_pay(&employee, &records, date, OvernightPolicy::WrapMidnight);
/// assert_eq!(pay.worked_hours, Decimal::new(45, 1));
/// assert_eq!(pay.amount, Decimal::new(180_000, 0));
/// ```
pub fn calculate_daily_pay(
    employee: &Employee,
    attendance: &[AttendanceRecord],
    date: NaiveDate,
    policy: OvernightPolicy,
) -> DailyPay {
    let minutes = worked_minutes(
        attendance
            .iter()
            .filter(|record| record.employee_id == employee.id && record.date == date),
        policy,
    );
    let hourly_rate = employee.hourly_rate.unwrap_or(Decimal::ZERO);

    DailyPay {
        employee_id: employee.id.clone(),
        employee_name: employee.full_name.clone(),
        date,
        worked_hours: minutes_to_hours(minutes),
        hourly_rate,
        amount: pay_for_minutes(minutes, hourly_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeId;
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn employee(rate: Option<&str>) -> Employee {
        Employee {
            id: EmployeeId::new("1"),
            full_name: "Nguyen Van A".to_string(),
            employee_code: None,
            hourly_rate: rate.map(dec),
            basic_salary: Decimal::ZERO,
            branch_id: None,
            position_id: None,
            status: None,
            deleted: false,
        }
    }

    fn record(id: &str, date: &str, check_in: &str, check_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id: None,
            shift_id: None,
            employee_id: EmployeeId::new(id),
            date: make_date(date),
            check_in: NaiveTime::parse_from_str(check_in, "%H:%M").ok(),
            check_out: check_out.and_then(|s| NaiveTime::parse_from_str(s, "%H:%M").ok()),
        }
    }

    #[test]
    fn test_only_same_day_and_employee_count() {
        let records = vec![
            record("1", "2024-06-03", "08:00", Some("12:00")),
            record("1", "2024-06-04", "08:00", Some("17:00")),
            record("2", "2024-06-03", "08:00", Some("17:00")),
        ];

        let pay = calculate_daily_pay(
            &employee(Some("25000")),
            &records,
            make_date("2024-06-03"),
            OvernightPolicy::WrapMidnight,
        );
        assert_eq!(pay.worked_hours, dec("4"));
        assert_eq!(pay.amount, dec("100000"));
        assert_eq!(pay.hourly_rate, dec("25000"));
    }

    #[test]
    fn test_checked_in_but_not_out_earns_nothing_yet() {
        let records = vec![record("1", "2024-06-03", "08:00", None)];
        let pay = calculate_daily_pay(
            &employee(Some("25000")),
            &records,
            make_date("2024-06-03"),
            OvernightPolicy::WrapMidnight,
        );
        assert_eq!(pay.worked_hours, Decimal::ZERO);
        assert_eq!(pay.amount, Decimal::ZERO);
    }

    #[test]
    fn test_no_rate_earns_nothing() {
        let records = vec![record("1", "2024-06-03", "08:00", Some("17:00"))];
        let pay = calculate_daily_pay(
            &employee(None),
            &records,
            make_date("2024-06-03"),
            OvernightPolicy::WrapMidnight,
        );
        assert_eq!(pay.worked_hours, dec("9"));
        assert_eq!(pay.hourly_rate, Decimal::ZERO);
        assert_eq!(pay.amount, Decimal::ZERO);
    }
}
