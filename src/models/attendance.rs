//! Attendance records and the overnight-shift policy.
//!
//! An attendance record is one check-in/check-out pair for one employee on
//! one date. Times of day are stored as `HH:MM` text in the document store;
//! an empty string means the employee has not checked in or out yet.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::ids::{AttendanceId, EmployeeId, ShiftId};

/// How to treat a record whose check-out time of day is earlier than its
/// check-in time of day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvernightPolicy {
    /// The shift crossed midnight: add 24 hours to the check-out time.
    #[default]
    WrapMidnight,
    /// The record is inconsistent and contributes no hours.
    Zero,
}

/// A single check-in/check-out record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Store identifier of the record, when it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AttendanceId>,
    /// The employee the record belongs to.
    #[serde(alias = "userId")]
    pub employee_id: EmployeeId,
    /// The scheduled shift the record was made against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_id: Option<ShiftId>,
    /// The working date.
    pub date: NaiveDate,
    /// Check-in time of day, if the employee has checked in.
    #[serde(default, with = "time_of_day")]
    pub check_in: Option<NaiveTime>,
    /// Check-out time of day, if the employee has checked out.
    #[serde(default, with = "time_of_day")]
    pub check_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Returns true once both check-in and check-out are present.
    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Minutes worked according to this record.
    ///
    /// Incomplete records yield zero. Records whose check-out is earlier than
    /// their check-in are resolved with `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{AttendanceRecord, EmployeeId, OvernightPolicy};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let record = AttendanceRecord {
    ///     id: None,
    ///     shift_id: None,
    ///     employee_id: EmployeeId::new("1"),
    ///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    ///     check_in: NaiveTime::from_hms_opt(22, 0, 0),
    ///     check_out: NaiveTime::from_hms_opt(6, 0, 0),
    /// };
    /// assert_eq!(record.worked_minutes(OvernightPolicy::WrapMidnight), 480);
    /// assert_eq!(record.worked_minutes(OvernightPolicy::Zero), 0);
    /// ```
    pub fn worked_minutes(&self, policy: OvernightPolicy) -> i64 {
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return 0;
        };

        let start = minutes_since_midnight(check_in);
        let end = minutes_since_midnight(check_out);

        if end >= start {
            return end - start;
        }

        match policy {
            OvernightPolicy::WrapMidnight => end + MINUTES_PER_DAY - start,
            OvernightPolicy::Zero => 0,
        }
    }
}

const MINUTES_PER_DAY: i64 = 24 * 60;

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute())
}

/// Serde adapter for optional `HH:MM` times where `""` means absent.
mod time_of_day {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.collect_str(&time.format("%H:%M")),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        let text = raw.trim();
        if text.is_empty() {
            return Ok(None);
        }

        NaiveTime::parse_from_str(text, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid time of day: {text}")))
    }
}
