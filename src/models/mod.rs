//! Core data models for the payroll engine.
//!
//! Input records mirror the camelCase layout of the document store; result
//! types use snake_case like the rest of the HTTP API.

mod adjustment;
mod attendance;
mod employee;
mod ids;
mod payroll_result;
mod period;
mod shift_completion;
mod workforce;

pub use adjustment::{Adjustment, AdjustmentKind};
pub use attendance::{AttendanceRecord, OvernightPolicy};
pub use employee::{Branch, Employee, Position};
pub use ids::{AttendanceId, BranchId, EmployeeId, PositionId, ShiftId};
pub use payroll_result::{DailyPay, PayrollReport, PayrollTotals, SalaryBreakdown, TimeSourceKind};
pub use period::PayrollPeriod;
pub use shift_completion::ShiftCompletion;
pub use workforce::{HeadcountEntry, WorkforceReport};
