//! Employee model and organization reference data.
//!
//! This module defines the Employee struct together with the Branch and
//! Position records it points at.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{BranchId, EmployeeId, PositionId};

/// Represents an employee on the payroll.
///
/// Field names follow the camelCase layout of the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// The employee's full name as shown on payslips.
    pub full_name: String,
    /// Human-facing staff code (e.g. "NV001").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    /// Pay per worked hour. Employees without one earn no attendance-based pay.
    #[serde(default, alias = "salaryPerHour")]
    pub hourly_rate: Option<Decimal>,
    /// Contracted monthly base salary, used for reporting only.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// The branch the employee works at.
    #[serde(default)]
    pub branch_id: Option<BranchId>,
    /// The employee's position.
    #[serde(default)]
    pub position_id: Option<PositionId>,
    /// Free-form employment status label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Soft-delete marker.
    #[serde(default)]
    pub deleted: bool,
}

impl Employee {
    /// Returns true unless the employee has been soft-deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmployeeId};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: EmployeeId::new("1"),
    ///     full_name: "Nguyen Van A".to_string(),
    ///     employee_code: None,
    ///     hourly_rate: Some(Decimal::new(50_000, 0)),
    ///     basic_salary: Decimal::ZERO,
    ///     branch_id: None,
    ///     position_id: None,
    ///     status: None,
    ///     deleted: false,
    /// };
    /// assert!(employee.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

/// A branch (store location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Unique identifier for the branch.
    pub id: BranchId,
    /// Display name.
    pub name: String,
}

/// A job position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Unique identifier for the position.
    pub id: PositionId,
    /// Display name.
    pub name: String,
}
