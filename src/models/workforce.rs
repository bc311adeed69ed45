//! Monthly workforce report models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::PayrollPeriod;

/// Number of active employees assigned to one branch or position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadcountEntry {
    /// The branch or position id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Active employees assigned to it.
    pub count: usize,
}

/// Staffing and labour-cost figures for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkforceReport {
    /// The month covered.
    pub period: PayrollPeriod,
    /// Active employees per branch, in branch order.
    pub headcount_by_branch: Vec<HeadcountEntry>,
    /// Active employees per position, in position order.
    pub headcount_by_position: Vec<HeadcountEntry>,
    /// Employees that are not soft-deleted.
    pub active_employees: usize,
    /// Mean contracted basic salary over active employees.
    pub average_basic_salary: Decimal,
    /// Attendance records in the month.
    pub total_shifts: usize,
    /// Expected working days not covered by an attendance record.
    pub absent_days: u64,
    /// Attendance-based pay over all employees for the month.
    pub labour_cost: Decimal,
}
