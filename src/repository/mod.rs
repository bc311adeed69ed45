//! Data access for the payroll engine.
//!
//! The aggregation never fetches anything itself. A [`PayrollRepository`]
//! hands it fully retrieved collections; identifiers, dates and times are
//! validated while decoding, so the calculation layer only ever sees
//! well-typed records.

mod json_file;
mod memory;

use serde::Deserialize;
use tracing::warn;

use crate::error::PayrollResult;
use crate::models::{
    Adjustment, AttendanceRecord, Branch, Employee, Position, ShiftCompletion,
};

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;

/// Read access to the collections payroll is computed from.
///
/// Implementations must not cache between calls: every call reflects the
/// store as it is now.
pub trait PayrollRepository: Send + Sync {
    /// All employees, including soft-deleted ones.
    fn employees(&self) -> PayrollResult<Vec<Employee>>;

    /// All attendance records.
    fn attendance(&self) -> PayrollResult<Vec<AttendanceRecord>>;

    /// All shift-completion tallies.
    fn shift_completions(&self) -> PayrollResult<Vec<ShiftCompletion>>;

    /// All valid bonus/penalty adjustments.
    fn adjustments(&self) -> PayrollResult<Vec<Adjustment>>;

    /// All branches.
    fn branches(&self) -> PayrollResult<Vec<Branch>>;

    /// All positions.
    fn positions(&self) -> PayrollResult<Vec<Position>>;

    /// Every collection, read together.
    ///
    /// Invalid adjustments are already dropped. Stores that hold all
    /// collections in one place should override this with a single read, so
    /// that a run sees one consistent state of the store.
    fn snapshot(&self) -> PayrollResult<StoreDocument> {
        Ok(StoreDocument {
            employees: self.employees()?,
            attendances: self.attendance()?,
            shift_completions: self.shift_completions()?,
            adjustments: self.adjustments()?,
            branches: self.branches()?,
            positions: self.positions()?,
        })
    }
}

/// The json-server document layout: one top-level array per collection.
/// Missing collections decode as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreDocument {
    /// Employee records.
    pub employees: Vec<Employee>,
    /// Check-in/check-out records.
    #[serde(alias = "attendance")]
    pub attendances: Vec<AttendanceRecord>,
    /// Shift tallies.
    #[serde(alias = "shiftCompletions")]
    pub shift_completions: Vec<ShiftCompletion>,
    /// Bonus/penalty entries.
    pub adjustments: Vec<Adjustment>,
    /// Branches.
    pub branches: Vec<Branch>,
    /// Positions.
    pub positions: Vec<Position>,
}

/// Drops adjustments that fail validation, logging each one.
fn retain_valid_adjustments(adjustments: Vec<Adjustment>) -> Vec<Adjustment> {
    adjustments
        .into_iter()
        .filter(|adjustment| match adjustment.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    employee_id = %adjustment.employee_id,
                    period = %adjustment.period,
                    error = %err,
                    "Dropping invalid adjustment"
                );
                false
            }
        })
        .collect()
}
