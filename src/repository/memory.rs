//! Repository holding its collections in memory.

use crate::error::PayrollResult;
use crate::models::{Adjustment, AttendanceRecord, Branch, Employee, Position, ShiftCompletion};

use super::{PayrollRepository, StoreDocument, retain_valid_adjustments};

/// Serves fixed collections. Useful for tests, benchmarks and for callers
/// that already fetched their data elsewhere.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    document: StoreDocument,
}

impl InMemoryRepository {
    /// Creates a repository serving `document`.
    pub fn new(document: StoreDocument) -> Self {
        Self { document }
    }
}

impl From<StoreDocument> for InMemoryRepository {
    fn from(document: StoreDocument) -> Self {
        Self::new(document)
    }
}

impl PayrollRepository for InMemoryRepository {
    fn employees(&self) -> PayrollResult<Vec<Employee>> {
        Ok(self.document.employees.clone())
    }

    fn attendance(&self) -> PayrollResult<Vec<AttendanceRecord>> {
        Ok(self.document.attendances.clone())
    }

    fn shift_completions(&self) -> PayrollResult<Vec<ShiftCompletion>> {
        Ok(self.document.shift_completions.clone())
    }

    fn adjustments(&self) -> PayrollResult<Vec<Adjustment>> {
        Ok(retain_valid_adjustments(self.document.adjustments.clone()))
    }

    fn branches(&self) -> PayrollResult<Vec<Branch>> {
        Ok(self.document.branches.clone())
    }

    fn positions(&self) -> PayrollResult<Vec<Position>> {
        Ok(self.document.positions.clone())
    }
}
