//! Repository backed by a json-server style `db.json` file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Adjustment, AttendanceRecord, Branch, Employee, Position, ShiftCompletion};

use super::{PayrollRepository, StoreDocument, retain_valid_adjustments};

/// Reads collections from a JSON document on disk.
///
/// The file is read and decoded on every call, so edits made by other tools
/// are picked up without a restart.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::repository::{JsonFileRepository, PayrollRepository};
///
/// let repository = JsonFileRepository::new("./data/db.json");
/// let employees = repository.employees()?;
/// println!("{} employees on file", employees.len());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the whole document.
    pub fn load(&self) -> PayrollResult<StoreDocument> {
        let source_name = self.path.display().to_string();

        let content =
            fs::read_to_string(&self.path).map_err(|_| PayrollError::DataSourceUnavailable {
                source_name: source_name.clone(),
            })?;

        let document: StoreDocument =
            serde_json::from_str(&content).map_err(|e| PayrollError::DataSourceParseError {
                source_name: source_name.clone(),
                message: e.to_string(),
            })?;

        debug!(
            source = %source_name,
            employees = document.employees.len(),
            attendances = document.attendances.len(),
            adjustments = document.adjustments.len(),
            "Loaded document store"
        );
        Ok(document)
    }
}

impl PayrollRepository for JsonFileRepository {
    fn employees(&self) -> PayrollResult<Vec<Employee>> {
        Ok(self.load()?.employees)
    }

    fn attendance(&self) -> PayrollResult<Vec<AttendanceRecord>> {
        Ok(self.load()?.attendances)
    }

    fn shift_completions(&self) -> PayrollResult<Vec<ShiftCompletion>> {
        Ok(self.load()?.shift_completions)
    }

    fn adjustments(&self) -> PayrollResult<Vec<Adjustment>> {
        Ok(retain_valid_adjustments(self.load()?.adjustments))
    }

    fn branches(&self) -> PayrollResult<Vec<Branch>> {
        Ok(self.load()?.branches)
    }

    fn positions(&self) -> PayrollResult<Vec<Position>> {
        Ok(self.load()?.positions)
    }

    fn snapshot(&self) -> PayrollResult<StoreDocument> {
        let mut document = self.load()?;
        document.adjustments = retain_valid_adjustments(document.adjustments);
        Ok(document)
    }
}
