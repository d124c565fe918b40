//! Reports produced by validating a whole table.

use crate::ValidationMessage;
use serde::Serialize;

/// Outcome of validating a header and its data rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    /// Whether validation passed overall
    pub passed: bool,

    /// Every error, in the order the calls produced them
    pub errors: Vec<ValidationMessage>,

    /// Every warning, in the order the calls produced them
    pub warnings: Vec<ValidationMessage>,

    /// Source identifier copied from the options
    pub source_url: Option<String>,

    /// Validation statistics
    pub stats: TableStats,
}

/// Statistics about a table validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    /// Number of data rows validated
    pub rows_validated: usize,

    /// Number of header columns matched to a declared field
    pub columns_matched: usize,

    /// Validation duration in milliseconds
    pub duration_ms: u64,
}

impl TableReport {
    /// Creates an empty passing report.
    pub fn success() -> Self {
        Self {
            passed: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            source_url: None,
            stats: TableStats::default(),
        }
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: ValidationMessage) {
        self.errors.push(error);
        self.passed = false;
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: ValidationMessage) {
        self.warnings.push(warning);
    }
}
