//! Options for a validation run.

use serde::{Deserialize, Serialize};

/// Settings carried through header and row validation.
///
/// `validate` and `source_url` are accepted for interface compatibility with
/// callers that already pass them; neither changes how headers or rows are
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Reserved. Validation always runs.
    pub validate: bool,

    /// Identifier of the data source, copied onto table reports
    pub source_url: Option<String>,

    /// Treat warnings as failures when building a table report
    pub fail_on_warnings: bool,

    /// Maximum number of data rows the table driver will check
    pub max_rows: Option<usize>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            validate: true,
            source_url: None,
            fail_on_warnings: false,
            max_rows: None,
        }
    }
}

impl ValidationOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reserved validate flag.
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Sets the source identifier.
    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    /// Sets whether warnings fail a table report.
    pub fn with_fail_on_warnings(mut self, fail_on_warnings: bool) -> Self {
        self.fail_on_warnings = fail_on_warnings;
        self
    }

    /// Limits the number of data rows checked by the table driver.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }
}
