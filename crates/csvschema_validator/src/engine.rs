//! Whole-table validation.
//!
//! This module provides [`TableValidator`], which runs one header check and
//! one row check per data row through a [`ValidationSession`] and gathers
//! every call's messages into a single [`TableReport`].

use crate::ValidationSession;
use csvschema_core::{ColumnField, Schema, TableReport, ValidationOptions};
use std::time::Instant;
use tracing::{info, warn};

/// Line number of the header row; data rows follow it.
const HEADER_LINE: usize = 1;

/// Validates a header and its data rows in one pass.
///
/// Row identifiers attached to messages are 1-based line numbers, the header
/// being line 1 and the first data row line 2.
///
/// # Example
///
/// ```rust
/// use csvschema_core::{Field, Schema};
/// use csvschema_validator::TableValidator;
///
/// let schema = Schema::new(vec![Field::new("id"), Field::new("name")]);
/// let rows = vec![
///     vec![Some("1".to_string()), Some("Ada".to_string())],
///     vec![Some("2".to_string())],
/// ];
///
/// let report = TableValidator::new().validate(&schema, &["id", "name"], rows);
///
/// assert!(report.passed);
/// assert_eq!(report.stats.rows_validated, 2);
/// assert_eq!(report.warnings.len(), 1); // line 3 has no "name"
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableValidator {
    options: ValidationOptions,
}

impl TableValidator {
    /// Creates a table validator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table validator with the given options.
    pub fn with_options(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// The options used for every run.
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validates `header` and then each row of `rows` against `schema`.
    ///
    /// Header messages come first, then each row's messages in row order.
    /// Rows past [`ValidationOptions::max_rows`] are not read.
    pub fn validate<F, H, I, R, S>(
        &self,
        schema: &Schema<F>,
        header: &[H],
        rows: I,
    ) -> TableReport
    where
        F: ColumnField,
        H: AsRef<str>,
        I: IntoIterator<Item = R>,
        R: AsRef<[Option<S>]>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut session = ValidationSession::with_options(schema, self.options.clone());
        let mut report = TableReport::success();
        report.source_url = self.options.source_url.clone();

        info!(
            "Validating table{}",
            self.options
                .source_url
                .as_deref()
                .map(|url| format!(": {}", url))
                .unwrap_or_default()
        );

        if !session.validate_header(header) {
            warn!(
                "Header has {} error(s) at line {}",
                session.errors().len(),
                HEADER_LINE
            );
        }
        report.stats.columns_matched = session.matched_columns();
        self.collect(&mut session, &mut report);

        let limit = self.options.max_rows.unwrap_or(usize::MAX);
        let mut rows_validated = 0;
        for (offset, row) in rows.into_iter().take(limit).enumerate() {
            session.validate_row(row.as_ref(), Some(HEADER_LINE + 1 + offset));
            self.collect(&mut session, &mut report);
            rows_validated += 1;
        }

        if self.options.fail_on_warnings && !report.warnings.is_empty() {
            report.passed = false;
        }

        report.stats.rows_validated = rows_validated;
        report.stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            "Validated {} row(s): {} error(s), {} warning(s)",
            rows_validated,
            report.errors.len(),
            report.warnings.len()
        );

        report
    }

    /// Moves the session's latest messages into the report.
    fn collect<F: ColumnField>(
        &self,
        session: &mut ValidationSession<'_, F>,
        report: &mut TableReport,
    ) {
        let (errors, warnings) = session.take_messages().into_parts();
        for error in errors {
            report.add_error(error);
        }
        for warning in warnings {
            report.add_warning(warning);
        }
    }
}
