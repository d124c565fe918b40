//! Validation sessions.
//!
//! A [`ValidationSession`] owns the only mutable state of a validation run:
//! the header alignment built by the last `validate_header` call and the
//! errors and warnings of the last call. The [`Schema`] itself is borrowed
//! immutably, so any number of sessions may validate against the same schema
//! concurrently. A single session is strictly sequential.

use csvschema_core::{
    ColumnField, ErrorCollector, Field, Schema, ValidationMessage, ValidationOptions,
};
use std::collections::BTreeMap;

/// One header-validation epoch over a schema.
///
/// # Example
///
/// ```rust
/// use csvschema_core::{Field, Schema};
/// use csvschema_validator::ValidationSession;
///
/// let schema = Schema::new(vec![Field::new("a"), Field::new("b")]);
/// let mut session = ValidationSession::new(&schema);
///
/// assert!(session.validate_header(&["b", "a"]));
/// assert_eq!(session.warnings().len(), 2);
///
/// assert!(session.validate_row(&[Some("1"), Some("2")], Some(2)));
/// ```
#[derive(Debug)]
pub struct ValidationSession<'s, F = Field> {
    pub(crate) schema: &'s Schema<F>,
    pub(crate) options: ValidationOptions,
    /// Header position to declared field index.
    pub(crate) fields_by_index: BTreeMap<usize, usize>,
    pub(crate) collector: ErrorCollector,
}

impl<'s, F: ColumnField> ValidationSession<'s, F> {
    /// Creates a session with default options.
    pub fn new(schema: &'s Schema<F>) -> Self {
        Self::with_options(schema, ValidationOptions::default())
    }

    /// Creates a session with the given options.
    pub fn with_options(schema: &'s Schema<F>, options: ValidationOptions) -> Self {
        Self {
            schema,
            options,
            fields_by_index: BTreeMap::new(),
            collector: ErrorCollector::new(),
        }
    }

    /// The schema being validated against.
    pub fn schema(&self) -> &'s Schema<F> {
        self.schema
    }

    /// The options this session was created with.
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Errors recorded by the last call.
    pub fn errors(&self) -> &[ValidationMessage] {
        self.collector.errors()
    }

    /// Warnings recorded by the last call.
    pub fn warnings(&self) -> &[ValidationMessage] {
        self.collector.warnings()
    }

    /// Returns true when the last call recorded no error.
    pub fn is_valid(&self) -> bool {
        self.collector.is_valid()
    }

    /// Takes the records of the last call, leaving the collector empty.
    pub fn take_messages(&mut self) -> ErrorCollector {
        std::mem::take(&mut self.collector)
    }

    /// Field matched at a header position by the last `validate_header` call.
    pub fn field_at(&self, position: usize) -> Option<&'s F> {
        let schema = self.schema;
        self.fields_by_index
            .get(&position)
            .map(|&index| &schema.fields()[index])
    }

    /// Matched header positions in ascending order, with their fields.
    pub fn fields_by_index(&self) -> impl Iterator<Item = (usize, &'s F)> + '_ {
        let schema = self.schema;
        self.fields_by_index
            .iter()
            .map(move |(&position, &index)| (position, &schema.fields()[index]))
    }

    /// Number of header positions matched to a field.
    pub fn matched_columns(&self) -> usize {
        self.fields_by_index.len()
    }

    /// First header position mapped to the field declared at `index`.
    pub(crate) fn first_position_of(&self, index: usize) -> Option<usize> {
        self.fields_by_index
            .iter()
            .find(|&(_, &declared)| declared == index)
            .map(|(&position, _)| position)
    }
}
