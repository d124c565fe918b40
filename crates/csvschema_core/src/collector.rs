//! Accumulation of errors and warnings for one validation call.

use crate::{Category, MessageArg, MessageKind, ValidationMessage};
use serde::Serialize;

/// Ordered errors and warnings gathered since the last [`reset`](Self::reset).
///
/// Warnings never affect [`is_valid`](Self::is_valid).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorCollector {
    errors: Vec<ValidationMessage>,
    warnings: Vec<ValidationMessage>,
}

impl ErrorCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error.
    pub fn build_error(
        &mut self,
        kind: MessageKind,
        category: Category,
        row: Option<usize>,
        args: Vec<MessageArg>,
    ) {
        self.errors
            .push(ValidationMessage::new(kind, category, row, args));
    }

    /// Records a warning.
    pub fn build_warning(
        &mut self,
        kind: MessageKind,
        category: Category,
        row: Option<usize>,
        args: Vec<MessageArg>,
    ) {
        self.warnings
            .push(ValidationMessage::new(kind, category, row, args));
    }

    /// Appends an already built error.
    pub fn push_error(&mut self, message: ValidationMessage) {
        self.errors.push(message);
    }

    /// Appends an already built warning.
    pub fn push_warning(&mut self, message: ValidationMessage) {
        self.warnings.push(message);
    }

    /// Appends everything another collector gathered, errors after errors
    /// and warnings after warnings.
    pub fn absorb(&mut self, other: ErrorCollector) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Discards all accumulated records.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }

    /// Returns true when no error has been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in the order they were recorded.
    pub fn errors(&self) -> &[ValidationMessage] {
        &self.errors
    }

    /// Warnings in the order they were recorded.
    pub fn warnings(&self) -> &[ValidationMessage] {
        &self.warnings
    }

    /// Splits the collector into its error and warning lists.
    pub fn into_parts(self) -> (Vec<ValidationMessage>, Vec<ValidationMessage>) {
        (self.errors, self.warnings)
    }
}
