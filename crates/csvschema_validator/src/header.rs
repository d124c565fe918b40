//! Header alignment.
//!
//! Matches observed header cells to declared fields by case-insensitive name,
//! tolerating reordering, missing and extra columns, and classifies every
//! mismatch as an error or a warning.

use crate::ValidationSession;
use csvschema_core::{Category, ColumnField, MessageKind, names_match};
use std::collections::BTreeSet;
use tracing::debug;

impl<F: ColumnField> ValidationSession<'_, F> {
    /// Aligns a header row to the schema.
    ///
    /// Rebuilds the position to field mapping used by later
    /// [`validate_row`](Self::validate_row) calls and replaces the recorded
    /// errors and warnings with those found in this header. Returns true if
    /// no error was recorded.
    ///
    /// For each cell at position `i`:
    ///
    /// - a required field declared at `i` under another name yields a
    ///   `missing_column` error, even when the cell matches a field elsewhere;
    /// - a cell matching a field declared at another position yields a
    ///   `different_index_header` warning;
    /// - a cell matching no field yields a `missing_column` error when the
    ///   field declared at `i` is required and an `extra_column` warning
    ///   otherwise, followed in both cases by a further `extra_column`
    ///   warning for the same cell.
    ///
    /// Finally every declared field left unmatched yields a `missing_column`
    /// warning with its 1-based declared position. A required field declared
    /// past the last header cell, which no cell could have displaced, also
    /// yields a `missing_column` error.
    ///
    /// Each cell costs a linear scan of the declared fields.
    pub fn validate_header<S: AsRef<str>>(&mut self, header: &[S]) -> bool {
        self.collector.reset();
        self.fields_by_index.clear();

        let schema = self.schema;
        let fields = schema.fields();

        for (i, cell) in header.iter().enumerate() {
            let name = cell.as_ref();
            let matched = schema.position_of(name);
            let declared = fields.get(i);
            let displaced = declared.filter(|field| !names_match(field.name(), name));

            if let Some(field) = displaced.filter(|field| field.is_required()) {
                self.collector.build_error(
                    MessageKind::MissingColumn,
                    Category::Schema,
                    None,
                    vec![field.name().into()],
                );
            }

            match matched {
                Some(index) => {
                    self.fields_by_index.insert(i, index);
                    if displaced.is_some() {
                        self.collector.build_warning(
                            MessageKind::DifferentIndexHeader,
                            Category::Schema,
                            None,
                            vec![(i + 1).into(), name.into()],
                        );
                    }
                }
                None => {
                    match declared {
                        Some(field) if field.is_required() => self.collector.build_error(
                            MessageKind::MissingColumn,
                            Category::Schema,
                            None,
                            vec![field.name().into()],
                        ),
                        _ => self.collector.build_warning(
                            MessageKind::ExtraColumn,
                            Category::Schema,
                            None,
                            vec![(i + 1).into(), name.into()],
                        ),
                    }
                    // Emitted for every unmatched cell, on top of the branch above.
                    self.collector.build_warning(
                        MessageKind::ExtraColumn,
                        Category::Schema,
                        None,
                        vec![(i + 1).into(), name.into()],
                    );
                }
            }
        }

        let mapped: BTreeSet<usize> = self.fields_by_index.values().copied().collect();
        for (index, field) in fields.iter().enumerate() {
            if mapped.contains(&index) {
                continue;
            }
            if index >= header.len() && field.is_required() {
                self.collector.build_error(
                    MessageKind::MissingColumn,
                    Category::Schema,
                    None,
                    vec![field.name().into()],
                );
            }
            self.collector.build_warning(
                MessageKind::MissingColumn,
                Category::Schema,
                None,
                vec![(index + 1).into(), field.name().into()],
            );
        }

        debug!(
            columns = header.len(),
            matched = self.fields_by_index.len(),
            errors = self.collector.errors().len(),
            warnings = self.collector.warnings().len(),
            "Header aligned"
        );

        self.collector.is_valid()
    }
}
