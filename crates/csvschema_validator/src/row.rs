//! Row validation against the alignment built by the last header check.

use crate::ValidationSession;
use csvschema_core::{Category, ColumnField, MessageKind};
use tracing::trace;

impl<F: ColumnField> ValidationSession<'_, F> {
    /// Validates one data row.
    ///
    /// `values` holds the raw cells of the row, `None` marking a cell with no
    /// value. `row` is an identifier copied onto every message. Errors and
    /// warnings from the previous call are discarded first. Returns true if
    /// no error was recorded; warnings never affect the result.
    ///
    /// Each cell at a header position matched to a field is handed to that
    /// field (an absent value as the empty string) with the field's first
    /// matched header position, 1-based. A cell at an unmatched position
    /// yields an `extra_column` warning carrying the 0-based position. Then,
    /// for each declared field whose declared position has no aligned value
    /// in this row, a `missing_column` warning carries the 1-based position
    /// and field name.
    ///
    /// Without a prior [`validate_header`](Self::validate_header) call no
    /// position is matched, so every cell is reported as an extra column.
    pub fn validate_row<S: AsRef<str>>(
        &mut self,
        values: &[Option<S>],
        row: Option<usize>,
    ) -> bool {
        self.collector.reset();

        let schema = self.schema;
        let fields = schema.fields();

        let mut aligned: Vec<Option<&str>> = vec![None; values.len()];
        for &position in self.fields_by_index.keys() {
            if let Some(slot) = aligned.get_mut(position) {
                *slot = values[position].as_ref().map(|value| value.as_ref());
            }
        }

        for (i, value) in aligned.iter().copied().enumerate() {
            match self.fields_by_index.get(&i) {
                Some(&index) => {
                    let column = self.first_position_of(index).unwrap_or(i) + 1;
                    let report = fields[index].validate_column(value.unwrap_or(""), row, column);
                    self.collector.absorb(report);
                }
                None => self.collector.build_warning(
                    MessageKind::ExtraColumn,
                    Category::Schema,
                    row,
                    vec![i.into()],
                ),
            }
        }

        for (i, field) in fields.iter().enumerate() {
            if aligned.get(i).copied().flatten().is_none() {
                self.collector.build_warning(
                    MessageKind::MissingColumn,
                    Category::Schema,
                    row,
                    vec![(i + 1).into(), field.name().into()],
                );
            }
        }

        trace!(
            row = ?row,
            cells = values.len(),
            errors = self.collector.errors().len(),
            warnings = self.collector.warnings().len(),
            "Row validated"
        );

        self.collector.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvschema_core::{ErrorCollector, Field, FieldBuilder, MessageArg, Schema, ValidationMessage};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn kinds(messages: &[ValidationMessage]) -> Vec<String> {
        messages.iter().map(|m| m.kind.to_string()).collect()
    }

    /// Records every call and flags a fixed value as invalid.
    #[derive(Debug)]
    struct Recording {
        name: String,
        calls: RefCell<Vec<(String, Option<usize>, usize)>>,
    }

    impl Recording {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ColumnField for Recording {
        fn name(&self) -> &str {
            &self.name
        }

        fn is_required(&self) -> bool {
            false
        }

        fn validate_column(
            &self,
            value: &str,
            row: Option<usize>,
            column: usize,
        ) -> ErrorCollector {
            self.calls.borrow_mut().push((value.to_string(), row, column));
            let mut collector = ErrorCollector::new();
            if value == "bad" {
                collector.build_error(
                    MessageKind::Other("pattern".to_string()),
                    Category::Schema,
                    row,
                    vec![column.into(), value.into()],
                );
            }
            if value == "odd" {
                collector.build_warning(
                    MessageKind::Other("inconsistent_values".to_string()),
                    Category::Schema,
                    row,
                    vec![column.into()],
                );
            }
            collector
        }
    }

    #[test]
    fn test_matched_columns_are_delegated() {
        let schema = Schema::new(vec![Recording::new("a"), Recording::new("b")]);
        let mut session = ValidationSession::new(&schema);
        session.validate_header(&["a", "b"]);

        assert!(session.validate_row(&[Some("1"), Some("2")], Some(2)));
        assert!(session.warnings().is_empty());
        assert_eq!(
            *schema.fields()[0].calls.borrow(),
            vec![("1".to_string(), Some(2), 1)]
        );
        assert_eq!(
            *schema.fields()[1].calls.borrow(),
            vec![("2".to_string(), Some(2), 2)]
        );
    }

    #[test]
    fn test_reordered_header_routes_by_header_position() {
        let schema = Schema::new(vec![Recording::new("a"), Recording::new("b")]);
        let mut session = ValidationSession::new(&schema);
        session.validate_header(&["b", "a"]);

        assert!(session.validate_row(&[Some("for b"), Some("for a")], None));
        assert_eq!(
            *schema.fields()[0].calls.borrow(),
            vec![("for a".to_string(), None, 2)]
        );
        assert_eq!(
            *schema.fields()[1].calls.borrow(),
            vec![("for b".to_string(), None, 1)]
        );
    }

    #[test]
    fn test_field_messages_are_merged() {
        let schema = Schema::new(vec![Recording::new("a"), Recording::new("b")]);
        let mut session = ValidationSession::new(&schema);
        session.validate_header(&["a", "b"]);

        assert!(!session.validate_row(&[Some("bad"), Some("odd")], Some(7)));
        assert_eq!(
            session.errors(),
            &[ValidationMessage::new(
                MessageKind::Other("pattern".to_string()),
                Category::Schema,
                Some(7),
                vec![MessageArg::Position(1), "bad".into()],
            )]
        );
        assert_eq!(kinds(session.warnings()), vec!["inconsistent_values"]);
    }

    #[test]
    fn test_unmatched_position_warns_with_zero_based_index() {
        let schema = Schema::new(vec![Field::new("a"), Field::new("b")]);
        let mut session = ValidationSession::new(&schema);
        session.validate_header(&["a", "x"]);

        assert!(session.validate_row(&[Some("v1"), Some("v2")], Some(2)));
        assert_eq!(
            session.warnings(),
            &[
                ValidationMessage::new(
                    MessageKind::ExtraColumn,
                    Category::Schema,
                    Some(2),
                    vec![MessageArg::Position(1)],
                ),
                ValidationMessage::new(
                    MessageKind::MissingColumn,
                    Category::Schema,
                    Some(2),
                    vec![MessageArg::Position(2), "b".into()],
                ),
            ]
        );
    }

    #[test]
    fn test_absent_value_is_validated_as_empty() {
        let schema = Schema::new(vec![FieldBuilder::new("id").required(true).build()]);
        let mut session = ValidationSession::new(&schema);
        assert!(session.validate_header(&["id"]));

        assert!(!session.validate_row(&[None::<&str>], Some(3)));
        assert_eq!(kinds(session.errors()), vec!["missing_value"]);
        assert_eq!(kinds(session.warnings()), vec!["missing_column"]);

        assert!(!session.validate_row(&[Some("")], Some(4)));
        assert_eq!(kinds(session.errors()), vec!["missing_value"]);
        assert!(session.warnings().is_empty());
    }

    #[test]
    fn test_short_row_reports_missing_columns() {
        let schema = Schema::new(vec![Field::new("a"), Field::new("b"), Field::new("c")]);
        let mut session = ValidationSession::new(&schema);
        session.validate_header(&["a", "b", "c"]);

        assert!(session.validate_row(&[Some("1")], Some(2)));
        assert_eq!(
            session.warnings(),
            &[
                ValidationMessage::new(
                    MessageKind::MissingColumn,
                    Category::Schema,
                    Some(2),
                    vec![MessageArg::Position(2), "b".into()],
                ),
                ValidationMessage::new(
                    MessageKind::MissingColumn,
                    Category::Schema,
                    Some(2),
                    vec![MessageArg::Position(3), "c".into()],
                ),
            ]
        );
    }

    #[test]
    fn test_row_before_header_is_all_extra() {
        let schema = Schema::new(vec![Field::new("a")]);
        let mut session = ValidationSession::new(&schema);

        assert!(session.validate_row(&[Some("1"), Some("2")], None));
        assert_eq!(
            kinds(session.warnings()),
            vec!["extra_column", "extra_column", "missing_column"]
        );
        assert_eq!(session.warnings()[1].args, vec![MessageArg::Position(1)]);
    }

    #[test]
    fn test_repeated_row_is_idempotent() {
        let schema = Schema::new(vec![
            FieldBuilder::new("a").required(true).build(),
            Field::new("b"),
        ]);
        let mut session = ValidationSession::new(&schema);
        session.validate_header(&["a", "x"]);

        let values = [Some(""), Some("v2")];
        session.validate_row(&values, Some(5));
        let first = (session.errors().to_vec(), session.warnings().to_vec());
        session.validate_row(&values, Some(5));
        let second = (session.errors().to_vec(), session.warnings().to_vec());

        assert_eq!(first, second);
        assert_eq!(first.0.len(), 1);
    }

    #[test]
    fn test_header_messages_are_replaced_by_row_messages() {
        let schema = Schema::new(vec![FieldBuilder::new("id").required(true).build()]);
        let mut session = ValidationSession::new(&schema);

        assert!(!session.validate_header(&["other"]));
        assert!(session.validate_row(&[Some("1")], Some(2)));
        assert!(session.errors().is_empty());
    }
}
