//! Column definitions and the field collaborator contract.
//!
//! A [`Field`] describes one declared column: its name, its constraints and
//! some descriptive metadata. Validation of individual values is delegated to
//! the [`ColumnField`] trait so richer value checks can be plugged in without
//! touching the alignment engine.

use crate::{Category, ErrorCollector, MessageKind, ValidationMessage};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Constraint name to constraint value, as declared in the schema document.
pub type Constraints = serde_json::Map<String, Value>;

/// Name of the constraint that makes a column mandatory.
pub const REQUIRED: &str = "required";

/// Contract between the alignment engine and a column definition.
pub trait ColumnField {
    /// Declared column name, compared case-insensitively against header cells.
    fn name(&self) -> &str;

    /// Whether the column must be present in the header.
    fn is_required(&self) -> bool;

    /// Validates one raw value.
    ///
    /// `row` is the caller's row identifier and `column` the 1-based column
    /// position reported in messages. The returned collector holds only the
    /// records produced for this value.
    fn validate_column(&self, value: &str, row: Option<usize>, column: usize) -> ErrorCollector;
}

/// A declared column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Column name
    pub name: String,

    /// Declared constraints, keyed by constraint name
    #[serde(default, skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,

    /// Optional human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Field {
    /// Creates a field with no constraints.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns the value of a constraint, if declared.
    pub fn constraint(&self, name: &str) -> Option<&Value> {
        self.constraints.get(name)
    }
}

impl ColumnField for Field {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_required(&self) -> bool {
        self.constraint(REQUIRED).is_some_and(is_truthy)
    }

    /// Checks the `required` constraint only; other constraints are carried
    /// but not evaluated by this type.
    fn validate_column(&self, value: &str, row: Option<usize>, column: usize) -> ErrorCollector {
        let mut collector = ErrorCollector::new();

        if self.is_required() && value.is_empty() {
            let mut constraints = Constraints::new();
            constraints.insert(REQUIRED.to_string(), Value::Bool(true));
            collector.push_error(
                ValidationMessage::new(
                    MessageKind::MissingValue,
                    Category::Schema,
                    row,
                    vec![column.into(), value.into()],
                )
                .with_constraints(constraints),
            );
        }

        collector
    }
}

/// Only `null` and `false` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Case-insensitive name comparison used for header alignment.
pub fn names_match(declared: &str, observed: &str) -> bool {
    declared
        .chars()
        .flat_map(char::to_lowercase)
        .eq(observed.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageArg;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn field_with(constraints: Value) -> Field {
        serde_json::from_value(json!({ "name": "id", "constraints": constraints })).unwrap()
    }

    #[test]
    fn test_required_truthiness() {
        assert!(field_with(json!({ "required": true })).is_required());
        assert!(field_with(json!({ "required": "false" })).is_required());
        assert!(field_with(json!({ "required": 0 })).is_required());
        assert!(!field_with(json!({ "required": false })).is_required());
        assert!(!field_with(json!({ "required": null })).is_required());
        assert!(!field_with(json!({})).is_required());
        assert!(!Field::new("id").is_required());
    }

    #[test]
    fn test_names_match_ignores_case() {
        assert!(names_match("Name", "name"));
        assert!(names_match("ÉTAT", "état"));
        assert!(!names_match("name", "names"));
        assert!(!names_match("name", " name"));
    }

    #[test]
    fn test_required_field_rejects_empty_value() {
        let field = field_with(json!({ "required": true }));

        let report = field.validate_column("", Some(3), 2);
        assert!(!report.is_valid());
        let error = &report.errors()[0];
        assert_eq!(error.kind, MessageKind::MissingValue);
        assert_eq!(error.row, Some(3));
        assert_eq!(
            error.args,
            vec![MessageArg::Position(2), MessageArg::Text(String::new())]
        );
        assert_eq!(error.constraints.get(REQUIRED), Some(&json!(true)));

        assert!(field.validate_column("42", Some(3), 2).is_valid());
    }

    #[test]
    fn test_optional_field_accepts_empty_value() {
        let field = Field::new("email");
        let report = field.validate_column("", None, 1);
        assert!(report.is_valid());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_deserialize_table_schema_field() {
        let field: Field = serde_json::from_value(json!({
            "name": "postcode",
            "title": "Postcode",
            "description": "UK postcode",
            "constraints": { "required": true, "pattern": "[A-Z]+" }
        }))
        .unwrap();

        assert_eq!(field.name, "postcode");
        assert_eq!(field.title.as_deref(), Some("Postcode"));
        assert_eq!(field.constraint("pattern"), Some(&json!("[A-Z]+")));
        assert!(field.is_required());
    }
}
