//! Builder pattern for creating schemas.
//!
//! This module provides ergonomic builders for constructing schemas and
//! their fields with a fluent API.

use crate::{Constraints, Field, REQUIRED, Schema};
use serde_json::Value;

/// Builder for creating a [`Schema`].
///
/// # Example
///
/// ```rust
/// use csvschema_core::{FieldBuilder, SchemaBuilder};
///
/// let schema = SchemaBuilder::new()
///     .title("Addresses")
///     .field(FieldBuilder::new("street").required(true).build())
///     .field(FieldBuilder::new("postcode").build())
///     .build();
///
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    uri: Option<String>,
    title: Option<String>,
    description: Option<String>,
    fields: Vec<Field>,
}

impl SchemaBuilder {
    /// Creates an empty schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the location the schema was read from.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Sets the schema title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the schema description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends several fields, keeping their order.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Builds the schema.
    pub fn build(self) -> Schema {
        Schema {
            uri: self.uri,
            fields: self.fields,
            title: self.title,
            description: self.description,
        }
    }
}

/// Builder for creating a [`Field`].
///
/// # Example
///
/// ```rust
/// use csvschema_core::{ColumnField, FieldBuilder};
///
/// let field = FieldBuilder::new("user_id")
///     .required(true)
///     .description("Unique user identifier")
///     .build();
///
/// assert!(field.is_required());
/// ```
#[derive(Debug)]
pub struct FieldBuilder {
    name: String,
    constraints: Constraints,
    title: Option<String>,
    description: Option<String>,
}

impl FieldBuilder {
    /// Creates a new field builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Constraints::new(),
            title: None,
            description: None,
        }
    }

    /// Sets the `required` constraint.
    pub fn required(self, required: bool) -> Self {
        self.constraint(REQUIRED, Value::Bool(required))
    }

    /// Sets an arbitrary constraint, replacing any previous value.
    pub fn constraint(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constraints.insert(name.into(), value.into());
        self
    }

    /// Sets the field title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the field description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the field.
    pub fn build(self) -> Field {
        Field {
            name: self.name,
            constraints: self.constraints,
            title: self.title,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColumnField;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_builder_keeps_order_and_metadata() {
        let schema = SchemaBuilder::new()
            .uri("http://example.com/schema.json")
            .title("People")
            .description("People and their ages")
            .field(FieldBuilder::new("name").build())
            .fields(vec![
                FieldBuilder::new("age").build(),
                FieldBuilder::new("email").build(),
            ])
            .build();

        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age", "email"]);
        assert_eq!(schema.uri.as_deref(), Some("http://example.com/schema.json"));
        assert_eq!(schema.title.as_deref(), Some("People"));
        assert_eq!(schema.description.as_deref(), Some("People and their ages"));
    }

    #[test]
    fn test_field_builder_constraints() {
        let field = FieldBuilder::new("age")
            .required(true)
            .constraint("minimum", 0)
            .title("Age")
            .build();

        assert!(field.is_required());
        assert_eq!(field.constraint("minimum"), Some(&Value::from(0)));
        assert_eq!(field.title.as_deref(), Some("Age"));
        assert_eq!(field.description, None);
    }

    #[test]
    fn test_required_false_is_not_required() {
        let field = FieldBuilder::new("note").required(false).build();
        assert!(!field.is_required());
        assert_eq!(field.constraint(REQUIRED), Some(&Value::Bool(false)));
    }
}
