//! Checks on the schema declaration itself.

use csvschema_core::{ColumnField, Schema, SchemaError};

/// Validates a schema declaration before it is used to check data.
///
/// Returns every defect found; an empty list means the declaration is sound.
/// Defects do not prevent validation: a duplicate name simply never matches,
/// since alignment always picks the first declared field.
pub fn check_definition<F: ColumnField>(schema: &Schema<F>) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    if schema.is_empty() {
        errors.push(SchemaError::NoFields);
        return errors;
    }

    for (index, field) in schema.fields().iter().enumerate() {
        if field.name().is_empty() {
            errors.push(SchemaError::EmptyName {
                position: index + 1,
            });
            continue;
        }

        if let Some(first) = schema.position_of(field.name()) {
            if first != index {
                errors.push(SchemaError::DuplicateField {
                    name: field.name().to_string(),
                    position: index + 1,
                    first: first + 1,
                });
            }
        }
    }

    errors
}
