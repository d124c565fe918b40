//! Error types for schema definitions.
//!
//! Validating data never produces these: header and row problems are
//! recorded as messages in an [`ErrorCollector`](crate::ErrorCollector).
//! A `SchemaError` describes a defect in the declaration itself.

use thiserror::Error;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Defects found in a schema declaration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The schema declares no fields
    #[error("Schema has no fields defined")]
    NoFields,

    /// A field has an empty name and can never match a header cell
    #[error("Field at position {position} has an empty name")]
    EmptyName {
        /// 1-based declared position
        position: usize,
    },

    /// Two fields share a name, ignoring case
    #[error(
        "Duplicate field name '{name}' at position {position} (first declared at position {first})"
    )]
    DuplicateField {
        /// Name of the shadowed field
        name: String,
        /// 1-based position of the shadowed field
        position: usize,
        /// 1-based position of the field that wins alignment
        first: usize,
    },
}
