//! Schema definition: an ordered list of declared columns.

use crate::{ColumnField, Field, names_match};
use serde::{Deserialize, Serialize};

/// Title and description given to the placeholder returned for documents
/// that could not be read.
pub const MALFORMED: &str = "malformed";

/// An ordered declaration of expected columns.
///
/// Declaration order is the canonical column order. Names are usually unique
/// but this is not enforced; when two fields share a name (ignoring case) the
/// first one declared wins during alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema<F = Field> {
    /// Where the schema was loaded from, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Declared columns in canonical order
    #[serde(default = "Vec::new")]
    pub fields: Vec<F>,

    /// Optional title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl<F> Schema<F> {
    /// Creates a schema from its fields, without metadata.
    pub fn new(fields: Vec<F>) -> Self {
        Self {
            uri: None,
            fields,
            title: None,
            description: None,
        }
    }

    /// Placeholder schema with no fields, used when a document is unreadable.
    pub fn malformed() -> Self {
        Self {
            uri: None,
            fields: Vec::new(),
            title: Some(MALFORMED.to_string()),
            description: Some(MALFORMED.to_string()),
        }
    }

    /// Declared fields in canonical order.
    pub fn fields(&self) -> &[F] {
        &self.fields
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true for the placeholder built by [`Schema::malformed`].
    pub fn is_malformed(&self) -> bool {
        self.fields.is_empty()
            && self.title.as_deref() == Some(MALFORMED)
            && self.description.as_deref() == Some(MALFORMED)
    }
}

impl<F: ColumnField> Schema<F> {
    /// Declared index of the first field whose name matches `name`,
    /// ignoring case.
    ///
    /// This is a linear scan; header widths are small enough that a lookup
    /// table is not worth maintaining.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| names_match(field.name(), name))
    }

    /// First field whose name matches `name`, ignoring case.
    pub fn field_named(&self, name: &str) -> Option<&F> {
        self.position_of(name).map(|index| &self.fields[index])
    }
}

impl<F> Default for Schema<F> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
