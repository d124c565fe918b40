//! Structured validation messages.
//!
//! Every outcome of header or row validation is recorded as a
//! [`ValidationMessage`]: a kind, a category, an optional row identifier and
//! an ordered list of arguments used to format the human-readable text.

use crate::Constraints;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of problem a message reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// A declared column is absent from the header, or has no value in a row
    MissingColumn,
    /// An observed column has no matching declared field
    ExtraColumn,
    /// An observed column matched a field declared at another position
    DifferentIndexHeader,
    /// A required field received an empty value
    MissingValue,
    /// Any other kind produced by a field collaborator
    Other(String),
}

impl MessageKind {
    /// Returns the snake_case token for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::MissingColumn => "missing_column",
            MessageKind::ExtraColumn => "extra_column",
            MessageKind::DifferentIndexHeader => "different_index_header",
            MessageKind::MissingValue => "missing_value",
            MessageKind::Other(kind) => kind,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The context a message was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Category {
    /// Raised while checking data against a schema
    Schema,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Schema => f.write_str("schema"),
        }
    }
}

/// A positional argument attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageArg {
    /// A column position (1-based for header messages)
    Position(usize),
    /// A column name or raw cell value
    Text(String),
}

impl From<usize> for MessageArg {
    fn from(position: usize) -> Self {
        MessageArg::Position(position)
    }
}

impl From<&str> for MessageArg {
    fn from(text: &str) -> Self {
        MessageArg::Text(text.to_string())
    }
}

impl From<String> for MessageArg {
    fn from(text: String) -> Self {
        MessageArg::Text(text)
    }
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageArg::Position(position) => write!(f, "{}", position),
            MessageArg::Text(text) => write!(f, "{:?}", text),
        }
    }
}

/// A single error or warning record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationMessage {
    /// What went wrong
    pub kind: MessageKind,

    /// Where it was raised
    pub category: Category,

    /// Row identifier supplied by the caller, if any
    pub row: Option<usize>,

    /// Ordered formatting arguments
    #[serde(default)]
    pub args: Vec<MessageArg>,

    /// Constraints that produced the message, for field-level records
    #[serde(default, skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,
}

impl ValidationMessage {
    /// Creates a message with no constraints attached.
    pub fn new(
        kind: MessageKind,
        category: Category,
        row: Option<usize>,
        args: Vec<MessageArg>,
    ) -> Self {
        Self {
            kind,
            category,
            row,
            args,
            constraints: Constraints::new(),
        }
    }

    /// Attaches the constraints that triggered this message.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind, self.category)?;
        if let Some(row) = self.row {
            write!(f, " row {}", row)?;
        }
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(|a| a.to_string()).collect();
            write!(f, ": {}", args.join(", "))?;
        }
        Ok(())
    }
}
