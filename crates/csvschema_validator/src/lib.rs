//! # CSV Schema Validator
//!
//! Validation engine for tabular data. Given a [`Schema`], this crate answers
//! two questions:
//!
//! - does an observed header row correspond to the declared fields, allowing
//!   for reordering, missing or extra columns, and case drift in names;
//! - does each data row satisfy the per-field constraints once its columns
//!   are aligned to the schema.
//!
//! Problems are never returned as Rust errors. They are recorded as
//! [`ValidationMessage`]s, split into errors (which make a call invalid) and
//! warnings (which do not).
//!
//! ## Example
//!
//! ```rust
//! use csvschema_core::{Field, FieldBuilder, MessageKind, Schema};
//! use csvschema_validator::ValidationSession;
//!
//! let schema = Schema::new(vec![
//!     FieldBuilder::new("id").required(true).build(),
//!     Field::new("name"),
//! ]);
//!
//! let mut session = ValidationSession::new(&schema);
//! assert!(session.validate_header(&["id", "nickname"]));
//! assert_eq!(session.warnings()[0].kind, MessageKind::ExtraColumn);
//!
//! assert!(!session.validate_row(&[Some(""), Some("Ada")], Some(2)));
//! assert_eq!(session.errors()[0].kind, MessageKind::MissingValue);
//! ```
//!
//! [`Schema`]: csvschema_core::Schema
//! [`ValidationMessage`]: csvschema_core::ValidationMessage

mod definition;
mod engine;
mod header;
mod row;
mod session;

pub use definition::*;
pub use engine::*;
pub use session::*;
