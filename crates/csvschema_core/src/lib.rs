//! # CSV Schema Core
//!
//! Core data structures for validating tabular data against a declarative
//! schema.
//!
//! A schema is a named, ordered list of column definitions. Header rows are
//! aligned to it by case-insensitive name and data rows are checked value by
//! value once aligned. The engine that performs those checks lives in the
//! `csvschema_validator` crate; this crate holds the types both sides share.
//!
//! ## Key Concepts
//!
//! - **Schema**: ordered declaration of expected columns
//! - **Field**: one column's name and constraints, validating single values
//!   through the [`ColumnField`] trait
//! - **ErrorCollector**: the errors and warnings gathered by one validation call
//! - **ValidationMessage**: a structured record (kind, category, row, args)
//!
//! ## Example
//!
//! ```rust
//! use csvschema_core::{ColumnField, Field, Schema};
//!
//! let schema = Schema::new(vec![Field::new("id"), Field::new("name")]);
//!
//! assert_eq!(schema.position_of("NAME"), Some(1));
//! assert!(schema.field_named("email").is_none());
//! assert!(!schema.fields()[0].is_required());
//! ```

pub mod builder;
pub mod collector;
pub mod error;
pub mod field;
pub mod message;
pub mod options;
pub mod report;
pub mod schema;

pub use builder::*;
pub use collector::*;
pub use error::*;
pub use field::*;
pub use message::*;
pub use options::*;
pub use report::*;
pub use schema::*;
