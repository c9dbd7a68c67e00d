//! Request data models for the Mambu client.
//!
//! This crate contains the Typed Record (a named-field bag whose keys are
//! checked against a per-kind vocabulary) and the recursive request `Body`
//! that wraps records, plain JSON, dates and nested collections.
//!
//! Field vocabularies come from a [`SchemaRegistry`], built once and injected
//! by the caller. The built-in registry mirrors the platform's documented
//! field names.

pub mod error;
pub mod record;

pub use error::model_error::ModelError;
pub use record::body::{Body, DATE_FORMAT, DATETIME_FORMAT};
pub use record::kind::RecordKind;
pub use record::schema::{FieldSchema, SchemaRegistry};
pub use record::Record;

#[cfg(test)]
mod tests;
