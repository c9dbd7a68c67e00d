//! The Typed Record: a named-field value object with a closed vocabulary.

pub mod body;
pub(crate) mod builtin;
pub mod kind;
pub mod schema;

use body::Body;
use kind::RecordKind;
use schema::FieldSchema;

use crate::ModelError;

use common::ErrorLocation;

use std::collections::BTreeMap;
use std::panic::Location;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// A validated bag of named fields for one entity kind.
///
/// Every key is checked against the kind's [`FieldSchema`] when it is
/// assigned. Values are stored as given; no type checks are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Arc<FieldSchema>,
    fields: BTreeMap<String, Body>,
}

impl Record {
    pub fn new(schema: Arc<FieldSchema>) -> Self {
        Self {
            schema,
            fields: BTreeMap::new(),
        }
    }

    /// Build a record by assigning each `(name, value)` pair in turn.
    #[track_caller]
    pub fn from_fields<I, K, V>(schema: Arc<FieldSchema>, fields: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Body>,
    {
        let mut record = Self::new(schema);
        for (field, value) in fields {
            record.set(field, value)?;
        }
        Ok(record)
    }

    pub fn kind(&self) -> RecordKind {
        self.schema.kind()
    }

    /// Pass the record through when it is of `expected` kind.
    #[track_caller]
    pub fn expect_kind(self, expected: RecordKind) -> Result<Self, ModelError> {
        if self.kind() != expected {
            return Err(ModelError::KindMismatch {
                expected,
                actual: self.kind(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(self)
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Assign `value` to `field`.
    ///
    /// # Errors
    /// [`ModelError::InvalidField`] when `field` is not in this kind's vocabulary.
    /// The record is left unchanged.
    #[track_caller]
    pub fn set(
        &mut self,
        field: impl Into<String>,
        value: impl Into<Body>,
    ) -> Result<&mut Self, ModelError> {
        let field = field.into();
        if !self.schema.allows(&field) {
            return Err(ModelError::InvalidField {
                kind: self.kind(),
                field,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.fields.insert(field, value.into());
        Ok(self)
    }

    /// Builder form of [`Record::set`].
    #[track_caller]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Body>) -> Result<Self, ModelError> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Read a field. Unset fields have no default.
    #[track_caller]
    pub fn get(&self, field: &str) -> Result<&Body, ModelError> {
        self.fields.get(field).ok_or_else(|| ModelError::MissingField {
            kind: self.kind(),
            field: field.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<Body> {
        self.fields.remove(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Body)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flatten into query-string pairs for filter parameters.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_query_value()))
            .collect()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(&self.fields)
    }
}
