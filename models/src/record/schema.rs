use crate::record::builtin;
use crate::{ModelError, Record, RecordKind, Body};

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use once_cell::sync::Lazy;

static BUILTIN_REGISTRY: Lazy<SchemaRegistry> = Lazy::new(|| SchemaRegistry {
    schemas: RecordKind::ALL
        .iter()
        .map(|kind| {
            (
                *kind,
                Arc::new(FieldSchema::new(*kind, builtin::fields_for(*kind).iter().copied())),
            )
        })
        .collect(),
});

/// The allowed field names for one record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    kind: RecordKind,
    fields: BTreeSet<String>,
}

impl FieldSchema {
    pub fn new<I, S>(kind: RecordKind, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn allows(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Field vocabularies for every [`RecordKind`].
///
/// Built once (from the built-in lists, optionally overridden from
/// configuration) and shared read-only by every client of one facade.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<RecordKind, Arc<FieldSchema>>,
}

impl SchemaRegistry {
    /// Registry with the platform's documented field names.
    pub fn builtin() -> Self {
        BUILTIN_REGISTRY.clone()
    }

    /// Replace the vocabulary for `kind`.
    pub fn with_fields<I, S>(mut self, kind: RecordKind, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemas
            .insert(kind, Arc::new(FieldSchema::new(kind, fields)));
        self
    }

    pub fn schema(&self, kind: RecordKind) -> Arc<FieldSchema> {
        match self.schemas.get(&kind) {
            Some(schema) => Arc::clone(schema),
            None => Arc::new(FieldSchema::new(
                kind,
                builtin::fields_for(kind).iter().copied(),
            )),
        }
    }

    /// An empty record of `kind`.
    pub fn record(&self, kind: RecordKind) -> Record {
        Record::new(self.schema(kind))
    }

    /// A record of `kind` populated from `fields`, rejecting unknown names.
    #[track_caller]
    pub fn record_from<I, K, V>(&self, kind: RecordKind, fields: I) -> Result<Record, ModelError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Body>,
    {
        Record::from_fields(self.schema(kind), fields)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
