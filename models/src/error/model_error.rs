use crate::RecordKind;

use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Local validation failures raised before any request is sent.
#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Invalid Field Error: '{field}' is not an allowed {kind} field {location}")]
    InvalidField {
        kind: RecordKind,
        field: String,
        location: ErrorLocation,
    },

    #[error("Missing Field Error: '{field}' is not set on this {kind} record {location}")]
    MissingField {
        kind: RecordKind,
        field: String,
        location: ErrorLocation,
    },

    #[error("Kind Mismatch Error: expected a {expected} record, got {actual} {location}")]
    KindMismatch {
        expected: RecordKind,
        actual: RecordKind,
        location: ErrorLocation,
    },

    #[error("Unknown Record Kind Error: {name} {location}")]
    UnknownKind {
        name: String,
        location: ErrorLocation,
    },
}
