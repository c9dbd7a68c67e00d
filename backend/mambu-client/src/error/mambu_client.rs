//! Errors raised by the dispatcher and resource clients.
//!
//! Two families:
//! - pre-flight rejections (`Model`, `UnknownEntity`, `InvalidDate`), raised
//!   before any network I/O
//! - post-flight failures: `Remote` carries the platform's own diagnostic;
//!   `Http`/`Json`/`UrlParse` pass transport and parse failures through
//!
//! Nothing here is retried.

use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum MambuClientError {
    /// Non-success response from the lending platform.
    #[error("Remote API Error: {message} {location}")]
    Remote {
        message: String,
        http_status: HttpStatusCode,
        return_code: i64,
        return_status: String,
        error_source: Option<String>,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Unknown Entity Error: '{entity}' is not one of {allowed:?} {location}")]
    UnknownEntity {
        entity: String,
        allowed: &'static [&'static str],
        location: ErrorLocation,
    },

    #[error("Invalid Date Error: cannot read '{value}' as a date {location}")]
    InvalidDate {
        value: String,
        location: ErrorLocation,
    },

    #[error("Missing Response Field Error: '{field}' {location}")]
    MissingResponseField {
        field: String,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Task Error: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },
}

impl MambuClientError {
    /// The HTTP status of a remote failure.
    pub fn http_status(&self) -> Option<HttpStatusCode> {
        match self {
            MambuClientError::Remote { http_status, .. } => Some(*http_status),
            _ => None,
        }
    }

    /// The platform's return code of a remote failure.
    pub fn return_code(&self) -> Option<i64> {
        match self {
            MambuClientError::Remote { return_code, .. } => Some(*return_code),
            _ => None,
        }
    }

    #[track_caller]
    pub fn missing_response_field(field: impl Into<String>) -> Self {
        MambuClientError::MissingResponseField {
            field: field.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for MambuClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        MambuClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for MambuClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        MambuClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for MambuClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        MambuClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tokio::task::JoinError> for MambuClientError {
    #[track_caller]
    fn from(error: tokio::task::JoinError) -> Self {
        MambuClientError::Task {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
