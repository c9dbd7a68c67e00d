//! Response classification.
//!
//! 200 and 201 decode to JSON verbatim. Every other status becomes
//! [`MambuClientError::Remote`], carrying `returnCode` / `returnStatus` /
//! `errorSource` from the body when the body has them, or a fallback built
//! from the raw text when it does not.

use crate::error::MambuClientError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use log::warn;
use serde::Deserialize;
use serde_json::Value;

/// Return code used when an error body carries no usable `returnCode`.
pub const FALLBACK_RETURN_CODE: i64 = -1;

/// Return status paired with [`FALLBACK_RETURN_CODE`].
pub const FALLBACK_RETURN_STATUS: &str = "UNPARSEABLE_ERROR_BODY";

const REMOTE_ERROR_MESSAGE: &str = "Error performing the request";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteErrorBody {
    return_code: i64,
    #[serde(default)]
    return_status: String,
    #[serde(default)]
    error_source: Option<Value>,
}

impl RemoteErrorBody {
    fn parse(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_else(|_| RemoteErrorBody {
            return_code: FALLBACK_RETURN_CODE,
            return_status: FALLBACK_RETURN_STATUS.to_string(),
            error_source: Some(Value::String(text.to_string())),
        })
    }
}

/// Decode a success body or build the remote error for a failure.
#[track_caller]
pub fn classify_response(status: u16, text: &str) -> Result<Value, MambuClientError> {
    let http_status = HttpStatusCode::from(status);
    if http_status.is_accepted() {
        return Ok(serde_json::from_str(text)?);
    }
    Err(remote_error(http_status, text))
}

#[track_caller]
fn remote_error(http_status: HttpStatusCode, text: &str) -> MambuClientError {
    let body = RemoteErrorBody::parse(text);
    let error_source = body.error_source.map(|source| match source {
        Value::String(source) => source,
        other => other.to_string(),
    });

    let mut message = format!(
        "{REMOTE_ERROR_MESSAGE}, code: {http_status}, return code: {}, return status: {}",
        body.return_code, body.return_status
    );
    if let Some(source) = &error_source {
        message.push_str(&format!(", source: {source}"));
    }
    warn!("{message}");

    MambuClientError::Remote {
        message,
        http_status,
        return_code: body.return_code,
        return_status: body.return_status,
        error_source,
        location: ErrorLocation::from(Location::caller()),
    }
}
