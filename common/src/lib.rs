//! Shared primitives for the Mambu client workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations, status codes, secrets
//! - **models**: Typed Records and request bodies
//! - **mambu-client**: URL building, dispatch and resource clients
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod http_status;
pub mod redacted_secret;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;

#[cfg(test)]
mod tests;
