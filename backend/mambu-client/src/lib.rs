//! Async client for the Mambu lending platform REST API.
//!
//! [`MambuApi`] bundles one client per remote resource (clients, loans, loan
//! transactions, savings, savings transactions, attachments, custom fields,
//! loan products). Request payloads are [`models::Record`]s checked against a
//! [`models::SchemaRegistry`]; every call goes through one [`Dispatcher`]
//! which signs it with basic auth and turns non-success responses into
//! [`MambuClientError::Remote`].

pub mod config;
pub mod dates;
pub mod dispatcher;
pub mod error;
pub mod logger;
pub mod mambu_api;
pub mod resources;
pub mod url_builder;

pub use config::{MambuConfig, SchemaConfig};
pub use dates::DateLike;
pub use dispatcher::{Dispatcher, HttpMethod};
pub use error::{ConfigError, CoreError, LoggerError, MambuClientError};
pub use mambu_api::MambuApi;

#[cfg(test)]
mod tests;

pub const MAMBU_CLIENT_NAME: &str = env!("CARGO_PKG_NAME");
pub const MAMBU_CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const MAMBU_CLIENT_USER_AGENT: &str =
    const_format::concatcp!(MAMBU_CLIENT_NAME, "/", MAMBU_CLIENT_VERSION);
