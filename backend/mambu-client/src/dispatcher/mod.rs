//! The single point of contact with the lending platform.
//!
//! # Design
//! One `call` sends exactly one authenticated request and classifies the
//! response. Bodies are serialized from [`Body`] (records, dates and nested
//! collections included). There is no retry, backoff or caching.

pub mod response;

pub use response::{FALLBACK_RETURN_CODE, FALLBACK_RETURN_STATUS, classify_response};

use crate::MAMBU_CLIENT_USER_AGENT;
use crate::config::MambuConfig;
use crate::error::MambuClientError;

use common::RedactedSecret;
use models::Body;

use std::fmt;
use std::time::Duration;

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// The HTTP verbs the platform's API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// Authenticated request sender bound to one platform endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    base_url: Url,
    client: Client,
    username: String,
    password: RedactedSecret,
}

impl Dispatcher {
    pub fn new(config: &MambuConfig) -> Result<Self, MambuClientError> {
        let base_url = Url::parse(&config.base_url())?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(MAMBU_CLIENT_USER_AGENT)
            .build()?;

        Ok(Self {
            base_url,
            client,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a resource path against the base endpoint.
    pub fn url_for(&self, path: &str) -> Result<Url, MambuClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// Send one request and classify the response.
    ///
    /// # Errors
    /// - [`MambuClientError::Remote`] for any status other than 200/201
    /// - [`MambuClientError::Http`] for transport failures
    /// - [`MambuClientError::Json`] when a success body is not JSON
    pub async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&[(String, String)]>,
        body: Option<&Body>,
    ) -> Result<Value, MambuClientError> {
        let mut url = self.url_for(path)?;
        if let Some(query) = query.filter(|pairs| !pairs.is_empty()) {
            url.query_pairs_mut().extend_pairs(query);
        }
        debug!("{method} {url}");

        let mut request = self
            .client
            .request(method.into(), url)
            .basic_auth(&self.username, Some(self.password.expose()));

        if let Some(body) = body {
            let encoded = serde_json::to_string(body)?;
            debug!("Body: {encoded}");
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(encoded);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!("{method} {path} -> HTTP {status}");

        classify_response(status, &text)
    }

    pub async fn get(
        &self,
        path: &str,
        query: Option<&[(String, String)]>,
    ) -> Result<Value, MambuClientError> {
        self.call(HttpMethod::Get, path, query, None).await
    }

    pub async fn post(&self, path: &str, body: &Body) -> Result<Value, MambuClientError> {
        self.call(HttpMethod::Post, path, None, Some(body)).await
    }

    pub async fn patch(&self, path: &str, body: &Body) -> Result<Value, MambuClientError> {
        self.call(HttpMethod::Patch, path, None, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, MambuClientError> {
        self.call(HttpMethod::Delete, path, None, None).await
    }
}
