//! Shared setup for tests that run the client against a wiremock server.

use mambu_client::{MambuApi, MambuConfig};

use wiremock::MockServer;
use wiremock::matchers::{BasicAuthMatcher, basic_auth};

pub const TEST_DOMAIN: &str = "acme.sandbox.mambu.com";
pub const TEST_USERNAME: &str = "api-user";
pub const TEST_PASSWORD: &str = "api-pass";

/// Config pointing at `{server}/api/`.
pub fn test_config(server: &MockServer) -> MambuConfig {
    MambuConfig::new(TEST_DOMAIN, TEST_USERNAME, TEST_PASSWORD)
        .with_endpoint(format!("{}/api/", server.uri()))
        .with_timeout_secs(5)
}

/// Facade with the built-in schemas, wired to `server`.
pub fn test_api(server: &MockServer) -> MambuApi {
    MambuApi::with_builtin_schema(&test_config(server)).expect("Failed to build test facade")
}

/// Matches the credentials every request must carry.
pub fn test_auth() -> BasicAuthMatcher {
    basic_auth(TEST_USERNAME, TEST_PASSWORD)
}
