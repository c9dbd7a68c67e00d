pub mod schema;

pub use schema::SchemaConfig;

use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedSecret};

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "mambu.toml";
const CONFIG_DIR_NAME: &str = "mambu";
const API_PATH: &str = "api/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_DOMAIN: &str = "MAMBU_DOMAIN";
pub const ENV_USERNAME: &str = "MAMBU_USERNAME";
pub const ENV_PASSWORD: &str = "MAMBU_PASSWORD";
pub const ENV_ENDPOINT: &str = "MAMBU_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "MAMBU_TIMEOUT_SECS";

// ============================================
// CONFIG STRUCT
// ============================================

/// Connection settings for one platform tenant.
///
/// Requests go to `https://{domain}/api/` unless `endpoint` overrides the
/// whole base URL.
#[derive(Debug, Clone, Deserialize)]
pub struct MambuConfig {
    pub domain: String,
    pub username: String,
    pub password: RedactedSecret,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

// ============================================
// IMPLEMENTATION
// ============================================

impl MambuConfig {
    pub fn new(
        domain: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            username: username.into(),
            password: RedactedSecret::new(password),
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Base URL every resource path is joined onto. Always ends in `/`.
    pub fn base_url(&self) -> String {
        let base = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}/{API_PATH}", self.domain),
        };
        if base.ends_with('/') {
            base
        } else {
            format!("{base}/")
        }
    }

    /// Load config from `{config_dir}/mambu.toml`.
    ///
    /// Unlike UI preferences there is no sensible default for credentials, so
    /// a missing file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, not valid
    /// TOML, or fails [`MambuConfig::validate`].
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file {}: {e}", config_path.display());
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: MambuConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML: {e}");
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Build config from `MAMBU_*` environment variables.
    ///
    /// A `.env` file in the working directory (or a parent) is loaded first
    /// when present. Variables already set in the environment win.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Failed to load .env file: {e}"),
        }

        let timeout_secs = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::EnvError {
                location: ErrorLocation::from(Location::caller()),
                variable: ENV_TIMEOUT_SECS.to_string(),
                reason: format!("'{raw}' is not a whole number of seconds"),
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            domain: required_env(ENV_DOMAIN)?,
            username: required_env(ENV_USERNAME)?,
            password: RedactedSecret::new(required_env(ENV_PASSWORD)?),
            endpoint: std::env::var(ENV_ENDPOINT).ok().filter(|e| !e.is_empty()),
            timeout_secs,
        };

        config.validate()?;

        info!("Config loaded from environment for {}", config.domain);
        Ok(config)
    }

    /// Per-user config directory, e.g. `~/.config/mambu`.
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or_else(|| ConfigError::DirectoryNotFound {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domain.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "domain cannot be empty".to_string(),
            });
        }

        if self.domain.contains("://") || self.domain.contains('/') {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("domain must be a bare host name: {}", self.domain),
            });
        }

        if self.username.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "username cannot be empty".to_string(),
            });
        }

        if self.password.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "password cannot be empty".to_string(),
            });
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "timeout_secs must be at least 1".to_string(),
            });
        }

        if let Some(ref endpoint) = self.endpoint
            && !endpoint.starts_with("http://")
            && !endpoint.starts_with("https://")
        {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid endpoint URL format: {endpoint}"),
            });
        }

        Ok(())
    }
}

fn required_env(variable: &str) -> Result<String, ConfigError> {
    std::env::var(variable).map_err(|e| ConfigError::EnvError {
        location: ErrorLocation::from(Location::caller()),
        variable: variable.to_string(),
        reason: e.to_string(),
    })
}
