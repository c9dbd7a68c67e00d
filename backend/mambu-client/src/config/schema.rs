use crate::error::config::ConfigError;

use common::ErrorLocation;
use models::{RecordKind, SchemaRegistry};

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

const SCHEMA_FILE_NAME: &str = "schema.toml";

// ============================================
// SCHEMA CONFIG STRUCTS
// ============================================

/// Field vocabulary overrides, keyed by record kind name.
///
/// ```toml
/// [loan_transaction]
/// fields = ["type", "amount", "date", "method", "notes", "bookingDate"]
/// ```
///
/// Kinds not listed keep their built-in vocabulary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SchemaConfig {
    pub kinds: BTreeMap<String, KindFields>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KindFields {
    pub fields: Vec<String>,
}

// ============================================
// IMPLEMENTATION
// ============================================

impl SchemaConfig {
    /// Load schema.toml from resource directory.
    ///
    /// Tries, in order:
    /// 1. {resource_dir}/config/schema.toml
    /// 2. {resource_dir}/schema.toml
    /// 3. Falls back to the built-in vocabularies
    ///
    /// A file that exists but cannot be parsed or validated is an error;
    /// silently widening or narrowing a vocabulary is worse than failing.
    pub fn load(resource_dir: &Path) -> Result<SchemaRegistry, ConfigError> {
        let paths = [
            resource_dir.join("config").join(SCHEMA_FILE_NAME),
            resource_dir.join(SCHEMA_FILE_NAME),
        ];

        for path in &paths {
            if path.exists() {
                let registry = Self::load_from_path(path)?.into_registry()?;
                info!("Schema overrides loaded from {}", path.display());
                return Ok(registry);
            }
        }

        info!("No schema.toml found in resource dir, using built-in schemas");
        Ok(SchemaRegistry::builtin())
    }

    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: SchemaConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Every key must name a record kind and list at least one field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, kind_fields) in &self.kinds {
            if name.parse::<RecordKind>().is_err() {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Unknown record kind '{name}'"),
                });
            }

            if kind_fields.fields.is_empty() {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Record kind '{name}' has an empty field list"),
                });
            }

            if kind_fields.fields.iter().any(|field| field.trim().is_empty()) {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Record kind '{name}' has a blank field name"),
                });
            }
        }

        Ok(())
    }

    /// Built-in registry with this config's vocabularies layered on top.
    pub fn into_registry(self) -> Result<SchemaRegistry, ConfigError> {
        self.validate()?;

        let mut registry = SchemaRegistry::builtin();
        for (name, kind_fields) in self.kinds {
            let kind = name.parse::<RecordKind>().map_err(|e| {
                warn!("Schema override rejected: {e}");
                ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: e.to_string(),
                }
            })?;
            registry = registry.with_fields(kind, kind_fields.fields);
        }
        Ok(registry)
    }
}
