// Unit tests for connection and schema configuration loading

use crate::config::{
    ENV_DOMAIN, ENV_ENDPOINT, ENV_PASSWORD, ENV_TIMEOUT_SECS, ENV_USERNAME, MambuConfig,
    SchemaConfig,
};
use crate::error::ConfigError;

use models::RecordKind;

use serial_test::serial;
use tempfile::TempDir;

const ALL_ENV: [&str; 5] = [
    ENV_DOMAIN,
    ENV_USERNAME,
    ENV_PASSWORD,
    ENV_ENDPOINT,
    ENV_TIMEOUT_SECS,
];

fn clear_env() {
    for variable in ALL_ENV {
        // SAFETY: env-touching tests are #[serial]
        unsafe { std::env::remove_var(variable) };
    }
}

fn set_env(variable: &str, value: &str) {
    // SAFETY: env-touching tests are #[serial]
    unsafe { std::env::set_var(variable, value) };
}

#[test]
fn given_domain_when_base_url_then_https_api_root() {
    let config = MambuConfig::new("acme.mambu.com", "api", "secret");

    assert_eq!(config.base_url(), "https://acme.mambu.com/api/");
}

#[test]
fn given_endpoint_override_when_base_url_then_override_with_trailing_slash() {
    let config =
        MambuConfig::new("acme.mambu.com", "api", "secret").with_endpoint("http://127.0.0.1:9000");

    assert_eq!(config.base_url(), "http://127.0.0.1:9000/");
}

/// **VALUE**: The password never shows up in Debug output.
///
/// **WHY THIS MATTERS**: Configs get logged with `{:?}` when something goes
/// wrong at startup.
#[test]
fn given_config_when_debug_formatted_then_password_redacted() {
    let config = MambuConfig::new("acme.mambu.com", "api", "hunter2");

    let debug = format!("{config:?}");

    assert!(!debug.contains("hunter2"), "{debug}");
    assert!(debug.contains("REDACTED"), "{debug}");
}

#[test]
fn given_valid_toml_when_load_then_fields_and_defaults_populated() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("mambu.toml"),
        r#"
domain = "acme.sandbox.mambu.com"
username = "api-user"
password = "s3cret"
"#,
    )
    .unwrap();

    let config = MambuConfig::load(dir.path()).unwrap();

    assert_eq!(config.domain, "acme.sandbox.mambu.com");
    assert_eq!(config.username, "api-user");
    assert_eq!(config.password.expose(), "s3cret");
    assert_eq!(config.endpoint, None);
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn given_missing_file_when_load_then_read_error() {
    let dir = TempDir::new().unwrap();

    let result = MambuConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn given_malformed_toml_when_load_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("mambu.toml"), "domain = ").unwrap();

    let result = MambuConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_invalid_values_when_validate_then_validation_error() {
    let base = MambuConfig::new("acme.mambu.com", "api", "secret");
    let invalid = [
        MambuConfig::new("", "api", "secret"),
        MambuConfig::new("https://acme.mambu.com", "api", "secret"),
        MambuConfig::new("acme.mambu.com", "", "secret"),
        MambuConfig::new("acme.mambu.com", "api", ""),
        base.clone().with_timeout_secs(0),
        base.clone().with_endpoint("ftp://acme"),
    ];

    assert!(base.validate().is_ok());
    for config in invalid {
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "{config:?}"
        );
    }
}

#[test]
#[serial]
fn given_complete_environment_when_from_env_then_config_built() {
    clear_env();
    set_env(ENV_DOMAIN, "acme.mambu.com");
    set_env(ENV_USERNAME, "env-user");
    set_env(ENV_PASSWORD, "env-pass");
    set_env(ENV_TIMEOUT_SECS, "5");

    let config = MambuConfig::from_env().unwrap();

    assert_eq!(config.domain, "acme.mambu.com");
    assert_eq!(config.username, "env-user");
    assert_eq!(config.password.expose(), "env-pass");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.endpoint, None);
    clear_env();
}

#[test]
#[serial]
fn given_missing_password_when_from_env_then_env_error_names_variable() {
    clear_env();
    set_env(ENV_DOMAIN, "acme.mambu.com");
    set_env(ENV_USERNAME, "env-user");

    let result = MambuConfig::from_env();

    match result {
        Err(ConfigError::EnvError { variable, .. }) => assert_eq!(variable, ENV_PASSWORD),
        other => panic!("expected EnvError, got {other:?}"),
    }
    clear_env();
}

#[test]
#[serial]
fn given_non_numeric_timeout_when_from_env_then_env_error() {
    clear_env();
    set_env(ENV_DOMAIN, "acme.mambu.com");
    set_env(ENV_USERNAME, "env-user");
    set_env(ENV_PASSWORD, "env-pass");
    set_env(ENV_TIMEOUT_SECS, "soon");

    let result = MambuConfig::from_env();

    assert!(matches!(result, Err(ConfigError::EnvError { .. })));
    clear_env();
}

#[test]
fn given_no_schema_file_when_schema_load_then_builtin_registry() {
    let dir = TempDir::new().unwrap();

    let registry = SchemaConfig::load(dir.path()).unwrap();

    assert!(registry.schema(RecordKind::Client).allows("firstName"));
}

/// **VALUE**: A schema file replaces only the kinds it names.
///
/// **WHY THIS MATTERS**: Tenants add platform fields over time. Overriding
/// one vocabulary must not wipe the others.
#[test]
fn given_override_in_config_subdir_when_schema_load_then_only_that_kind_changes() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("config")).unwrap();
    std::fs::write(
        dir.path().join("config").join("schema.toml"),
        r#"
[loan_transaction]
fields = ["type", "amount", "bookingDate"]
"#,
    )
    .unwrap();

    let registry = SchemaConfig::load(dir.path()).unwrap();

    let transaction = registry.schema(RecordKind::LoanTransaction);
    assert!(transaction.allows("bookingDate"));
    assert!(!transaction.allows("notes"));
    assert_eq!(transaction.len(), 3);
    assert!(registry.schema(RecordKind::Client).allows("firstName"));
}

#[test]
fn given_unknown_kind_or_empty_list_when_schema_load_then_validation_error() {
    for contents in [
        "[widget]\nfields = [\"a\"]\n",
        "[client]\nfields = []\n",
    ] {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("schema.toml"), contents).unwrap();

        let result = SchemaConfig::load(dir.path());

        assert!(
            matches!(result, Err(ConfigError::ValidationError { .. })),
            "{contents}"
        );
    }
}
