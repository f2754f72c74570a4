//! Tests for config functionality.

use crate::config::{API_BASE_URL_ENV, Config};
use serial_test::serial;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.api_base_url, "http://localhost:5000/api");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.token_env, "BDM_TOKEN");
    assert_eq!(config.download_dir, ".");
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
api_base_url: https://docs.example.com/api
download_dir: out
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.api_base_url, "https://docs.example.com/api");
    assert_eq!(config.download_dir, "out");
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
timeout_secs: 5
theme: dark
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.timeout_secs, 5);
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let err = Config::from_yaml("timeout_secs: [not a number").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validation_rejects_bad_values() {
    let err = Config::from_yaml("timeout_secs: 0").unwrap_err();
    assert!(err.to_string().contains("timeout_secs must be greater than 0"));

    let err = Config::from_yaml("api_base_url: localhost:5000").unwrap_err();
    assert!(err.to_string().contains("api_base_url must start with"));

    let err = Config::from_yaml("token_env: ''").unwrap_err();
    assert!(err.to_string().contains("token_env must be non-empty"));
}

#[test]
fn test_yaml_roundtrip() {
    let config = Config {
        timeout_secs: 90,
        ..Config::default()
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
#[serial]
fn test_resolve_explicit_file_with_env_override() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bdm.yaml");
    std::fs::write(&path, "api_base_url: http://file/api\ntimeout_secs: 12\n").unwrap();

    // SAFETY: serialized with other env-mutating tests.
    unsafe { std::env::remove_var(API_BASE_URL_ENV) };
    let config = Config::resolve(Some(path.as_path())).unwrap();
    assert_eq!(config.api_base_url, "http://file/api");

    unsafe { std::env::set_var(API_BASE_URL_ENV, "https://env.example.com/api") };
    let config = Config::resolve(Some(path.as_path())).unwrap();
    unsafe { std::env::remove_var(API_BASE_URL_ENV) };

    assert_eq!(config.api_base_url, "https://env.example.com/api");
    assert_eq!(config.timeout_secs, 12);
}

#[test]
#[serial]
fn test_api_config_reads_token_env() {
    let config = Config {
        token_env: "BDM_TEST_TOKEN_VAR".to_string(),
        timeout_secs: 7,
        ..Config::default()
    };

    unsafe { std::env::set_var("BDM_TEST_TOKEN_VAR", "secret") };
    let api = config.api_config();
    unsafe { std::env::remove_var("BDM_TEST_TOKEN_VAR") };

    assert_eq!(api.token.as_deref(), Some("secret"));
    assert_eq!(api.timeout, Duration::from_secs(7));
    assert_eq!(api.base_url, "http://localhost:5000/api");

    assert_eq!(config.api_config().token, None);
}
