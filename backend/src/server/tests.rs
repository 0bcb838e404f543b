//! Unit tests for bootstrap settings parsing and server configuration.

use super::*;
use mockable::MockEnv;
use rstest::rstest;
use serde_json::json;
use shared_config::validate_config;
use std::collections::HashMap;
use std::path::PathBuf;
use uuid::Uuid;

fn mock_env(vars: HashMap<String, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn empty_env() -> MockEnv {
    mock_env(HashMap::new())
}

#[derive(Debug)]
struct TempOverridesFile {
    path: PathBuf,
}

impl TempOverridesFile {
    fn new(content: &str) -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(format!("app-config-{}.json", Uuid::new_v4()));
        std::fs::write(&path, content)?;
        Ok(Self { path })
    }

    fn path_str(&self) -> &str {
        self.path
            .to_str()
            .expect("temporary path should be valid UTF-8")
    }
}

impl Drop for TempOverridesFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn valid_overrides_json() -> String {
    json!({
        "database": {
            "host": "db.internal",
            "port": 5432,
            "database": "app",
            "username": "app",
            "password": "s3cret"
        },
        "auth": {
            "jwtSecret": "rotated-signing-secret",
            "jwtExpiresIn": "24h",
            "bcryptRounds": 10,
            "sessionTimeout": 86400000
        }
    })
    .to_string()
}

#[rstest]
fn listener_defaults_apply_when_env_is_unset() {
    let settings = listener_settings_from_env(&empty_env()).expect("settings should parse");
    assert_eq!(
        settings,
        ListenerSettings {
            host: "localhost".to_owned(),
            port: 3000,
        }
    );
}

#[rstest]
fn listener_honours_explicit_host_and_port() {
    let env = mock_env(HashMap::from([
        (HOST_ENV.to_owned(), "0.0.0.0".to_owned()),
        (PORT_ENV.to_owned(), "8080".to_owned()),
    ]));
    let settings = listener_settings_from_env(&env).expect("settings should parse");
    assert_eq!(settings.host, "0.0.0.0");
    assert_eq!(settings.port, 8080);
}

#[rstest]
#[case("not-a-port")]
#[case("70000")]
#[case("")]
fn listener_rejects_unparseable_port(#[case] value: &str) {
    let env = mock_env(HashMap::from([(PORT_ENV.to_owned(), value.to_owned())]));
    let result = listener_settings_from_env(&env);
    assert!(matches!(
        result,
        Err(BootstrapError::InvalidPort { value: rejected, .. }) if rejected == value
    ));
}

#[rstest]
fn no_overrides_env_yields_none() {
    let overrides = load_config_overrides(&empty_env()).expect("loading should succeed");
    assert!(overrides.is_none());
}

#[rstest]
fn overrides_file_loads_and_validates() {
    let file = TempOverridesFile::new(&valid_overrides_json()).expect("write overrides file");
    let env = mock_env(HashMap::from([(
        APP_CONFIG_FILE_ENV.to_owned(),
        file.path_str().to_owned(),
    )]));

    let overrides = load_config_overrides(&env)
        .expect("loading should succeed")
        .expect("overrides should be present");
    let config = validate_config(overrides).expect("overrides should validate");
    assert_eq!(config.database.host, "db.internal");
    assert_eq!(config.auth.jwt_secret, "rotated-signing-secret");
}

#[rstest]
fn missing_overrides_file_is_an_error() {
    let env = mock_env(HashMap::from([(
        APP_CONFIG_FILE_ENV.to_owned(),
        "/nonexistent/app-config.json".to_owned(),
    )]));
    let result = load_config_overrides(&env);
    assert!(matches!(result, Err(BootstrapError::OverridesRead { .. })));
}

#[rstest]
fn malformed_overrides_file_is_an_error() {
    let file = TempOverridesFile::new("{ not json").expect("write overrides file");
    let env = mock_env(HashMap::from([(
        APP_CONFIG_FILE_ENV.to_owned(),
        file.path_str().to_owned(),
    )]));
    let result = load_config_overrides(&env);
    assert!(matches!(result, Err(BootstrapError::OverridesParse { .. })));
}

#[rstest]
fn server_config_carries_listener_and_optional_app_config() {
    let listener = ListenerSettings {
        host: "localhost".to_owned(),
        port: 3000,
    };
    let config = ServerConfig::new(listener.clone());
    assert_eq!(config.listener(), &listener);
    assert!(config.app_config.is_none());

    let overrides = serde_json::from_str(&valid_overrides_json()).expect("parse overrides");
    let app_config = validate_config(overrides).expect("overrides should validate");
    let config = config.with_app_config(app_config.clone());
    assert_eq!(config.app_config, Some(app_config));
}

#[cfg(feature = "metrics")]
#[test]
fn make_metrics_builds_the_middleware() {
    let _metrics = make_metrics();
}
