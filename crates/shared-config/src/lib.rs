//! Application configuration model, defaults, and startup validation.
//!
//! Callers supply a partial [`AppConfigOverrides`] value; [`validate_config`]
//! shallow-merges it over the compiled-in defaults and enforces the startup
//! invariants before the application may serve traffic. The merged
//! [`AppConfig`] is constructed once per process and never mutated afterwards.
//!
//! The merge is deliberately shallow: each top-level section supplied by the
//! caller replaces the default section wholesale. Nested fields are never
//! merged individually.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Placeholder signing secret published with the defaults.
///
/// Validation refuses to start the application while the secret still equals
/// this value.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key";

/// Deployment environment the application runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development.
    #[default]
    Development,
    /// Pre-production staging.
    Staging,
    /// Production.
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Staging => f.write_str("staging"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Minimum severity emitted by the application logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and above.
    Warn,
    /// Informational messages and above.
    #[default]
    Info,
    /// Debug detail and above.
    Debug,
}

impl LogLevel {
    /// Convert to the equivalent [`tracing::Level`].
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warn => f.write_str("warn"),
            Self::Info => f.write_str("info"),
            Self::Debug => f.write_str("debug"),
        }
    }
}

/// Connection settings for the relational database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database server hostname.
    pub host: String,
    /// Database server port.
    pub port: u16,
    /// Database name to connect to.
    pub database: String,
    /// Connection username.
    pub username: String,
    /// Connection password.
    pub password: String,
    /// Whether to negotiate TLS for the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,
}

/// Cross-origin resource sharing policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Origins allowed to call the API.
    pub origin: Vec<String>,
    /// Whether credentialed requests are accepted.
    pub credentials: bool,
}

/// Request rate limiting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct RateLimitConfig {
    /// Window length in milliseconds.
    pub window_ms: u64,
    /// Maximum requests allowed per client within the window.
    pub max: u32,
}

/// HTTP API surface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Port the API listens on.
    pub port: u16,
    /// Address the API binds to.
    pub host: String,
    /// CORS policy.
    pub cors: CorsConfig,
    /// Rate limiting policy.
    pub rate_limit: RateLimitConfig,
}

/// Authentication and session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Token signing secret. Must differ from [`DEFAULT_JWT_SECRET`].
    pub jwt_secret: String,
    /// Token lifetime as a duration string, e.g. `"24h"`.
    pub jwt_expires_in: String,
    /// Password hashing cost factor.
    pub bcrypt_rounds: u32,
    /// Idle session timeout in milliseconds.
    pub session_timeout: u64,
}

/// Fully validated application configuration.
///
/// Constructed once at startup by [`validate_config`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Deployment environment.
    pub environment: Environment,
    /// Logger severity floor.
    pub log_level: LogLevel,
    /// Database connection settings. Required; absence is fatal.
    pub database: DatabaseConfig,
    /// HTTP API settings.
    pub api: ApiConfig,
    /// Authentication settings.
    pub auth: AuthConfig,
}

/// Partial configuration supplied by the caller.
///
/// Any subset of the top-level sections may be present. A present section is
/// a complete value and replaces the corresponding default wholesale when
/// merged (see [`AppConfigOverrides::merged_with`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AppConfigOverrides {
    /// Deployment environment override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    /// Logger severity override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    /// Database connection settings. There is no default; omitting this
    /// section fails validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
    /// HTTP API section override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,
    /// Authentication section override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

impl AppConfigOverrides {
    /// Shallow-merge `overrides` over `self`.
    ///
    /// Each section present in `overrides` replaces the section in `self`
    /// wholesale; absent sections fall through unchanged.
    #[must_use]
    pub fn merged_with(self, overrides: Self) -> Self {
        Self {
            environment: overrides.environment.or(self.environment),
            log_level: overrides.log_level.or(self.log_level),
            database: overrides.database.or(self.database),
            api: overrides.api.or(self.api),
            auth: overrides.auth.or(self.auth),
        }
    }
}

/// Errors raised while validating the startup configuration.
///
/// Both variants are fatal: the application must not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No `database` section survived the merge.
    #[error("database configuration is required")]
    DatabaseRequired,
    /// The JWT signing secret is missing, empty, or still the published
    /// placeholder.
    #[error("JWT secret must be provided and must not use the default value")]
    JwtSecretUnset,
}

fn default_api() -> ApiConfig {
    ApiConfig {
        port: 3000,
        host: "0.0.0.0".to_owned(),
        cors: CorsConfig {
            origin: vec![
                "http://localhost:4200".to_owned(),
                "http://localhost:3000".to_owned(),
            ],
            credentials: true,
        },
        rate_limit: RateLimitConfig {
            // 15 minutes, 100 requests per client.
            window_ms: 15 * 60 * 1000,
            max: 100,
        },
    }
}

fn default_auth() -> AuthConfig {
    AuthConfig {
        jwt_secret: DEFAULT_JWT_SECRET.to_owned(),
        jwt_expires_in: "24h".to_owned(),
        bcrypt_rounds: 10,
        // 24 hours.
        session_timeout: 24 * 60 * 60 * 1000,
    }
}

/// Compiled-in default configuration.
///
/// Deliberately partial: there is no safe default for `database`, and the
/// default `auth` section carries the placeholder secret that validation
/// rejects, so a bare default never passes [`validate_config`].
#[must_use]
pub fn default_config() -> AppConfigOverrides {
    AppConfigOverrides {
        environment: Some(Environment::Development),
        log_level: Some(LogLevel::Info),
        database: None,
        api: Some(default_api()),
        auth: Some(default_auth()),
    }
}

/// Merge `overrides` over the defaults and enforce the startup invariants.
///
/// Pure function of the compiled-in defaults and the input; no side effects.
///
/// # Errors
///
/// - [`ConfigError::DatabaseRequired`] when no `database` section is present
///   after the merge.
/// - [`ConfigError::JwtSecretUnset`] when the merged JWT secret is absent,
///   empty, or equal to [`DEFAULT_JWT_SECRET`].
pub fn validate_config(overrides: AppConfigOverrides) -> Result<AppConfig, ConfigError> {
    let merged = default_config().merged_with(overrides);

    let database = merged.database.ok_or(ConfigError::DatabaseRequired)?;
    let auth = merged.auth.ok_or(ConfigError::JwtSecretUnset)?;
    if auth.jwt_secret.is_empty() || auth.jwt_secret == DEFAULT_JWT_SECRET {
        return Err(ConfigError::JwtSecretUnset);
    }

    Ok(AppConfig {
        environment: merged.environment.unwrap_or_default(),
        log_level: merged.log_level.unwrap_or_default(),
        database,
        api: merged.api.unwrap_or_else(default_api),
        auth,
    })
}
