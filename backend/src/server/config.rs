//! Bootstrap settings: listener binding and configuration overrides.
//!
//! Environment access goes through [`mockable::Env`] so the parsing is
//! testable without touching the process environment.

use mockable::Env;
use shared_config::{AppConfig, AppConfigOverrides};
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming the listener bind host.
pub const HOST_ENV: &str = "HOST";
/// Environment variable naming the listener port.
pub const PORT_ENV: &str = "PORT";
/// Environment variable naming an optional JSON file of configuration
/// overrides handed to the validator at startup.
pub const APP_CONFIG_FILE_ENV: &str = "APP_CONFIG_FILE";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 3000;

/// Listener binding derived from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerSettings {
    /// Hostname or address to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

/// Errors raised while reading bootstrap settings.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// `PORT` is present but not a valid TCP port number.
    #[error("invalid value for PORT='{value}'; expected a TCP port number")]
    InvalidPort {
        /// The rejected value.
        value: String,
        /// Parse failure reported by the standard library.
        #[source]
        source: std::num::ParseIntError,
    },
    /// The overrides file named by `APP_CONFIG_FILE` could not be read.
    #[error("failed to read configuration overrides at {path}")]
    OverridesRead {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The overrides file content does not deserialise into the expected
    /// shape.
    #[error("failed to parse configuration overrides at {path}")]
    OverridesParse {
        /// File that could not be parsed.
        path: PathBuf,
        /// Underlying deserialisation failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Read the listener binding from the environment.
///
/// `HOST` defaults to `localhost` and `PORT` to `3000` when unset.
///
/// # Errors
///
/// Returns [`BootstrapError::InvalidPort`] when `PORT` is set but does not
/// parse as a TCP port number.
pub fn listener_settings_from_env<E: Env>(env: &E) -> Result<ListenerSettings, BootstrapError> {
    let host = env
        .string(HOST_ENV)
        .unwrap_or_else(|| DEFAULT_HOST.to_owned());
    let port = match env.string(PORT_ENV) {
        Some(value) => value
            .parse()
            .map_err(|source| BootstrapError::InvalidPort { value, source })?,
        None => DEFAULT_PORT,
    };
    Ok(ListenerSettings { host, port })
}

/// Load the optional configuration overrides named by `APP_CONFIG_FILE`.
///
/// Returns `Ok(None)` when the variable is unset; the server then runs
/// without a validated application configuration.
///
/// # Errors
///
/// Returns [`BootstrapError::OverridesRead`] when the named file cannot be
/// read and [`BootstrapError::OverridesParse`] when its content is not a
/// valid overrides document.
pub fn load_config_overrides<E: Env>(
    env: &E,
) -> Result<Option<AppConfigOverrides>, BootstrapError> {
    let Some(path) = env.string(APP_CONFIG_FILE_ENV).map(PathBuf::from) else {
        return Ok(None);
    };
    let raw = std::fs::read_to_string(&path).map_err(|source| BootstrapError::OverridesRead {
        path: path.clone(),
        source,
    })?;
    let overrides =
        serde_json::from_str(&raw).map_err(|source| BootstrapError::OverridesParse {
            path,
            source,
        })?;
    Ok(Some(overrides))
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) listener: ListenerSettings,
    pub(crate) app_config: Option<AppConfig>,
}

impl ServerConfig {
    /// Construct a server configuration for the given listener binding.
    #[must_use]
    pub fn new(listener: ListenerSettings) -> Self {
        Self {
            listener,
            app_config: None,
        }
    }

    /// Attach a validated application configuration.
    ///
    /// The configuration is installed as shared immutable app data so
    /// handlers can read it; nothing in the current surface consumes it yet.
    #[must_use]
    pub fn with_app_config(mut self, config: AppConfig) -> Self {
        self.app_config = Some(config);
        self
    }

    /// Listener binding the server will use.
    #[must_use]
    pub fn listener(&self) -> &ListenerSettings {
        &self.listener
    }
}
