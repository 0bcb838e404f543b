//! Backend entry-point: validates configuration, then serves the REST API.

use actix_web::web;
use color_eyre::eyre::WrapErr;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::api::health::HealthState;
use backend::server::{
    ServerConfig, create_server, listener_settings_from_env, load_config_overrides,
};
use shared_config::{LogLevel, validate_config};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let env = DefaultEnv::default();
    let listener = listener_settings_from_env(&env)?;
    let app_config = load_config_overrides(&env)?
        .map(|overrides| validate_config(overrides).wrap_err("invalid application configuration"))
        .transpose()?;

    let log_level = app_config
        .as_ref()
        .map_or_else(LogLevel::default, |config| config.log_level);
    init_tracing(log_level);

    let mut config = ServerConfig::new(listener.clone());
    if let Some(app_config) = app_config {
        config = config.with_app_config(app_config);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(host = %listener.host, port = listener.port, "API server listening");
    server.await.map_err(Into::into)
}

/// Initialise JSON log output.
///
/// `RUST_LOG` wins when set; otherwise the configured log level provides the
/// default filter.
fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}
