//! Server construction and route wiring.

mod config;

pub use config::{
    APP_CONFIG_FILE_ENV, BootstrapError, HOST_ENV, ListenerSettings, PORT_ENV, ServerConfig,
    listener_settings_from_env, load_config_overrides,
};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use shared_config::AppConfig;

use crate::api::error::ApiError;
use crate::api::health::{HealthState, health};
use crate::api::root::index;
use crate::api::users::{create_user, list_users};
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the application with all routes and error handling wired.
///
/// Shared by the real server and the test harness so both exercise the same
/// wiring. Swagger UI is mounted at `/docs` in debug builds only.
pub fn build_app(
    health_state: web::Data<HealthState>,
    app_config: Option<web::Data<AppConfig>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // Malformed request bodies surface as the generic failure envelope
    // instead of the default extractor response.
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::internal(err.to_string()).into());

    let mut app = App::new()
        .app_data(json_config)
        .app_data(health_state)
        .service(index)
        .service(health)
        .service(list_users)
        .service(create_user);

    if let Some(app_config) = app_config {
        app = app.app_data(app_config);
    }

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the bootstrap configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the listener fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        listener,
        app_config,
    } = config;
    let app_config = app_config.map(web::Data::new);

    #[cfg(feature = "metrics")]
    let prometheus = make_metrics();

    let server = HttpServer::new(move || {
        let app = build_app(health_state.clone(), app_config.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind((listener.host, listener.port))?
    .run();

    Ok(server)
}

#[cfg(feature = "metrics")]
fn make_metrics() -> actix_web_prom::PrometheusMetrics {
    actix_web_prom::PrometheusMetricsBuilder::new("backend")
        .registry(prometheus::Registry::new())
        .endpoint("/metrics")
        .build()
        .expect("configure Prometheus metrics")
}

#[cfg(test)]
mod tests;
