//! Health endpoint reporting process uptime for orchestration and monitors.

use actix_web::{get, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ApiResponse;
use std::time::Instant;
use utoipa::ToSchema;

/// Shared health state anchored at process start.
pub struct HealthState {
    started: Instant,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl HealthState {
    /// Create a health state anchored at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the state was created.
    #[must_use]
    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// Health probe payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// Fixed status marker.
    #[schema(example = "healthy")]
    pub status: String,
    /// Seconds since process start.
    pub uptime: f64,
    /// Server time the probe was answered.
    pub timestamp: DateTime<Utc>,
}

/// Health check. Reports process uptime and the current server time.
#[utoipa::path(
    get,
    path = "/api/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Service is healthy", body = ApiResponse<HealthReport>),
        (status = 500, description = "Internal server error")
    ),
    operation_id = "health"
)]
#[get("/api/health")]
pub async fn health(state: web::Data<HealthState>) -> web::Json<ApiResponse<HealthReport>> {
    web::Json(ApiResponse::ok(HealthReport {
        status: "healthy".to_owned(),
        uptime: state.uptime_seconds(),
        timestamp: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use serde_json::Value;
    use std::time::Duration;

    #[test]
    fn uptime_grows_monotonically() {
        let state = HealthState::new();
        let first = state.uptime_seconds();
        std::thread::sleep(Duration::from_millis(5));
        let second = state.uptime_seconds();
        assert!(second >= first);
        assert!(first >= 0.0);
    }

    #[actix_web::test]
    async fn health_reports_healthy_envelope() {
        let state = web::Data::new(HealthState::new());
        let app = actix_test::init_service(App::new().app_data(state).service(health)).await;
        let request = actix_test::TestRequest::get().uri("/api/health").to_request();
        let value: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(value.get("success"), Some(&Value::Bool(true)));
        let data = value.get("data").expect("data payload");
        assert_eq!(data.get("status").and_then(Value::as_str), Some("healthy"));
        assert!(data.get("uptime").and_then(Value::as_f64).is_some());
        assert!(data.get("timestamp").is_some());
    }
}
