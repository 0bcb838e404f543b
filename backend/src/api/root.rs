//! API root endpoint welcoming callers.

use actix_web::{get, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::ApiResponse;
use utoipa::ToSchema;

/// Welcome payload served at the API root.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeInfo {
    /// Human-readable greeting.
    #[schema(example = "Welcome to the Starter API!")]
    pub message: String,
    /// Server crate version.
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Server time the request was answered.
    pub timestamp: DateTime<Utc>,
}

/// Welcome endpoint.
#[utoipa::path(
    get,
    path = "/",
    tags = ["root"],
    responses(
        (status = 200, description = "Welcome payload", body = ApiResponse<WelcomeInfo>),
        (status = 500, description = "Internal server error")
    ),
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> web::Json<ApiResponse<WelcomeInfo>> {
    web::Json(ApiResponse::ok(WelcomeInfo {
        message: "Welcome to the Starter API!".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        timestamp: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    #[actix_web::test]
    async fn index_returns_welcome_envelope() {
        let app = actix_test::init_service(App::new().service(index)).await;
        let request = actix_test::TestRequest::get().uri("/").to_request();
        let value: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(value.get("success"), Some(&Value::Bool(true)));
        let data = value.get("data").expect("data payload");
        assert_eq!(
            data.get("message").and_then(Value::as_str),
            Some("Welcome to the Starter API!")
        );
        assert_eq!(
            data.get("version").and_then(Value::as_str),
            Some(env!("CARGO_PKG_VERSION"))
        );
        assert!(data.get("timestamp").is_some());
        assert!(value.get("error").is_none());
    }
}
