//! HTTP error mapping.
//!
//! Any failure raised while handling a request collapses into the generic
//! failure envelope with status 500. The original detail is logged and never
//! exposed to the caller.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use shared_types::ApiResponse;
use std::fmt;
use tracing::error;

/// Message exposed to callers for any request-handling failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

/// Opaque request-handling error.
///
/// Carries the internal detail for logging; the response body is always the
/// generic failure envelope.
#[derive(Debug)]
pub struct ApiError {
    detail: String,
}

impl ApiError {
    /// Wrap an internal failure detail.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Internal detail, for logging only.
    pub fn detail(&self) -> &str {
        self.detail.as_str()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(GENERIC_ERROR_MESSAGE)
    }
}

impl std::error::Error for ApiError {}

impl From<actix_web::Error> for ApiError {
    fn from(err: actix_web::Error) -> Self {
        Self::internal(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!(detail = %self.detail, "request handling failed");
        HttpResponse::InternalServerError().json(ApiResponse::<()>::err(GENERIC_ERROR_MESSAGE))
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
