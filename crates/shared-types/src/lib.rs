//! Shared API contract types used across the monorepo.
//!
//! Every HTTP endpoint reports its outcome through [`ApiResponse`], and the
//! entity types here describe the JSON shapes exchanged with clients. Field
//! names serialise in camelCase to match the published wire contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Uniform success/failure wrapper returned by every API endpoint.
///
/// Successful outcomes carry `data`; failures carry `error`. The two are
/// mutually exclusive by convention: the constructors uphold it, and
/// consumers must ignore `data` whenever `success` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request was handled successfully.
    pub success: bool,
    /// Payload returned on success; absent on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure message; absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Optional informational message accompanying either outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Build a successful envelope around `data`.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Build a successful envelope with an informational message.
    #[must_use]
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.into()),
        }
    }

    /// Build a failure envelope carrying only an error message.
    #[must_use]
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

/// Application user as exposed over the API.
///
/// Users are mock entities in the current scope: list/create operations never
/// touch storage and records are not retained between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable user identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Contact email address.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Display name shown to other users.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Request body for registering a new user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Contact email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Plain-text password, hashed before storage.
    pub password: String,
}

/// Request body for updating mutable user fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// Replacement display name, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement avatar URL, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Page of results together with paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// One-based page index.
    pub page: u32,
    /// Maximum items per page.
    pub limit: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

/// Lifecycle state shared by listable entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Entity is live and visible.
    Active,
    /// Entity is disabled but retained.
    Inactive,
    /// Entity awaits activation.
    Pending,
    /// Entity is kept for the record only.
    Archived,
}

/// Sort direction accepted by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

/// Optional filtering and paging parameters for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict results to a lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// One-based page index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Maximum items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Field name to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// Application event published on the internal bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppEvent {
    /// Event discriminator, e.g. `"user.created"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event-specific payload.
    #[schema(value_type = Object)]
    pub payload: Value,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// User the event relates to, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
