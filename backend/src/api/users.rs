//! Users API handlers.
//!
//! Mock endpoints: the listing is a fixed fixture and created users are
//! echoed back without being retained anywhere.

use actix_web::{get, post, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared_types::{ApiResponse, User};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    /// Display name for the new user.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact email address.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

fn mock_users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User {
            id: "1".to_owned(),
            email: "john@example.com".to_owned(),
            name: "John Doe".to_owned(),
            avatar: None,
            created_at: now,
            updated_at: now,
        },
        User {
            id: "2".to_owned(),
            email: "jane@example.com".to_owned(),
            name: "Jane Smith".to_owned(),
            avatar: None,
            created_at: now,
            updated_at: now,
        },
    ]
}

/// List known users.
#[utoipa::path(
    get,
    path = "/api/users",
    tags = ["users"],
    responses(
        (status = 200, description = "Users", body = ApiResponse<Vec<User>>),
        (status = 500, description = "Internal server error")
    ),
    operation_id = "listUsers"
)]
#[get("/api/users")]
pub async fn list_users() -> web::Json<ApiResponse<Vec<User>>> {
    web::Json(ApiResponse::ok(mock_users()))
}

/// Create a user.
///
/// Echoes the submitted fields back with a generated identifier and fresh
/// timestamps; nothing is stored.
#[utoipa::path(
    post,
    path = "/api/users",
    tags = ["users"],
    request_body = CreateUserBody,
    responses(
        (status = 200, description = "Created user", body = ApiResponse<User>),
        (status = 500, description = "Malformed request body or internal server error")
    ),
    operation_id = "createUser"
)]
#[post("/api/users")]
pub async fn create_user(payload: web::Json<CreateUserBody>) -> web::Json<ApiResponse<User>> {
    let CreateUserBody { name, email } = payload.into_inner();
    let now = Utc::now();
    web::Json(ApiResponse::ok(User {
        id: Uuid::new_v4().to_string(),
        email,
        name,
        avatar: None,
        created_at: now,
        updated_at: now,
    }))
}
