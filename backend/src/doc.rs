//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST surface. The
//! generated document backs Swagger UI in debug builds.

use crate::api::health::HealthReport;
use crate::api::root::WelcomeInfo;
use crate::api::users::CreateUserBody;
use shared_types::{ApiResponse, User};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Starter monorepo API",
        description = "Minimal REST surface with mock user endpoints and a health check."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::root::index,
        crate::api::health::health,
        crate::api::users::list_users,
        crate::api::users::create_user,
    ),
    components(schemas(
        ApiResponse<WelcomeInfo>,
        ApiResponse<HealthReport>,
        ApiResponse<Vec<User>>,
        ApiResponse<User>,
        CreateUserBody,
        User,
    )),
    tags(
        (name = "root", description = "API welcome endpoint"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "users", description = "Operations related to users")
    )
)]
pub struct ApiDoc;
