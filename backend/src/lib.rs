//! Backend library modules for the starter monorepo API.

pub mod api;
pub mod doc;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
