// OpenAPI specification generation
//
// This module defines the OpenAPI spec for the returns API.
// It can be used by both the main API server (for Swagger UI)
// and the export-openapi binary (for static spec generation).

use crate::api;
use crate::HealthResponse;
use returns_core::{ActionView, ReturnDetail, ReturnRecord};
use utoipa::openapi::server::Server;
use utoipa::OpenApi;

/// OpenAPI documentation for the returns API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::returns::list_pending,
        api::returns::list_pending_for_marketplace,
        api::returns::list_completed,
        api::returns::list_completed_for_marketplace,
        api::returns::get_return,
        api::returns::apply_action,
        api::returns::update_return,
        api::returns::delete_return,
    ),
    components(
        schemas(
            ReturnRecord, ReturnDetail, ActionView,
            api::returns::ApplyActionRequest,
            api::ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "returns", description = "Return workflow endpoints")
    ),
    info(
        title = "Returns API",
        version = "0.1.0",
        description = "Demo API for listing returns and applying approval workflow actions",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// OpenAPI document whose server URL is the route prefix actually mounted
    pub fn with_prefix(api_prefix: &str) -> utoipa::openapi::OpenApi {
        let url = if api_prefix.is_empty() { "/" } else { api_prefix };
        let mut doc = Self::openapi();
        doc.servers = Some(vec![Server::new(url)]);
        doc
    }

    /// Generate the OpenAPI spec (default "/api" prefix) as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::with_prefix(crate::config::DEFAULT_API_PREFIX).to_pretty_json()
    }
}
