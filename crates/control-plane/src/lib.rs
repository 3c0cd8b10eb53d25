// Returns Control Plane Library
// Decision: Shared library for binaries (API server, OpenAPI export) and tests

// API routes and types (shared for OpenAPI generation)
pub mod api;

// Environment-driven configuration
pub mod config;

// Services layer
pub mod services;
pub use services::ReturnService;

// OpenAPI spec generation
pub mod openapi;

use axum::http::{header, HeaderValue, Method};
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::ToSchema;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::openapi::ApiDoc;

/// Health check payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of returns held in memory
    pub returns: usize,
    /// Seeded marketplaces, in storage order
    pub marketplaces: Vec<String>,
}

async fn health(State(service): State<Arc<ReturnService>>) -> Json<HealthResponse> {
    let store = service.store();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        returns: store.len(),
        marketplaces: store.marketplaces(),
    })
}

/// Build the full application router: health, prefixed API routes,
/// Swagger UI, optional CORS and request tracing.
pub fn build_app(config: &ServerConfig, service: Arc<ReturnService>) -> Router {
    let api_routes = api::returns::routes(api::returns::AppState::new(service.clone()));

    // Health is never prefixed
    let app = Router::new()
        .route("/health", get(health).with_state(service))
        .merge(build_router_with_prefix(api_routes, &config.api_prefix))
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-doc/openapi.json",
            ApiDoc::with_prefix(&config.api_prefix),
        ));

    let app = match cors_layer(&config.cors_allowed_origins) {
        Some(cors) => app.layer(cors),
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
}

/// Build router with optional API prefix (extracted for testing)
pub fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}

/// CORS layer for the configured origins; `None` when same-origin only
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
    )
}
