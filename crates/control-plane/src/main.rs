// Returns API server
// Decision: Records are seeded at startup and live in memory for the process lifetime

use anyhow::{Context, Result};
use returns_control_plane::config::ServerConfig;
use returns_control_plane::{build_app, ReturnService};
use returns_core::telemetry::{init_telemetry, TelemetryConfig};
use returns_core::ReturnStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_path = dotenvy::dotenv().ok();

    // Configure via environment variables:
    // - OTEL_SERVICE_NAME: Service name (default: "returns-control-plane")
    // - RUST_LOG: Log filter (default: "returns_control_plane=debug,tower_http=debug")
    // - LOG_FORMAT: "json" for JSON lines
    let mut telemetry_config = TelemetryConfig::from_env();
    if telemetry_config.service_name == "returns" {
        telemetry_config.service_name = "returns-control-plane".to_string();
    }
    if telemetry_config.log_filter.is_none() {
        telemetry_config.log_filter =
            Some("returns_control_plane=debug,returns_core=debug,tower_http=debug".to_string());
    }
    telemetry_config.service_version = Some(env!("CARGO_PKG_VERSION").to_string());
    init_telemetry(telemetry_config);

    if let Some(path) = dotenv_path {
        tracing::info!("Loaded .env from {:?}", path);
    }

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    let store = Arc::new(ReturnStore::seeded(&config.marketplaces));
    tracing::info!(
        returns = store.len(),
        marketplaces = ?store.marketplaces(),
        "Return store seeded"
    );

    tracing::info!(
        list_delay_ms = config.delays.list.as_millis() as u64,
        detail_delay_ms = config.delays.detail.as_millis() as u64,
        enforce_available_actions = config.enforce_available_actions,
        "Return workflow configured"
    );

    if !config.api_prefix.is_empty() {
        tracing::info!(prefix = %config.api_prefix, "API prefix configured");
    }

    if config.cors_allowed_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?config.cors_allowed_origins, "CORS origins configured");
    }

    let service = Arc::new(ReturnService::new(
        store,
        config.delays,
        config.enforce_available_actions,
    ));
    let app = build_app(&config, service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("HTTP server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
