// Telemetry Module
//
// Structured logging setup shared by the returns binaries:
// - Log filter from RUST_LOG / LOG_LEVEL (EnvFilter syntax)
// - Human-readable or JSON console output
// - Service metadata recorded once at startup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

// ============================================================================
// Telemetry Configuration
// ============================================================================

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl From<&str> for LogFormat {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Configuration for logging
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name recorded in the startup event
    pub service_name: String,
    /// Service version
    pub service_version: Option<String>,
    /// Environment (e.g., "development", "production")
    pub environment: Option<String>,
    /// Whether to enable console logging
    pub enable_console: bool,
    /// Log filter (e.g., "info", "debug", "returns_core=debug")
    pub log_filter: Option<String>,
    /// Console output format
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "returns".to_string(),
            service_version: None,
            environment: None,
            enable_console: true,
            log_filter: None,
            log_format: LogFormat::Text,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `OTEL_SERVICE_NAME`: Service name (default: "returns")
    /// - `OTEL_SERVICE_VERSION`: Service version
    /// - `OTEL_ENVIRONMENT`: Deployment environment
    /// - `RUST_LOG` or `LOG_LEVEL`: Log filter
    /// - `LOG_FORMAT`: "json" for JSON lines, anything else for text
    pub fn from_env() -> Self {
        Self {
            service_name: std::env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "returns".to_string()),
            service_version: std::env::var("OTEL_SERVICE_VERSION").ok(),
            environment: std::env::var("OTEL_ENVIRONMENT").ok(),
            enable_console: true,
            log_filter: std::env::var("RUST_LOG")
                .ok()
                .or_else(|| std::env::var("LOG_LEVEL").ok()),
            log_format: std::env::var("LOG_FORMAT")
                .map(|v| LogFormat::from(v.as_str()))
                .unwrap_or_default(),
        }
    }

    /// Parsed log filter, falling back to "info" when unset or invalid
    pub fn env_filter(&self) -> EnvFilter {
        self.log_filter
            .as_ref()
            .and_then(|f| EnvFilter::try_new(f).ok())
            .unwrap_or_else(|| EnvFilter::new("info"))
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Install the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_telemetry(config: TelemetryConfig) {
    let (text_layer, json_layer) = if config.enable_console {
        match config.log_format {
            LogFormat::Text => (
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_filter(config.env_filter()),
                ),
                None,
            ),
            LogFormat::Json => (
                None,
                Some(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_filter(config.env_filter()),
                ),
            ),
        }
    } else {
        (None, None)
    };

    if tracing_subscriber::registry()
        .with(text_layer)
        .with(json_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
        return;
    }

    tracing::info!(
        service = %config.service_name,
        version = config.service_version.as_deref().unwrap_or("unknown"),
        environment = config.environment.as_deref().unwrap_or("unset"),
        format = ?config.log_format,
        "Telemetry initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "returns");
        assert!(config.enable_console);
        assert!(config.log_filter.is_none());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from("json"), LogFormat::Json);
        assert_eq!(LogFormat::from(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::from("pretty"), LogFormat::Text);
    }

    #[test]
    fn test_invalid_filter_falls_back_to_info() {
        let config = TelemetryConfig {
            log_filter: Some("returns=notalevel".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.env_filter().to_string(),
            EnvFilter::new("info").to_string()
        );
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_telemetry(TelemetryConfig::default());
        init_telemetry(TelemetryConfig::default());
    }
}
