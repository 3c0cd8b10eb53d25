// Server configuration
//
// All settings come from environment variables (optionally via .env).
// Parsing goes through a lookup function so tests never touch the process
// environment.

use std::net::SocketAddr;
use std::time::Duration;

use returns_core::DEFAULT_MARKETPLACES;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9000";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_LIST_DELAY_MS: u64 = 2000;
pub const DEFAULT_DETAIL_DELAY_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a socket address, got '{value}'")]
    InvalidAddress { var: &'static str, value: String },

    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be true or false, got '{value}'")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var} must start with '/', got '{value}'")]
    InvalidPrefix { var: &'static str, value: String },
}

/// Artificial latency added before read responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseDelays {
    /// Pause before pending/completed list responses
    pub list: Duration,
    /// Pause before single-return detail responses
    pub detail: Duration,
}

impl ResponseDelays {
    /// No artificial latency (used by tests).
    pub const NONE: ResponseDelays = ResponseDelays {
        list: Duration::ZERO,
        detail: Duration::ZERO,
    };
}

impl Default for ResponseDelays {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(DEFAULT_LIST_DELAY_MS),
            detail: Duration::from_millis(DEFAULT_DETAIL_DELAY_MS),
        }
    }
}

/// Runtime configuration for the returns API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen address
    pub bind_addr: SocketAddr,
    /// Prefix for all API routes (empty for none)
    pub api_prefix: String,
    /// Origins allowed for CORS; empty means same-origin only
    pub cors_allowed_origins: Vec<String>,
    pub delays: ResponseDelays,
    /// Reject actions that are not currently available for a return
    pub enforce_available_actions: bool,
    /// Marketplaces to seed returns for, in order
    pub marketplaces: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 9000)),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            cors_allowed_origins: Vec::new(),
            delays: ResponseDelays::default(),
            enforce_available_actions: true,
            marketplaces: DEFAULT_MARKETPLACES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// Environment variables:
    /// - `BIND_ADDR`: listen address (default: "0.0.0.0:9000")
    /// - `API_PREFIX`: route prefix (default: "/api"; empty string disables)
    /// - `CORS_ALLOWED_ORIGINS`: comma-separated origins
    /// - `RETURNS_LIST_DELAY_MS`: list delay (default: 2000)
    /// - `RETURNS_DETAIL_DELAY_MS`: detail delay (default: 1000)
    /// - `RETURNS_ENFORCE_AVAILABLE_ACTIONS`: "true"/"false" (default: true)
    /// - `RETURNS_MARKETPLACES`: comma-separated marketplace names
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddress {
                    var: "BIND_ADDR",
                    value,
                })?,
            None => defaults.bind_addr,
        };

        let api_prefix = match lookup("API_PREFIX") {
            Some(value) => normalize_prefix(&value)?,
            None => defaults.api_prefix,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|s| split_list(&s))
            .unwrap_or_default();

        let delays = ResponseDelays {
            list: parse_millis(&lookup, "RETURNS_LIST_DELAY_MS")?.unwrap_or(defaults.delays.list),
            detail: parse_millis(&lookup, "RETURNS_DETAIL_DELAY_MS")?
                .unwrap_or(defaults.delays.detail),
        };

        let enforce_available_actions = match lookup("RETURNS_ENFORCE_AVAILABLE_ACTIONS") {
            Some(value) => parse_bool("RETURNS_ENFORCE_AVAILABLE_ACTIONS", value)?,
            None => defaults.enforce_available_actions,
        };

        let marketplaces = lookup("RETURNS_MARKETPLACES")
            .map(|s| split_list(&s))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.marketplaces);

        Ok(Self {
            bind_addr,
            api_prefix,
            cors_allowed_origins,
            delays,
            enforce_available_actions,
            marketplaces,
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn normalize_prefix(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidPrefix {
            var: "API_PREFIX",
            value: value.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn parse_millis<F>(lookup: &F, var: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidNumber { var, value })
        })
        .transpose()
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.api_prefix, "/api");
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.delays, ResponseDelays::default());
        assert_eq!(config.delays.list, Duration::from_secs(2));
        assert_eq!(config.delays.detail, Duration::from_secs(1));
        assert!(config.enforce_available_actions);
        assert_eq!(
            config.marketplaces,
            vec!["EBay", "Amazon", "Newegg", "Jet", "Walmart"]
        );
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("API_PREFIX", "/v2/"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example"),
            ("RETURNS_LIST_DELAY_MS", "0"),
            ("RETURNS_DETAIL_DELAY_MS", "250"),
            ("RETURNS_ENFORCE_AVAILABLE_ACTIONS", "false"),
            ("RETURNS_MARKETPLACES", "Etsy, Jet"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.api_prefix, "/v2");
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.delays.list, Duration::ZERO);
        assert_eq!(config.delays.detail, Duration::from_millis(250));
        assert!(!config.enforce_available_actions);
        assert_eq!(config.marketplaces, vec!["Etsy", "Jet"]);
    }

    #[test]
    fn test_empty_prefix_disables_prefix() {
        let config = load(&[("API_PREFIX", "")]).unwrap();
        assert_eq!(config.api_prefix, "");
    }

    #[test]
    fn test_blank_marketplaces_fall_back_to_defaults() {
        let config = load(&[("RETURNS_MARKETPLACES", " , ")]).unwrap();
        assert_eq!(config.marketplaces.len(), DEFAULT_MARKETPLACES.len());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            load(&[("BIND_ADDR", "nope")]),
            Err(ConfigError::InvalidAddress { .. })
        ));
        assert!(matches!(
            load(&[("RETURNS_LIST_DELAY_MS", "-5")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            load(&[("RETURNS_ENFORCE_AVAILABLE_ACTIONS", "maybe")]),
            Err(ConfigError::InvalidBool { .. })
        ));
        assert!(matches!(
            load(&[("API_PREFIX", "api")]),
            Err(ConfigError::InvalidPrefix { .. })
        ));
    }
}
