//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the dashboard.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the dashboard client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// Control backend connection settings.
    pub backend: BackendConfig,

    /// Health check settings.
    pub health: HealthConfig,

    /// Supervisor log viewer settings.
    pub logs: LogsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Control backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the control backend (e.g., "http://127.0.0.1:8081").
    pub base_url: String,

    /// Timeout for registry and log requests in seconds.
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8081".to_string(),
            request_timeout_secs: 5,
        }
    }
}

/// Health check configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Path prefix of the backend's health proxy.
    /// The full check URL is `{base_url}{path_prefix}/{service}/{port}`.
    pub path_prefix: String,

    /// Health check timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            path_prefix: "/api/health-check".to_string(),
            timeout_secs: 5,
        }
    }
}

/// Supervisor log viewer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogsConfig {
    /// Container name of the distinguished service whose logs are viewable.
    pub container: String,

    /// Number of trailing lines fetched when none is requested.
    pub default_tail: u32,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            container: "yarr-mcp".to_string(),
            default_tail: 100,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = DashboardConfig::default();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8081");
        assert_eq!(config.health.path_prefix, "/api/health-check");
        assert_eq!(config.logs.container, "yarr-mcp");
        assert_eq!(config.logs.default_tail, 100);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [backend]
            base_url = "http://dash.internal:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "http://dash.internal:9000");
        assert_eq!(config.backend.request_timeout_secs, 5);
        assert_eq!(config.health.timeout_secs, 5);
    }
}
