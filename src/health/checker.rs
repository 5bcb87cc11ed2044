//! Health probe execution.
//!
//! # Responsibilities
//! - Construct the proxied health-check URL for a service
//! - Perform one probe and classify the outcome
//! - Contain every failure as a status value

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::{BackendConfig, HealthConfig};
use crate::health::classify::classify;
use crate::health::status::{HealthKind, HealthStatus};
use crate::registry::ServiceConfig;

/// Performs health probes against the control backend's health proxy.
///
/// Cheap to clone; the underlying HTTP client is shared.
#[derive(Debug, Clone)]
pub struct HealthChecker {
    client: Client,
    base_url: String,
    path_prefix: String,
}

impl HealthChecker {
    /// Create a checker for the given backend and health settings.
    pub fn new(backend: &BackendConfig, health: &HealthConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(health.timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: backend.base_url.trim_end_matches('/').to_string(),
            path_prefix: health.path_prefix.trim_end_matches('/').to_string(),
        }
    }

    /// The proxied health URL for a service, or `None` without a port.
    pub fn check_url(&self, service: &ServiceConfig) -> Option<String> {
        let port = service.mcp_port.as_deref()?;
        Some(format!(
            "{}{}/{}/{}",
            self.base_url, self.path_prefix, service.name, port
        ))
    }

    /// Probe one service and classify the response.
    ///
    /// Never returns an error: transport failures, bad statuses and
    /// malformed bodies all resolve to one of the five health kinds.
    pub async fn check(&self, service: &ServiceConfig, url: &str) -> HealthStatus {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(service = %service.name, error = %e, "Health probe transport failure");
                return HealthStatus::error(e.to_string());
            }
        };

        let http_status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(service = %service.name, error = %e, "Health probe body read failure");
                return HealthStatus::error(e.to_string());
            }
        };

        let status = classify(http_status, &body);
        match status.kind {
            HealthKind::Ok => debug!(
                service = %service.name,
                accessible = ?status.service_accessible,
                "Health probe succeeded"
            ),
            _ => warn!(
                service = %service.name,
                status = %status.kind,
                reason = status.reason_or_unknown(),
                "Health probe reported failure"
            ),
        }
        status
    }
}
