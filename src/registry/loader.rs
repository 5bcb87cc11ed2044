//! Registry loading from the control backend.
//!
//! # Responsibilities
//! - Issue the single service-list request
//! - Distinguish load failure from an empty registry
//! - Surface failures as an explicit error, never a panic

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::registry::service::ServiceConfig;

/// Path of the service-list endpoint on the control backend.
const SERVICES_PATH: &str = "/api/mcp-services";

/// Error type for registry loading. This is the only failure that may
/// replace the whole dashboard view.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to reach control backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("control backend returned HTTP {0}")]
    Status(StatusCode),

    #[error("malformed service list: {0}")]
    Parse(#[source] reqwest::Error),
}

/// Loads the configured service list from the control backend.
#[derive(Debug, Clone)]
pub struct RegistryLoader {
    client: Client,
    base_url: String,
}

impl RegistryLoader {
    /// Create a loader for the given backend.
    pub fn new(backend: &BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(backend.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: backend.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full service list once.
    ///
    /// No retry: a failure is terminal for this load attempt and the
    /// caller decides whether to start a new session. Order is preserved
    /// as received.
    pub async fn load(&self) -> Result<Vec<ServiceConfig>, RegistryError> {
        let url = format!("{}{}", self.base_url, SERVICES_PATH);
        debug!(url = %url, "Loading service registry");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Registry load failed");
            return Err(RegistryError::Status(status));
        }

        let services: Vec<ServiceConfig> =
            response.json().await.map_err(RegistryError::Parse)?;

        debug!(count = services.len(), "Service registry loaded");
        Ok(services)
    }
}
