//! Supervisor log viewer client.
//!
//! # Responsibilities
//! - Fetch logs for the distinguished supervisor container on demand
//! - Map backend-reported failures (200 bodies carrying an `error`
//!   field) to proper errors
//!
//! # Design Decisions
//! - Plain request/response, no state machine and no caching
//! - `tail` and `since` are passed through with backend semantics
//!   (`since` accepts a UNIX timestamp or a relative time like "10m")

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{BackendConfig, LogsConfig};

/// Error type for log fetching.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to reach control backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("control backend returned HTTP {0}")]
    Status(StatusCode),

    #[error("malformed log response: {0}")]
    Parse(#[source] reqwest::Error),

    #[error("{0}")]
    Backend(String),
}

/// A fetched batch of container logs.
#[derive(Debug, Clone)]
pub struct LogBundle {
    /// Container the logs came from.
    pub container_name: String,
    /// Raw log text, timestamps included.
    pub logs: String,
}

/// Wire shape of the backend's log response. The backend reports its own
/// Docker failures as a success body with only `error` set.
#[derive(Debug, Deserialize)]
struct LogResponse {
    container_name: Option<String>,
    logs: Option<String>,
    error: Option<String>,
}

/// Fetches supervisor logs through the control backend.
#[derive(Debug, Clone)]
pub struct LogClient {
    client: Client,
    base_url: String,
    container: String,
    default_tail: u32,
}

impl LogClient {
    /// Create a log client for the given backend and log settings.
    pub fn new(backend: &BackendConfig, logs: &LogsConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(backend.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: backend.base_url.trim_end_matches('/').to_string(),
            container: logs.container.clone(),
            default_tail: logs.default_tail,
        }
    }

    /// Container whose logs this client fetches.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Fetch one batch of logs.
    pub async fn fetch(
        &self,
        tail: Option<u32>,
        since: Option<&str>,
    ) -> Result<LogBundle, LogError> {
        let tail = tail.unwrap_or(self.default_tail);
        let mut url = format!(
            "{}/api/logs/{}?tail={}",
            self.base_url, self.container, tail
        );
        if let Some(since) = since {
            url.push_str("&since=");
            url.push_str(since);
        }
        debug!(url = %url, "Fetching supervisor logs");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogError::Status(status));
        }

        let body: LogResponse = response.json().await.map_err(LogError::Parse)?;

        if let Some(error) = body.error {
            return Err(LogError::Backend(error));
        }

        Ok(LogBundle {
            container_name: body
                .container_name
                .unwrap_or_else(|| self.container.clone()),
            logs: body.logs.unwrap_or_default(),
        })
    }
}
