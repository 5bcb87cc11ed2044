//! Health response classification.
//!
//! # Responsibilities
//! - Turn an HTTP status + body into a `HealthStatus`
//! - Extract the failure reason with a fixed field precedence
//! - Stay forgiving: malformed payloads still classify, never panic
//!
//! # Design Decisions
//! - Classification is a pure function, unit-testable without a network
//! - Accepted payload fields are the union observed across MCP servers;
//!   reason precedence: `reason` → `message` → `detail` →
//!   `raw_response_text` → synthesized "HTTP {status}"
//! - `service_accessible` is reported false only when the payload
//!   explicitly says so

use reqwest::StatusCode;
use serde::Deserialize;

use crate::health::status::HealthStatus;

/// Default reason for a healthy service that did not supply one.
pub const HEALTHY_REASON: &str = "service is responsive";

/// Union of fields the health proxy may return.
///
/// Every field is optional so a partially-shaped body still deserializes.
#[derive(Debug, Default, Deserialize)]
pub struct HealthPayload {
    /// Internal status field; "ok" signals success.
    pub status: Option<String>,
    /// Whether the MCP server could reach its target application.
    pub service_accessible: Option<bool>,
    /// Primary failure explanation.
    pub reason: Option<String>,
    /// Alternate explanation field used by some servers.
    pub message: Option<String>,
    /// Alternate explanation field used by some servers.
    pub detail: Option<String>,
    /// Opaque structured payload, passed through verbatim.
    pub details: Option<serde_json::Value>,
    /// Raw upstream body captured by the proxy, last-resort reason.
    pub raw_response_text: Option<String>,
}

impl HealthPayload {
    fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }

    /// Best-available failure reason, in precedence order.
    fn failure_reason(&self, http_status: StatusCode) -> String {
        self.reason
            .clone()
            .or_else(|| self.message.clone())
            .or_else(|| self.detail.clone())
            .or_else(|| self.raw_response_text.clone())
            .unwrap_or_else(|| format!("HTTP {}", http_status.as_u16()))
    }
}

/// Classify a received health response.
///
/// Success requires both an HTTP success status and payload
/// `status == "ok"`. Anything else resolves to `Error` with the
/// best-available reason; this function never fails.
pub fn classify(http_status: StatusCode, body: &str) -> HealthStatus {
    let payload: HealthPayload = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) => {
            if http_status.is_success() {
                // A success status promises a JSON body; not getting one
                // is a transport-level failure.
                return HealthStatus::error(format!("malformed health payload: {}", e));
            }
            // Failure was already decided by the HTTP status.
            return HealthStatus::error(format!("HTTP {}", http_status.as_u16()));
        }
    };

    if http_status.is_success() && payload.is_ok() {
        return HealthStatus {
            service_accessible: payload.service_accessible,
            reason: Some(
                payload
                    .reason
                    .or(payload.message)
                    .unwrap_or_else(|| HEALTHY_REASON.to_string()),
            ),
            details: payload.details,
            ..HealthStatus::ok()
        };
    }

    let reason = payload.failure_reason(http_status);
    HealthStatus {
        // Only an explicit false survives; absence stays unset.
        service_accessible: match payload.service_accessible {
            Some(false) => Some(false),
            _ => None,
        },
        details: payload.details,
        ..HealthStatus::error(reason)
    }
}
