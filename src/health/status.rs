//! Health status read model.
//!
//! # States
//! - Ok: upstream reported healthy
//! - Error: transport failure or upstream reported/implied unhealthy
//! - Checking: a probe is in flight
//! - Disabled: service is disabled in its config; no probe ever runs
//! - Unavailable: no MCP port configured; nothing to probe
//!
//! # State Transitions
//! ```text
//! construction:        enabled=false → Disabled (terminal)
//! check request:       no port → Unavailable, else → Checking
//! probe resolution:    Checking → Ok | Error
//! manual re-check:     any non-Disabled state → Checking
//! ```

use serde::{Deserialize, Serialize};

/// Discriminant of a service's health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthKind {
    Ok,
    Error,
    Checking,
    Disabled,
    Unavailable,
}

impl HealthKind {
    /// Stable lowercase name, matching the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthKind::Ok => "ok",
            HealthKind::Error => "error",
            HealthKind::Checking => "checking",
            HealthKind::Disabled => "disabled",
            HealthKind::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for HealthKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current health of one service.
///
/// Owned by exactly one [`HealthMonitor`](crate::health::HealthMonitor);
/// everyone else sees snapshots.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct HealthStatus {
    /// Classification of the last resolved (or pending) check.
    #[serde(rename = "status")]
    pub kind: HealthKind,

    /// Whether the MCP server could reach its target application.
    /// Meaningful for `Ok`; explicitly `false` only when the upstream
    /// payload said so.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_accessible: Option<bool>,

    /// Human-readable explanation. Meaningful for `Error`, `Unavailable`
    /// and partial `Ok`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Opaque payload passed through from the upstream check. Advisory only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl HealthStatus {
    fn bare(kind: HealthKind) -> Self {
        Self {
            kind,
            service_accessible: None,
            reason: None,
            details: None,
        }
    }

    /// A probe is in flight.
    pub fn checking() -> Self {
        Self::bare(HealthKind::Checking)
    }

    /// Service is disabled in its configuration.
    pub fn disabled() -> Self {
        Self::bare(HealthKind::Disabled)
    }

    /// Service cannot be probed (no port configured).
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::bare(HealthKind::Unavailable)
        }
    }

    /// Probe failed or upstream reported unhealthy.
    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::bare(HealthKind::Error)
        }
    }

    /// Upstream reported healthy.
    pub fn ok() -> Self {
        Self::bare(HealthKind::Ok)
    }

    /// The reason to present to a user. Never blank: degrades to a
    /// generic string when the upstream gave none.
    pub fn reason_or_unknown(&self) -> &str {
        match self.reason.as_deref() {
            Some(r) if !r.trim().is_empty() => r,
            _ => "unknown error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_json() {
        let status = HealthStatus::error("db down");
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["reason"], "db down");
        assert!(json.get("service_accessible").is_none());

        let back: HealthStatus = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind, HealthKind::Error);
    }

    #[test]
    fn reason_never_blank() {
        assert_eq!(HealthStatus::checking().reason_or_unknown(), "unknown error");
        assert_eq!(
            HealthStatus {
                reason: Some("   ".to_string()),
                ..HealthStatus::error("x")
            }
            .reason_or_unknown(),
            "unknown error"
        );
        assert_eq!(HealthStatus::error("boom").reason_or_unknown(), "boom");
    }
}
