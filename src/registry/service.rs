//! Static service metadata.

use serde::{Deserialize, Serialize};

/// A single configured MCP service, as reported by the control backend.
///
/// Created once per registry load and never mutated afterwards.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Unique service identifier.
    pub name: String,

    /// Configured MCP URL (informational).
    #[serde(default)]
    pub mcp_url: Option<String>,

    /// Host inferred from the MCP URL (informational).
    #[serde(default)]
    pub mcp_host_inferred: Option<String>,

    /// MCP port. Required to construct a health-check URL; a service
    /// without one can never be health checked.
    #[serde(default)]
    pub mcp_port: Option<String>,

    /// Whether health checking runs at all for this service.
    pub enabled: bool,
}
