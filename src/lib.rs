//! MCP Dashboard Library
//!
//! Client-side core of the MCP service dashboard: registry loading,
//! per-service health monitoring with last-request-wins supersession,
//! and on-demand supervisor log fetching.

pub mod config;
pub mod dashboard;
pub mod health;
pub mod logs;
pub mod observability;
pub mod registry;

pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use health::{HealthKind, HealthMonitor, HealthStatus};
pub use registry::{RegistryError, ServiceConfig};
