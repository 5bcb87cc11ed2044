//! Dashboard read model.
//!
//! # Data Flow
//! ```text
//! DashboardConfig
//!     → Dashboard::connect (single registry load)
//!     → one HealthMonitor per service (arena keyed by name)
//!     → first checks fan out immediately, no ordering between services
//!
//! Presentation layer reads:
//!     services() / statuses() / settle()   - snapshots
//!     recheck(name) / recheck_all()        - manual triggers
//!     logs(tail, since)                    - on-demand supervisor logs
//! ```
//!
//! # Design Decisions
//! - A failed registry load is the `Err` of `connect`; the service grid
//!   is never constructed in that case
//! - An empty registry is a successful, zero-service dashboard
//! - Monitors are independent; the registry list is read-only after load

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::info;

use crate::config::DashboardConfig;
use crate::health::{HealthChecker, HealthMonitor, HealthStatus};
use crate::logs::{LogBundle, LogClient, LogError};
use crate::registry::{RegistryError, RegistryLoader, ServiceConfig};

/// A connected dashboard session: the loaded registry plus one health
/// monitor per service.
#[derive(Debug)]
pub struct Dashboard {
    services: Vec<Arc<ServiceConfig>>,
    monitors: HashMap<String, HealthMonitor>,
    log_client: LogClient,
}

impl Dashboard {
    /// Load the registry and start monitoring every service.
    ///
    /// This is the only operation that can fail wholesale: a registry
    /// load error means no grid at all. Enabled services begin their
    /// first health check before this function returns.
    pub async fn connect(config: &DashboardConfig) -> Result<Self, RegistryError> {
        let loader = RegistryLoader::new(&config.backend);
        let services: Vec<Arc<ServiceConfig>> =
            loader.load().await?.into_iter().map(Arc::new).collect();

        info!(count = services.len(), "Dashboard session started");

        let checker = HealthChecker::new(&config.backend, &config.health);
        let monitors = services
            .iter()
            .map(|service| {
                (
                    service.name.clone(),
                    HealthMonitor::new(Arc::clone(service), checker.clone()),
                )
            })
            .collect();

        Ok(Self {
            services,
            monitors,
            log_client: LogClient::new(&config.backend, &config.logs),
        })
    }

    /// The configured services, in registry order.
    pub fn services(&self) -> &[Arc<ServiceConfig>] {
        &self.services
    }

    /// The monitor for a service, if it exists.
    pub fn monitor(&self, name: &str) -> Option<&HealthMonitor> {
        self.monitors.get(name)
    }

    /// Status snapshots, in registry order.
    pub fn statuses(&self) -> Vec<(Arc<ServiceConfig>, HealthStatus)> {
        self.services
            .iter()
            .map(|service| {
                let status = self.monitors[service.name.as_str()].status();
                (Arc::clone(service), status)
            })
            .collect()
    }

    /// Trigger a manual re-check for one service.
    ///
    /// Returns false for unknown or disabled services; a re-check is
    /// only offered for enabled ones.
    pub fn recheck(&self, name: &str) -> bool {
        match self.monitors.get(name) {
            Some(monitor) if monitor.service().enabled => {
                monitor.request_check();
                true
            }
            _ => false,
        }
    }

    /// Trigger a manual re-check for every enabled service.
    pub fn recheck_all(&self) {
        for monitor in self.monitors.values() {
            if monitor.service().enabled {
                monitor.request_check();
            }
        }
    }

    /// Wait for every monitor to leave `Checking` and return the settled
    /// statuses, in registry order.
    pub async fn settle(&self) -> Vec<(Arc<ServiceConfig>, HealthStatus)> {
        let settled = join_all(
            self.services
                .iter()
                .map(|service| self.monitors[service.name.as_str()].settled_status()),
        )
        .await;

        self.services
            .iter()
            .map(Arc::clone)
            .zip(settled)
            .collect()
    }

    /// Fetch supervisor logs on demand.
    pub async fn logs(
        &self,
        tail: Option<u32>,
        since: Option<&str>,
    ) -> Result<LogBundle, LogError> {
        self.log_client.fetch(tail, since).await
    }

    /// Container whose logs the dashboard can show.
    pub fn log_container(&self) -> &str {
        self.log_client.container()
    }
}
