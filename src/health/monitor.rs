//! Per-service health monitor.
//!
//! # Responsibilities
//! - Own one service's `HealthStatus` exclusively
//! - Schedule the first check at construction (explicit, not a hook)
//! - Expose manual re-checks and a watchable read model
//! - Discard stale probe results (last request wins)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::health::checker::HealthChecker;
use crate::health::status::{HealthKind, HealthStatus};
use crate::registry::ServiceConfig;

/// Reason published when a service has no configured MCP port.
const NO_PORT_REASON: &str = "MCP port not configured";

#[derive(Debug)]
struct MonitorInner {
    service: Arc<ServiceConfig>,
    checker: HealthChecker,
    status: watch::Sender<HealthStatus>,
    /// Sequence number of the latest issued check. A resolving probe
    /// applies its result only if it still matches.
    generation: AtomicU64,
}

impl MonitorInner {
    /// Apply a probe result only if `generation` is still the latest.
    ///
    /// The comparison runs inside the watch sender's critical section,
    /// so a concurrent check request cannot bump the generation between
    /// the check and the publish. Returns false when the result is stale.
    fn apply_result(&self, generation: u64, result: HealthStatus) -> bool {
        self.status.send_if_modified(|status| {
            if self.generation.load(Ordering::SeqCst) == generation {
                *status = result;
                true
            } else {
                false
            }
        })
    }
}

/// Health monitor for a single service.
///
/// Cloning yields another handle to the same monitor.
#[derive(Clone, Debug)]
pub struct HealthMonitor {
    inner: Arc<MonitorInner>,
}

impl HealthMonitor {
    /// Create a monitor and schedule its first check.
    ///
    /// A disabled service becomes `Disabled` immediately and never issues
    /// a network call; anything else starts its first check right away.
    pub fn new(service: Arc<ServiceConfig>, checker: HealthChecker) -> Self {
        let initial = if service.enabled {
            HealthStatus::checking()
        } else {
            HealthStatus::disabled()
        };
        let (status, _) = watch::channel(initial);

        let monitor = Self {
            inner: Arc::new(MonitorInner {
                service,
                checker,
                status,
                generation: AtomicU64::new(0),
            }),
        };

        if monitor.inner.service.enabled {
            monitor.request_check();
        }
        monitor
    }

    /// The service this monitor watches.
    pub fn service(&self) -> &ServiceConfig {
        &self.inner.service
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> HealthStatus {
        self.inner.status.borrow().clone()
    }

    /// Watch receiver for status transitions.
    pub fn subscribe(&self) -> watch::Receiver<HealthStatus> {
        self.inner.status.subscribe()
    }

    /// Request a (re-)check.
    ///
    /// Publishes the `Checking` transition synchronously before any
    /// async work, so it is observable even though resolution follows
    /// immediately. Supersedes any older in-flight check for this
    /// service.
    pub fn request_check(&self) {
        let inner = &self.inner;

        if !inner.service.enabled {
            inner.status.send_replace(HealthStatus::disabled());
            return;
        }

        let Some(url) = inner.checker.check_url(&inner.service) else {
            inner
                .status
                .send_replace(HealthStatus::unavailable(NO_PORT_REASON));
            return;
        };

        let generation = inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        inner.status.send_replace(HealthStatus::checking());

        let inner = Arc::clone(inner);
        tokio::spawn(async move {
            let result = inner.checker.check(&inner.service, &url).await;

            if !inner.apply_result(generation, result) {
                debug!(
                    service = %inner.service.name,
                    generation,
                    "Stale health result discarded"
                );
            }
        });
    }

    /// Wait until the status is not `Checking` and return it.
    pub async fn settled_status(&self) -> HealthStatus {
        let mut rx = self.inner.status.subscribe();
        loop {
            let current = rx.borrow_and_update().clone();
            if current.kind != HealthKind::Checking {
                return current;
            }
            if rx.changed().await.is_err() {
                return current;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackendConfig, HealthConfig};

    fn checker() -> HealthChecker {
        // Unroutable backend: unit tests here never reach resolution.
        let backend = BackendConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..BackendConfig::default()
        };
        HealthChecker::new(&backend, &HealthConfig::default())
    }

    fn service(enabled: bool, port: Option<&str>) -> Arc<ServiceConfig> {
        Arc::new(ServiceConfig {
            name: "Plex".to_string(),
            mcp_url: None,
            mcp_host_inferred: None,
            mcp_port: port.map(str::to_string),
            enabled,
        })
    }

    #[tokio::test]
    async fn disabled_service_is_terminal() {
        let monitor = HealthMonitor::new(service(false, Some("8000")), checker());
        assert_eq!(monitor.status().kind, HealthKind::Disabled);
        assert_eq!(monitor.settled_status().await.kind, HealthKind::Disabled);

        // A direct check request must not flip the state.
        monitor.request_check();
        assert_eq!(monitor.status().kind, HealthKind::Disabled);
    }

    #[tokio::test]
    async fn missing_port_is_unavailable_without_network() {
        let monitor = HealthMonitor::new(service(true, None), checker());
        let status = monitor.status();
        assert_eq!(status.kind, HealthKind::Unavailable);
        assert_eq!(status.reason.as_deref(), Some(NO_PORT_REASON));
    }

    #[tokio::test]
    async fn stale_result_is_rejected_inside_the_publish_lock() {
        // Current-thread runtime: the probe spawned at construction
        // stays parked, so the interleaving below is driven by hand.
        let monitor = HealthMonitor::new(service(true, Some("8000")), checker());
        assert_eq!(monitor.status().kind, HealthKind::Checking);

        // A newer check supersedes generation 1 before its result lands;
        // the superseded result must not be published.
        monitor.inner.generation.fetch_add(1, Ordering::SeqCst);
        assert!(!monitor.inner.apply_result(1, HealthStatus::ok()));
        assert_eq!(monitor.status().kind, HealthKind::Checking);

        // The latest generation still applies.
        assert!(monitor
            .inner
            .apply_result(2, HealthStatus::error("db down")));
        assert_eq!(monitor.status().reason.as_deref(), Some("db down"));
    }

    #[tokio::test]
    async fn checking_is_published_synchronously() {
        // Current-thread runtime: the spawned probe cannot run before
        // the first await, so this observation is deterministic.
        let monitor = HealthMonitor::new(service(true, Some("8000")), checker());
        assert_eq!(monitor.status().kind, HealthKind::Checking);

        monitor.request_check();
        assert_eq!(monitor.status().kind, HealthKind::Checking);
    }
}
