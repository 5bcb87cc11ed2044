//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing
//! - `RUST_LOG` wins over the configured level
//! - Per-check outcomes are logged where they resolve, not here

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Initialize the global tracing subscriber.
///
/// The environment filter is taken from `RUST_LOG` when set, otherwise
/// from the configured log level.
pub fn init_tracing(config: &ObservabilityConfig) {
    let fallback = format!("mcp_dashboard={}", config.log_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
