//! Health monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! Monitor construction (monitor.rs):
//!     enabled=false → Disabled (terminal, no network ever)
//!     otherwise     → first check scheduled immediately
//!
//! Check request (monitor.rs):
//!     no port  → Unavailable (no network)
//!     port set → publish Checking, bump generation, spawn probe
//!
//! Probe resolution (checker.rs + classify.rs):
//!     HTTP response / transport failure
//!     → classify.rs (pure classification, reason precedence)
//!     → applied only if the generation is still the latest
//! ```
//!
//! # Design Decisions
//! - Each service owns exactly one monitor; monitors share nothing
//! - Every failure is contained as a status value, never raised
//! - A newer check supersedes an older in-flight one (last request wins);
//!   stale results are discarded, not cancelled

pub mod checker;
pub mod classify;
pub mod monitor;
pub mod status;

pub use checker::HealthChecker;
pub use monitor::HealthMonitor;
pub use status::{HealthKind, HealthStatus};
