//! Service registry subsystem.
//!
//! # Data Flow
//! ```text
//! control backend GET /api/mcp-services
//!     → loader.rs (single fetch, no retry)
//!     → Vec<ServiceConfig> (immutable, order as received)
//!     → shared read-only with one HealthMonitor per entry
//! ```
//!
//! # Design Decisions
//! - One load per dashboard session; failure is terminal for that load
//! - An empty list is a successful load ("no services configured"),
//!   never an error
//! - Service configs are never mutated after load

pub mod loader;
pub mod service;

pub use loader::{RegistryError, RegistryLoader};
pub use service::ServiceConfig;
