//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the backend base URL is a usable http(s) URL
//! - Validate value ranges (timeouts > 0, tail > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DashboardConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::DashboardConfig;
use url::Url;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "backend.base_url").
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn err(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &DashboardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.backend.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(err(
            "backend.base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(err("backend.base_url", format!("invalid URL: {}", e))),
    }

    if config.backend.request_timeout_secs == 0 {
        errors.push(err("backend.request_timeout_secs", "must be greater than 0"));
    }

    if config.health.timeout_secs == 0 {
        errors.push(err("health.timeout_secs", "must be greater than 0"));
    }

    if !config.health.path_prefix.starts_with('/') {
        errors.push(err("health.path_prefix", "must start with '/'"));
    }

    if config.logs.container.trim().is_empty() {
        errors.push(err("logs.container", "must not be empty"));
    }

    if config.logs.default_tail == 0 {
        errors.push(err("logs.default_tail", "must be greater than 0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
