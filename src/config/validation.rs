//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the probe URL and value ranges (intervals > 0)
//! - Reject namespaces that are empty once the `.` separators are trimmed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PingerConfig → Result<(), Vec<ValidationError>>
//! - Runs before any loop is started

use thiserror::Error;
use url::Url;

use crate::config::schema::PingerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("probe.url {url:?} is not a valid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("probe.url {0:?} must use http or https")]
    UnsupportedScheme(String),

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("carbon.host must not be empty")]
    EmptyCarbonHost,

    #[error("carbon.namespace {0:?} is empty once '.' separators are trimmed")]
    EmptyNamespace(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &PingerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.probe.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(_) => errors.push(ValidationError::UnsupportedScheme(config.probe.url.clone())),
        Err(e) => errors.push(ValidationError::InvalidUrl {
            url: config.probe.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.probe.timeout_ms == 0 {
        errors.push(ValidationError::ZeroDuration("probe.timeout_ms"));
    }
    if config.probe.interval_ms == 0 {
        errors.push(ValidationError::ZeroDuration("probe.interval_ms"));
    }
    if config.carbon.interval_ms == 0 {
        errors.push(ValidationError::ZeroDuration("carbon.interval_ms"));
    }
    if config.carbon.timeout_ms == 0 {
        errors.push(ValidationError::ZeroDuration("carbon.timeout_ms"));
    }

    if config.carbon.host.trim().is_empty() {
        errors.push(ValidationError::EmptyCarbonHost);
    }
    if config.carbon.namespace.trim_matches('.').is_empty() {
        errors.push(ValidationError::EmptyNamespace(config.carbon.namespace.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
