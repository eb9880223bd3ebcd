//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that the selected output has what it needs (file path)
//! - Check that the tracing filter directive parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::{LogFormat, LoggingConfig, OutputTarget};

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("output is \"file\" but file_path is not set")]
    MissingFilePath,

    #[error("file_path must not be empty")]
    EmptyFilePath,

    #[error("invalid tracing_filter {filter:?}: {reason}")]
    InvalidTracingFilter { filter: String, reason: String },
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match (&config.output, config.file_path.as_deref()) {
        (OutputTarget::File, None) => errors.push(ValidationError::MissingFilePath),
        (_, Some(path)) if path.trim().is_empty() => errors.push(ValidationError::EmptyFilePath),
        _ => {}
    }

    if config.format == LogFormat::Tracing {
        if let Err(e) = EnvFilter::try_new(&config.tracing_filter) {
            errors.push(ValidationError::InvalidTracingFilter {
                filter: config.tracing_filter.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
