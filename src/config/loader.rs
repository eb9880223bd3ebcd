//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LoggingConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `level`.
pub const ENV_LEVEL: &str = "CTXLOG_LEVEL";

/// Environment variable overriding `output`.
pub const ENV_OUTPUT: &str = "CTXLOG_OUTPUT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {reason}")]
    Env { var: &'static str, reason: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<LoggingConfig, ConfigError> {
    let config: LoggingConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoggingConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Apply `CTXLOG_*` overrides from the process environment.
pub fn apply_env_overrides(config: LoggingConfig) -> Result<LoggingConfig, ConfigError> {
    apply_overrides(config, |var| std::env::var(var).ok())
}

/// Apply overrides read through `lookup`, then re-validate.
pub fn apply_overrides<F>(mut config: LoggingConfig, lookup: F) -> Result<LoggingConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_LEVEL) {
        config.level = raw.parse().map_err(|e: crate::logger::ParseLevelError| ConfigError::Env {
            var: ENV_LEVEL,
            reason: e.to_string(),
        })?;
    }

    if let Some(raw) = lookup(ENV_OUTPUT) {
        config.output = raw
            .parse()
            .map_err(|reason| ConfigError::Env { var: ENV_OUTPUT, reason })?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
