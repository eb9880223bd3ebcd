//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::logger::Level;

/// Root logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level written by the logfmt backend. Fatal is always written.
    pub level: Level,

    /// Which backend renders records.
    pub format: LogFormat,

    /// Where logfmt records go.
    pub output: OutputTarget,

    /// Log file path, required when `output = "file"`.
    pub file_path: Option<String>,

    /// Prefix logfmt records with an RFC 3339 `time` key.
    pub timestamp: bool,

    /// `EnvFilter` directive used when `format = "tracing"`.
    /// `RUST_LOG` takes precedence.
    pub tracing_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: LogFormat::Logfmt,
            output: OutputTarget::Stderr,
            file_path: None,
            timestamp: false,
            tracing_filter: "info".to_string(),
        }
    }
}

/// Backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// `level=info msg=... k=v` lines.
    #[default]
    Logfmt,
    /// Forward to the `tracing` ecosystem.
    Tracing,
}

/// Output destination for the logfmt backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
    File,
}

impl std::str::FromStr for OutputTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stderr" => Ok(OutputTarget::Stderr),
            "stdout" => Ok(OutputTarget::Stdout),
            "file" => Ok(OutputTarget::File),
            other => Err(format!("unknown output target: {:?}", other)),
        }
    }
}
