//! Logging configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, CTXLOG_* overrides)
//!     → validation.rs (semantic checks)
//!     → install.rs (build backend, swap process-wide default)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → install.rs swaps the default backend
//!     → handles observe the new backend on their next record
//! ```
//!
//! # Design Decisions
//! - Configuration only concerns the backend; field propagation has no knobs
//! - All fields have defaults to allow minimal configs
//! - A failed reload keeps the current backend

pub mod install;
pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use install::{build_backend, init};
pub use loader::{apply_env_overrides, load_config, parse_config, ConfigError};
pub use schema::{LogFormat, LoggingConfig, OutputTarget};
pub use validation::ValidationError;
pub use watcher::ConfigWatcher;
