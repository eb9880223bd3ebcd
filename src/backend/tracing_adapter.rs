//! Backend forwarding records to the `tracing` ecosystem.
//!
//! Each record becomes one `tracing` event under the `ctxlog` target. The
//! merged field set is attached pre-rendered as a single `fields` value since
//! `tracing` field names are fixed at compile time.

use std::fmt;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::logfmt::render_fields;
use crate::backend::Backend;
use crate::fields::Fields;
use crate::logger::Level;

/// Forwards records as `tracing` events. Fatal maps to ERROR.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for TracingBackend {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>, fields: &Fields) {
        let rendered = render_fields(fields);
        match level {
            Level::Debug => tracing::debug!(target: "ctxlog", fields = %rendered, "{}", message),
            Level::Info => tracing::info!(target: "ctxlog", fields = %rendered, "{}", message),
            Level::Warn => tracing::warn!(target: "ctxlog", fields = %rendered, "{}", message),
            Level::Error => tracing::error!(target: "ctxlog", fields = %rendered, "{}", message),
            Level::Fatal => {
                tracing::error!(target: "ctxlog", fatal = true, fields = %rendered, "{}", message)
            }
        }
    }
}

/// Install a global `tracing` subscriber writing formatted events to stdout.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_tracing(default_filter: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
