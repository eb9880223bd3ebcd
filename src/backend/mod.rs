//! Backend collaborator: renders and writes records.
//!
//! # Responsibilities
//! - Define the emission contract the logger facade delegates to
//! - Provide the reference logfmt renderer and a `tracing` forwarder
//! - Hold the process-wide default backend used by handles that were not
//!   bound to an explicit one
//!
//! # Design Decisions
//! - The facade only merges fields and hands the record over; rendering
//!   and level thresholds belong to the backend
//! - The default backend lives in an `ArcSwap` so it can be replaced (config
//!   reload) while other threads are emitting
//! - Process termination for fatal records happens in the facade, after
//!   `flush`

pub mod logfmt;
pub mod sink;
pub mod tracing_adapter;

use std::fmt;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use crate::fields::Fields;
use crate::logger::Level;

pub use self::logfmt::LogfmtBackend;
pub use self::sink::MemorySink;
pub use self::tracing_adapter::{init_tracing, TracingBackend};

/// A sink that renders and writes one record per call.
pub trait Backend: Send + Sync {
    /// Render and write a record.
    fn emit(&self, level: Level, message: fmt::Arguments<'_>, fields: &Fields);

    /// Whether records at `level` would be written.
    fn enabled(&self, level: Level) -> bool {
        let _ = level;
        true
    }

    /// Flush buffered output. Called before a fatal exit.
    fn flush(&self) {}
}

fn slot() -> &'static ArcSwap<Arc<dyn Backend>> {
    static SLOT: OnceLock<ArcSwap<Arc<dyn Backend>>> = OnceLock::new();
    SLOT.get_or_init(|| {
        let backend: Arc<dyn Backend> = Arc::new(LogfmtBackend::stderr());
        ArcSwap::from_pointee(backend)
    })
}

/// The current process-wide backend.
///
/// Defaults to a [`LogfmtBackend`] writing to stderr at `info` level.
pub fn default_backend() -> Arc<dyn Backend> {
    let guard = slot().load();
    let current: &Arc<dyn Backend> = &guard;
    Arc::clone(current)
}

/// Replace the process-wide backend.
///
/// Handles without an explicit backend pick up the new one on their next
/// emission.
pub fn set_default_backend(backend: Arc<dyn Backend>) {
    slot().store(Arc::new(backend));
}
