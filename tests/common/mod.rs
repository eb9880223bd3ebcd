//! Shared utilities for integration tests.

use std::sync::Arc;

use ctxlog::backend::{LogfmtBackend, MemorySink};
use ctxlog::{Backend, Level, Logger};

/// A debug-level logfmt backend writing into `sink`.
#[allow(dead_code)]
pub fn memory_backend(sink: &MemorySink) -> Arc<dyn Backend> {
    Arc::new(LogfmtBackend::new(sink.clone()).with_level(Level::Debug))
}

/// A handle bound to an in-memory backend that keeps debug records.
#[allow(dead_code)]
pub fn memory_logger() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    (Logger::new(memory_backend(&sink)), sink)
}
