//! Context-scoped structured logging.
//!
//! Fields are attached to a request-scoped [`Context`] once and merged into
//! every record emitted with that context, so loggers do not have to be
//! threaded through call chains just to carry fields.
//!
//! ```
//! use ctxlog::{context, Context};
//!
//! let ctx = context::with_field(&Context::background(), "request_id", "r-42");
//! ctxlog::info_c(&ctx, "request accepted");
//! ctxlog::with_field("attempt", 2).warn_c(&ctx, "retrying");
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//!   caller ── with_field(ctx, ..) ──▶ context  (copy-on-write field store)
//!     │
//!     └── info_c(ctx, ..) / Logger::info_c ──▶ logger  (ctx ⊕ handle fields)
//!                                                │
//!                                                ▼
//!                                             backend  (logfmt | tracing)
//! ```

pub mod backend;
pub mod config;
pub mod context;
pub mod fields;
pub mod logger;

pub use backend::{set_default_backend, Backend};
pub use context::Context;
pub use fields::{FieldValue, Fields, ERROR_KEY};
pub use logger::ambient::*;
pub use logger::{Level, Logger};
