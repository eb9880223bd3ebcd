//! Logger facade.
//!
//! # Calling Conventions
//! ```text
//! ambient:   info_c(&ctx, "msg")                  fields = ctx
//! handle:    with_field("k", "v").info("msg")     fields = handle
//! hybrid:    with_field("k", "v").info_c(&ctx, ..) fields = ctx ⊕ handle
//! plain:     info("msg")                          fields = {}
//! ```
//!
//! Every convention ends in the same merge-then-emit path on [`Logger`];
//! the free functions in [`ambient`] are a root handle with no fields.
//!
//! # Design Decisions
//! - Handles are immutable values; attaching a field returns a new handle
//! - Handle fields win over context fields on key conflict
//! - Each level has a plain (`info`) and a preformatted (`infof`) form, and
//!   both have a context-aware variant (`info_c`, `infof_c`)

pub mod ambient;
pub mod handle;
pub mod level;

pub use handle::Logger;
pub use level::{Level, ParseLevelError};
