//! Request-scoped propagation of log fields.
//!
//! # Data Flow
//! ```text
//! caller
//!     → adapter.rs (with_field / with_fields: read, copy, overlay)
//!     → carrier.rs (new Context node wrapping the parent)
//!     → passed down the call chain by value or reference
//!
//! at emission:
//!     adapter.rs (fields_of) → logger facade → backend
//! ```
//!
//! # Design Decisions
//! - The carrier is an ordinary immutable value; there is no hidden
//!   thread-local or global registry
//! - Deriving a context never changes what earlier contexts observe
//! - The field store key is private to this module

pub mod adapter;
pub mod carrier;

pub use adapter::{fields_of, with_field, with_fields};
pub use carrier::Context;
