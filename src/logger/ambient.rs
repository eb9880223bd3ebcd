//! Free functions on the default backend.
//!
//! Plain forms (`info`) attach no fields. Context forms (`info_c`) attach the
//! fields carried by the context. `with_*` start a handle for chaining.

use std::error::Error;
use std::fmt;

use crate::context::Context;
use crate::fields::{FieldValue, Fields};
use crate::logger::Logger;

pub fn with_field(key: impl Into<String>, value: impl Into<FieldValue>) -> Logger {
    Logger::root().with_field(key, value)
}

pub fn with_fields(fields: &Fields) -> Logger {
    Logger::root().with_fields(fields)
}

pub fn with_error<E: Error + ?Sized>(err: &E) -> Logger {
    Logger::root().with_error(err)
}

/// A handle seeded with the fields carried by `ctx`.
pub fn from_context(ctx: &Context) -> Logger {
    Logger::from_context(ctx)
}

macro_rules! ambient_functions {
    ($plain:ident, $formatted:ident, $plain_c:ident, $formatted_c:ident) => {
        pub fn $plain(msg: impl fmt::Display) {
            Logger::root().$plain(msg)
        }

        pub fn $formatted(args: fmt::Arguments<'_>) {
            Logger::root().$formatted(args)
        }

        pub fn $plain_c(ctx: &Context, msg: impl fmt::Display) {
            Logger::root().$plain_c(ctx, msg)
        }

        pub fn $formatted_c(ctx: &Context, args: fmt::Arguments<'_>) {
            Logger::root().$formatted_c(ctx, args)
        }
    };
}

ambient_functions!(debug, debugf, debug_c, debugf_c);
ambient_functions!(info, infof, info_c, infof_c);
ambient_functions!(warn, warnf, warn_c, warnf_c);
ambient_functions!(error, errorf, error_c, errorf_c);

/// Emit `msg` at fatal level through the default backend, then exit with
/// status 1.
pub fn fatal(msg: impl fmt::Display) -> ! {
    Logger::root().fatal(msg)
}

pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    Logger::root().fatalf(args)
}

pub fn fatal_c(ctx: &Context, msg: impl fmt::Display) -> ! {
    Logger::root().fatal_c(ctx, msg)
}

pub fn fatalf_c(ctx: &Context, args: fmt::Arguments<'_>) -> ! {
    Logger::root().fatalf_c(ctx, args)
}
