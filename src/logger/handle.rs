//! Explicit logger handle.

use std::error::Error;
use std::fmt;
use std::process;
use std::sync::Arc;

use crate::backend::{self, Backend};
use crate::context::{self, Context};
use crate::fields::{FieldValue, Fields, ERROR_KEY};
use crate::logger::Level;

/// An immutable handle carrying accumulated fields.
///
/// `with_*` methods return a new handle and leave the receiver untouched, so
/// a handle can be shared and derived from concurrently.
///
/// ```
/// use ctxlog::{context, Context, Logger};
///
/// let ctx = context::with_field(&Context::background(), "request_id", "abc");
/// let log = Logger::root().with_field("component", "db");
/// log.info_c(&ctx, "connected");
/// ```
#[derive(Clone, Default)]
pub struct Logger {
    /// `None` resolves to the process-wide default at emission time.
    backend: Option<Arc<dyn Backend>>,
    fields: Fields,
}

macro_rules! level_methods {
    ($level:expr, $plain:ident, $formatted:ident, $plain_c:ident, $formatted_c:ident) => {
        #[doc = concat!("Emit `msg` at ", stringify!($plain), " level with this handle's fields.")]
        pub fn $plain(&self, msg: impl fmt::Display) {
            self.log(&Fields::new(), $level, format_args!("{}", msg));
        }

        #[doc = concat!("Emit preformatted arguments at ", stringify!($plain), " level.")]
        pub fn $formatted(&self, args: fmt::Arguments<'_>) {
            self.log(&Fields::new(), $level, args);
        }

        #[doc = concat!("Emit at ", stringify!($plain), " level with `ctx` fields under this handle's fields.")]
        pub fn $plain_c(&self, ctx: &Context, msg: impl fmt::Display) {
            self.log(&context::fields_of(ctx), $level, format_args!("{}", msg));
        }

        #[doc = concat!("Context-aware form of [`Logger::", stringify!($formatted), "`].")]
        pub fn $formatted_c(&self, ctx: &Context, args: fmt::Arguments<'_>) {
            self.log(&context::fields_of(ctx), $level, args);
        }
    };
}

impl Logger {
    /// A handle with no fields, emitting through the default backend.
    pub fn root() -> Self {
        Self::default()
    }

    /// A handle with no fields, bound to `backend`.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend: Some(backend),
            fields: Fields::new(),
        }
    }

    /// A handle seeded with the fields carried by `ctx`.
    pub fn from_context(ctx: &Context) -> Self {
        Self::root().with_fields(&context::fields_of(ctx))
    }

    /// Rebind this handle (and its fields) to `backend`.
    pub fn with_backend(&self, backend: Arc<dyn Backend>) -> Self {
        Self {
            backend: Some(backend),
            fields: self.fields.clone(),
        }
    }

    pub fn with_field(&self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            backend: self.backend.clone(),
            fields: self.fields.with(key, value),
        }
    }

    pub fn with_fields(&self, fields: &Fields) -> Self {
        Self {
            backend: self.backend.clone(),
            fields: self.fields.merge(fields),
        }
    }

    /// Attach `err`'s description under [`ERROR_KEY`].
    pub fn with_error<E: Error + ?Sized>(&self, err: &E) -> Self {
        self.with_field(ERROR_KEY, err.to_string())
    }

    /// Fields this handle will attach to every record.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    level_methods!(Level::Debug, debug, debugf, debug_c, debugf_c);
    level_methods!(Level::Info, info, infof, info_c, infof_c);
    level_methods!(Level::Warn, warn, warnf, warn_c, warnf_c);
    level_methods!(Level::Error, error, errorf, error_c, errorf_c);

    /// Emit `msg` at fatal level, then exit the process with status 1.
    pub fn fatal(&self, msg: impl fmt::Display) -> ! {
        self.log_fatal(&Fields::new(), format_args!("{}", msg))
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.log_fatal(&Fields::new(), args)
    }

    pub fn fatal_c(&self, ctx: &Context, msg: impl fmt::Display) -> ! {
        self.log_fatal(&context::fields_of(ctx), format_args!("{}", msg))
    }

    pub fn fatalf_c(&self, ctx: &Context, args: fmt::Arguments<'_>) -> ! {
        self.log_fatal(&context::fields_of(ctx), args)
    }

    /// Emit one record with `base` overlaid by this handle's fields.
    pub fn log(&self, base: &Fields, level: Level, args: fmt::Arguments<'_>) {
        let backend = self.backend();
        if !backend.enabled(level) {
            return;
        }
        backend.emit(level, args, &base.merge(&self.fields));
    }

    fn log_fatal(&self, base: &Fields, args: fmt::Arguments<'_>) -> ! {
        let backend = self.backend();
        backend.emit(Level::Fatal, args, &base.merge(&self.fields));
        backend.flush();
        process::exit(1)
    }

    fn backend(&self) -> Arc<dyn Backend> {
        match &self.backend {
            Some(backend) => Arc::clone(backend),
            None => backend::default_backend(),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("bound", &self.backend.is_some())
            .field("fields", &self.fields)
            .finish()
    }
}
