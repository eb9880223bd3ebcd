//! `ctxlog` command line tool.
//!
//! Emits a single record through the logger facade, with fields attached
//! both to a context and to a handle. Useful for checking a logging config
//! and for scripting.
//!
//! ```text
//! ctxlog -c request_id=r1 -f attempt=2 --level warn "retrying"
//! ```
//!
//! `--form` picks the call form (`plain`, `f`, `c`, `fc` for `info`,
//! `infof`, `info_c`, `infof_c`) and `--ambient` routes the call through the
//! free functions instead of a handle; handle fields and `--error` are then
//! not attached.
//!
//! Prints `done` on stdout once the record was emitted; a fatal record exits
//! with status 1 before that.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use uuid::Uuid;

use ctxlog::config::{self, LoggingConfig, OutputTarget};
use ctxlog::{context, Context, Fields, Level, Logger};

#[derive(Parser)]
#[command(name = "ctxlog")]
#[command(about = "Emit a structured log record with context fields", long_about = None)]
struct Cli {
    /// TOML logging configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum level written (overrides config and CTXLOG_LEVEL).
    #[arg(long)]
    min_level: Option<Level>,

    /// Write records to stdout instead of the configured output.
    #[arg(long)]
    stdout: bool,

    /// Level of the emitted record.
    #[arg(short, long, default_value = "info")]
    level: Level,

    /// Context field, `key=value`. Repeatable.
    #[arg(short = 'c', long = "context", value_parser = parse_pair)]
    context_fields: Vec<(String, String)>,

    /// Handle field, `key=value`. Repeatable.
    #[arg(short = 'f', long = "field", value_parser = parse_pair)]
    handle_fields: Vec<(String, String)>,

    /// Attach an error description under the `error` key.
    #[arg(long)]
    error: Option<String>,

    /// Attach a fresh `request_id` to the context.
    #[arg(long)]
    request_id: bool,

    /// Call form used to emit the record.
    #[arg(long, value_enum, default_value = "c")]
    form: Form,

    /// Emit through the free functions rather than a handle.
    #[arg(long)]
    ambient: bool,

    /// Record message.
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Form {
    /// `level(msg)`: no context fields.
    #[value(name = "plain")]
    Plain,
    /// `levelf(args)`.
    #[value(name = "f")]
    Formatted,
    /// `level_c(ctx, msg)`.
    #[value(name = "c")]
    Context,
    /// `levelf_c(ctx, args)`.
    #[value(name = "fc")]
    FormattedContext,
}

impl Form {
    fn uses_context(self) -> bool {
        matches!(self, Form::Context | Form::FormattedContext)
    }
}

#[derive(Debug, Error)]
#[error("{0}")]
struct CliError(String);

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got {:?}", raw)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut log_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => LoggingConfig::default(),
    };
    log_config = config::apply_env_overrides(log_config)?;
    if let Some(level) = cli.min_level {
        log_config.level = level;
    }
    if cli.stdout {
        log_config.output = OutputTarget::Stdout;
    }
    config::init(&log_config)?;

    let mut ctx = Context::background();
    for (key, value) in &cli.context_fields {
        ctx = context::with_field(&ctx, key.as_str(), value.as_str());
    }
    if cli.request_id {
        ctx = context::with_field(&ctx, "request_id", Uuid::new_v4().to_string());
    }

    let mut logger = Logger::root();
    for (key, value) in &cli.handle_fields {
        logger = logger.with_field(key.as_str(), value.as_str());
    }
    if let Some(description) = cli.error {
        logger = logger.with_error(&CliError(description));
    }

    if cli.ambient {
        logger = Logger::root();
    }
    if cli.level == Level::Fatal {
        emit_fatal(cli.form, cli.ambient, &logger, &ctx, &cli.message);
    }

    let base = if cli.form.uses_context() {
        context::fields_of(&ctx)
    } else {
        Fields::new()
    };
    logger.log(&base, cli.level, format_args!("{}", cli.message));

    println!("done");
    Ok(())
}

fn emit_fatal(form: Form, ambient: bool, logger: &Logger, ctx: &Context, msg: &str) -> ! {
    match (ambient, form) {
        (true, Form::Plain) => ctxlog::fatal(msg),
        (true, Form::Formatted) => ctxlog::fatalf(format_args!("{}", msg)),
        (true, Form::Context) => ctxlog::fatal_c(ctx, msg),
        (true, Form::FormattedContext) => ctxlog::fatalf_c(ctx, format_args!("{}", msg)),
        (false, Form::Plain) => logger.fatal(msg),
        (false, Form::Formatted) => logger.fatalf(format_args!("{}", msg)),
        (false, Form::Context) => logger.fatal_c(ctx, msg),
        (false, Form::FormattedContext) => logger.fatalf_c(ctx, format_args!("{}", msg)),
    }
}
