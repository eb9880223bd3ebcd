//! Reference logfmt backend.
//!
//! Renders one line per record:
//!
//! ```text
//! [time="<rfc3339>"] level=<level> msg=<message> <k1>=<v1> <k2>=<v2> ...
//! ```
//!
//! Fields are written in key order. User fields named `time`, `level` or
//! `msg` are renamed `fields.time`, `fields.level` and `fields.msg` so they
//! cannot be mistaken for the record's own keys. A value is quoted when it
//! contains any character outside `[A-Za-z0-9-._/@^+]`.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::{Local, SecondsFormat};

use crate::backend::Backend;
use crate::fields::{FieldValue, Fields};
use crate::logger::Level;

/// Backend writing logfmt lines to a `Write` sink.
pub struct LogfmtBackend {
    out: Mutex<Box<dyn Write + Send>>,
    min_level: Level,
    timestamp: bool,
}

impl LogfmtBackend {
    /// Write to `out`, at `info` level, without timestamps.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            min_level: Level::Info,
            timestamp: false,
        }
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Append to the file at `path`, creating it if needed.
    pub fn file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }

    /// Drop records below `level`. Fatal records are always written.
    pub fn with_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Prefix records with a `time` key.
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    fn render(&self, level: Level, message: fmt::Arguments<'_>, fields: &Fields) -> String {
        let mut line = String::with_capacity(64);
        if self.timestamp {
            let now = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
            push_pair(&mut line, "time", &now);
        }
        push_pair(&mut line, "level", level.as_str());
        push_pair(&mut line, "msg", &message.to_string());
        push_fields(&mut line, fields);
        line.push('\n');
        line
    }
}

impl Backend for LogfmtBackend {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>, fields: &Fields) {
        if !self.enabled(level) {
            return;
        }
        let line = self.render(level, message, fields);

        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = out.write_all(line.as_bytes()) {
            eprintln!("Failed to write to log, {}", e);
        }
    }

    fn enabled(&self, level: Level) -> bool {
        level == Level::Fatal || level >= self.min_level
    }

    fn flush(&self) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = out.flush();
    }
}

/// Render fields as space-separated `k=v` pairs in key order.
pub fn render_fields(fields: &Fields) -> String {
    let mut out = String::new();
    push_fields(&mut out, fields);
    out
}

fn is_reserved(key: &str) -> bool {
    matches!(key, "time" | "level" | "msg")
}

fn push_fields(out: &mut String, fields: &Fields) {
    let mut renamed: BTreeMap<Cow<'_, str>, &FieldValue> = BTreeMap::new();
    for (key, value) in fields.iter() {
        if !is_reserved(key) {
            renamed.insert(Cow::Borrowed(key), value);
        }
    }
    // a clashing key overwrites an explicit `fields.<key>`
    for (key, value) in fields.iter() {
        if is_reserved(key) {
            renamed.insert(Cow::Owned(format!("fields.{}", key)), value);
        }
    }

    for (key, value) in renamed {
        push_pair(out, &key, &value_text(value));
    }
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(key);
    out.push('=');
    if needs_quoting(value) {
        // serde_json escaping of a plain string cannot fail
        let quoted = serde_json::to_string(value).unwrap_or_default();
        out.push_str(&quoted);
    } else {
        out.push_str(value);
    }
}

fn value_text(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) => s.clone(),
        FieldValue::Null => "<nil>".to_string(),
        other => other.to_string(),
    }
}

fn needs_quoting(text: &str) -> bool {
    text.chars().any(|c| {
        !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '@' | '^' | '+'))
    })
}
