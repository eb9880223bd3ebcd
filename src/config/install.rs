//! Turning a configuration into a live backend.

use std::path::Path;
use std::sync::Arc;

use crate::backend::{self, Backend, LogfmtBackend, TracingBackend};
use crate::config::loader::ConfigError;
use crate::config::schema::{LogFormat, LoggingConfig, OutputTarget};

/// Build the backend described by `config`.
pub fn build_backend(config: &LoggingConfig) -> Result<Arc<dyn Backend>, ConfigError> {
    let backend: Arc<dyn Backend> = match config.format {
        LogFormat::Tracing => {
            if let Err(e) = backend::init_tracing(&config.tracing_filter) {
                // A subscriber installed earlier (or by a previous reload) stays in charge.
                tracing::debug!(error = %e, "tracing subscriber already installed");
            }
            Arc::new(TracingBackend::new())
        }
        LogFormat::Logfmt => {
            let base = match config.output {
                OutputTarget::Stderr => LogfmtBackend::stderr(),
                OutputTarget::Stdout => LogfmtBackend::stdout(),
                OutputTarget::File => {
                    let path = config.file_path.as_deref().ok_or_else(|| {
                        ConfigError::Validation(vec![
                            crate::config::validation::ValidationError::MissingFilePath,
                        ])
                    })?;
                    LogfmtBackend::file(Path::new(path))?
                }
            };
            Arc::new(base.with_level(config.level).with_timestamp(config.timestamp))
        }
    };
    Ok(backend)
}

/// Build the backend for `config` and make it the process-wide default.
pub fn init(config: &LoggingConfig) -> Result<(), ConfigError> {
    let backend = build_backend(config)?;
    backend::set_default_backend(backend);
    tracing::debug!(
        level = %config.level,
        format = ?config.format,
        output = ?config.output,
        "default log backend installed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Fields;
    use crate::logger::Level;

    #[test]
    fn test_build_file_backend() {
        let path = std::env::temp_dir().join(format!("ctxlog_install_{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let config = LoggingConfig {
            level: Level::Warn,
            output: OutputTarget::File,
            file_path: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        };
        let backend = build_backend(&config).unwrap();
        assert!(!backend.enabled(Level::Info));

        backend.emit(Level::Warn, format_args!("disk"), &Fields::new());
        backend.flush();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "level=warning msg=disk\n");

        std::fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_build_file_backend_without_path_fails() {
        let config = LoggingConfig {
            output: OutputTarget::File,
            ..Default::default()
        };
        assert!(matches!(build_backend(&config), Err(ConfigError::Validation(_))));
    }
}
