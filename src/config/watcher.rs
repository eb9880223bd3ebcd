//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::install::init;
use crate::config::loader::{apply_env_overrides, load_config, ConfigError};
use crate::config::schema::LoggingConfig;

/// A watcher that re-installs the default backend when the file changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::Sender<LoggingConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for every configuration that was
    /// successfully applied.
    pub fn new(path: &Path) -> (Self, mpsc::Receiver<LoggingConfig>) {
        let (update_tx, update_rx) = mpsc::channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = ?path, "Log config change detected, reloading");
                        match reload(&path) {
                            Ok(config) => {
                                let _ = tx.send(config);
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "Failed to reload log config, keeping current backend");
                            }
                        }
                    }
                }
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Log config watcher started");
        Ok(watcher)
    }
}

/// Load `path`, apply environment overrides and install the result.
///
/// On error the current default backend is left in place.
pub fn reload(path: &Path) -> Result<LoggingConfig, ConfigError> {
    let config = apply_env_overrides(load_config(path)?)?;
    init(&config)?;
    Ok(config)
}
