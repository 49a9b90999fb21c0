use crate::constants::MAX_LOG_ENTRIES;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Target for messages already stored in memory by [`Logger::log`]; the memory sink skips it.
const FILE_ONLY_TARGET: &str = "cloudtasks::file";

/// Shared logger that can be used across the application.
///
/// Keeps an in-memory buffer for the logs dialog and, once installed, receives
/// every `log` record of the process. When file logging is enabled the same
/// records are also appended to a log file through `fern`.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: None,
        }
    }

    /// Build the logger from the `[logging]` setting and install it as the `log` backend.
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_log_file(Self::get_log_file_path()?)
        } else {
            let logger = Self::new();
            logger.install(None)?;
            Ok(logger)
        }
    }

    /// Build a logger that also writes to `path`.
    pub fn with_log_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let logger = Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: Some(path.clone()),
        };
        logger.install(Some(&path))?;
        Ok(logger)
    }

    fn install(&self, path: Option<&Path>) -> Result<()> {
        let memory = self.logs.clone();
        let memory_sink = fern::Dispatch::new()
            .filter(|metadata| metadata.target() != FILE_ONLY_TARGET)
            .chain(fern::Output::call(move |record| {
                if let Ok(mut logs) = memory.lock() {
                    push_capped(&mut logs, format!("[{}] {}", timestamp(), record.args()));
                }
            }));

        let mut dispatch = fern::Dispatch::new()
            .level(log::LevelFilter::Debug)
            .chain(memory_sink);

        if let Some(path) = path {
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!("[{}] {:<5} {}", timestamp(), record.level(), message))
                    })
                    .chain(file),
            );
        }

        // A second logger in the same process keeps only its own buffer
        if let Err(e) = dispatch.apply() {
            self.log(format!("Logger: global log backend already installed ({})", e));
        }
        Ok(())
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!(target: FILE_ONLY_TARGET, "{}", message);

        if let Ok(mut logs) = self.logs.lock() {
            push_capped(&mut logs, format!("[{}] {}", timestamp(), message));
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn has_file_writer(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Default log file location under the XDG data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("cloudtasks").join("cloudtasks.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}

fn push_capped(logs: &mut Vec<String>, entry: String) {
    logs.push(entry);
    if logs.len() > MAX_LOG_ENTRIES {
        let excess = logs.len() - MAX_LOG_ENTRIES;
        logs.drain(..excess);
    }
}
