//! Structured logging setup.
//!
//! The terminal belongs to the renderer, so log output always goes to a file.
//! The filter is read from `FLAPPY_LOG` (e.g. `FLAPPY_LOG=flappy=debug`).

use crate::error::{FlappyError, Result};
use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "FLAPPY_LOG";
pub const LOG_FILE_NAME: &str = "flappy.log";

/// Platform location of the log file.
pub fn default_log_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "flappy").ok_or(FlappyError::NoProjectDir("data"))?;
    Ok(dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Install the global subscriber, appending to `path`.
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| FlappyError::Logging(e.to_string()))
}
