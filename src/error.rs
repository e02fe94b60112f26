//! Error types for the game binary and its ambient plumbing.
//!
//! The simulation itself never fails; these cover configuration, logging
//! setup and terminal I/O.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlappyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Could not determine {0} directory")]
    NoProjectDir(&'static str),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, FlappyError>;
