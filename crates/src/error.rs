//! Error types for the host side of the crate.
//!
//! The keybinding core has no error paths: unassignable items are simply
//! absent from the assignment and rejected keys are matcher states.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the album list.
#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("failed to read albums from {0}: {1}")]
    Read(PathBuf, String),

    #[error("failed to parse albums from {0}: {1}")]
    Parse(PathBuf, String),
}

/// Failures while loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file {0}: {1}")]
    ReadError(PathBuf, String),

    #[error("failed to parse config file {0}: {1}")]
    ParseError(PathBuf, String),
}

/// Anything the binary can fail with.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Albums(#[from] AlbumError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open log file {0}: {1}")]
    LogFile(PathBuf, String),

    #[error("failed to encode output: {0}")]
    Encode(String),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("picker failed: {0}")]
    Ui(String),
}
