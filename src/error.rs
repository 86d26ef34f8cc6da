//! Library error type.
//!
//! Rendering, color lookup and path truncation are total; only the
//! terminal, stdio and config file can fail.

use std::path::PathBuf;

/// Errors raised by operations that touch the outside world.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to determine terminal size (is stdout a terminal?)")]
    TerminalSize,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;
