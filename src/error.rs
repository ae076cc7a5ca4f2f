//! Error types for polyseg.
//!
//! Tokenization itself never fails: malformed input degrades to fewer or
//! smaller tokens. Errors only arise where the crate touches external storage
//! (dictionary files, stopword files, configuration files).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The error type for I/O-facing polyseg operations.
#[derive(Error, Debug)]
pub enum PolysegError {
    /// The file could not be opened or read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    Decode { path: PathBuf },

    /// Malformed JSON in a configuration or stopword file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A background load task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PolysegError>;

impl PolysegError {
    /// Create an I/O error for `path`.
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        PolysegError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PolysegError::InvalidConfig(msg.into())
    }
}

/// Read a file as UTF-8, distinguishing read failures from decode failures.
pub(crate) fn read_utf8(path: &std::path::Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| PolysegError::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| PolysegError::Decode {
        path: path.to_path_buf(),
    })
}
