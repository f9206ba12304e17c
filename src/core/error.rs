//! Error types for the retrofit engine
//!
//! This module provides structured error handling using thiserror.
//!
//! The taxonomy is deliberately small: an unreadable or unwritable target
//! file is fatal and aborts the whole batch. A pattern that finds no anchor
//! is not an error, and a construct whose delimiters never balance is
//! consumed silently; the embedded marker is the only resilience mechanism.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for retrofit operations
pub type Result<T> = std::result::Result<T, RetrofitError>;

/// Errors that can occur while rewriting target files
#[derive(Error, Debug)]
pub enum RetrofitError {
    /// Target file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rewritten content could not be persisted
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RetrofitError {
    /// Create a read error for the given path
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RetrofitError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for the given path
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RetrofitError::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = RetrofitError::read("/tmp/missing/Lotus.swift", io_err);
        assert!(err.to_string().contains("failed to read"));
        assert!(err.to_string().contains("Lotus.swift"));
    }

    #[test]
    fn test_write_error_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = RetrofitError::write("/tmp/ro/Nest.swift", io_err);
        assert!(err.to_string().contains("failed to write"));
        assert!(err.to_string().contains("Nest.swift"));
    }
}
