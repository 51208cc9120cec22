//! Custom error types for projsnap
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Filesystem and archive errors keep the
//! underlying cause attached so callers see both the failed operation and the
//! original error.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for projsnap operations
#[derive(Error, Debug)]
pub enum BackupError {
    /// The project has no configuration file
    #[error("project is not initialized (no config at {})", .0.display())]
    NotInitialized(PathBuf),

    /// File I/O errors, with the failed operation named
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Corrupt or unreadable archive container
    #[error("{context}: {source}")]
    Archive {
        context: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// Configuration serialization/deserialization errors
    #[error("{context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// No backup with the requested name exists
    #[error("backup not found: {0}")]
    BackupNotFound(String),
}

impl BackupError {
    /// Wrap an I/O error with the operation that failed
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Wrap a zip error with the operation that failed
    pub fn archive(context: impl Into<String>, source: zip::result::ZipError) -> Self {
        Self::Archive {
            context: context.into(),
            source,
        }
    }

    /// Wrap a JSON error with the operation that failed
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Check if this error means the project was never initialized
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, Self::NotInitialized(_))
    }
}

/// Result type alias for projsnap operations
pub type BackupResult<T> = Result<T, BackupError>;
