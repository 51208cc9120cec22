//! Path management for projsnap
//!
//! Resolves where archives are stored. Each initialized project owns one
//! subdirectory of the backup root, keyed by its project id.
//!
//! ## Path Resolution Order
//!
//! 1. `PROJSNAP_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/projsnap` or `~/.local/share/projsnap`
//! 3. Windows: `%APPDATA%\projsnap`

use std::path::{Path, PathBuf};

use crate::error::{BackupError, BackupResult};

/// Manages the backup storage root and per-project directories
#[derive(Debug, Clone)]
pub struct BackupPaths {
    /// Root directory holding one subdirectory per project
    base_dir: PathBuf,
}

impl BackupPaths {
    /// Create a new BackupPaths instance
    ///
    /// Path resolution:
    /// 1. `PROJSNAP_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_DATA_HOME/projsnap` or `~/.local/share/projsnap`
    /// 3. Windows: `%APPDATA%\projsnap`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> BackupResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("PROJSNAP_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BackupPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the backup storage root
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the backup directory for a single project
    pub fn project_dir(&self, project_id: &str) -> PathBuf {
        self.base_dir.join(project_id)
    }

    /// Ensure the backup directory for a project exists, creating it if needed
    pub fn ensure_project_dir(&self, project_id: &str) -> BackupResult<PathBuf> {
        let dir = self.project_dir(project_id);
        std::fs::create_dir_all(&dir).map_err(|e| {
            BackupError::io(
                format!("failed to create backup directory {}", dir.display()),
                e,
            )
        })?;
        Ok(dir)
    }
}

/// Resolve the default backup root based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> BackupResult<PathBuf> {
    let data_base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
        })
        .map_err(|e| {
            BackupError::io(
                "could not determine home directory",
                std::io::Error::new(std::io::ErrorKind::NotFound, e),
            )
        })?;
    Ok(data_base.join("projsnap"))
}

/// Resolve the default backup root based on platform
#[cfg(windows)]
fn resolve_default_path() -> BackupResult<PathBuf> {
    let appdata = std::env::var("APPDATA").map_err(|e| {
        BackupError::io(
            "could not determine APPDATA directory",
            std::io::Error::new(std::io::ErrorKind::NotFound, e),
        )
    })?;
    Ok(PathBuf::from(appdata).join("projsnap"))
}
