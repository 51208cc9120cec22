//! Project configuration for projsnap
//!
//! Every backed-up project carries a `.projsnap.json` file directly under its
//! root. The file records a stable project id (assigned once at `init`, never
//! regenerated), the backup directory that owns the project's archives, and
//! the ordered exclusion pattern list. The archive engine reads this
//! configuration; only `init` and explicit configuration edits write it.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BackupError, BackupResult};

/// Fixed configuration filename under the project root
pub const CONFIG_FILE_NAME: &str = ".projsnap.json";

/// Per-project configuration record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Stable opaque identifier, assigned once at initialization
    pub id: String,
    /// Display name, defaults to the project directory's basename
    pub name: String,
    /// When the project was initialized
    pub created_at: DateTime<Utc>,
    /// Directory owning this project's archives
    pub backup_path: PathBuf,
    /// Ordered exclusion patterns, first match wins
    pub excludes: Vec<String>,
}

impl ProjectConfig {
    /// Create a fresh configuration with a new project id and the default
    /// exclusion list. The backup path is filled in by the caller once the
    /// project directory has been created.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now(),
            backup_path: PathBuf::new(),
            excludes: default_excludes(),
        }
    }

    /// Path of the configuration file for a project root
    pub fn config_file(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// Check whether a project root has been initialized
    pub fn is_initialized(project_root: &Path) -> bool {
        Self::config_file(project_root).exists()
    }

    /// Load the configuration from a project root
    ///
    /// # Errors
    ///
    /// Returns `BackupError::NotInitialized` if the configuration file does
    /// not exist, so callers can tell "run init first" apart from real I/O
    /// failures.
    pub fn load(project_root: &Path) -> BackupResult<Self> {
        let config_path = Self::config_file(project_root);
        if !config_path.exists() {
            return Err(BackupError::NotInitialized(config_path));
        }

        let data = std::fs::read_to_string(&config_path).map_err(|e| {
            BackupError::io(
                format!("failed to read configuration {}", config_path.display()),
                e,
            )
        })?;

        serde_json::from_str(&data).map_err(|e| {
            BackupError::json(
                format!("failed to parse configuration {}", config_path.display()),
                e,
            )
        })
    }

    /// Persist the configuration under a project root
    pub fn save(&self, project_root: &Path) -> BackupResult<()> {
        let config_path = Self::config_file(project_root);

        let data = serde_json::to_string_pretty(self)
            .map_err(|e| BackupError::json("failed to serialize configuration", e))?;

        std::fs::write(&config_path, data).map_err(|e| {
            BackupError::io(
                format!("failed to write configuration {}", config_path.display()),
                e,
            )
        })
    }
}

/// Default exclusion patterns for new projects
///
/// Short fragments on purpose: version-control metadata, build output,
/// dependency caches and binary artifacts across common toolchains.
pub fn default_excludes() -> Vec<String> {
    [
        ".git/",
        "node_modules/",
        "target/",
        "build/",
        "dist/",
        "bin/",
        "obj/",
        ".vs/",
        ".vscode/",
        "__pycache__/",
        "*.pyc",
        "*.tmp",
        "*.log",
        ".env*",
        "*.exe",
        "*.dll",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = ProjectConfig::new("a");
        let b = ProjectConfig::new("b");
        assert_ne!(a.id, b.id);
        assert!(!a.excludes.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ProjectConfig::new("myproject");
        config.backup_path = temp_dir.path().join("backups");

        config.save(temp_dir.path()).unwrap();
        assert!(ProjectConfig::is_initialized(temp_dir.path()));

        let loaded = ProjectConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.id, config.id);
        assert_eq!(loaded.name, "myproject");
        assert_eq!(loaded.backup_path, config.backup_path);
        assert_eq!(loaded.excludes, config.excludes);
    }

    #[test]
    fn test_load_missing_is_not_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let err = ProjectConfig::load(temp_dir.path()).unwrap_err();
        assert!(err.is_not_initialized());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(ProjectConfig::config_file(temp_dir.path()), "{ not json").unwrap();

        let err = ProjectConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, BackupError::Json { .. }));
    }
}
