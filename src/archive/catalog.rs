//! Backup metadata and archive discovery
//!
//! There is no persisted index: the archive filename *is* the metadata
//! encoding. Archives are named `backup_<YYYYMMDD_HHMMSS>[_<name>].zip`; the
//! optional human-assigned name may itself contain underscores and is parsed
//! back by taking every segment after the timestamp. Identity and creation
//! time for listed archives come from the file's modification time, which can
//! diverge from the embedded timestamp if the file is touched or copied.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::config::ProjectConfig;
use crate::error::{BackupError, BackupResult};

/// Fixed filename prefix for archives
pub const ARCHIVE_PREFIX: &str = "backup_";
/// Archive file extension
pub const ARCHIVE_EXTENSION: &str = "zip";
/// Second-precision timestamp embedded in archive filenames
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Identifying information for one archive
///
/// Constructed transiently after a successful write or by scanning the backup
/// directory; consumers read but never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupMetadata {
    /// Unix-seconds identifier derived from creation or modification time
    pub id: String,
    /// Human-assigned name, if one was given at creation
    pub name: Option<String>,
    /// Archive size in bytes
    pub size: u64,
    /// Creation timestamp (modification time for listed archives)
    pub created_at: DateTime<Local>,
    /// Absolute path to the archive file
    pub file_path: PathBuf,
}

impl BackupMetadata {
    /// Name to show users: the assigned name, or the creation time
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Build an archive filename from a timestamp and an optional name
pub fn archive_file_name(timestamp: &DateTime<Local>, name: Option<&str>) -> String {
    let stamp = timestamp.format(TIMESTAMP_FORMAT);
    match name {
        Some(name) if !name.is_empty() => {
            format!("{ARCHIVE_PREFIX}{stamp}_{name}.{ARCHIVE_EXTENSION}")
        }
        _ => format!("{ARCHIVE_PREFIX}{stamp}.{ARCHIVE_EXTENSION}"),
    }
}

/// Parse the optional name out of an archive filename
///
/// Returns `None` for filenames that do not follow the encoding; a matching
/// filename yields `Some(name)` where the name is absent for the bare
/// `backup_<date>_<time>.zip` form.
fn parse_archive_name(file_name: &str) -> Option<Option<String>> {
    let stem = file_name.strip_suffix(&format!(".{ARCHIVE_EXTENSION}"))?;
    if !stem.starts_with(ARCHIVE_PREFIX) {
        return None;
    }

    // backup_<date>_<time>[_<name with optional underscores>]
    let parts: Vec<&str> = stem.split('_').collect();
    match parts.len() {
        0..=2 => None,
        3 => Some(None),
        _ => Some(Some(parts[3..].join("_"))),
    }
}

/// The embedded `<date>_<time>` segment of an archive filename
fn timestamp_segment(file_name: &str) -> Option<String> {
    parse_archive_name(file_name)?;
    let stem = file_name.strip_suffix(&format!(".{ARCHIVE_EXTENSION}"))?;
    let parts: Vec<&str> = stem.split('_').collect();
    Some(format!("{}_{}", parts[1], parts[2]))
}

/// List all archives recorded for a project
///
/// Resolves the backup directory from the project configuration and scans it.
/// No ordering is guaranteed; display layers sort newest-first.
pub fn list_backups(project_root: &Path) -> BackupResult<Vec<BackupMetadata>> {
    let config = ProjectConfig::load(project_root)?;
    list_backups_in(&config.backup_path)
}

/// List all archives directly inside a backup directory
///
/// Only top-level files following the naming convention are considered;
/// everything else is silently ignored. A missing directory yields an empty
/// list.
pub fn list_backups_in(backup_dir: &Path) -> BackupResult<Vec<BackupMetadata>> {
    if !backup_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(backup_dir).map_err(|e| {
        BackupError::io(
            format!("failed to read backup directory {}", backup_dir.display()),
            e,
        )
    })?;

    let mut backups = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| {
            BackupError::io(
                format!("failed to read backup directory {}", backup_dir.display()),
                e,
            )
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(name) = parse_archive_name(file_name) else {
            continue;
        };

        let metadata = entry.metadata().map_err(|e| {
            BackupError::io(format!("failed to stat archive {}", path.display()), e)
        })?;
        let modified = metadata.modified().map_err(|e| {
            BackupError::io(format!("failed to stat archive {}", path.display()), e)
        })?;
        let created_at: DateTime<Local> = modified.into();

        backups.push(BackupMetadata {
            id: created_at.timestamp().to_string(),
            name,
            size: metadata.len(),
            created_at,
            file_path: path,
        });
    }

    Ok(backups)
}

/// Rename an archive, keeping its embedded timestamp segment
///
/// Passing `None` clears the human-assigned name. Returns updated metadata
/// pointing at the renamed file.
pub fn rename_backup(
    backup: &BackupMetadata,
    new_name: Option<&str>,
) -> BackupResult<BackupMetadata> {
    let stamp = backup
        .file_path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(timestamp_segment)
        .ok_or_else(|| {
            BackupError::io(
                format!(
                    "archive {} does not follow the backup naming convention",
                    backup.file_path.display()
                ),
                std::io::Error::from(std::io::ErrorKind::InvalidData),
            )
        })?;

    let new_file_name = match new_name {
        Some(name) if !name.is_empty() => {
            format!("{ARCHIVE_PREFIX}{stamp}_{name}.{ARCHIVE_EXTENSION}")
        }
        _ => format!("{ARCHIVE_PREFIX}{stamp}.{ARCHIVE_EXTENSION}"),
    };
    let new_path = backup.file_path.with_file_name(&new_file_name);

    fs::rename(&backup.file_path, &new_path).map_err(|e| {
        BackupError::io(
            format!("failed to rename archive {}", backup.file_path.display()),
            e,
        )
    })?;

    Ok(BackupMetadata {
        name: new_name.filter(|n| !n.is_empty()).map(String::from),
        file_path: new_path,
        ..backup.clone()
    })
}

/// Delete an archive file
pub fn delete_backup(backup: &BackupMetadata) -> BackupResult<()> {
    fs::remove_file(&backup.file_path).map_err(|e| {
        BackupError::io(
            format!("failed to delete archive {}", backup.file_path.display()),
            e,
        )
    })
}
