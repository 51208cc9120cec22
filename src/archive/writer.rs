//! Archive creation
//!
//! Streams every eligible file of a project into a timestamped ZIP archive.
//! The eligible-file total is counted in a first pass so progress events can
//! carry it; the write pass then reuses the exact same selection, so the two
//! agree on an unchanged filesystem. A failure during the write pass deletes
//! the partially written archive before surfacing the error.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use chrono::Local;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::catalog::{archive_file_name, BackupMetadata};
use super::progress::{self, ProgressObserver};
use super::walker::TreeWalker;
use crate::config::ProjectConfig;
use crate::error::{BackupError, BackupResult};

/// Create a backup of a project root
///
/// Loads the project configuration, counts eligible files, then writes each
/// one into a new archive under the project's backup directory. A progress
/// event is emitted before each file is written, carrying the number of files
/// written so far, the precomputed total, and the file's relative path.
///
/// # Errors
///
/// Fails with `NotInitialized` when the project has no configuration, and
/// with a filesystem or archive error if traversal or writing fails. On
/// failure no partial archive is left behind.
pub fn create_backup(
    project_root: &Path,
    name: Option<&str>,
    mut observer: Option<ProgressObserver<'_>>,
) -> BackupResult<BackupMetadata> {
    let config = ProjectConfig::load(project_root)?;

    fs::create_dir_all(&config.backup_path).map_err(|e| {
        BackupError::io(
            format!(
                "failed to create backup directory {}",
                config.backup_path.display()
            ),
            e,
        )
    })?;

    let destination = config
        .backup_path
        .join(archive_file_name(&Local::now(), name));

    let walker = TreeWalker::new(project_root, &config.excludes);
    let total = walker.count_files()?;

    if let Err(err) = write_archive(&walker, &destination, total, &mut observer) {
        let _ = fs::remove_file(&destination);
        return Err(err);
    }

    let size = fs::metadata(&destination)
        .map_err(|e| {
            BackupError::io(
                format!("failed to stat archive {}", destination.display()),
                e,
            )
        })?
        .len();

    let completed_at = Local::now();
    Ok(BackupMetadata {
        id: completed_at.timestamp().to_string(),
        name: name.filter(|n| !n.is_empty()).map(String::from),
        size,
        created_at: completed_at,
        file_path: destination,
    })
}

/// Write all eligible files into a fresh archive at `destination`
fn write_archive(
    walker: &TreeWalker<'_>,
    destination: &Path,
    total: usize,
    observer: &mut Option<ProgressObserver<'_>>,
) -> BackupResult<()> {
    let file = File::create(destination).map_err(|e| {
        BackupError::io(
            format!("failed to create archive {}", destination.display()),
            e,
        )
    })?;
    let mut zip = ZipWriter::new(file);
    let mut written = 0usize;

    walker.visit_files(|path, rel_path| {
        progress::notify(observer, written, total, rel_path);

        zip.start_file(rel_path, entry_options(path))
            .map_err(|e| BackupError::archive(format!("failed to add entry {rel_path}"), e))?;

        let mut source = File::open(path)
            .map_err(|e| BackupError::io(format!("failed to open {}", path.display()), e))?;
        io::copy(&mut source, &mut zip)
            .map_err(|e| BackupError::io(format!("failed to write entry {rel_path}"), e))?;

        written += 1;
        Ok(())
    })?;

    zip.finish()
        .map_err(|e| BackupError::archive("failed to finalize archive", e))?;
    Ok(())
}

/// Per-entry options: deflate compression plus the source file's mode bits
#[cfg(unix)]
fn entry_options(path: &Path) -> SimpleFileOptions {
    use std::os::unix::fs::PermissionsExt;

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    match path.metadata() {
        Ok(metadata) => options.unix_permissions(metadata.permissions().mode()),
        Err(_) => options,
    }
}

#[cfg(not(unix))]
fn entry_options(_path: &Path) -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}
