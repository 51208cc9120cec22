//! Archive restoration
//!
//! Streams a ZIP archive's entries back onto disk, recreating the directory
//! structure. The entry count is known upfront from the container's central
//! directory, so progress totals are exact. Restoration is not atomic: a
//! failure aborts the operation and leaves already-restored entries in place.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use super::progress::{self, ProgressObserver};
use crate::error::{BackupError, BackupResult};

/// Restore an archive into a target directory
///
/// Entries are processed in container order. Directory entries are created
/// recursively and do not count toward the processed total; file entries get
/// their parent chain created, are written with truncation (existing files
/// are overwritten), and then advance the counter. Stored mode bits are
/// applied on Unix. A progress event is emitted before each entry is
/// processed.
///
/// # Errors
///
/// Fails with an archive error if the container is corrupt or an entry path
/// would escape the target directory, and with a filesystem error if writing
/// any entry fails. Entries restored before the failure are left in place;
/// callers must treat a failed restore as a partially modified target.
pub fn restore_backup(
    archive_path: &Path,
    target_root: &Path,
    mut observer: Option<ProgressObserver<'_>>,
) -> BackupResult<()> {
    let file = File::open(archive_path).map_err(|e| {
        BackupError::io(
            format!("failed to open archive {}", archive_path.display()),
            e,
        )
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| {
        BackupError::archive(
            format!("failed to read archive {}", archive_path.display()),
            e,
        )
    })?;

    let total = archive.len();
    let mut processed = 0usize;

    for index in 0..total {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| BackupError::archive(format!("failed to read entry {index}"), e))?;

        progress::notify(&mut observer, processed, total, entry.name());

        let Some(entry_path) = entry.enclosed_name() else {
            return Err(BackupError::archive(
                format!("refusing entry {:?}", entry.name()),
                ZipError::InvalidArchive("entry path escapes the restore target"),
            ));
        };
        let destination = target_root.join(entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&destination).map_err(|e| {
                BackupError::io(
                    format!("failed to create directory {}", destination.display()),
                    e,
                )
            })?;
            apply_mode(&destination, entry.unix_mode())?;
            continue;
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BackupError::io(
                    format!("failed to create directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let mut output = File::create(&destination).map_err(|e| {
            BackupError::io(
                format!("failed to create file {}", destination.display()),
                e,
            )
        })?;
        io::copy(&mut entry, &mut output).map_err(|e| {
            BackupError::io(
                format!("failed to restore file {}", destination.display()),
                e,
            )
        })?;
        apply_mode(&destination, entry.unix_mode())?;

        processed += 1;
    }

    Ok(())
}

/// Apply stored mode bits to a restored file or directory
#[cfg(unix)]
fn apply_mode(path: &Path, mode: Option<u32>) -> BackupResult<()> {
    use std::os::unix::fs::PermissionsExt;

    if let Some(mode) = mode {
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|e| {
            BackupError::io(
                format!("failed to set permissions on {}", path.display()),
                e,
            )
        })?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: Option<u32>) -> BackupResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::progress::ArchiveProgress;
    use crate::archive::writer::create_backup;
    use crate::config::ProjectConfig;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn touch(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn init_project(excludes: &[&str]) -> (TempDir, TempDir) {
        let project = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();

        let mut config = ProjectConfig::new("fixture");
        config.backup_path = store.path().to_path_buf();
        config.excludes = excludes.iter().map(|s| s.to_string()).collect();
        config.save(project.path()).unwrap();

        (project, store)
    }

    #[test]
    fn test_round_trip_restores_paths_and_bytes() {
        let (project, _store) = init_project(&[".git/"]);
        touch(&project.path().join("README.md"), "hello");
        touch(&project.path().join("src/deep/nested/mod.rs"), "pub mod x;");
        touch(&project.path().join(".git/HEAD"), "ref");

        let metadata = create_backup(project.path(), None, None).unwrap();

        let target = TempDir::new().unwrap();
        restore_backup(&metadata.file_path, target.path(), None).unwrap();

        assert_eq!(
            fs::read_to_string(target.path().join("README.md")).unwrap(),
            "hello"
        );
        assert_eq!(
            fs::read_to_string(target.path().join("src/deep/nested/mod.rs")).unwrap(),
            "pub mod x;"
        );
        assert!(!target.path().join(".git").exists());
    }

    #[test]
    fn test_restore_is_idempotent_and_overwrites() {
        let (project, _store) = init_project(&[]);
        touch(&project.path().join("file.txt"), "original");

        let metadata = create_backup(project.path(), None, None).unwrap();
        let target = TempDir::new().unwrap();

        restore_backup(&metadata.file_path, target.path(), None).unwrap();
        // Tamper with the restored copy, then restore again
        fs::write(target.path().join("file.txt"), "tampered").unwrap();
        restore_backup(&metadata.file_path, target.path(), None).unwrap();

        assert_eq!(
            fs::read_to_string(target.path().join("file.txt")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_restore_progress_is_monotonic() {
        let (project, _store) = init_project(&[]);
        touch(&project.path().join("a.txt"), "a");
        touch(&project.path().join("b.txt"), "b");
        touch(&project.path().join("c.txt"), "c");

        let metadata = create_backup(project.path(), None, None).unwrap();
        let target = TempDir::new().unwrap();

        let mut events: Vec<ArchiveProgress> = Vec::new();
        let mut callback = |p: ArchiveProgress| events.push(p);
        restore_backup(&metadata.file_path, target.path(), Some(&mut callback)).unwrap();

        let total = events[0].total;
        assert_eq!(events.len(), total);
        let currents: Vec<usize> = events.iter().map(|e| e.current).collect();
        assert_eq!(currents, (0..total).collect::<Vec<_>>());
    }

    #[test]
    fn test_restore_rejects_garbage() {
        let temp = TempDir::new().unwrap();
        let bogus = temp.path().join("bogus.zip");
        fs::write(&bogus, b"this is not a zip file").unwrap();

        let target = TempDir::new().unwrap();
        let err = restore_backup(&bogus, target.path(), None).unwrap_err();
        assert!(matches!(err, BackupError::Archive { .. }));
    }

    #[test]
    fn test_restore_missing_archive() {
        let temp = TempDir::new().unwrap();
        let err = restore_backup(&temp.path().join("absent.zip"), temp.path(), None).unwrap_err();
        assert!(matches!(err, BackupError::Io { .. }));
    }

    #[test]
    fn test_restore_refuses_escaping_entries() {
        let temp = TempDir::new().unwrap();
        let hostile = temp.path().join("hostile.zip");

        let file = File::create(&hostile).unwrap();
        let mut zip = ZipWriter::new(file);
        zip.start_file("../evil.txt", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"payload").unwrap();
        zip.finish().unwrap();

        let target = temp.path().join("target");
        fs::create_dir(&target).unwrap();

        let err = restore_backup(&hostile, &target, None).unwrap_err();
        assert!(matches!(err, BackupError::Archive { .. }));
        assert!(!temp.path().join("evil.txt").exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_restore_applies_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let (project, _store) = init_project(&[]);
        let script = project.path().join("run.sh");
        touch(&script, "#!/bin/sh\n");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let metadata = create_backup(project.path(), None, None).unwrap();
        let target = TempDir::new().unwrap();
        restore_backup(&metadata.file_path, target.path(), None).unwrap();

        let mode = fs::metadata(target.path().join("run.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
