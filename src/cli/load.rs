//! `projsnap load` — restore a backup into the current directory
//!
//! The current directory is cleared first (the configuration file survives),
//! then the archive is streamed back in. Restore is not atomic: a failure
//! partway leaves the directory partially restored.

use std::fs;
use std::path::Path;

use anyhow::Result;
use indicatif::ProgressBar;

use crate::archive::{list_backups, restore_backup, ArchiveProgress, BackupMetadata};
use crate::config::project::CONFIG_FILE_NAME;
use crate::display;
use crate::error::{BackupError, BackupResult};
use crate::tui::{self, ListAction};

use super::{confirm, load_config, styled_bar};

/// Restore a backup chosen by name or interactively
pub fn handle_load_command(project_root: &Path, name: Option<&str>, force: bool) -> Result<()> {
    load_config(project_root)?;

    let mut backups = list_backups(project_root)?;
    if backups.is_empty() {
        println!(
            "{}",
            display::info("No backups found. Create one with: projsnap create")
        );
        return Ok(());
    }
    backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let backup = match name {
        Some(name) => backups
            .iter()
            .find(|b| b.name.as_deref() == Some(name))
            .ok_or_else(|| BackupError::BackupNotFound(name.to_string()))?,
        None => {
            let Some(choice) = tui::run_list_ui(&backups)? else {
                return Ok(());
            };
            if choice.action != ListAction::Load {
                println!("{}", display::warning("Operation cancelled"));
                return Ok(());
            }
            &backups[choice.index]
        }
    };

    restore_into(project_root, backup, force)
}

/// Confirm, clear the target directory and restore the given backup
pub(crate) fn restore_into(
    project_root: &Path,
    backup: &BackupMetadata,
    force: bool,
) -> Result<()> {
    if !force {
        println!(
            "{}",
            display::warning("All files in the current directory will be replaced!")
        );
        println!();
        println!("{}", display::label("Backup", &backup.display_name()));
        println!(
            "{}",
            display::label(
                "Created",
                &backup.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
            )
        );
        println!(
            "{}",
            display::label("Size", &display::format_size(backup.size))
        );
        println!();

        if !confirm("Continue? (y/N): ")? {
            println!("{}", display::warning("Operation cancelled"));
            return Ok(());
        }
    }

    println!("{}", display::info("Clearing current directory..."));
    clear_directory(project_root)?;

    println!("{}", display::info("Restoring from backup..."));

    let mut bar: Option<ProgressBar> = None;
    let mut on_progress = |progress: ArchiveProgress| {
        let bar = bar.get_or_insert_with(|| styled_bar(progress.total as u64, "Restoring"));
        bar.set_position(progress.current as u64);
        bar.set_message(progress.file);
    };

    let result = restore_backup(&backup.file_path, project_root, Some(&mut on_progress));

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
    result?;

    println!("{}", display::success("Backup restored!"));
    println!();
    println!("{}", display::label("Backup", &backup.display_name()));
    println!(
        "{}",
        display::label("Directory", &project_root.display().to_string())
    );

    Ok(())
}

/// Remove everything under `dir` except the project configuration file
fn clear_directory(dir: &Path) -> BackupResult<()> {
    let entries = fs::read_dir(dir)
        .map_err(|e| BackupError::io(format!("failed to read directory {}", dir.display()), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            BackupError::io(format!("failed to read directory {}", dir.display()), e)
        })?;

        if entry.file_name() == CONFIG_FILE_NAME {
            continue;
        }

        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| {
            BackupError::io(format!("failed to inspect {}", path.display()), e)
        })?;

        let removed = if file_type.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed
            .map_err(|e| BackupError::io(format!("failed to remove {}", path.display()), e))?;
    }

    Ok(())
}
