//! `projsnap create` — archive the current project

use std::path::Path;

use anyhow::Result;
use indicatif::ProgressBar;

use crate::archive::{create_backup, ArchiveProgress};
use crate::display;

use super::{load_config, styled_bar};

/// Create a backup of the project, showing a progress bar
pub fn handle_create_command(project_root: &Path, name: Option<&str>) -> Result<()> {
    load_config(project_root)?;

    println!("{}", display::info("Preparing to create backup..."));

    let mut bar: Option<ProgressBar> = None;
    let mut on_progress = |progress: ArchiveProgress| {
        let bar = bar.get_or_insert_with(|| styled_bar(progress.total as u64, "Archiving"));
        bar.set_position(progress.current as u64);
        bar.set_message(progress.file);
    };

    let result = create_backup(project_root, name, Some(&mut on_progress));

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
    let metadata = result?;

    println!("{}", display::success("Backup created!"));
    println!();
    println!("{}", display::label("Name", &metadata.display_name()));
    println!(
        "{}",
        display::label("Size", &display::format_size(metadata.size))
    );
    println!(
        "{}",
        display::label(
            "Created",
            &metadata.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
        )
    );
    println!(
        "{}",
        display::label("Path", &metadata.file_path.display().to_string())
    );

    Ok(())
}
