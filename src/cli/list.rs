//! `projsnap list` — browse backups interactively or as a plain table

use std::path::Path;

use anyhow::Result;

use crate::archive::{delete_backup, list_backups, rename_backup};
use crate::display;
use crate::tui::{self, ListAction};

use super::{confirm, load_config, prompt_line};

/// Show the project's backups, newest first
///
/// The interactive list supports loading, renaming and deleting the selected
/// backup; `--plain` prints a table instead (usable in scripts and pipes).
pub fn handle_list_command(project_root: &Path, plain: bool) -> Result<()> {
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

    if plain {
        print!("{}", display::format_backup_list(&backups));
        return Ok(());
    }

    let Some(choice) = tui::run_list_ui(&backups)? else {
        return Ok(());
    };
    let backup = &backups[choice.index];

    match choice.action {
        ListAction::Load => super::load::restore_into(project_root, backup, false)?,
        ListAction::Rename => {
            let input = prompt_line("New name (leave empty to clear): ")?;
            let trimmed = input.trim();
            let renamed = rename_backup(backup, (!trimmed.is_empty()).then_some(trimmed))?;
            println!(
                "{}",
                display::success(&format!("Backup renamed to '{}'", renamed.display_name()))
            );
        }
        ListAction::Delete => {
            let prompt = format!("Delete backup '{}'? (y/N): ", backup.display_name());
            if confirm(&prompt)? {
                delete_backup(backup)?;
                println!("{}", display::success("Backup deleted"));
            } else {
                println!("{}", display::warning("Operation cancelled"));
            }
        }
    }

    Ok(())
}
