//! `projsnap init` — initialize a project for backup management

use std::path::Path;

use anyhow::Result;

use crate::config::{BackupPaths, ProjectConfig};
use crate::display;

/// Create the project configuration and its backup directory
///
/// Re-running in an initialized project reports the existing configuration
/// instead of regenerating the project id.
pub fn handle_init_command(project_root: &Path) -> Result<()> {
    if ProjectConfig::is_initialized(project_root) {
        println!(
            "{}",
            display::warning("Project already initialized in this directory")
        );
        println!();

        let config = ProjectConfig::load(project_root)?;
        println!("{}", display::label("Project Name", &config.name));
        println!("{}", display::label("Project ID", &config.id));
        println!(
            "{}",
            display::label(
                "Created",
                &config.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
            )
        );
        return Ok(());
    }

    let project_name = project_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());

    let mut config = ProjectConfig::new(project_name);

    let paths = BackupPaths::new()?;
    config.backup_path = paths.ensure_project_dir(&config.id)?;
    config.save(project_root)?;

    println!("{}", display::success("Project initialized!"));
    println!();
    println!("{}", display::label("Project Name", &config.name));
    println!("{}", display::label("Project ID", &config.id));
    println!(
        "{}",
        display::label("Backup Path", &config.backup_path.display().to_string())
    );
    println!();
    println!(
        "{}",
        display::hint("Create your first backup with: projsnap create")
    );

    Ok(())
}
