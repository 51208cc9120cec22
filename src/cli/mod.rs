//! CLI command handlers
//!
//! Bridges clap argument parsing with the archive engine. Handlers print
//! styled output for the happy path and propagate structured errors to the
//! binary's single error boundary.

pub mod create;
pub mod init;
pub mod list;
pub mod load;

pub use create::handle_create_command;
pub use init::handle_init_command;
pub use list::handle_list_command;
pub use load::handle_load_command;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ProjectConfig;

/// Load the project configuration, turning the uninitialized case into a
/// user-facing hint
pub(crate) fn load_config(project_root: &Path) -> Result<ProjectConfig> {
    ProjectConfig::load(project_root).map_err(|err| {
        if err.is_not_initialized() {
            anyhow::anyhow!("project not initialized, run 'projsnap init' first")
        } else {
            err.into()
        }
    })
}

/// Build the progress bar used by create and load
pub(crate) fn styled_bar(total: u64, prefix: &'static str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{prefix} [{bar:50}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█░░"),
    );
    bar.set_prefix(prefix);
    bar
}

/// Ask a yes/no question on stdout and read the answer from stdin
pub(crate) fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Prompt for a free-form line of input
pub(crate) fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
