//! Display formatting for terminal output
//!
//! Styled message helpers and human-readable formatting for sizes, ages and
//! backup listings. Colors degrade to plain text automatically when stdout is
//! not a terminal.

use chrono::{DateTime, Local};
use colored::Colorize;

use crate::archive::BackupMetadata;

/// Format a success message
pub fn success(text: &str) -> String {
    format!("[SUCCESS] {text}").green().bold().to_string()
}

/// Format an error message
pub fn error(text: &str) -> String {
    format!("[ERROR] {text}").red().bold().to_string()
}

/// Format a warning message
pub fn warning(text: &str) -> String {
    format!("[WARNING] {text}").yellow().bold().to_string()
}

/// Format an informational message
pub fn info(text: &str) -> String {
    format!("[INFO] {text}").cyan().bold().to_string()
}

/// Format a label/value pair
pub fn label(name: &str, value: &str) -> String {
    format!("{} {}", format!("{name}:").dimmed(), value.bold())
}

/// Format a usage hint
pub fn hint(text: &str) -> String {
    format!("TIP: {text}").dimmed().italic().to_string()
}

/// Format a byte count as a human-readable size
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.1} {}B", bytes as f64 / div as f64, b"KMGTPE"[exp] as char)
}

/// Format how long ago a timestamp was, relative to now
pub fn format_age(timestamp: &DateTime<Local>) -> String {
    let elapsed = Local::now().signed_duration_since(timestamp);

    if elapsed.num_hours() < 1 {
        format!("{} min ago", elapsed.num_minutes().max(0))
    } else if elapsed.num_hours() < 24 {
        format!("{} h ago", elapsed.num_hours())
    } else {
        match elapsed.num_days() {
            1 => "yesterday".to_string(),
            days if days < 7 => format!("{days} days ago"),
            _ => timestamp.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Format backups as a plain table, newest first already applied by callers
pub fn format_backup_list(backups: &[BackupMetadata]) -> String {
    if backups.is_empty() {
        return "No backups found.".to_string();
    }

    let name_width = backups
        .iter()
        .map(|b| b.display_name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>10}  {:<12}  {}\n",
        "Name",
        "Size",
        "Age",
        "File",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->10}  {:-<12}  {:-<30}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for backup in backups {
        let file_name = backup
            .file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| backup.file_path.display().to_string());

        output.push_str(&format!(
            "{:<name_width$}  {:>10}  {:<12}  {}\n",
            backup.display_name(),
            format_size(backup.size),
            format_age(&backup.created_at),
            file_name,
            name_width = name_width,
        ));
    }

    output
}
