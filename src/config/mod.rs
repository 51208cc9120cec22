//! Configuration module for projsnap
//!
//! This module provides configuration management including:
//! - Platform path resolution for the backup storage root
//! - Project configuration persistence (`.projsnap.json`)

pub mod paths;
pub mod project;

pub use paths::BackupPaths;
pub use project::ProjectConfig;
