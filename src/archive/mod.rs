//! Archive engine for projsnap
//!
//! Everything that turns a project tree into a ZIP snapshot and back:
//!
//! - `exclude`: pattern matching that decides which relative paths are
//!   omitted from a snapshot
//! - `walker`: pre-order traversal with excluded-subtree pruning, shared by
//!   the counting and writing passes
//! - `writer`: streams eligible files into a timestamped archive
//! - `reader`: streams an archive's entries back onto disk
//! - `catalog`: archive discovery by scanning the backup directory; the
//!   filename is the only persisted metadata
//! - `progress`: snapshots pushed to an optional observer during create and
//!   restore
//!
//! All operations are synchronous and single-threaded; compression and I/O
//! happen on the caller's thread, and there is no cancellation once an
//! operation starts.

mod catalog;
mod exclude;
mod progress;
mod reader;
mod walker;
mod writer;

pub use catalog::{
    archive_file_name, delete_backup, list_backups, list_backups_in, rename_backup,
    BackupMetadata, ARCHIVE_EXTENSION, ARCHIVE_PREFIX, TIMESTAMP_FORMAT,
};
pub use exclude::is_excluded;
pub use progress::{ArchiveProgress, ProgressObserver};
pub use reader::restore_backup;
pub use walker::TreeWalker;
pub use writer::create_backup;
