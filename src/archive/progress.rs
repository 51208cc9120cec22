//! Progress reporting for archive operations
//!
//! Create and restore push point-in-time snapshots to an optional observer.
//! The callback is invoked synchronously during traversal, so it must not
//! block for long. Snapshots are not retained anywhere.

/// A point-in-time snapshot of an archive operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveProgress {
    /// Entries fully processed so far
    pub current: usize,
    /// Total entries the operation expects to process
    pub total: usize,
    /// Relative path of the entry being processed next
    pub file: String,
}

/// Observer invoked with each progress snapshot
///
/// Passing `None` wherever an observer is accepted is valid and changes no
/// behavior.
pub type ProgressObserver<'a> = &'a mut dyn FnMut(ArchiveProgress);

/// Push a snapshot to the observer, if one is attached
pub(crate) fn notify(
    observer: &mut Option<ProgressObserver<'_>>,
    current: usize,
    total: usize,
    file: &str,
) {
    if let Some(callback) = observer {
        callback(ArchiveProgress {
            current,
            total,
            file: file.to_string(),
        });
    }
}
