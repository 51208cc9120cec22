//! Directory tree traversal with exclusion pruning
//!
//! Performs a deterministic pre-order walk of a project root. Excluded
//! directories are pruned wholesale (never descended into), which is what
//! keeps large dependency caches cheap to skip; excluded files are skipped
//! individually while their siblings continue to be visited. The root itself
//! is never excluded or counted.
//!
//! Counting and visiting share one traversal implementation, so the eligible
//! file total computed before an archive write always agrees with the number
//! of files the write pass actually sees (on an unchanged filesystem).

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use super::exclude::is_excluded;
use crate::error::{BackupError, BackupResult};

/// Walks a project tree applying the exclusion patterns
pub struct TreeWalker<'a> {
    root: &'a Path,
    excludes: &'a [String],
}

impl<'a> TreeWalker<'a> {
    /// Create a walker over `root` with the given exclusion patterns
    pub fn new(root: &'a Path, excludes: &'a [String]) -> Self {
        Self { root, excludes }
    }

    /// Count eligible files, for establishing a progress total
    pub fn count_files(&self) -> BackupResult<usize> {
        let mut count = 0;
        self.visit_files(|_, _| {
            count += 1;
            Ok(())
        })?;
        Ok(count)
    }

    /// Visit each eligible file in traversal order
    ///
    /// The callback receives the absolute path and the forward-slash relative
    /// path of every file that survives exclusion matching. Traversal order is
    /// pre-order with entries sorted by file name, so it is stable across
    /// invocations.
    pub fn visit_files<F>(&self, mut visit: F) -> BackupResult<()>
    where
        F: FnMut(&Path, &str) -> BackupResult<()>,
    {
        let root = self.root.to_path_buf();
        let excludes = self.excludes;

        let entries = WalkDir::new(self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                entry.depth() == 0 || !is_excluded(&relative_name(&root, entry), excludes)
            });

        for entry in entries {
            let entry = entry.map_err(|e| {
                BackupError::io(
                    format!("failed to traverse {}", self.root.display()),
                    std::io::Error::from(e),
                )
            })?;

            if entry.depth() == 0 || !entry.file_type().is_file() {
                continue;
            }

            let rel_path = relative_name(self.root, &entry);
            visit(entry.path(), &rel_path)?;
        }

        Ok(())
    }
}

/// Relative path of an entry below the walk root, with forward slashes
fn relative_name(root: &Path, entry: &DirEntry) -> String {
    let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
    let rel = rel.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        rel.into_owned()
    } else {
        rel.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn sample_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join("README.md"), "readme");
        touch(&root.join("src/main.rs"), "fn main() {}");
        touch(&root.join("src/lib.rs"), "pub fn lib() {}");
        touch(&root.join(".git/HEAD"), "ref: refs/heads/main");
        touch(&root.join(".git/objects/aa/blob"), "blob");
        touch(&root.join("build/out.bin"), "bin");
        touch(&root.join("trace.log"), "log");
        temp
    }

    fn collect(root: &Path, excludes: &[String]) -> Vec<String> {
        let mut seen = Vec::new();
        TreeWalker::new(root, excludes)
            .visit_files(|_, rel| {
                seen.push(rel.to_string());
                Ok(())
            })
            .unwrap();
        seen
    }

    #[test]
    fn test_count_matches_visit() {
        let temp = sample_tree();
        let excludes = vec![".git/".to_string(), "build/".to_string(), "*.log".to_string()];

        let walker = TreeWalker::new(temp.path(), &excludes);
        let counted = walker.count_files().unwrap();
        let visited = collect(temp.path(), &excludes);

        assert_eq!(counted, visited.len());
        assert_eq!(
            visited,
            vec!["README.md", "src/lib.rs", "src/main.rs"]
        );
    }

    #[test]
    fn test_no_excludes_visits_everything() {
        let temp = sample_tree();
        let visited = collect(temp.path(), &[]);
        assert_eq!(visited.len(), 7);
        assert!(visited.contains(&".git/objects/aa/blob".to_string()));
    }

    #[test]
    fn test_excluded_file_does_not_stop_siblings() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("keep.txt"), "k");
        touch(&temp.path().join("skip.log"), "s");
        touch(&temp.path().join("zkeep.txt"), "z");

        let visited = collect(temp.path(), &["*.log".to_string()]);
        assert_eq!(visited, vec!["keep.txt", "zkeep.txt"]);
    }

    #[test]
    fn test_traversal_order_is_stable() {
        let temp = sample_tree();
        let first = collect(temp.path(), &[]);
        let second = collect(temp.path(), &[]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_root() {
        let temp = TempDir::new().unwrap();
        let walker = TreeWalker::new(temp.path(), &[]);
        assert_eq!(walker.count_files().unwrap(), 0);
    }

    #[test]
    fn test_missing_root_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let walker = TreeWalker::new(&missing, &[]);
        assert!(walker.count_files().is_err());
    }

    /// Pruned subtrees are never descended into. The nested directory is made
    /// unreadable, so any attempt to open it during traversal would error;
    /// with the exclusion in place the walk never reaches it.
    #[test]
    #[cfg(unix)]
    fn test_excluded_subtree_is_never_descended() {
        use std::os::unix::fs::PermissionsExt;

        let temp = sample_tree();
        let sealed = temp.path().join(".git/objects");
        fs::set_permissions(&sealed, fs::Permissions::from_mode(0o000)).unwrap();

        // Without the exclusion the walk fails on the unreadable directory.
        let unfiltered = TreeWalker::new(temp.path(), &[]);
        assert!(unfiltered.count_files().is_err());

        // With it, `.git/objects` is pruned before being opened.
        let excludes = vec![".git/".to_string()];
        let walker = TreeWalker::new(temp.path(), &excludes);
        let counted = walker.count_files().unwrap();
        assert_eq!(counted, 5);
        let visited = collect(temp.path(), &excludes);
        assert!(visited.iter().all(|p| !p.starts_with(".git")));

        fs::set_permissions(&sealed, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
