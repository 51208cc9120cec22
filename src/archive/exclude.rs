//! Exclusion pattern matching
//!
//! Decides whether a relative path is left out of a snapshot. Matching is
//! intentionally permissive so short fragments like `node_modules/`, `.git/`
//! or `*.log` stay effective without precise anchored globs:
//!
//! - a pattern ending in `/` excludes any path containing it as a substring
//!   (directory-style, any depth, not anchored to path boundaries);
//! - a pattern containing a wildcard (`*`, `?`, `[`) excludes paths whose
//!   final segment matches it under shell-glob semantics;
//! - any other pattern excludes paths containing it as a substring.
//!
//! Patterns are evaluated in list order, first match wins, no negation.
//! Candidate paths use forward slashes regardless of platform.

use glob::Pattern;

/// Check whether a relative path matches any exclusion pattern
pub fn is_excluded(rel_path: &str, patterns: &[String]) -> bool {
    for pattern in patterns {
        if pattern.ends_with('/') {
            if rel_path.contains(pattern.as_str()) {
                return true;
            }
        } else if pattern.contains(['*', '?', '[']) {
            let file_name = rel_path.rsplit('/').next().unwrap_or(rel_path);
            if Pattern::new(pattern)
                .map(|p| p.matches(file_name))
                .unwrap_or(false)
            {
                return true;
            }
        } else if rel_path.contains(pattern.as_str()) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_directory_pattern_matches_at_any_depth() {
        let excludes = patterns(&[".git/"]);
        assert!(is_excluded(".git/config", &excludes));
        assert!(is_excluded("vendor/lib/.git/hooks/pre-commit", &excludes));
        assert!(is_excluded(".git/objects", &excludes));
    }

    #[test]
    fn test_directory_pattern_does_not_match_bare_directory_path() {
        // The directory entry itself carries no trailing slash; the prune
        // kicks in one level below, where paths contain the marker.
        let excludes = patterns(&[".git/"]);
        assert!(!is_excluded(".git", &excludes));
    }

    #[test]
    fn test_glob_matches_final_segment_only() {
        let excludes = patterns(&["*.log"]);
        assert!(is_excluded("app.log", &excludes));
        assert!(is_excluded("logs/deep/app.log", &excludes));
        assert!(!is_excluded("app.log.bak", &excludes));
        // A directory named to match the glob matches too
        assert!(is_excluded("debug.log", &excludes));
    }

    #[test]
    fn test_glob_question_mark_and_brackets() {
        assert!(is_excluded("temp", &patterns(&["?emp"])));
        assert!(is_excluded("a.txt", &patterns(&["[ab].txt"])));
        assert!(!is_excluded("c.txt", &patterns(&["[ab].txt"])));
    }

    #[test]
    fn test_plain_substring_containment() {
        let excludes = patterns(&["cache"]);
        assert!(is_excluded("src/cache2/data.bin", &excludes));
        assert!(is_excluded("precached.txt", &excludes));
        assert!(!is_excluded("src/main.rs", &excludes));
    }

    #[test]
    fn test_invalid_glob_never_matches() {
        // An unterminated bracket class is a wildcard pattern that fails to
        // compile; it does not fall through to substring matching.
        let excludes = patterns(&["["]);
        assert!(!is_excluded("x[", &excludes));
    }

    #[test]
    fn test_empty_pattern_list() {
        assert!(!is_excluded("anything/at/all", &[]));
    }

    #[test]
    fn test_root_path_never_matches_defaults() {
        let excludes = patterns(&[".git/", "node_modules/", "*.log"]);
        assert!(!is_excluded("", &excludes));
    }

    #[test]
    fn test_first_match_short_circuits() {
        // Both patterns match; presence of a later invalid pattern is
        // irrelevant once the first one hits.
        let excludes = patterns(&["*.tmp", "["]);
        assert!(is_excluded("scratch.tmp", &excludes));
    }
}
