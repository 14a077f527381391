//! Glob pattern expansion with recursive directory descent.
//!
//! Each positional argument is a path or glob pattern. Matches that are
//! regular files are yielded directly; matches that are directories are
//! walked recursively and every regular file underneath is yielded.
//!
//! Expansion is deliberately forgiving: a pattern that matches nothing, is
//! malformed, or hits a permission error contributes zero files and raises
//! no error. This gives graceful partial progress across multiple patterns.
//!
//! Symbolic links are not followed, neither as direct matches nor while
//! descending into directories. There is consequently no symlink-cycle
//! guard; following links is out of scope.

use std::path::PathBuf;

use glob::glob;
use walkdir::WalkDir;

/// Expand a single path or glob pattern into regular-file paths.
///
/// Directories matched by the pattern are recursed into indefinitely.
/// Failures (bad pattern, nothing matched, unreadable entries) are logged
/// at debug level and skipped.
///
/// # Example
///
/// ```no_run
/// use lndup::scanner::expand_pattern;
///
/// let files = expand_pattern("/var/backups/*");
/// println!("{} files discovered", files.len());
/// ```
#[must_use]
pub fn expand_pattern(pattern: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let paths = match glob(pattern) {
        Ok(paths) => paths,
        Err(e) => {
            log::debug!("Skipping invalid pattern '{}': {}", pattern, e);
            return files;
        }
    };

    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                log::debug!("Skipping unreadable match under '{}': {}", pattern, e);
                continue;
            }
        };

        // symlink_metadata so that links are classified as links, not
        // as their targets
        let meta = match std::fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(e) => {
                log::debug!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if meta.is_dir() {
            descend(&path, &mut files);
        } else if meta.is_file() {
            files.push(path);
        } else {
            log::trace!("Skipping non-regular file: {}", path.display());
        }
    }

    files
}

/// Expand a list of patterns, concatenating the results in argument order.
///
/// Discovery order is significant: within a size class, the earliest
/// discovered duplicate becomes the merge target.
#[must_use]
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for pattern in patterns {
        files.extend(expand_pattern(pattern.as_ref()));
    }
    files
}

/// Walk a directory, appending every regular file to `files`.
fn descend(dir: &std::path::Path, files: &mut Vec<PathBuf>) {
    let walk = WalkDir::new(dir).follow_links(false).sort_by_file_name();

    for entry in walk {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                log::debug!("Walk error under {}: {}", dir.display(), e);
            }
        }
    }
}
