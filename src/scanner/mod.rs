//! Scanner module for pattern expansion and candidate collection.
//!
//! This module covers the discovery half of the pipeline:
//! - [`expand`]: glob pattern expansion with recursive directory descent
//! - [`collect`]: turning discovered paths into size-annotated candidates
//!
//! # Example
//!
//! ```no_run
//! use lndup::scanner::{collect_candidates, expand_pattern};
//!
//! let paths = expand_pattern("photos/**/*.jpg");
//! let candidates = collect_candidates(paths, 16);
//! for c in &candidates {
//!     println!("{}: {} bytes", c.path.display(), c.size);
//! }
//! ```

pub mod collect;
pub mod expand;

use std::path::PathBuf;

pub use collect::collect_candidates;
pub use expand::{expand_pattern, expand_patterns};

/// A regular file discovered under a root pattern, eligible for comparison.
///
/// The recorded size is a snapshot taken at collection time; it is not
/// re-validated before comparison (best-effort semantics).
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Path to the file, valid at discovery time.
    pub path: PathBuf,
    /// File size in bytes at discovery time.
    pub size: u64,
    /// Set once this candidate has been merged into an earlier one.
    /// A resolved candidate is never examined again, as subject or target.
    pub resolved: bool,
}

impl Candidate {
    /// Create a new unresolved candidate.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            size,
            resolved: false,
        }
    }
}

/// Errors that can occur during file discovery and collection.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error against the path it occurred on.
    #[must_use]
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            ErrorKind::NotFound => Self::NotFound(path),
            _ => Self::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_new() {
        let c = Candidate::new(PathBuf::from("/test/file.txt"), 1024);

        assert_eq!(c.path, PathBuf::from("/test/file.txt"));
        assert_eq!(c.size, 1024);
        assert!(!c.resolved);
    }

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::PermissionDenied(PathBuf::from("/test"));
        assert_eq!(err.to_string(), "Permission denied: /test");

        let err = ScanError::NotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "Path not found: /missing");
    }

    #[test]
    fn test_scan_error_from_io_kinds() {
        let err = ScanError::from_io(
            PathBuf::from("/p"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ScanError::PermissionDenied(_)));

        let err = ScanError::from_io(
            PathBuf::from("/p"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, ScanError::NotFound(_)));

        let err = ScanError::from_io(
            PathBuf::from("/p"),
            std::io::Error::from(std::io::ErrorKind::InvalidData),
        );
        assert!(matches!(err, ScanError::Io { .. }));
    }
}
