//! Candidate collection: size lookup and minimum-size filtering.
//!
//! For each discovered path, the collector queries the file size and either
//! admits the file as a [`Candidate`] or excludes it. A failed metadata
//! lookup is reported and the file dropped; the sweep continues with the
//! remaining files.

use std::path::PathBuf;

use super::{Candidate, ScanError};

/// Build the candidate set from discovered file paths.
///
/// Files smaller than `min_size` are excluded: linking trivially small
/// files reclaims next to nothing relative to the per-pair comparison
/// overhead, and empty files would all compare equal.
///
/// Metadata lookup failures are reported via [`log::error!`] and the file
/// is excluded; collection never fails as a whole.
///
/// # Example
///
/// ```no_run
/// use lndup::scanner::{collect_candidates, expand_pattern};
///
/// let paths = expand_pattern("/data/*");
/// let candidates = collect_candidates(paths, 16);
/// ```
#[must_use]
pub fn collect_candidates(paths: Vec<PathBuf>, min_size: u64) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(paths.len());

    for path in paths {
        match std::fs::symlink_metadata(&path) {
            Ok(meta) => {
                let size = meta.len();
                if size >= min_size {
                    candidates.push(Candidate::new(path, size));
                } else {
                    log::trace!(
                        "Skipping file below minimum size ({} < {}): {}",
                        size,
                        min_size,
                        path.display()
                    );
                }
            }
            Err(e) => {
                let err = ScanError::from_io(path, e);
                log::error!("{}", err);
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_file(dir: &TempDir, name: &str, len: usize) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(&vec![b'x'; len]).unwrap();
        path
    }

    #[test]
    fn test_collect_records_sizes() {
        let dir = TempDir::new().unwrap();
        let a = create_file(&dir, "a", 100);
        let b = create_file(&dir, "b", 50);

        let candidates = collect_candidates(vec![a.clone(), b.clone()], 16);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].path, a);
        assert_eq!(candidates[0].size, 100);
        assert_eq!(candidates[1].path, b);
        assert_eq!(candidates[1].size, 50);
    }

    #[test]
    fn test_collect_min_size_boundary() {
        let dir = TempDir::new().unwrap();
        let below = create_file(&dir, "below", 15);
        let exact = create_file(&dir, "exact", 16);

        let candidates = collect_candidates(vec![below, exact.clone()], 16);

        // min_size - 1 excluded, exactly min_size included
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].path, exact);
    }

    #[test]
    fn test_collect_excludes_empty_files_at_default_threshold() {
        let dir = TempDir::new().unwrap();
        let e1 = create_file(&dir, "empty1", 0);
        let e2 = create_file(&dir, "empty2", 0);

        let candidates = collect_candidates(vec![e1, e2], 16);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_collect_survives_missing_file() {
        let dir = TempDir::new().unwrap();
        let good = create_file(&dir, "good", 32);
        let missing = dir.path().join("missing");

        let candidates = collect_candidates(vec![missing, good.clone()], 16);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].path, good);
    }

    #[test]
    fn test_collect_zero_min_size_admits_everything() {
        let dir = TempDir::new().unwrap();
        let empty = create_file(&dir, "empty", 0);

        let candidates = collect_candidates(vec![empty], 0);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].size, 0);
    }
}
