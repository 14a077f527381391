//! Hardlink merge execution.
//!
//! A confirmed duplicate is replaced by a hard link to the surviving file.
//! The naive order (unlink the duplicate, then link) has a data-loss window:
//! if the link call fails after the unlink succeeded, the duplicate path is
//! gone. The merge here instead creates the link at a temporary sibling
//! path and renames it over the duplicate. Rename over an existing entry is
//! atomic on POSIX filesystems, so a failure at any step leaves either the
//! original duplicate or the completed link on disk, never neither.

use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Filesystem identity of a file: storage device plus inode.
///
/// Two paths with equal `FileId` are already hard links to each other.
/// Paths on different devices can never be linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId {
    /// Device id of the containing volume.
    pub dev: u64,
    /// Inode number within the device.
    pub ino: u64,
}

impl FileId {
    /// Extract the identity from file metadata.
    #[cfg(unix)]
    #[must_use]
    pub fn from_metadata(metadata: &Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;
        Self {
            dev: metadata.dev(),
            ino: metadata.ino(),
        }
    }

    /// On platforms without device/inode metadata every file reports the
    /// same identity, so no pair is ever considered linkable and the tool
    /// degrades to a no-op rather than risking a bad merge.
    #[cfg(not(unix))]
    #[must_use]
    pub fn from_metadata(_metadata: &Metadata) -> Self {
        Self { dev: 0, ino: 0 }
    }

    /// Look up the identity of a path.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the metadata lookup fails.
    pub fn of(path: &Path) -> io::Result<Self> {
        let meta = std::fs::symlink_metadata(path)?;
        Ok(Self::from_metadata(&meta))
    }

    /// Whether a pair of files is eligible for merging: same device
    /// (hard links cannot cross devices) and distinct inodes (same inode
    /// means the pair is already merged).
    #[must_use]
    pub fn linkable_with(self, other: Self) -> bool {
        self.dev == other.dev && self.ino != other.ino
    }
}

/// Error raised when replacing a duplicate with a hard link fails.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Creating the hard link at the temporary path failed.
    /// The duplicate is untouched.
    #[error("link to {target} failed for {duplicate}: {source}")]
    Link {
        /// Surviving file the link should point at
        target: PathBuf,
        /// Duplicate path that was being replaced
        duplicate: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Renaming the temporary link over the duplicate failed.
    /// The duplicate is untouched; the temporary link was removed.
    #[error("rename over {duplicate} failed: {source}")]
    Rename {
        /// Duplicate path that was being replaced
        duplicate: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Replace `duplicate` with a hard link to `target`.
///
/// The caller has already established that both files have identical
/// content, live on the same device, and have distinct inodes.
///
/// # Errors
///
/// Returns [`MergeError`] if the link or the rename fails. In both cases
/// the duplicate path still resolves to its original content.
pub fn replace_with_link(target: &Path, duplicate: &Path) -> Result<(), MergeError> {
    let temp = temp_sibling(duplicate);

    std::fs::hard_link(target, &temp).map_err(|source| MergeError::Link {
        target: target.to_path_buf(),
        duplicate: duplicate.to_path_buf(),
        source,
    })?;

    if let Err(source) = std::fs::rename(&temp, duplicate) {
        // Leave the tree as it was; the stray temp link must not survive.
        if let Err(e) = std::fs::remove_file(&temp) {
            log::error!("cannot remove temporary link {}: {}", temp.display(), e);
        }
        return Err(MergeError::Rename {
            duplicate: duplicate.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// Pick an unused temporary path next to `path`, on the same device.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".lndup-tmp");
    let mut candidate = path.with_file_name(&name);

    let mut counter = 0u32;
    while candidate.symlink_metadata().is_ok() {
        counter += 1;
        let mut numbered = name.clone();
        numbered.push(format!(".{counter}"));
        candidate = path.with_file_name(numbered);
    }

    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content).unwrap();
        path
    }

    #[test]
    #[cfg(unix)]
    fn test_replace_links_to_target_inode() {
        let dir = TempDir::new().unwrap();
        let target = write_file(&dir, "target", b"shared content!!");
        let duplicate = write_file(&dir, "duplicate", b"shared content!!");

        replace_with_link(&target, &duplicate).unwrap();

        assert_eq!(
            FileId::of(&target).unwrap(),
            FileId::of(&duplicate).unwrap()
        );
        assert_eq!(fs::read(&duplicate).unwrap(), b"shared content!!");
    }

    #[test]
    #[cfg(unix)]
    fn test_replace_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let target = write_file(&dir, "target", b"0123456789abcdef");
        let duplicate = write_file(&dir, "duplicate", b"0123456789abcdef");

        replace_with_link(&target, &duplicate).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert!(
            names.iter().all(|n| !n.contains("lndup-tmp")),
            "stray temp entry in {names:?}"
        );
    }

    #[test]
    fn test_replace_missing_target_keeps_duplicate() {
        let dir = TempDir::new().unwrap();
        let duplicate = write_file(&dir, "duplicate", b"precious content");
        let missing = dir.path().join("missing");

        let err = replace_with_link(&missing, &duplicate).unwrap_err();

        assert!(matches!(err, MergeError::Link { .. }));
        assert_eq!(fs::read(&duplicate).unwrap(), b"precious content");
    }

    #[test]
    fn test_temp_sibling_avoids_collisions() {
        let dir = TempDir::new().unwrap();
        let base = write_file(&dir, "file", b"x");
        write_file(&dir, "file.lndup-tmp", b"y");

        let temp = temp_sibling(&base);
        assert!(temp.symlink_metadata().is_err());
        assert_eq!(temp.parent(), base.parent());
    }

    #[test]
    fn test_linkable_with() {
        let a = FileId { dev: 1, ino: 10 };
        let b = FileId { dev: 1, ino: 11 };
        let c = FileId { dev: 2, ino: 10 };

        assert!(a.linkable_with(b));
        assert!(!a.linkable_with(a)); // same inode: already merged
        assert!(!a.linkable_with(c)); // cross-device: never merged
    }

    #[test]
    #[cfg(unix)]
    fn test_file_id_matches_for_hardlinks() {
        let dir = TempDir::new().unwrap();
        let original = write_file(&dir, "original", b"content goes here");
        let link = dir.path().join("link");
        fs::hard_link(&original, &link).unwrap();

        assert_eq!(FileId::of(&original).unwrap(), FileId::of(&link).unwrap());
    }
}
