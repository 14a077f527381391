//! Streamed byte-by-byte content comparison.
//!
//! Equality is established by reading both files in fixed-size chunks and
//! comparing them directly. No digests are involved, so a positive result
//! can never be a collision.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Chunk size for streamed comparison.
pub const CHUNK_SIZE: usize = 4096;

/// Error raised when a file involved in a comparison cannot be read.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Opening a file for reading failed.
    #[error("cannot open {path}: {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading from an already-open file failed.
    #[error("read error on {path}: {source}")]
    Read {
        /// Path being read when the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Compare two files' contents, streaming in [`CHUNK_SIZE`] chunks.
///
/// Returns `Ok(true)` when every byte of `first` was matched by `second`
/// and `first` reached end-of-input. A short read or byte mismatch on
/// `second` yields `Ok(false)` immediately without reading further.
///
/// Both files are expected to have equal size (the caller groups by size);
/// the comparison is still correct when they do not, since a short read on
/// `second` terminates it.
///
/// # Errors
///
/// Returns [`CompareError`] if either file cannot be opened or read.
pub fn files_identical(first: &Path, second: &Path) -> Result<bool, CompareError> {
    let mut f1 = open(first)?;
    let mut f2 = open(second)?;

    let mut buf1 = [0u8; CHUNK_SIZE];
    let mut buf2 = [0u8; CHUNK_SIZE];

    loop {
        let n = read_full(&mut f1, &mut buf1, first)?;
        if n == 0 {
            // first exhausted with every chunk matched
            return Ok(true);
        }

        let m = read_full(&mut f2, &mut buf2[..n], second)?;
        if m < n || buf1[..n] != buf2[..n] {
            return Ok(false);
        }
    }
}

fn open(path: &Path) -> Result<File, CompareError> {
    File::open(path).map_err(|source| CompareError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Read as many bytes as the buffer holds, stopping early only at EOF.
///
/// `Read::read` may return short counts mid-stream; looping here keeps the
/// chunk-to-chunk pairing between the two files intact.
fn read_full(file: &mut File, buf: &mut [u8], path: &Path) -> Result<usize, CompareError> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(source) => {
                return Err(CompareError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
    Ok(filled)
}
