//! Duplicate verification and merge execution.
//!
//! # Overview
//!
//! The dedup half of the pipeline runs as a single pass over the
//! size-sorted candidate set:
//! - [`pass`]: the sort plus the combined verify-and-merge sweep
//! - [`compare`]: streamed byte-by-byte content comparison
//! - [`merge`]: hardlink substitution with atomic rename
//!
//! # Example
//!
//! ```no_run
//! use lndup::scanner::{collect_candidates, expand_pattern};
//! use lndup::dedup::run_pass;
//!
//! let paths = expand_pattern("/data/*");
//! let mut candidates = collect_candidates(paths, 16);
//! let stats = run_pass(&mut candidates, false);
//! println!("{}", stats.summary(false));
//! ```

pub mod compare;
pub mod merge;
pub mod pass;

pub use compare::{files_identical, CompareError, CHUNK_SIZE};
pub use merge::{replace_with_link, FileId, MergeError};
pub use pass::{run_pass, DedupStats};
