//! The combined verify-and-merge pass over the size-sorted candidate set.
//!
//! Candidates are sorted by size so that equal-size files form contiguous
//! runs, then scanned once with an outer cursor `o` and an inner cursor `l`
//! that walks forward while sizes match. Each eligible pair is compared
//! byte-by-byte; confirmed duplicates are replaced with a hard link to the
//! outer file and marked resolved in place, which keeps indices stable and
//! guarantees they are never revisited.
//!
//! The first candidate of a given content within the sorted order becomes
//! the permanent merge target: once a later candidate has been linked to
//! it, any comparison against that candidate finds an identical device and
//! inode and skips re-linking, so the choice is transitive.

use crate::scanner::Candidate;

use super::compare::files_identical;
use super::merge::{replace_with_link, FileId};

/// Outcome counters for one dedup run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupStats {
    /// Number of candidates that entered the pass.
    pub candidates: usize,
    /// Duplicates merged (or, in a dry run, that would have been merged).
    pub merged: usize,
    /// Bytes reclaimed by the merges.
    pub bytes_reclaimed: u64,
    /// Per-pair errors reported during the pass (all non-fatal).
    pub errors: usize,
}

impl DedupStats {
    /// Human-readable one-line summary of the run.
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> String {
        let verb = if dry_run { "Would merge" } else { "Merged" };
        if self.errors == 0 {
            format!(
                "{} {} of {} file(s), reclaiming {}",
                verb,
                self.merged,
                self.candidates,
                bytesize::ByteSize(self.bytes_reclaimed)
            )
        } else {
            format!(
                "{} {} of {} file(s), reclaiming {}; {} error(s)",
                verb,
                self.merged,
                self.candidates,
                bytesize::ByteSize(self.bytes_reclaimed),
                self.errors
            )
        }
    }
}

/// Sort the candidates by size and run the verify-and-merge sweep.
///
/// The candidate slice is mutated: it is reordered by ascending size
/// (discovery order breaks ties, the sort being stable) and merged entries
/// get their `resolved` flag set.
///
/// Every per-pair failure is logged and counted but never aborts the
/// sweep; the pass always visits the full candidate set.
pub fn run_pass(candidates: &mut [Candidate], dry_run: bool) -> DedupStats {
    candidates.sort_by_key(|c| c.size);

    let mut stats = DedupStats {
        candidates: candidates.len(),
        ..Default::default()
    };

    for o in 0..candidates.len() {
        if candidates[o].resolved {
            continue;
        }

        let outer_path = candidates[o].path.clone();
        let outer_size = candidates[o].size;

        // Metadata was valid at collection time; a failure now means the
        // file vanished underneath us, so skip it as a target.
        let outer_id = match FileId::of(&outer_path) {
            Ok(id) => id,
            Err(e) => {
                log::error!("stat failed for {}: {}", outer_path.display(), e);
                stats.errors += 1;
                continue;
            }
        };

        let mut l = o + 1;
        while l < candidates.len() && candidates[l].size == outer_size {
            if !candidates[l].resolved {
                let outcome = examine_pair(&outer_path, outer_id, &candidates[l], dry_run);
                match outcome {
                    PairOutcome::Merged => {
                        candidates[l].resolved = true;
                        stats.merged += 1;
                        stats.bytes_reclaimed += outer_size;
                    }
                    PairOutcome::Distinct => {}
                    PairOutcome::Failed => stats.errors += 1,
                }
            }
            l += 1;
        }
    }

    stats
}

enum PairOutcome {
    /// Contents matched and the duplicate was linked (or would be).
    Merged,
    /// Pair is not a merge: different device, already linked, or
    /// different content.
    Distinct,
    /// A reported, non-fatal error; the pair is abandoned.
    Failed,
}

/// Check one candidate against the current outer target and merge it if
/// the contents prove identical.
fn examine_pair(
    target: &std::path::Path,
    target_id: FileId,
    candidate: &Candidate,
    dry_run: bool,
) -> PairOutcome {
    let candidate_id = match FileId::of(&candidate.path) {
        Ok(id) => id,
        Err(e) => {
            log::error!("stat failed for {}: {}", candidate.path.display(), e);
            return PairOutcome::Failed;
        }
    };

    if !target_id.linkable_with(candidate_id) {
        log::trace!(
            "Skipping {} vs {}: {}",
            target.display(),
            candidate.path.display(),
            if target_id.dev == candidate_id.dev {
                "already linked"
            } else {
                "different device"
            }
        );
        return PairOutcome::Distinct;
    }

    match files_identical(target, &candidate.path) {
        Ok(false) => PairOutcome::Distinct,
        Ok(true) => {
            log::info!("DEDUP: {} {}", target.display(), candidate.path.display());

            if dry_run {
                return PairOutcome::Merged;
            }

            match replace_with_link(target, &candidate.path) {
                Ok(()) => PairOutcome::Merged,
                Err(e) => {
                    log::error!("{}", e);
                    PairOutcome::Failed
                }
            }
        }
        Err(e) => {
            log::error!("{}", e);
            PairOutcome::Failed
        }
    }
}
