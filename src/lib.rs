//! lndup - Hardlink-based file deduplicator
//!
//! Replaces byte-identical regular files with hard links to a single
//! inode. Candidates are discovered from glob patterns, grouped by size,
//! verified equal by streamed byte comparison, and merged in a single
//! deterministic pass. The first file seen in size-sorted order survives
//! as the target for its content.

pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod logging;
pub mod scanner;

use anyhow::Result;

use cli::Cli;
use config::Config;
use dedup::run_pass;
use error::ExitCode;
use scanner::{collect_candidates, expand_patterns};

/// Run the full dedup pipeline for parsed CLI arguments.
///
/// Expansion and collection failures are contained per file; the only
/// terminating condition short of a fatal error is an empty candidate
/// set, which maps to [`ExitCode::NoCandidates`].
///
/// # Errors
///
/// Returns an error only for unexpected fatal conditions; per-file and
/// per-pair failures are logged and reflected in the summary instead.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let config = Config::from_cli(&cli);

    let paths = expand_patterns(&cli.patterns);
    log::debug!("Expanded {} pattern(s) into {} file(s)", cli.patterns.len(), paths.len());

    let mut candidates = collect_candidates(paths, config.min_size);
    if candidates.is_empty() {
        log::warn!("no files");
        return Ok(ExitCode::NoCandidates);
    }
    log::debug!("Collected {} candidate(s)", candidates.len());

    let stats = run_pass(&mut candidates, config.dry_run);
    log::info!("{}", stats.summary(config.dry_run));

    Ok(ExitCode::Success)
}
