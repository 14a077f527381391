//! Command-line interface definitions for lndup.
//!
//! All arguments are defined with the clap derive API. The CLI is the thin
//! glue layer: it produces a set of root patterns plus a [`crate::config::Config`]
//! for the core pipeline and owns nothing else.
//!
//! # Example
//!
//! ```bash
//! # Deduplicate everything under a directory
//! lndup ~/backups
//!
//! # Only consider files of 1MiB and up, report without changing anything
//! lndup -n -m 1MiB ~/backups ~/archive
//!
//! # Quiet mode: only errors are printed
//! lndup -q '/srv/media/*'
//! ```

use clap::Parser;

/// Deduplicates byte-identical files by replacing them with hard links.
///
/// Files are grouped by size, verified equal by direct byte comparison
/// (no hashing), and merged onto a single inode. Merges never cross
/// devices and never alter file contents.
#[derive(Debug, Parser)]
#[command(name = "lndup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path or glob patterns to deduplicate (directories are recursed into)
    #[arg(value_name = "PATTERNS", required = true)]
    pub patterns: Vec<String>,

    /// Minimum file size to consider (e.g., 16, 4KiB, 1MB)
    ///
    /// Supports suffixes: B, KB, KiB, MB, MiB, GB, GiB, TB, TiB
    #[arg(short, long, value_name = "SIZE", default_value = "16", value_parser = parse_size)]
    pub min_size: u64,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run: report intended merges, make no filesystem changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a human-readable size string into bytes.
///
/// Supports suffixes: B, KB, KiB, MB, MiB, GB, GiB, TB, TiB.
/// Case-insensitive. Numbers without suffix are treated as bytes.
///
/// # Examples
///
/// ```
/// use lndup::cli::parse_size;
///
/// assert_eq!(parse_size("1024").unwrap(), 1024);
/// assert_eq!(parse_size("1KB").unwrap(), 1000);
/// assert_eq!(parse_size("1KiB").unwrap(), 1024);
/// ```
///
/// # Errors
///
/// Returns an error if the string is empty, contains an invalid number,
/// a negative number, or an unknown size suffix.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Size cannot be empty".to_string());
    }

    // Find where the number ends and the suffix begins
    let (num_str, suffix) = match s.find(|c: char| !c.is_ascii_digit() && c != '.') {
        Some(idx) => (&s[..idx], s[idx..].trim().to_uppercase()),
        None => (s, String::new()),
    };

    let num: f64 = num_str
        .parse()
        .map_err(|_| format!("Invalid number: '{num_str}'"))?;

    if num < 0.0 {
        return Err("Size cannot be negative".to_string());
    }

    let multiplier: u64 = match suffix.as_str() {
        "" | "B" => 1,
        "KB" | "K" => 1_000,
        "KIB" => 1_024,
        "MB" | "M" => 1_000_000,
        "MIB" => 1_048_576,
        "GB" | "G" => 1_000_000_000,
        "GIB" => 1_073_741_824,
        "TB" | "T" => 1_000_000_000_000,
        "TIB" => 1_099_511_627_776,
        _ => return Err(format!("Unknown size suffix: '{suffix}'")),
    };

    Ok((num * multiplier as f64) as u64)
}
