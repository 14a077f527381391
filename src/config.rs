//! Runtime configuration for the dedup pipeline.
//!
//! The core stages take an explicit [`Config`] value rather than reading
//! ambient state; the CLI layer is the only producer. There is no config
//! file and no environment layering.

use crate::cli::Cli;

/// Default minimum candidate size in bytes.
pub const DEFAULT_MIN_SIZE: u64 = 16;

/// Configuration consumed by the core pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum file size, in bytes, for a file to become a candidate.
    pub min_size: u64,
    /// When set, report intended merges without touching the filesystem.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            dry_run: false,
        }
    }
}

impl Config {
    /// Build the pipeline configuration from parsed CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            min_size: cli.min_size,
            dry_run: cli.dry_run,
        }
    }

    /// Effective quiet flag for logging.
    ///
    /// A dry run exists to show what would happen, so it overrides
    /// `--quiet` (matching `-n` forcing verbose output historically).
    #[must_use]
    pub fn effective_quiet(cli: &Cli) -> bool {
        cli.quiet && !cli.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.min_size, 16);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::try_parse_from(["lndup", "-n", "-m", "64", "/p"]).unwrap();
        let config = Config::from_cli(&cli);

        assert_eq!(config.min_size, 64);
        assert!(config.dry_run);
    }

    #[test]
    fn test_dry_run_overrides_quiet() {
        let cli = Cli::try_parse_from(["lndup", "-q", "-n", "/p"]).unwrap();
        assert!(!Config::effective_quiet(&cli));

        let cli = Cli::try_parse_from(["lndup", "-q", "/p"]).unwrap();
        assert!(Config::effective_quiet(&cli));
    }
}
