//! lndup - Hardlink-based file deduplicator
//!
//! Entry point for the lndup CLI.

use clap::Parser;
use lndup::{cli::Cli, config::Config, error::ExitCode, logging::init_logging};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, Config::effective_quiet(&cli));

    match lndup::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            log::error!("{:#}", err);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
