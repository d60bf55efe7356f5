use clap::Parser;
use routecheck_core::logging;
use std::process::ExitCode;

mod cli;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.verbose) {
        logging::init_logging_stderr(cli.verbose);
        tracing::warn!("log file unavailable, logging to stderr: {err:#}");
    }

    match cli.run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("routecheck error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
