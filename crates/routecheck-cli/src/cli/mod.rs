//! CLI for the routecheck endpoint convention checker.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use routecheck_core::config::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_check, run_completions, run_normalize, run_rules, CheckArgs};

/// Top-level CLI for routecheck.
#[derive(Debug, Parser)]
#[command(name = "routecheck")]
#[command(
    about = "routecheck: check declared endpoint templates against the paths methods build",
    long_about = None
)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scan Rust sources and report endpoint template mismatches.
    Check {
        /// Files or directories to scan.
        #[arg(default_value = ".", value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Report format (overrides config).
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<FormatArg>,

        /// Worker threads for the scan (overrides config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,

        /// Attribute name that declares a method's endpoint template (overrides config).
        #[arg(long, value_name = "NAME")]
        marker: Option<String>,

        /// Read configuration from this file instead of the XDG config dir.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Exit with failure when any diagnostic is reported.
        #[arg(long)]
        deny_warnings: bool,
    },

    /// List the diagnostics routecheck can report.
    Rules,

    /// Print the normalized form of an endpoint template.
    Normalize {
        /// Template such as `repos/:owner/:repo/issues/events`.
        template: String,
    },

    /// Generate shell completions on stdout.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// `--format` values; mirrors [`OutputFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        match self.command {
            CliCommand::Check {
                paths,
                format,
                jobs,
                marker,
                config,
                deny_warnings,
            } => {
                let args = CheckArgs {
                    paths,
                    format: format.map(OutputFormat::from),
                    jobs,
                    marker,
                    config,
                    deny_warnings,
                };
                run_check(&args)
            }
            CliCommand::Rules => {
                run_rules();
                Ok(ExitCode::SUCCESS)
            }
            CliCommand::Normalize { template } => {
                run_normalize(&template);
                Ok(ExitCode::SUCCESS)
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[cfg(test)]
mod tests;
