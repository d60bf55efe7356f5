//! `routecheck check` – scan sources and print the report.

use anyhow::{Context, Result};
use routecheck_core::config::{self, OutputFormat, RouteCheckConfig};
use routecheck_core::scan::{scan_paths, ScanReport};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

/// Parsed `check` arguments; `None` fields fall back to config.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub paths: Vec<PathBuf>,
    pub format: Option<OutputFormat>,
    pub jobs: Option<usize>,
    pub marker: Option<String>,
    pub config: Option<PathBuf>,
    pub deny_warnings: bool,
}

pub fn run_check(args: &CheckArgs) -> Result<ExitCode> {
    let cfg = match &args.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    let cfg = apply_overrides(cfg, args);

    let report = scan_paths(&args.paths, &cfg.scan_settings()).context("scan sources")?;

    match cfg.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => {
            let json = report.to_json_pretty().context("serialize report")?;
            println!("{json}");
        }
    }

    if args.deny_warnings && !report.is_clean() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn apply_overrides(mut cfg: RouteCheckConfig, args: &CheckArgs) -> RouteCheckConfig {
    if let Some(format) = args.format {
        cfg.format = format;
    }
    if let Some(jobs) = args.jobs {
        cfg.jobs = Some(jobs);
    }
    if let Some(marker) = &args.marker {
        cfg.marker = marker.clone();
    }
    cfg
}

/// One line per diagnostic and parse failure, then a summary.
fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();
    for d in &report.diagnostics {
        let _ = writeln!(out, "{d}");
    }
    for failure in &report.parse_failures {
        let _ = writeln!(out, "{}: skipped: {}", failure.path, failure.message);
    }
    let _ = writeln!(
        out,
        "{} file(s), {} method(s) checked, {} diagnostic(s), {} unparseable file(s)",
        report.files_scanned,
        report.methods_analyzed,
        report.diagnostics.len(),
        report.parse_failures.len()
    );
    out
}
