//! Logging init: append to a file under the XDG state dir, or log to stderr
//! when that is not possible.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Location of the log file: `~/.local/state/routecheck/routecheck.log`.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("routecheck")?;
    Ok(xdg_dirs.get_state_home().join("routecheck.log"))
}

/// Filter used when `RUST_LOG` is unset; `verbose` is the count of `-v` flags.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn,routecheck_core=info",
        1 => "info,routecheck_core=debug",
        _ => "debug,routecheck_core=trace",
    }
}

fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)))
}

/// Initialize structured logging to the state-dir log file and return its path.
/// On failure (e.g. state dir unwritable), returns Err so the caller can fall
/// back to [`init_logging_stderr`].
pub fn init_logging(verbose: u8) -> Result<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::debug!("routecheck logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only.
pub fn init_logging_stderr(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
