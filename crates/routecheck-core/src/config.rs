use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rule::DEFAULT_MARKER;
use crate::scan::ScanSettings;

/// Report format for `routecheck check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/routecheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCheckConfig {
    /// Annotation name that declares a method's endpoint template.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Directory names skipped while collecting sources.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    /// Worker threads for the scan (None = one per CPU).
    #[serde(default)]
    pub jobs: Option<usize>,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_exclude_dirs() -> Vec<String> {
    vec!["target".to_string(), ".git".to_string()]
}

impl Default for RouteCheckConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            exclude_dirs: default_exclude_dirs(),
            jobs: None,
            format: OutputFormat::Text,
        }
    }
}

impl RouteCheckConfig {
    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            marker: self.marker.clone(),
            exclude_dirs: self.exclude_dirs.clone(),
            jobs: self.jobs,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("routecheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RouteCheckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RouteCheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path, which must exist.
pub fn load_from(path: &Path) -> Result<RouteCheckConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: RouteCheckConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = RouteCheckConfig::default();
        assert_eq!(cfg.marker, "endpoint");
        assert_eq!(cfg.exclude_dirs, vec!["target", ".git"]);
        assert!(cfg.jobs.is_none());
        assert_eq!(cfg.format, OutputFormat::Text);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RouteCheckConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RouteCheckConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.marker, cfg.marker);
        assert_eq!(parsed.exclude_dirs, cfg.exclude_dirs);
        assert_eq!(parsed.format, cfg.format);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            marker = "Endpoint"
            exclude_dirs = ["target", "generated"]
            jobs = 4
            format = "json"
        "#;
        let cfg: RouteCheckConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.marker, "Endpoint");
        assert_eq!(cfg.exclude_dirs, vec!["target", "generated"]);
        assert_eq!(cfg.jobs, Some(4));
        assert_eq!(cfg.format, OutputFormat::Json);

        let settings = cfg.scan_settings();
        assert_eq!(settings.marker, "Endpoint");
        assert_eq!(settings.jobs, Some(4));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: RouteCheckConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.marker, "endpoint");
        assert_eq!(cfg.exclude_dirs, vec!["target", ".git"]);
    }

    #[test]
    fn load_from_reports_bad_toml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"marker = [").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from(&dir.path().join("config.toml")).is_err());
    }
}
