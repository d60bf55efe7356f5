//! Collects Rust source files to scan.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::frontend::SourceFile;

/// Load every `.rs` file under `root` (or `root` itself when it is a `.rs`
/// file), skipping directories whose name is in `exclude_dirs` and
/// symlinked directories. Sorted by relative path.
///
/// Content is decoded lossily; invalid UTF-8 never stops a scan.
pub fn load_sources(root: &Path, exclude_dirs: &[String]) -> Result<Vec<SourceFile>, ScanError> {
    if !root.exists() {
        return Err(ScanError::MissingPath(root.to_path_buf()));
    }

    let mut paths = Vec::new();
    if root.is_file() {
        if is_rust_source(root) {
            paths.push(root.to_path_buf());
        } else {
            tracing::debug!("ignoring non-Rust file {}", root.display());
        }
    } else {
        collect_rs_paths(root, exclude_dirs, &mut paths)?;
    }
    paths.sort();

    let base = if root.is_file() {
        root.parent().unwrap_or(root)
    } else {
        root
    };

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = fs::read(&path).map_err(|e| ScanError::io(&path, e))?;
        let content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("{} is not valid UTF-8, decoding lossily", path.display());
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        let rel_path = path
            .strip_prefix(base)
            .ok()
            .filter(|p| !p.as_os_str().is_empty())
            .map(normalize_path)
            .unwrap_or_else(|| normalize_path(&path));
        files.push(SourceFile { rel_path, content });
    }
    Ok(files)
}

fn collect_rs_paths(
    dir: &Path,
    exclude_dirs: &[String],
    out: &mut Vec<PathBuf>,
) -> Result<(), ScanError> {
    for entry in fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))? {
        let entry = entry.map_err(|e| ScanError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| ScanError::io(entry.path(), e))?;
        let path = entry.path();
        if file_type.is_dir() {
            let skip = path
                .file_name()
                .and_then(|s| s.to_str())
                .is_some_and(|name| exclude_dirs.iter().any(|d| d == name));
            if !skip {
                collect_rs_paths(&path, exclude_dirs, out)?;
            }
        } else if is_rust_source(&path) && path.is_file() {
            // Symlinked files are followed; symlinked directories are not.
            out.push(path);
        }
    }
    Ok(())
}

fn is_rust_source(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("rs")
}

fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
