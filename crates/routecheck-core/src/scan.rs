//! Parallel scan: parse files and run the endpoint rule on every method.
//!
//! Files are independent units of work on a rayon pool. Each file produces
//! its own diagnostics buffer; buffers are merged and sorted at the end so
//! the report does not depend on scheduling.

use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

use crate::diagnostics::Diagnostic;
use crate::error::ScanError;
use crate::frontend::{parse_methods, SourceFile};
use crate::rule::EndpointAnalyzer;
use crate::walker::load_sources;

/// Inputs for one scan. Built from config plus CLI overrides.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub marker: String,
    pub exclude_dirs: Vec<String>,
    /// Worker threads; `None` uses rayon's global pool.
    pub jobs: Option<usize>,
}

/// A file the frontend could not parse. Scanning continues without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    pub files_scanned: usize,
    pub methods_analyzed: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub parse_failures: Vec<ParseFailure>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Default)]
struct FileResult {
    methods: usize,
    diagnostics: Vec<Diagnostic>,
    parse_failure: Option<ParseFailure>,
}

/// Scan every path (file or directory) and return the merged report.
pub fn scan_paths(paths: &[PathBuf], settings: &ScanSettings) -> Result<ScanReport, ScanError> {
    let mut files = Vec::new();
    for path in paths {
        files.extend(load_sources(path, &settings.exclude_dirs)?);
    }
    tracing::info!(files = files.len(), marker = %settings.marker, "scanning sources");

    let analyzer = EndpointAnalyzer::new(settings.marker.clone());
    let report = match settings.jobs {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            pool.install(|| scan_sources(&analyzer, &files))
        }
        None => scan_sources(&analyzer, &files),
    };

    tracing::info!(
        methods = report.methods_analyzed,
        diagnostics = report.diagnostics.len(),
        parse_failures = report.parse_failures.len(),
        "scan finished"
    );
    Ok(report)
}

/// Analyze already-loaded sources on the current rayon pool.
pub fn scan_sources(analyzer: &EndpointAnalyzer, files: &[SourceFile]) -> ScanReport {
    let results: Vec<FileResult> = files
        .par_iter()
        .map(|file| analyze_file(analyzer, file))
        .collect();

    let mut report = ScanReport {
        files_scanned: files.len(),
        ..ScanReport::default()
    };
    for result in results {
        report.methods_analyzed += result.methods;
        report.diagnostics.extend(result.diagnostics);
        report.parse_failures.extend(result.parse_failure);
    }
    report
        .diagnostics
        .sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    report
}

fn analyze_file(analyzer: &EndpointAnalyzer, file: &SourceFile) -> FileResult {
    match parse_methods(file) {
        Ok(methods) => FileResult {
            methods: methods.len(),
            diagnostics: methods.iter().filter_map(|m| analyzer.analyze(m)).collect(),
            parse_failure: None,
        },
        Err(err) => {
            tracing::warn!(path = %file.rel_path, "skipping unparseable file: {}", err);
            FileResult {
                parse_failure: Some(ParseFailure {
                    path: file.rel_path.clone(),
                    message: err.to_string(),
                }),
                ..FileResult::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(rel_path: &str, content: &str) -> SourceFile {
        SourceFile {
            rel_path: rel_path.to_string(),
            content: content.to_string(),
        }
    }

    const MISMATCHED: &str = r#"
impl Repos {
    #[endpoint("repos/:owner/:repo/events")]
    fn events(&self, owner: &str, repo: &str) {
        let uri = "repos/{0}/{1}/issues/events".format_uri(&[owner, repo]);
        self.get(&uri);
    }
}
"#;

    #[test]
    fn counts_files_and_methods() {
        let files = vec![
            file("a.rs", MISMATCHED),
            file("b.rs", "fn plain() {}\nfn other() {}"),
        ];
        let report = scan_sources(&EndpointAnalyzer::default(), &files);
        assert_eq!(report.files_scanned, 2);
        assert_eq!(report.methods_analyzed, 3);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn diagnostics_sorted_by_location() {
        let files = vec![file("z.rs", MISMATCHED), file("a.rs", MISMATCHED)];
        let report = scan_sources(&EndpointAnalyzer::default(), &files);
        let paths: Vec<_> = report
            .diagnostics
            .iter()
            .map(|d| d.location.as_ref().unwrap().tree.as_str())
            .collect();
        assert_eq!(paths, vec!["a.rs", "z.rs"]);
    }

    #[test]
    fn json_report_shape() {
        let files = vec![file("a.rs", MISMATCHED), file("bad.rs", "impl {")];
        let report = scan_sources(&EndpointAnalyzer::default(), &files);
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["files_scanned"], 2);
        let d = &value["diagnostics"][0];
        assert_eq!(d["id"], "ROUTE002");
        assert_eq!(d["severity"], "warning");
        assert_eq!(d["category"], "Naming");
        assert_eq!(d["location"]["path"], "a.rs");
        assert_eq!(d["location"]["line"], 4);
        assert_eq!(d["arguments"][1], "repos/:owner/:repo/events");
        assert_eq!(value["parse_failures"][0]["path"], "bad.rs");
    }
}
