//! Helpers for writing small client source trees to a temp dir.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `(relative path, content)` pairs under a fresh temp dir.
pub fn source_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (rel, content) in files {
        write(dir.path(), rel, content);
    }
    dir
}

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// An issue-events client whose single method declares `template` and
/// formats the request path with `body`.
pub fn issue_events_client(template: &str, body: &str) -> String {
    format!(
        r#"use crate::connection::ApiConnection;
use crate::ensure;

pub struct IssueEventsClient {{
    connection: ApiConnection,
}}

impl IssueEventsClient {{
    /// Gets all the issue events for a given repository.
    #[endpoint("{template}")]
    pub async fn get_all_for_repository(&self, owner: &str, name: &str) -> Result<Vec<String>> {{
        ensure::not_empty(owner, "owner")?;
        ensure::not_empty(name, "name")?;

{body}
    }}
}}
"#
    )
}
