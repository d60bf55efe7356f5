//! `routecheck rules` – list the supported diagnostics.

use routecheck_core::diagnostics::{supported_diagnostics, DiagnosticDescriptor};

pub fn run_rules() {
    println!(
        "{:<10} {:<8} {:<8} {}",
        "ID", "SEVERITY", "CATEGORY", "TITLE"
    );
    for d in supported_diagnostics() {
        println!("{}", rule_line(d));
    }
}

fn rule_line(d: &DiagnosticDescriptor) -> String {
    format!(
        "{:<10} {:<8} {:<8} {}",
        d.id,
        d.severity.to_string(),
        d.category,
        d.title
    )
}
