//! The two diagnostic kinds this checker reports.

use serde::Serialize;
use std::fmt;

/// Both diagnostic kinds are advisory; `--deny-warnings` is how a caller
/// turns them into a failing exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// Static description of one diagnostic kind. `message_format` takes
/// positional `{0}`, `{1}`, ... arguments.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub message_format: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub enabled_by_default: bool,
    pub description: &'static str,
}

/// Method declares an endpoint but binds no `uri` literal to compare with.
/// Arguments: method name.
pub static ENDPOINT_UNVERIFIABLE: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "ROUTE001",
    title: "Endpoint cannot be verified",
    message_format: "Method '{0}' does not assign a local `uri` to audit.",
    category: "Naming",
    severity: Severity::Warning,
    enabled_by_default: true,
    description: "The method carries an endpoint annotation, but its body does not bind the \
                  request path to a local `uri` formatted from a string literal, so the \
                  declared route cannot be checked.",
};

/// Declared template and formatted literal disagree.
/// Arguments: method name, declared template, actual literal.
pub static ENDPOINT_MISMATCH: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "ROUTE002",
    title: "Endpoint does not match request path",
    message_format: "Method '{0}' declares it consumes '{1}' but actually uses '{2}'",
    category: "Naming",
    severity: Severity::Warning,
    enabled_by_default: true,
    description: "The route template in the endpoint annotation, with its named placeholders \
                  numbered positionally, differs from the path literal the method formats.",
};

static SUPPORTED: [&DiagnosticDescriptor; 2] = [&ENDPOINT_UNVERIFIABLE, &ENDPOINT_MISMATCH];

/// Every descriptor the engine can report, in id order.
pub fn supported_diagnostics() -> &'static [&'static DiagnosticDescriptor] {
    &SUPPORTED
}

pub fn descriptor(id: &str) -> Option<&'static DiagnosticDescriptor> {
    SUPPORTED.iter().copied().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_are_unique_and_sorted() {
        let ids: Vec<_> = supported_diagnostics().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["ROUTE001", "ROUTE002"]);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(descriptor("ROUTE002"), Some(&ENDPOINT_MISMATCH));
        assert!(descriptor("ROUTE999").is_none());
    }

    #[test]
    fn severity_renders_lowercase() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[test]
    fn both_kinds_are_warnings() {
        for d in supported_diagnostics() {
            assert_eq!(d.severity, Severity::Warning);
            assert!(d.enabled_by_default);
        }
    }
}
