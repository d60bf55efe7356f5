//! Diagnostics: the static descriptor registry, rendered diagnostics, and
//! the sinks hosts hand them to.

mod descriptor;
mod message;
mod report;
mod sink;

pub use descriptor::{
    descriptor, supported_diagnostics, DiagnosticDescriptor, Severity, ENDPOINT_MISMATCH,
    ENDPOINT_UNVERIFIABLE,
};
pub use message::{format_message, strip_quotes};
pub use report::diagnostic_for;
pub use sink::{CollectingSink, DiagnosticSink};

use serde::Serialize;
use std::fmt;

use crate::syntax::Location;

/// One reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub id: &'static str,
    pub severity: Severity,
    pub category: &'static str,
    pub message: String,
    /// Positional message arguments, as substituted into `message`.
    pub arguments: Vec<String>,
    /// `None` only when no declaration of the method sits in the body's tree.
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn create(
        descriptor: &'static DiagnosticDescriptor,
        location: Option<Location>,
        arguments: Vec<String>,
    ) -> Self {
        Self {
            id: descriptor.id,
            severity: descriptor.severity,
            category: descriptor.category,
            message: format_message(descriptor.message_format, &arguments),
            arguments,
            location,
        }
    }

    /// Ordering key for stable reports: location first, then id.
    pub fn sort_key(&self) -> (Option<&Location>, &'static str) {
        (self.location.as_ref(), self.id)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{loc}: ")?,
            None => write!(f, "<unknown>: ")?,
        }
        write!(f, "{}[{}]: {}", self.severity, self.id, self.message)
    }
}
