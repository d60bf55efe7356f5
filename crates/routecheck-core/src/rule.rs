//! The endpoint rule: compare a method's declared route template with the
//! path literal its body formats.
//!
//! Evaluation is a short, stateless decision per method:
//!
//! - no declared template: [`Outcome::NotApplicable`]
//! - template but no `uri` literal: [`Outcome::Unverifiable`]
//! - normalized template equals the literal: [`Outcome::Verified`]
//! - otherwise: [`Outcome::Mismatch`]
//!
//! Comparison is exact text equality, quote characters included.

use crate::diagnostics::{
    diagnostic_for, supported_diagnostics, Diagnostic, DiagnosticDescriptor, DiagnosticSink,
};
use crate::locate::{actual_url_literal, declared_template};
use crate::syntax::{Location, MethodUnit};
use crate::template::normalize;

/// Annotation name recognized as the endpoint marker unless configured otherwise.
pub const DEFAULT_MARKER: &str = "endpoint";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NotApplicable,
    Unverifiable {
        method: String,
        location: Option<Location>,
    },
    /// `declared` and `actual` are the raw literal texts, before normalization.
    Mismatch {
        method: String,
        declared: String,
        actual: String,
        location: Option<Location>,
    },
    Verified,
}

impl Outcome {
    pub fn is_reported(&self) -> bool {
        matches!(self, Outcome::Unverifiable { .. } | Outcome::Mismatch { .. })
    }
}

/// Checks methods against the endpoint convention. Holds no per-method
/// state, so one analyzer can be shared by any number of workers.
#[derive(Debug, Clone)]
pub struct EndpointAnalyzer {
    marker: String,
}

impl Default for EndpointAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl EndpointAnalyzer {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn supported_diagnostics(&self) -> &'static [&'static DiagnosticDescriptor] {
        supported_diagnostics()
    }

    pub fn evaluate(&self, method: &MethodUnit) -> Outcome {
        let Some(declared) = declared_template(method, &self.marker) else {
            return Outcome::NotApplicable;
        };

        let location = method.location_in_body_tree().cloned();
        let Some(actual) = actual_url_literal(method) else {
            return Outcome::Unverifiable {
                method: method.name.clone(),
                location,
            };
        };

        if normalize(declared) == actual {
            Outcome::Verified
        } else {
            Outcome::Mismatch {
                method: method.name.clone(),
                declared: declared.to_string(),
                actual: actual.to_string(),
                location,
            }
        }
    }

    /// Zero or one diagnostic for `method`.
    pub fn analyze(&self, method: &MethodUnit) -> Option<Diagnostic> {
        let outcome = self.evaluate(method);
        if outcome.is_reported() {
            tracing::debug!(method = %method.name, ?outcome, "endpoint rule reported");
        }
        diagnostic_for(outcome)
    }

    /// Analyze `method` and hand any diagnostic to `sink`.
    pub fn run(&self, method: &MethodUnit, sink: &dyn DiagnosticSink) {
        if let Some(diagnostic) = self.analyze(method) {
            sink.report(diagnostic);
        }
    }
}

/// [`EndpointAnalyzer::analyze`] with the default marker.
pub fn analyze(method: &MethodUnit) -> Option<Diagnostic> {
    EndpointAnalyzer::default().analyze(method)
}
