//! Maps rule outcomes to diagnostics.

use super::{strip_quotes, Diagnostic, ENDPOINT_MISMATCH, ENDPOINT_UNVERIFIABLE};
use crate::rule::Outcome;

/// The diagnostic an outcome reports, if any. `NotApplicable` and
/// `Verified` are silent.
pub fn diagnostic_for(outcome: Outcome) -> Option<Diagnostic> {
    match outcome {
        Outcome::NotApplicable | Outcome::Verified => None,
        Outcome::Unverifiable { method, location } => Some(Diagnostic::create(
            &ENDPOINT_UNVERIFIABLE,
            location,
            vec![method],
        )),
        Outcome::Mismatch {
            method,
            declared,
            actual,
            location,
        } => Some(Diagnostic::create(
            &ENDPOINT_MISMATCH,
            location,
            vec![
                method,
                strip_quotes(&declared).to_string(),
                strip_quotes(&actual).to_string(),
            ],
        )),
    }
}
