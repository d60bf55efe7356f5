//! routecheck: checks that each method's declared endpoint template matches
//! the request path its body actually builds.
//!
//! The rule engine ([`rule`]) works on a host-neutral syntax model
//! ([`syntax`]); [`frontend`] lowers Rust sources into it and [`scan`] runs
//! the rule over a source tree in parallel.

pub mod config;
pub mod logging;

pub mod diagnostics;
pub mod error;
pub mod frontend;
pub mod locate;
pub mod rule;
pub mod scan;
pub mod syntax;
pub mod template;
pub mod walker;

pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use rule::{analyze, EndpointAnalyzer, Outcome};
