//! Destinations for reported diagnostics.

use std::sync::Mutex;

use super::Diagnostic;

/// Receives diagnostics from the engine. Implementations must accept
/// reports from several workers at once.
pub trait DiagnosticSink: Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that keeps everything it is given, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collected diagnostics ordered by location, then id.
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut out = self
            .diagnostics
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        out.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        out
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A panicking producer cannot leave the Vec half-pushed.
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}
