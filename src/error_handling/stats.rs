//! Per-verification failure tally.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Counts absorbed failures by kind for one verification.
///
/// Request-scoped: created by the orchestrator at the start of a verification
/// and dropped at its end, so it can never influence another request's result.
#[derive(Debug, Clone)]
pub struct FailureTally {
    counts: HashMap<FailureKind, usize>,
}

impl FailureTally {
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in FailureKind::iter() {
            counts.insert(kind, 0);
        }
        FailureTally { counts }
    }

    /// Records one failure of the given kind.
    pub fn record(&mut self, kind: FailureKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn count(&self, kind: FailureKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Renders non-zero counts as `kind=count` pairs in a stable order.
    pub fn summary(&self) -> String {
        let parts: Vec<String> = FailureKind::iter()
            .filter(|kind| self.count(*kind) > 0)
            .map(|kind| format!("{}={}", kind, self.count(kind)))
            .collect();
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl Default for FailureTally {
    fn default() -> Self {
        Self::new()
    }
}
