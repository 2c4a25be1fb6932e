//! Report envelopes produced by the enrichment fan-out.

use serde::{Deserialize, Serialize};

use crate::error::ScopeError;

/// Outcome of a batch enrichment.
///
/// `items` holds the surviving records in input order. Per-symbol failures that
/// were absorbed by the policy are kept in `warnings` for diagnostics only; they
/// are never shown to end users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichReport<T> {
    /// Enriched (or fallback) records, in input order.
    pub items: Vec<T>,
    /// Non-fatal failures absorbed while enriching.
    pub warnings: Vec<ScopeError>,
}

impl<T> Default for EnrichReport<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl<T> EnrichReport<T> {
    /// Number of records that survived enrichment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no record survived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
