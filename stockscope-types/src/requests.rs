//! Request types passed to connectors.

use serde::{Deserialize, Serialize};

use crate::error::ScopeError;

/// Free-text symbol search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    query: String,
    limit: Option<usize>,
    exchange: Option<String>,
}

impl SearchRequest {
    /// Build a request for `query` with no limit and no exchange filter.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the query is empty or only whitespace.
    pub fn new(query: impl AsRef<str>) -> Result<Self, ScopeError> {
        let q = query.as_ref().trim();
        if q.is_empty() {
            return Err(ScopeError::InvalidArg("search query must not be empty".into()));
        }
        Ok(Self {
            query: q.to_string(),
            limit: None,
            exchange: None,
        })
    }

    /// Cap the number of hits the upstream returns.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restrict hits to one exchange.
    #[must_use]
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// The trimmed query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Hit cap, if any.
    #[must_use]
    pub const fn max_results(&self) -> Option<usize> {
        self.limit
    }

    /// Exchange filter, if any.
    #[must_use]
    pub fn exchange_filter(&self) -> Option<&str> {
        self.exchange.as_deref()
    }
}
