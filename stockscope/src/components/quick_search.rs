//! Plain search listing: hits rendered as name/symbol links, no enrichment.

use std::sync::Arc;

use crate::StockScope;
use crate::view::results::{QUICK_NO_RESULTS, QuickCard, ResultsView};

/// Shown for a blank query.
pub const EMPTY_QUERY: &str = "Please enter a search term";
/// Shown when the search call fails.
pub const SEARCH_FAILED: &str =
    "Failed to search companies, please check your API key and try again.";

/// Quick search component.
pub struct QuickSearch {
    scope: Arc<StockScope>,
}

impl QuickSearch {
    /// Create the component over a shared orchestrator.
    #[must_use]
    pub const fn new(scope: Arc<StockScope>) -> Self {
        Self { scope }
    }

    /// Run one search and return what the results area should show.
    #[tracing::instrument(target = "stockscope::components", skip(self))]
    pub async fn search(&self, query: &str) -> ResultsView {
        let query = query.trim();
        if query.is_empty() {
            return ResultsView::Error(EMPTY_QUERY.to_string());
        }
        match self.scope.search(query).await {
            Ok(hits) if hits.is_empty() => ResultsView::NoResults(QUICK_NO_RESULTS.to_string()),
            Ok(hits) => ResultsView::QuickCards(hits.iter().map(QuickCard::from).collect()),
            Err(e) => {
                tracing::error!(target: "stockscope::components", query = %query, error = %e, "quick search failed");
                ResultsView::Error(SEARCH_FAILED.to_string())
            }
        }
    }
}
