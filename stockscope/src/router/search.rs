use stockscope_core::{Capability, CompanyProfile, EnrichReport, ScopeError, SearchHit, SearchRequest};

use crate::StockScope;
use crate::core::tag_err;
use crate::router::enrich::{EnrichPolicy, Enriched};

impl StockScope {
    /// Free-text symbol search, capped at `search_limit` and filtered to
    /// `search_exchange`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank query (no request is made), `Unsupported`
    /// when the connector cannot search, or the connector's tagged error.
    #[tracing::instrument(target = "stockscope::router", skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ScopeError> {
        let req = SearchRequest::new(query)?
            .limit(self.cfg.search_limit)
            .exchange(self.cfg.search_exchange.clone());
        let connector = &self.connector;
        let provider = connector
            .as_search_provider()
            .ok_or_else(|| ScopeError::unsupported(Capability::Search.as_str()))?;
        self.call_with_timeout(Capability::Search, provider.search(&req))
            .await
            .map_err(|e| tag_err(connector.name(), e))
    }

    /// Search, then replace every hit with its full profile.
    ///
    /// Hits whose profile cannot be fetched are dropped; the survivors keep the
    /// search order. Zero hits is an empty report, not an error.
    ///
    /// # Errors
    /// Only the search call itself can fail; enrichment failures end up in
    /// `warnings`.
    #[tracing::instrument(target = "stockscope::router", skip(self))]
    pub async fn search_companies(
        &self,
        query: &str,
    ) -> Result<EnrichReport<CompanyProfile>, ScopeError> {
        let hits = self.search(query).await?;
        if hits.is_empty() {
            return Ok(EnrichReport::default());
        }
        let report = self.enrich(&hits, EnrichPolicy::DropFailed).await;
        Ok(EnrichReport {
            items: report
                .items
                .into_iter()
                .filter_map(Enriched::into_profile)
                .collect(),
            warnings: report.warnings,
        })
    }
}
