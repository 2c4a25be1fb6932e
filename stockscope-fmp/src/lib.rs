//! stockscope-fmp
//!
//! Connector that implements `ScopeConnector` on top of the Financial Modeling
//! Prep v3 REST API. Exposes symbol search, company profiles, daily close
//! history, and the exchange-wide stock list.
#![warn(missing_docs)]

/// Endpoint descriptions, the transport trait, and the `reqwest`-backed adapter.
pub mod adapter;
mod builder;
/// API root and key.
pub mod config;
mod wire;

use std::sync::Arc;

use adapter::{Endpoint, FmpAdapter, RealAdapter};
use async_trait::async_trait;
pub use builder::FmpConnectorBuilder;
pub use config::FmpConfig;
use stockscope_core::{
    CompanyProfile, Listing, PricePoint, ScopeConnector, ScopeError, SearchHit, SearchRequest,
    Symbol,
    connector::{HistoryProvider, ListingProvider, ProfileProvider, SearchProvider},
};

/// Connector name used to tag errors and logs.
pub const CONNECTOR_NAME: &str = "stockscope-fmp";

/// Public connector type. Production users construct it with
/// [`FmpConnector::builder`] or [`FmpConnector::from_env`].
pub struct FmpConnector {
    adapter: Arc<dyn FmpAdapter>,
}

impl FmpConnector {
    /// Build over a fresh `reqwest::Client` and the given config.
    #[must_use]
    pub fn new(cfg: FmpConfig) -> Self {
        Self::from_adapter(Arc::new(RealAdapter::new(reqwest::Client::new(), cfg)))
    }

    /// Build from `STOCKSCOPE_API_KEY` / `STOCKSCOPE_BASE_URL`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the key is missing or a value is invalid.
    pub fn from_env() -> Result<Self, ScopeError> {
        Ok(Self::new(FmpConfig::from_env()?))
    }

    /// Build with a custom transport. Used by tests to inject canned payloads.
    #[must_use]
    pub fn from_adapter(adapter: Arc<dyn FmpAdapter>) -> Self {
        Self { adapter }
    }

    async fn fetch(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ScopeError> {
        self.adapter.fetch(endpoint).await
    }
}

#[async_trait]
impl SearchProvider for FmpConnector {
    async fn search(&self, req: &SearchRequest) -> Result<Vec<SearchHit>, ScopeError> {
        let endpoint = Endpoint::Search {
            query: req.query().to_string(),
            limit: req.max_results(),
            exchange: req.exchange_filter().map(str::to_string),
        };
        let payload = self.fetch(&endpoint).await?;
        let mut hits = wire::decode_search(payload)?;
        if let Some(limit) = req.max_results() {
            hits.truncate(limit);
        }
        Ok(hits)
    }
}

#[async_trait]
impl ProfileProvider for FmpConnector {
    async fn profile(&self, symbol: &Symbol) -> Result<CompanyProfile, ScopeError> {
        let payload = self
            .fetch(&Endpoint::Profile(symbol.as_str().to_string()))
            .await?;
        wire::decode_profile(payload, symbol)
    }
}

#[async_trait]
impl HistoryProvider for FmpConnector {
    async fn history(&self, symbol: &Symbol) -> Result<Vec<PricePoint>, ScopeError> {
        let payload = self
            .fetch(&Endpoint::History(symbol.as_str().to_string()))
            .await?;
        wire::decode_history(payload, symbol)
    }
}

#[async_trait]
impl ListingProvider for FmpConnector {
    async fn stock_list(&self) -> Result<Vec<Listing>, ScopeError> {
        let payload = self.fetch(&Endpoint::StockList).await?;
        wire::decode_stock_list(payload)
    }
}

impl ScopeConnector for FmpConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "Financial Modeling Prep"
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self as &dyn SearchProvider)
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_listing_provider(&self) -> Option<&dyn ListingProvider> {
        Some(self as &dyn ListingProvider)
    }
}
