//! stockscope-mock
//!
//! Connectors for tests and offline demos.
//!
//! - [`MockConnector`] serves deterministic fixture data. The symbol `FAIL`
//!   fails every call and `TIMEOUT` answers after a short delay.
//! - [`DynamicMockConnector`] defers every answer to a
//!   [`DynamicMockController`] and records the calls it receives.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use stockscope_core::connector::{
    HistoryProvider, ListingProvider, ProfileProvider, ScopeConnector, SearchProvider,
};
use stockscope_core::{CompanyProfile, Listing, PricePoint, ScopeError, SearchHit, SearchRequest, Symbol};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior, MockCall};

/// Connector name reported by [`MockConnector`].
pub const MOCK_NAME: &str = "stockscope-mock";

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the fixture connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> ScopeError {
        ScopeError::not_found(what.to_string())
    }

    async fn maybe_fail_or_timeout(symbol: &str, capability: &'static str) -> Result<(), ScopeError> {
        match symbol {
            "FAIL" => Err(ScopeError::connector(
                MOCK_NAME,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Long enough to trip a short request timeout in tests.
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl ScopeConnector for MockConnector {
    fn name(&self) -> &'static str {
        MOCK_NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
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

#[async_trait]
impl SearchProvider for MockConnector {
    async fn search(&self, req: &SearchRequest) -> Result<Vec<SearchHit>, ScopeError> {
        Self::maybe_fail_or_timeout(&req.query().to_ascii_uppercase(), "search").await?;
        Ok(fixtures::search::search(req))
    }
}

#[async_trait]
impl ProfileProvider for MockConnector {
    async fn profile(&self, symbol: &Symbol) -> Result<CompanyProfile, ScopeError> {
        let s = symbol.as_str();
        Self::maybe_fail_or_timeout(s, "profile").await?;
        fixtures::companies::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("profile for {s}")))
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(&self, symbol: &Symbol) -> Result<Vec<PricePoint>, ScopeError> {
        let s = symbol.as_str();
        Self::maybe_fail_or_timeout(s, "history").await?;
        // Unknown symbols answer like the live API: no series at all.
        Ok(fixtures::history::by_symbol(s).unwrap_or_default())
    }
}

#[async_trait]
impl ListingProvider for MockConnector {
    async fn stock_list(&self) -> Result<Vec<Listing>, ScopeError> {
        Ok(fixtures::listing::stock_list())
    }
}
