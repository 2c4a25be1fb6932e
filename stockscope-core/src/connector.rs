use async_trait::async_trait;

use crate::ScopeError;
use stockscope_types::{CompanyProfile, Listing, PricePoint, SearchHit, SearchRequest, Symbol};

/// Focused role trait for connectors that provide free-text symbol search.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search symbols matching the request's query.
    ///
    /// An empty vector is a valid answer (zero matches), not an error.
    async fn search(&self, req: &SearchRequest) -> Result<Vec<SearchHit>, ScopeError>;
}

/// Focused role trait for connectors that provide company profile data.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch the profile for `symbol`.
    ///
    /// Implementations return `NotFound` when the upstream answers with an
    /// empty payload, so callers never see a hollow profile.
    async fn profile(&self, symbol: &Symbol) -> Result<CompanyProfile, ScopeError>;
}

/// Focused role trait for connectors that provide daily closing-price history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch the full close series for `symbol`, in whatever order the
    /// upstream delivers it.
    async fn history(&self, symbol: &Symbol) -> Result<Vec<PricePoint>, ScopeError>;
}

/// Focused role trait for connectors that provide the exchange-wide stock list.
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// Fetch every listed stock.
    async fn stock_list(&self) -> Result<Vec<Listing>, ScopeError>;
}

/// Market-data connector consumed by the stockscope orchestrator.
///
/// A connector advertises each capability it supports through an `as_*`
/// accessor; the defaults report "unsupported".
pub trait ScopeConnector: Send + Sync {
    /// Stable connector name used in logs and error attribution.
    fn name(&self) -> &'static str;

    /// Human-readable vendor label.
    fn vendor(&self) -> &'static str {
        "Unknown"
    }

    /// If implemented, returns a trait object for symbol search.
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        None
    }
    /// If implemented, returns a trait object for company profiles.
    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        None
    }
    /// If implemented, returns a trait object for price history.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }
    /// If implemented, returns a trait object for the stock list.
    fn as_listing_provider(&self) -> Option<&dyn ListingProvider> {
        None
    }
}
