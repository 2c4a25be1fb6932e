//! Configuration shared by the orchestrator and its components.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Global configuration for the `StockScope` orchestrator.
///
/// Connector settings (base URL, API key) live with the connector itself; this
/// struct only carries the knobs the components read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Maximum number of hits requested from the search endpoint.
    pub search_limit: usize,
    /// Exchange filter passed to the search endpoint.
    pub search_exchange: String,
    /// Only listings from this exchange feed the ticker.
    pub ticker_exchange: String,
    /// Listings priced at or below this value are left out of the ticker.
    pub ticker_min_price: Decimal,
    /// Cap applied to the filtered listing before enrichment.
    pub ticker_listing_cap: usize,
    /// How many of the capped listings get a profile fetch (and are displayed).
    pub ticker_enrich_count: usize,
    /// Number of most recent history points handed to the chart.
    pub history_window: usize,
    /// Period of the ticker's background refresh.
    pub refresh_interval: Duration,
    /// How long an inline search error stays visible.
    pub error_display: Duration,
    /// Optional bound on every connector call. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            search_limit: 10,
            search_exchange: "NASDAQ".to_string(),
            ticker_exchange: "NASDAQ".to_string(),
            ticker_min_price: Decimal::ONE,
            ticker_listing_cap: 50,
            ticker_enrich_count: 20,
            history_window: 90,
            refresh_interval: Duration::from_secs(5 * 60),
            error_display: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}
