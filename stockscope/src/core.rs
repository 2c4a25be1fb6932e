use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use stockscope_core::{Capability, ScopeConfig, ScopeConnector, ScopeError};

/// Orchestrator that routes lookups to one market-data connector and owns the
/// knobs the components read.
pub struct StockScope {
    pub(crate) connector: Arc<dyn ScopeConnector>,
    pub(crate) cfg: ScopeConfig,
}

/// Builder for constructing a [`StockScope`] with custom configuration.
pub struct StockScopeBuilder {
    connector: Option<Arc<dyn ScopeConnector>>,
    cfg: ScopeConfig,
}

impl Default for StockScopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StockScopeBuilder {
    /// Create a new builder with the default [`ScopeConfig`] and no connector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: ScopeConfig::default(),
        }
    }

    /// Register the market-data connector. A later call replaces an earlier one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn ScopeConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: ScopeConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Maximum hits requested from the search endpoint.
    #[must_use]
    pub const fn search_limit(mut self, limit: usize) -> Self {
        self.cfg.search_limit = limit;
        self
    }

    /// Exchange filter passed to the search endpoint.
    #[must_use]
    pub fn search_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.cfg.search_exchange = exchange.into();
        self
    }

    /// Exchange whose listings feed the ticker.
    #[must_use]
    pub fn ticker_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.cfg.ticker_exchange = exchange.into();
        self
    }

    /// Listings priced at or below this value stay out of the ticker.
    #[must_use]
    pub const fn ticker_min_price(mut self, price: Decimal) -> Self {
        self.cfg.ticker_min_price = price;
        self
    }

    /// Cap on the filtered listing before enrichment.
    #[must_use]
    pub const fn ticker_listing_cap(mut self, cap: usize) -> Self {
        self.cfg.ticker_listing_cap = cap;
        self
    }

    /// How many capped listings are enriched and displayed.
    #[must_use]
    pub const fn ticker_enrich_count(mut self, count: usize) -> Self {
        self.cfg.ticker_enrich_count = count;
        self
    }

    /// Number of most recent closes handed to the chart.
    #[must_use]
    pub const fn history_window(mut self, points: usize) -> Self {
        self.cfg.history_window = points;
        self
    }

    /// Period of the ticker's background refresh.
    #[must_use]
    pub const fn refresh_interval(mut self, every: Duration) -> Self {
        self.cfg.refresh_interval = every;
        self
    }

    /// How long an inline search error stays visible.
    #[must_use]
    pub const fn error_display(mut self, for_how_long: Duration) -> Self {
        self.cfg.error_display = for_how_long;
        self
    }

    /// Bound every connector call. Without this, calls wait indefinitely.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was registered, or if the refresh
    /// interval is zero.
    pub fn build(self) -> Result<StockScope, ScopeError> {
        let connector = self.connector.ok_or_else(|| {
            ScopeError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            )
        })?;
        if self.cfg.refresh_interval.is_zero() {
            return Err(ScopeError::InvalidArg(
                "refresh interval must be greater than zero".to_string(),
            ));
        }
        Ok(StockScope {
            connector,
            cfg: self.cfg,
        })
    }
}

/// Attribute a provider error to its connector.
///
/// Errors that already carry attribution or a precise meaning pass through;
/// everything else is wrapped as a `Connector` error.
pub fn tag_err(connector: &str, e: ScopeError) -> ScopeError {
    match e {
        e @ (ScopeError::NotFound { .. }
        | ScopeError::Connector { .. }
        | ScopeError::Status { .. }
        | ScopeError::Unsupported { .. }
        | ScopeError::RequestTimeout { .. }) => e,
        other => ScopeError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl StockScope {
    /// Start building a new `StockScope`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use stockscope::StockScope;
    /// use stockscope_fmp::FmpConnector;
    ///
    /// let fmp = Arc::new(FmpConnector::from_env()?);
    /// let scope = StockScope::builder()
    ///     .with_connector(fmp)
    ///     .search_limit(5)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> StockScopeBuilder {
        StockScopeBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ScopeConfig {
        &self.cfg
    }

    /// The registered connector.
    #[must_use]
    pub fn connector(&self) -> &Arc<dyn ScopeConnector> {
        &self.connector
    }

    /// Run a provider future under the optional request timeout.
    #[tracing::instrument(
        name = "stockscope::core::call_with_timeout",
        skip(self, fut),
        fields(capability = %capability),
    )]
    pub(crate) async fn call_with_timeout<T, Fut>(
        &self,
        capability: Capability,
        fut: Fut,
    ) -> Result<T, ScopeError>
    where
        Fut: std::future::Future<Output = Result<T, ScopeError>>,
    {
        match self.cfg.request_timeout {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .unwrap_or_else(|_| Err(ScopeError::request_timeout(capability.as_str()))),
            None => fut.await,
        }
    }
}
