use stockscope_core::{Capability, EnrichReport, Listing, ScopeError, TickerEntry};

use crate::StockScope;
use crate::core::tag_err;
use crate::router::enrich::EnrichPolicy;

impl StockScope {
    /// Fetch every listed stock.
    ///
    /// # Errors
    /// Returns `Unsupported` when the connector has no stock list, or the
    /// connector's tagged error.
    #[tracing::instrument(target = "stockscope::router", skip(self))]
    pub async fn stock_list(&self) -> Result<Vec<Listing>, ScopeError> {
        let connector = &self.connector;
        let provider = connector
            .as_listing_provider()
            .ok_or_else(|| ScopeError::unsupported(Capability::Listing.as_str()))?;
        self.call_with_timeout(Capability::Listing, provider.stock_list())
            .await
            .map_err(|e| tag_err(connector.name(), e))
    }

    /// Listings eligible for the ticker: on `ticker_exchange`, priced above
    /// `ticker_min_price`, capped at `ticker_listing_cap`, in upstream order.
    ///
    /// # Errors
    /// Same as [`StockScope::stock_list`].
    pub async fn ticker_listings(&self) -> Result<Vec<Listing>, ScopeError> {
        let all = self.stock_list().await?;
        Ok(self.filter_ticker_listings(all))
    }

    pub(crate) fn filter_ticker_listings(&self, all: Vec<Listing>) -> Vec<Listing> {
        let cfg = &self.cfg;
        all.into_iter()
            .filter(|l| l.exchange.as_deref() == Some(cfg.ticker_exchange.as_str()))
            .filter(|l| l.price.is_some_and(|p| p > cfg.ticker_min_price))
            .take(cfg.ticker_listing_cap)
            .collect()
    }

    /// The ticker's display set: the first `ticker_enrich_count` eligible
    /// listings, each enriched with its profile or kept as-is when the profile
    /// fetch fails. Every slot is filled.
    ///
    /// # Errors
    /// Only the stock-list call can fail.
    #[tracing::instrument(target = "stockscope::router", skip(self))]
    pub async fn ticker_snapshot(&self) -> Result<EnrichReport<TickerEntry>, ScopeError> {
        let mut listings = self.ticker_listings().await?;
        listings.truncate(self.cfg.ticker_enrich_count);
        let report = self.enrich(&listings, EnrichPolicy::KeepShallow).await;
        Ok(EnrichReport {
            items: report
                .items
                .into_iter()
                .map(Into::into)
                .collect(),
            warnings: report.warnings,
        })
    }
}
