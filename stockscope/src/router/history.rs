use stockscope_core::{Capability, PricePoint, ScopeError, Symbol, latest_window};

use crate::StockScope;
use crate::scope_router_method;

impl StockScope {
    scope_router_method! {
        /// Fetch the raw daily close series for a symbol, in upstream order.
        method: history(symbol) -> Vec<PricePoint>,
        accessor: as_history_provider,
        capability: Capability::History,
        call: history
    }

    /// Fetch history and keep the most recent `history_window` closes,
    /// ascending by date. This is the chart's input.
    ///
    /// # Errors
    /// Same as [`StockScope::history`].
    pub async fn chart_history(&self, symbol: &Symbol) -> Result<Vec<PricePoint>, ScopeError> {
        let points = self.history(symbol).await?;
        Ok(latest_window(points, self.cfg.history_window))
    }
}
