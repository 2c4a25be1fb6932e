//! Company detail: one profile plus a chart of recent closes.

use std::sync::Arc;

use stockscope_core::{CompanyProfile, Symbol};

use crate::StockScope;
use crate::view::chart::ChartSpec;
use crate::view::company::{CHART_FAILED, ChartView, CompanyPageView, CompanySummary, NO_HISTORY};

/// Shown when the page was opened without a symbol.
pub const NO_SYMBOL: &str = "No company symbol provided";
/// Shown when the profile cannot be loaded.
pub const LOAD_FAILED: &str =
    "Failed to load company information. Please check the company symbol and try again.";

/// Company detail component.
pub struct CompanyInfo {
    scope: Arc<StockScope>,
    symbol: Option<Symbol>,
    company: Option<CompanyProfile>,
    view: CompanyPageView,
}

impl CompanyInfo {
    /// Create the component for `symbol`, usually taken from
    /// [`symbol_from_query`](crate::view::link::symbol_from_query).
    #[must_use]
    pub const fn new(scope: Arc<StockScope>, symbol: Option<Symbol>) -> Self {
        Self {
            scope,
            symbol,
            company: None,
            view: CompanyPageView {
                loading: true,
                summary: None,
                chart: ChartView::Loading,
                error: None,
            },
        }
    }

    /// Fetch the profile and show the summary.
    ///
    /// The chart area starts in its loading state; call
    /// [`add_chart`](Self::add_chart) to fill it.
    #[tracing::instrument(target = "stockscope::components", skip(self), fields(symbol = ?self.symbol))]
    pub async fn load(&mut self) {
        let Some(symbol) = self.symbol.clone() else {
            self.view.loading = false;
            self.view.error = Some(NO_SYMBOL.to_string());
            return;
        };
        self.view.loading = true;
        self.view.error = None;
        match self.scope.profile(&symbol).await {
            Ok(profile) => {
                self.view.summary = Some(CompanySummary::from_profile(&profile));
                self.view.chart = ChartView::Loading;
                self.company = Some(profile);
            }
            Err(e) => {
                tracing::error!(target: "stockscope::components", symbol = %symbol, error = %e, "profile load failed");
                self.view.summary = None;
                self.company = None;
                self.view.error = Some(LOAD_FAILED.to_string());
            }
        }
        self.view.loading = false;
    }

    /// Fetch recent history for the page's symbol and build the chart input.
    ///
    /// Independent of [`load`](Self::load). Does nothing without a symbol.
    #[tracing::instrument(target = "stockscope::components", skip(self), fields(symbol = ?self.symbol))]
    pub async fn add_chart(&mut self) {
        let Some(symbol) = self.symbol.clone() else {
            return;
        };
        self.view.chart = match self.scope.chart_history(&symbol).await {
            Ok(points) => ChartSpec::from_history(points, self.scope.config().history_window)
                .map_or_else(|| ChartView::Message(NO_HISTORY.to_string()), ChartView::Ready),
            Err(e) => {
                tracing::error!(target: "stockscope::components", symbol = %symbol, error = %e, "history load failed");
                ChartView::Message(CHART_FAILED.to_string())
            }
        };
    }

    /// Current page.
    #[must_use]
    pub const fn view(&self) -> &CompanyPageView {
        &self.view
    }

    /// The loaded profile, if any.
    #[must_use]
    pub const fn company(&self) -> Option<&CompanyProfile> {
        self.company.as_ref()
    }

    /// Symbol the component was opened with.
    #[must_use]
    pub const fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    /// Clear the page and forget the loaded profile.
    pub fn destroy(&mut self) {
        self.company = None;
        self.view = CompanyPageView::cleared();
    }
}
