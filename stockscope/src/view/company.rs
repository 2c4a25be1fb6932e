//! Company detail page.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use stockscope_core::CompanyProfile;

use crate::format::{ChangeClass, escape_html, format_change, format_currency, format_large_number};
use crate::view::Render;
use crate::view::chart::ChartSpec;

/// Loading text for the summary.
pub const LOADING: &str = "Loading company information...";
/// Loading text for the chart.
pub const CHART_LOADING: &str = "Loading stock price history...";
/// Description fallback.
pub const NO_DESCRIPTION: &str = "No description available.";
/// Shown instead of a chart when history is empty.
pub const NO_HISTORY: &str = "No historical data available";
/// Shown instead of a chart when history fails.
pub const CHART_FAILED: &str = "Failed to load chart data";

/// Formatted summary fields of one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
    /// Name, "N/A" when missing.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Logo URL, only when present.
    pub logo: Option<String>,
    /// Website, only when present.
    pub website: Option<String>,
    /// e.g. "$189.84" or "N/A".
    pub price: String,
    /// e.g. "+1.25%" or "N/A".
    pub change: String,
    /// Direction; neutral when no change is known.
    pub class: ChangeClass,
    /// e.g. "2.95T" or "N/A".
    pub market_cap: String,
    /// Description or [`NO_DESCRIPTION`].
    pub description: String,
}

impl CompanySummary {
    /// Format a profile. Only `changes` feeds the change field.
    #[must_use]
    pub fn from_profile(p: &CompanyProfile) -> Self {
        let non_empty = |s: &Option<String>| s.as_deref().filter(|v| !v.is_empty()).map(str::to_string);
        Self {
            name: p.company_name.clone().unwrap_or_else(|| "N/A".to_string()),
            symbol: p.symbol.as_str().to_string(),
            logo: non_empty(&p.image),
            website: non_empty(&p.website),
            price: format_currency(p.price),
            change: p.changes.map_or_else(|| "N/A".to_string(), format_change),
            class: ChangeClass::of(p.changes),
            market_cap: format_large_number(p.mkt_cap),
            description: p
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

/// Chart area state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartView {
    /// History not requested yet or in flight.
    Loading,
    /// A chart to draw.
    Ready(ChartSpec),
    /// A message instead of the chart.
    Message(String),
}

/// The whole detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPageView {
    /// Loading indicator visible.
    pub loading: bool,
    /// Summary, once loaded.
    pub summary: Option<CompanySummary>,
    /// Chart area, shown together with the summary.
    pub chart: ChartView,
    /// Error message, if any.
    pub error: Option<String>,
}

impl CompanyPageView {
    /// An empty page, as left by `destroy`.
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            loading: false,
            summary: None,
            chart: ChartView::Loading,
            error: None,
        }
    }
}

fn render_chart_html(chart: &ChartView) -> String {
    match chart {
        ChartView::Loading => format!(
            r#"<div class="chart-loading"><div class="spinner"></div><p>{CHART_LOADING}</p></div>"#
        ),
        ChartView::Message(msg) => format!(
            r#"<div class="chart-loading"><p>{}</p></div>"#,
            escape_html(msg)
        ),
        ChartView::Ready(spec) => {
            let json = serde_json::to_string(spec).unwrap_or_default();
            format!(
                r#"<canvas id="stockChart" data-chart="{}"></canvas>"#,
                escape_html(&json)
            )
        }
    }
}

impl Render for CompanyPageView {
    fn render_html(&self) -> String {
        let mut out = String::new();
        if self.loading {
            let _ = write!(
                out,
                r#"<div class="loading"><div class="spinner"></div><p>{LOADING}</p></div>"#
            );
        }
        if let Some(s) = &self.summary {
            out.push_str(r#"<div class="company-header">"#);
            if let Some(logo) = &s.logo {
                let _ = write!(
                    out,
                    r#"<img class="company-logo" src="{}" alt="Company Logo" />"#,
                    escape_html(logo)
                );
            }
            let _ = write!(
                out,
                r#"<div class="company-basic-info"><h1>{}</h1><div class="company-symbol">{}</div>"#,
                escape_html(&s.name),
                escape_html(&s.symbol)
            );
            if let Some(site) = &s.website {
                let _ = write!(
                    out,
                    r#"<a href="{}" target="_blank" class="company-website">Visit Website</a>"#,
                    escape_html(site)
                );
            }
            out.push_str("</div></div>");
            let change_class = match s.class.css() {
                "" => "stock-change".to_string(),
                c => format!("stock-change {c}"),
            };
            let _ = write!(
                out,
                concat!(
                    r#"<div class="stock-info">"#,
                    r#"<div class="stock-card"><div class="stock-price">{}</div><div>Current Price</div></div>"#,
                    r#"<div class="stock-card"><div class="{}">{}</div><div>Change (%)</div></div>"#,
                    r#"<div class="stock-card"><div>{}</div><div>Market Cap</div></div>"#,
                    "</div>",
                    r#"<div class="company-description"><h3>About the Company</h3><p>{}</p></div>"#,
                ),
                escape_html(&s.price),
                change_class,
                escape_html(&s.change),
                escape_html(&s.market_cap),
                escape_html(&s.description)
            );
            let _ = write!(
                out,
                r#"<div class="chart-container"><h3>Stock Price History</h3>{}</div>"#,
                render_chart_html(&self.chart)
            );
        }
        if let Some(err) = &self.error {
            let _ = write!(
                out,
                r#"<div class="error-message">{}</div>"#,
                escape_html(err)
            );
        }
        out
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        if self.loading {
            let _ = writeln!(out, "{LOADING}");
        }
        if let Some(s) = &self.summary {
            let _ = writeln!(out, "{} ({})", s.name, s.symbol);
            if let Some(site) = &s.website {
                let _ = writeln!(out, "Website:      {site}");
            }
            let _ = writeln!(out, "Price:        {}", s.price);
            let _ = writeln!(out, "Change:       {}", s.change);
            let _ = writeln!(out, "Market cap:   {}", s.market_cap);
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", s.description);
            let _ = writeln!(out);
            match &self.chart {
                ChartView::Loading => {
                    let _ = writeln!(out, "{CHART_LOADING}");
                }
                ChartView::Message(msg) => {
                    let _ = writeln!(out, "{msg}");
                }
                ChartView::Ready(spec) => {
                    let first = spec.labels.first().map_or("", String::as_str);
                    let last = spec.labels.last().map_or("", String::as_str);
                    let _ = writeln!(
                        out,
                        "{}: {} points, {first} to {last}",
                        spec.series.label,
                        spec.len()
                    );
                    if let (Some(lo), Some(hi)) = (
                        spec.series.data.iter().min(),
                        spec.series.data.iter().max(),
                    ) {
                        let _ = writeln!(
                            out,
                            "Range:        {} - {}",
                            format_currency(Some(*lo)),
                            format_currency(Some(*hi))
                        );
                    }
                }
            }
        }
        if let Some(err) = &self.error {
            let _ = writeln!(out, "error: {err}");
        }
        out
    }
}
