//! Search result cards, for both the enriched and the quick search lists.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockscope_core::{CompanyProfile, SearchHit};

use crate::format::{ChangeClass, escape_html, format_change};
use crate::view::Render;
use crate::view::link::detail_href;

/// Shown when an enriched search comes back empty.
pub const NO_RESULTS: &str = "No companies found. Try a different search term.";
/// Shown while a search is running.
pub const LOADING: &str = "Searching companies...";
/// Shown when a quick search comes back empty.
pub const QUICK_NO_RESULTS: &str = "No companies found, try a different search term.";

/// Card logo: the image, or a one-letter placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Logo {
    /// Remote image.
    Image {
        /// Image URL.
        url: String,
        /// Alt text, `"<name> Logo"`.
        alt: String,
    },
    /// First character of the symbol, or `?`.
    Placeholder(char),
}

/// One enriched company card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCard {
    /// Link to the detail page.
    pub href: String,
    /// Logo or placeholder.
    pub logo: Logo,
    /// Company name, "N/A" when missing.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Formatted change, e.g. "+1.25%".
    pub change: String,
    /// Change direction.
    pub class: ChangeClass,
}

impl CompanyCard {
    /// Build a card from a profile.
    ///
    /// The change prefers `changes_percentage`, then `changes`, then 0.
    #[must_use]
    pub fn from_profile(p: &CompanyProfile) -> Self {
        let change = p
            .changes_percentage
            .or(p.changes)
            .unwrap_or(Decimal::ZERO);
        let symbol = p.symbol.as_str().to_string();
        let logo = match p.image.as_deref() {
            Some(url) if !url.is_empty() => Logo::Image {
                url: url.to_string(),
                alt: format!("{} Logo", p.company_name.as_deref().unwrap_or("Company")),
            },
            _ => Logo::Placeholder(symbol.chars().next().unwrap_or('?')),
        };
        Self {
            href: detail_href(&p.symbol),
            logo,
            name: p.company_name.clone().unwrap_or_else(|| "N/A".to_string()),
            symbol,
            change: format_change(change),
            class: ChangeClass::of(Some(change)),
        }
    }
}

/// One quick-search card: name and symbol only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickCard {
    /// Link to the detail page.
    pub href: String,
    /// Company name, "N/A" when missing.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
}

impl From<&SearchHit> for QuickCard {
    fn from(h: &SearchHit) -> Self {
        Self {
            href: detail_href(&h.symbol),
            name: h.name.clone().unwrap_or_else(|| "N/A".to_string()),
            symbol: h.symbol.as_str().to_string(),
        }
    }
}

/// What the results area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultsView {
    /// Nothing.
    Cleared,
    /// Spinner with [`LOADING`].
    Loading,
    /// An error message.
    Error(String),
    /// The empty-results message.
    NoResults(String),
    /// Enriched cards, with an optional term to highlight.
    Cards {
        /// Cards in display order.
        cards: Vec<CompanyCard>,
        /// Case-insensitive term wrapped in `<mark>`.
        highlight: Option<String>,
    },
    /// Quick-search cards.
    QuickCards(Vec<QuickCard>),
}

/// Byte length of `term` matched case-insensitively at the start of `text`.
fn match_len(text: &str, term: &str) -> Option<usize> {
    let mut consumed = 0;
    let mut hay = text.chars();
    for t in term.chars() {
        let h = hay.next()?;
        if !h.to_lowercase().eq(t.to_lowercase()) {
            return None;
        }
        consumed += h.len_utf8();
    }
    Some(consumed)
}

/// Escape `text` and wrap every case-insensitive literal match of `term` in
/// `<mark>`. An empty term only escapes.
#[must_use]
pub fn highlight(text: &str, term: &str) -> String {
    if term.is_empty() {
        return escape_html(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut plain_start = 0;
    let mut i = 0;
    while i < text.len() {
        if let Some(len) = match_len(&text[i..], term) {
            out.push_str(&escape_html(&text[plain_start..i]));
            out.push_str("<mark>");
            out.push_str(&escape_html(&text[i..i + len]));
            out.push_str("</mark>");
            i += len;
            plain_start = i;
        } else {
            i += text[i..].chars().next().map_or(1, char::len_utf8);
        }
    }
    out.push_str(&escape_html(&text[plain_start..]));
    out
}

fn render_card(card: &CompanyCard, term: Option<&str>) -> String {
    let mark = |s: &str| term.map_or_else(|| escape_html(s), |t| highlight(s, t));
    let logo = match &card.logo {
        Logo::Image { url, alt } => format!(
            r#"<img class="company-logo" src="{}" alt="{}" />"#,
            escape_html(url),
            escape_html(alt)
        ),
        Logo::Placeholder(c) => format!(
            r#"<div class="company-logo-placeholder">{}</div>"#,
            escape_html(&c.to_string())
        ),
    };
    format!(
        concat!(
            r#"<a href="{href}" class="company-item">"#,
            "{logo}",
            r#"<div class="company-info">"#,
            r#"<div class="company-name">{name}</div>"#,
            r#"<div class="company-symbol">{symbol}</div>"#,
            "</div>",
            r#"<div class="stock-change {class}">{change}</div>"#,
            "</a>"
        ),
        href = escape_html(&card.href),
        logo = logo,
        name = mark(&card.name),
        symbol = mark(&card.symbol),
        class = card.class.css(),
        change = escape_html(&card.change),
    )
}

impl Render for ResultsView {
    fn render_html(&self) -> String {
        match self {
            Self::Cleared => String::new(),
            Self::Loading => format!(
                r#"<div class="loading"><div class="spinner"></div><p>{LOADING}</p></div>"#
            ),
            Self::Error(msg) => format!(
                r#"<div class="error-message">{}</div>"#,
                escape_html(msg)
            ),
            Self::NoResults(msg) => {
                format!(r#"<div class="no-results">{}</div>"#, escape_html(msg))
            }
            Self::Cards { cards, highlight } => cards
                .iter()
                .map(|c| render_card(c, highlight.as_deref().filter(|t| !t.is_empty())))
                .collect(),
            Self::QuickCards(cards) => cards
                .iter()
                .map(|c| {
                    format!(
                        concat!(
                            r#"<a href="{}" class="company-item">"#,
                            r#"<div class="company-name">{}</div>"#,
                            r#"<div class="company-symbol">{}</div>"#,
                            "</a>"
                        ),
                        escape_html(&c.href),
                        escape_html(&c.name),
                        escape_html(&c.symbol)
                    )
                })
                .collect(),
        }
    }

    fn render_text(&self) -> String {
        match self {
            Self::Cleared => String::new(),
            Self::Loading => LOADING.to_string(),
            Self::Error(msg) => format!("error: {msg}"),
            Self::NoResults(msg) => msg.clone(),
            Self::Cards { cards, .. } => {
                let mut out = String::new();
                for c in cards {
                    let _ = writeln!(out, "{:<8} {:<40} {:>9}", c.symbol, c.name, c.change);
                }
                out
            }
            Self::QuickCards(cards) => {
                let mut out = String::new();
                for c in cards {
                    let _ = writeln!(out, "{:<8} {}", c.symbol, c.name);
                }
                out
            }
        }
    }
}
