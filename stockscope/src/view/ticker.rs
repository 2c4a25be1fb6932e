//! Ticker marquee strip.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockscope_core::TickerEntry;

use crate::format::{ChangeClass, escape_html, format_change, format_currency};
use crate::view::Render;

/// Placeholder before the first load.
pub const INITIAL: &str = "Loading stock data...";
/// Load failed.
pub const LOAD_FAILED: &str = "failed to load stock data";
/// Load succeeded with nothing to show.
pub const NO_DATA: &str = "no stock data available";

/// One quote in the strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerItem {
    /// Ticker symbol.
    pub symbol: String,
    /// e.g. "$189.84", "N/A" when missing or zero.
    pub price: String,
    /// e.g. "+1.25%"; a missing change counts as 0.
    pub change: String,
    /// Direction.
    pub class: ChangeClass,
}

impl From<&TickerEntry> for TickerItem {
    fn from(e: &TickerEntry) -> Self {
        let q = e.quote();
        let change = q.change.unwrap_or(Decimal::ZERO);
        Self {
            symbol: q.symbol.as_str().to_string(),
            price: format_currency(q.price),
            change: format_change(change),
            class: ChangeClass::of(Some(change)),
        }
    }
}

/// Whether the strip scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Animation {
    /// Scrolling.
    Running,
    /// Frozen in place.
    Paused,
}

impl Animation {
    /// CSS `animation-play-state` value.
    #[must_use]
    pub const fn play_state(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

/// What the ticker shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickerView {
    /// Before the first load: [`INITIAL`].
    Initial,
    /// A load is running.
    Loading,
    /// "ERROR" plus a message.
    Error(String),
    /// Quotes, each stored once.
    Ready {
        /// Quotes in display order.
        items: Vec<TickerItem>,
        /// Scroll state.
        animation: Animation,
    },
    /// Torn down.
    Cleared,
}

fn item_html(out: &mut String, symbol: &str, price: &str, change: &str, class: &str) {
    let change_class = if class.is_empty() {
        "ticker-change".to_string()
    } else {
        format!("ticker-change {class}")
    };
    let _ = write!(
        out,
        concat!(
            r#"<div class="ticker-item">"#,
            r#"<span class="ticker-symbol">{}</span>"#,
            r#"<span class="ticker-price">{}</span>"#,
            r#"<span class="{}">{}</span>"#,
            "</div>"
        ),
        escape_html(symbol),
        escape_html(price),
        change_class,
        escape_html(change)
    );
}

impl Render for TickerView {
    /// The ready strip repeats its items twice, back to back, for seamless
    /// looping.
    fn render_html(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Cleared => {}
            Self::Initial => {
                let _ = write!(
                    out,
                    r#"<div class="ticker-content"><div class="ticker-item ticker-loading">{INITIAL}</div></div>"#
                );
            }
            Self::Loading => {
                out.push_str(r#"<div class="ticker-content ticker-loading">"#);
                item_html(&mut out, "Loading...", "Please wait", "--", "");
                out.push_str("</div>");
            }
            Self::Error(msg) => {
                out.push_str(r#"<div class="ticker-content">"#);
                item_html(&mut out, "ERROR", msg, "--", "");
                out.push_str("</div>");
            }
            Self::Ready { items, animation } => {
                let _ = write!(
                    out,
                    r#"<div class="ticker-content" style="animation-play-state: {}">"#,
                    animation.play_state()
                );
                for _ in 0..2 {
                    for it in items {
                        item_html(&mut out, &it.symbol, &it.price, &it.change, it.class.css());
                    }
                }
                out.push_str("</div>");
            }
        }
        out
    }

    fn render_text(&self) -> String {
        match self {
            Self::Cleared => String::new(),
            Self::Initial => INITIAL.to_string(),
            Self::Loading => "Loading... Please wait --".to_string(),
            Self::Error(msg) => format!("ERROR {msg} --"),
            Self::Ready { items, animation } => {
                let mut out = String::new();
                for it in items {
                    let _ = writeln!(out, "{:<8} {:>12} {:>9}", it.symbol, it.price, it.change);
                }
                if *animation == Animation::Paused {
                    out.push_str("(paused)\n");
                }
                out
            }
        }
    }
}
