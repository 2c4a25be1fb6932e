//! Display formatting for prices, market caps, and percent changes.
//!
//! All amounts are `Decimal` and rounded half away from zero, which is what
//! `en-US` number formatting does.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

const NOT_AVAILABLE: &str = "N/A";

fn round2(v: Decimal) -> Decimal {
    v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Insert `,` every three digits of a non-negative integer string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render `abs` (already rounded) with grouped integer digits and exactly or at
/// most `dp` fraction digits.
fn grouped(abs: Decimal, dp: usize, trim: bool) -> String {
    let text = format!("{abs:.dp$}");
    let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = if trim { frac.trim_end_matches('0') } else { frac };
    let mut out = group_thousands(int);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `$1,234.50` style. Missing and zero values render as "N/A".
#[must_use]
pub fn format_currency(value: Option<Decimal>) -> String {
    let Some(v) = value.filter(|v| !v.is_zero()) else {
        return NOT_AVAILABLE.to_string();
    };
    let body = grouped(round2(v).abs(), 2, false);
    if v.is_sign_negative() {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// Market-cap style: `2.50T`, `1.20B`, `3.00M`, or a grouped number with up to
/// three decimals below one million. Missing and zero values render as "N/A".
#[must_use]
pub fn format_large_number(value: Option<Decimal>) -> String {
    let Some(v) = value.filter(|v| !v.is_zero()) else {
        return NOT_AVAILABLE.to_string();
    };
    let tiers = [
        (Decimal::from(1_000_000_000_000_i64), "T"),
        (Decimal::from(1_000_000_000_i64), "B"),
        (Decimal::from(1_000_000_i64), "M"),
    ];
    for (scale, suffix) in tiers {
        if v >= scale {
            return format!("{:.2}{suffix}", round2(v / scale));
        }
    }
    let rounded = v.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);
    let body = grouped(rounded.abs(), 3, true);
    if v.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

/// Signed percent with two decimals. Non-negative values get a leading "+".
#[must_use]
pub fn format_change(change: Decimal) -> String {
    let sign = if change.is_sign_negative() && !change.is_zero() {
        '-'
    } else {
        '+'
    };
    format!("{sign}{:.2}%", round2(change).abs())
}

/// Direction class for a change value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeClass {
    /// Change >= 0.
    Positive,
    /// Change < 0.
    Negative,
    /// No change value available.
    Neutral,
}

impl ChangeClass {
    /// Classify a change; `None` is neutral.
    #[must_use]
    pub fn of(change: Option<Decimal>) -> Self {
        match change {
            None => Self::Neutral,
            Some(c) if c.is_sign_negative() && !c.is_zero() => Self::Negative,
            Some(_) => Self::Positive,
        }
    }

    /// CSS class list fragment.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "",
        }
    }
}

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
