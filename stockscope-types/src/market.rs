//! Market data model: symbols, profiles, listings, search hits, and price points.

use core::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ScopeError;

/// Exchange ticker identifier for a company.
///
/// Always non-empty and free of surrounding whitespace; case is preserved as
/// given by the caller or the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Build a symbol from user or API input.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the input is empty or only whitespace.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ScopeError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ScopeError::InvalidArg("symbol must not be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ScopeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Detailed company/stock record.
///
/// Every field except `symbol` is optional: the upstream API omits fields
/// freely and the views fall back to "N/A" rather than rejecting the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Display name.
    pub company_name: Option<String>,
    /// Last price.
    pub price: Option<Decimal>,
    /// Signed change, displayed as a percentage.
    pub changes: Option<Decimal>,
    /// Legacy percent-change field some payloads carry instead of `changes`.
    pub changes_percentage: Option<Decimal>,
    /// Market capitalization.
    pub mkt_cap: Option<Decimal>,
    /// Free-text business description.
    pub description: Option<String>,
    /// Logo URL.
    pub image: Option<String>,
    /// Company website.
    pub website: Option<String>,
    /// Short exchange name (e.g. "NASDAQ").
    pub exchange: Option<String>,
}

impl CompanyProfile {
    /// A profile carrying only its symbol.
    #[must_use]
    pub const fn bare(symbol: Symbol) -> Self {
        Self {
            symbol,
            company_name: None,
            price: None,
            changes: None,
            changes_percentage: None,
            mkt_cap: None,
            description: None,
            image: None,
            website: None,
            exchange: None,
        }
    }
}

/// One row of the exchange-wide stock listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Company name, when the listing carries one.
    pub name: Option<String>,
    /// Exchange the listing belongs to.
    pub exchange: Option<String>,
    /// Last price.
    pub price: Option<Decimal>,
}

/// One result of a free-text symbol search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Company name.
    pub name: Option<String>,
    /// Trading currency.
    pub currency: Option<String>,
    /// Short exchange name.
    pub exchange_short_name: Option<String>,
}

/// A single daily close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trade date.
    pub date: NaiveDate,
    /// Closing price.
    pub close: Decimal,
}

/// A ticker slot: either the bare listing or the listing plus its profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickerEntry {
    /// Enrichment failed or was not attempted.
    Listing(Listing),
    /// Enrichment succeeded.
    Profile {
        /// The listing row the profile was fetched for.
        listing: Listing,
        /// The fetched profile.
        profile: CompanyProfile,
    },
}

/// What a ticker slot displays once listing and profile are coalesced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerQuote {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Last price, if either shape carried one.
    pub price: Option<Decimal>,
    /// Signed percent change, if the profile carried one.
    pub change: Option<Decimal>,
}

impl TickerEntry {
    /// Symbol of the slot.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        match self {
            Self::Listing(l) => &l.symbol,
            Self::Profile { profile, .. } => &profile.symbol,
        }
    }

    /// True when the slot carries an enriched profile.
    #[must_use]
    pub const fn is_enriched(&self) -> bool {
        matches!(self, Self::Profile { .. })
    }

    /// Coalesce the two shapes into the fields a ticker item shows.
    ///
    /// Profile fields win; listing fields fill the gaps. The change prefers
    /// `changes` over `changes_percentage`.
    #[must_use]
    pub fn quote(&self) -> TickerQuote {
        match self {
            Self::Listing(l) => TickerQuote {
                symbol: l.symbol.clone(),
                price: l.price,
                change: None,
            },
            Self::Profile { listing, profile } => TickerQuote {
                symbol: profile.symbol.clone(),
                price: profile.price.or(listing.price),
                change: profile.changes.or(profile.changes_percentage),
            },
        }
    }
}
