//! Re-export of foundational types from `stockscope-types`.
// Consolidated re-exports so downstream crates can depend on `stockscope-core` only

pub use stockscope_types::{Capability, EnrichReport, ScopeConfig, ScopeError};
pub use stockscope_types::SearchRequest;
pub use stockscope_types::{
    CompanyProfile, Listing, PricePoint, SearchHit, Symbol, TickerEntry, TickerQuote,
};

pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
