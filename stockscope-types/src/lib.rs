//! Stockscope data model, configuration primitives, and the shared error type.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod market;
mod reports;
mod requests;

pub use capability::Capability;
pub use config::ScopeConfig;
pub use error::ScopeError;
pub use market::{
    CompanyProfile, Listing, PricePoint, SearchHit, Symbol, TickerEntry, TickerQuote,
};
pub use reports::EnrichReport;
pub use requests::SearchRequest;
