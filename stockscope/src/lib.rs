//! Stockscope is a stock and company lookup front end over one market-data API.
//!
//! Overview
//! - `StockScope` routes lookups (search, profile, history, stock list) to a
//!   connector implementing the `stockscope_core` role traits.
//! - Batch profile enrichment fans out one profile request per record, joins
//!   them in input order, and either drops or keeps failed records depending on
//!   the call site.
//! - Four components hold the front-end state: `SearchForm`, `SearchResults`
//!   (plus the plain `QuickSearch` listing), `CompanyInfo`, and `Marquee`.
//! - Every component exposes a plain view model that renders to an HTML
//!   fragment or to terminal text through [`view::Render`].
//!
//! Key behaviors
//! - Search drops hits whose profile fails; the ticker keeps them shallow so
//!   every slot stays filled.
//! - No retries and no cancellation. A request timeout is off by default.
//! - The ticker refreshes on a spawned timer owned by a `RefreshHandle`;
//!   dropping the handle stops the timer.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockscope::{SearchForm, SearchResults, StockScope};
//! use stockscope_fmp::FmpConnector;
//!
//! let scope = Arc::new(
//!     StockScope::builder()
//!         .with_connector(Arc::new(FmpConnector::from_env()?))
//!         .build()?,
//! );
//! let results = Arc::new(SearchResults::new());
//! let form = SearchForm::new(scope.clone());
//! let sink = results.clone();
//! form.on_search(move |companies| sink.render(companies));
//! form.set_value("apple");
//! form.submit().await;
//! println!("{}", results.view().render_html());
//! ```
#![warn(missing_docs)]

pub mod components;
pub(crate) mod core;
pub mod format;
mod router;
pub mod view;

pub use components::{
    CompanyInfo, FormPhase, LoadOutcome, Marquee, QuickSearch, RefreshHandle, SearchForm,
    SearchResults, SubmitOutcome,
};
pub use crate::core::{StockScope, StockScopeBuilder, tag_err};
pub use router::enrich::{EnrichPolicy, Enrichable, Enriched};
pub use view::Render;
pub use view::link::symbol_from_query;

pub use stockscope_core::{
    Capability, CompanyProfile, EnrichReport, Listing, PricePoint, ScopeConfig, ScopeConnector,
    ScopeError, SearchHit, Symbol, TickerEntry, TickerQuote,
};
