//! Stateful front-end components. Each owns one view model and the fetches
//! that fill it; none of them share state.

pub mod company_info;
pub mod marquee;
pub mod quick_search;
pub mod search_form;
pub mod search_results;

pub use company_info::CompanyInfo;
pub use marquee::{LoadOutcome, Marquee, RefreshHandle};
pub use quick_search::QuickSearch;
pub use search_form::{FormPhase, SearchForm, SubmitOutcome};
pub use search_results::SearchResults;
