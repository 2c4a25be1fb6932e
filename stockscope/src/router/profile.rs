use stockscope_core::{Capability, CompanyProfile};

use crate::StockScope;
use crate::scope_router_method;

impl StockScope {
    scope_router_method! {
        /// Fetch the full company profile for a symbol.
        ///
        /// An empty upstream payload is reported as `NotFound`, never as a
        /// hollow profile.
        method: profile(symbol) -> CompanyProfile,
        accessor: as_profile_provider,
        capability: Capability::Profile,
        call: profile
    }
}
