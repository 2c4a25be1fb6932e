//! Links between the search views and the company detail page.

use stockscope_core::Symbol;

/// Detail page path; the symbol travels in the `symbol` query parameter.
pub const DETAIL_PAGE: &str = "company.html";

/// `company.html?symbol=<encoded>` for a symbol.
#[must_use]
pub fn detail_href(symbol: &Symbol) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(symbol.as_str().as_bytes()).collect();
    format!("{DETAIL_PAGE}?symbol={encoded}")
}

/// Extract the `symbol` parameter from a query string such as
/// `?symbol=AAPL&x=1`. A missing, empty, or blank value yields `None`.
#[must_use]
pub fn symbol_from_query(query: &str) -> Option<Symbol> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "symbol")
        .and_then(|(_, v)| Symbol::new(v.as_ref()).ok())
}
