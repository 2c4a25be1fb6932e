use stockscope_core::{SearchHit, SearchRequest, Symbol};

use super::companies::COMPANIES;

pub fn search(req: &SearchRequest) -> Vec<SearchHit> {
    let q = req.query().to_ascii_lowercase();
    let hits = COMPANIES
        .iter()
        .filter(|c| {
            c.symbol.to_ascii_lowercase().contains(&q) || c.name.to_ascii_lowercase().contains(&q)
        })
        .filter(|c| {
            req.exchange_filter()
                .is_none_or(|ex| c.exchange.eq_ignore_ascii_case(ex))
        })
        .filter_map(|c| {
            Some(SearchHit {
                symbol: Symbol::new(c.symbol).ok()?,
                name: Some(c.name.to_string()),
                currency: Some(c.currency.to_string()),
                exchange_short_name: Some(c.exchange.to_string()),
            })
        });
    match req.max_results() {
        Some(limit) => hits.take(limit).collect(),
        None => hits.collect(),
    }
}
