use rust_decimal::Decimal;
use stockscope_core::{Listing, Symbol};

use super::companies::COMPANIES;

/// Extra rows that exercise the ticker filter and its fallback path.
///
/// `PENNY` sits under the price floor, `NOPX` has no price, `FAIL` and `ZZZZ`
/// pass the filter but have no fetchable profile.
const EXTRA: &[(&str, &str, &str, Option<i64>)] = &[
    ("PENNY", "Penny Holdings", "NASDAQ", Some(42)),
    ("NOPX", "No Price Corp", "NASDAQ", None),
    ("FAIL", "Failing Systems", "NASDAQ", Some(1000)),
    ("ZZZZ", "Unprofiled Ltd", "NASDAQ", Some(1250)),
];

pub fn stock_list() -> Vec<Listing> {
    let known = COMPANIES
        .iter()
        .map(|c| (c.symbol, c.name, c.exchange, Some(c.price)));
    known
        .chain(EXTRA.iter().copied())
        .filter_map(|(symbol, name, exchange, price)| {
            Some(Listing {
                symbol: Symbol::new(symbol).ok()?,
                name: Some(name.to_string()),
                exchange: Some(exchange.to_string()),
                price: price.map(|p| Decimal::new(p, 2)),
            })
        })
        .collect()
}
