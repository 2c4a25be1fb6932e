#![allow(dead_code)]

use std::sync::Arc;

use rust_decimal::Decimal;
use stockscope::StockScope;
use stockscope_core::{CompanyProfile, Listing, SearchHit, Symbol};
use stockscope_mock::{DynamicMockConnector, DynamicMockController, MockConnector};

pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";
pub const TSLA: &str = "TSLA";

pub fn sym(s: &str) -> Symbol {
    Symbol::new(s).unwrap()
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Orchestrator over the static fixtures.
pub fn fixture_scope() -> Arc<StockScope> {
    Arc::new(
        StockScope::builder()
            .with_connector(Arc::new(MockConnector::new()))
            .build()
            .unwrap(),
    )
}

/// Orchestrator over a scriptable mock, plus its controller.
pub fn dynamic_scope() -> (Arc<StockScope>, DynamicMockController) {
    let (connector, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let scope = StockScope::builder()
        .with_connector(connector)
        .build()
        .unwrap();
    (Arc::new(scope), ctrl)
}

pub fn profile(s: &str, name: &str) -> CompanyProfile {
    let mut p = CompanyProfile::bare(sym(s));
    p.company_name = Some(name.to_string());
    p
}

pub fn hit(s: &str) -> SearchHit {
    SearchHit {
        symbol: sym(s),
        name: Some(format!("{s} Corp")),
        currency: Some("USD".into()),
        exchange_short_name: Some("NASDAQ".into()),
    }
}

pub fn listing(s: &str, price: &str) -> Listing {
    Listing {
        symbol: sym(s),
        name: None,
        exchange: Some("NASDAQ".into()),
        price: Some(dec(price)),
    }
}
