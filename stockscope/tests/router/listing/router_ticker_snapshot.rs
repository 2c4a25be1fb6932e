use stockscope_core::{ScopeError, TickerEntry};
use stockscope_mock::{MockBehavior, MockCall};

use crate::helpers::{dynamic_scope, fixture_scope, listing, profile, sym};

#[tokio::test]
async fn snapshot_filters_then_keeps_failed_profiles_shallow() {
    let scope = fixture_scope();
    let report = scope.ticker_snapshot().await.unwrap();

    let symbols: Vec<_> = report.items.iter().map(|e| e.symbol().to_string()).collect();
    assert_eq!(
        symbols,
        vec!["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "TSLA", "META", "FAIL", "ZZZZ"]
    );
    let shallow: Vec<_> = report
        .items
        .iter()
        .filter(|e| !e.is_enriched())
        .map(|e| e.symbol().to_string())
        .collect();
    assert_eq!(shallow, vec!["FAIL", "ZZZZ"]);
    assert_eq!(report.warnings.len(), 2);

    let zzzz = report.items.last().unwrap().quote();
    assert_eq!(zzzz.price, Some(crate::helpers::dec("12.50")));
    assert_eq!(zzzz.change, None);
}

#[tokio::test]
async fn only_the_first_enrich_count_listings_are_fetched() {
    let (scope, ctrl) = dynamic_scope();
    let rows: Vec<_> = (0..60).map(|i| listing(&format!("S{i}"), "5")).collect();
    ctrl.set_listing_behavior(MockBehavior::Return(rows)).await;
    ctrl.set_profile_behavior(sym("S0"), MockBehavior::Return(profile("S0", "Zero")))
        .await;

    let report = scope.ticker_snapshot().await.unwrap();
    assert_eq!(report.items.len(), 20);
    assert!(matches!(report.items[0], TickerEntry::Profile { .. }));
    assert!(report.items[1..].iter().all(|e| !e.is_enriched()));
    assert_eq!(
        ctrl.count_calls(|c| matches!(c, MockCall::Profile(_))).await,
        20
    );
}

#[tokio::test]
async fn stock_list_failure_is_the_only_error() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_listing_behavior(MockBehavior::Fail(ScopeError::status("dyn", 503, "stock list")))
        .await;
    let err = scope.ticker_snapshot().await.unwrap_err();
    assert_eq!(err, ScopeError::status("dyn", 503, "stock list"));
}
