use std::sync::Arc;
use std::time::Duration;

use stockscope::StockScope;
use stockscope_core::ScopeError;
use stockscope_mock::{DynamicMockConnector, MockBehavior, MockConnector};

use crate::helpers::{AAPL, listing, sym};

#[tokio::test(start_paused = true)]
async fn slow_profile_trips_configured_timeout() {
    let scope = StockScope::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .request_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = scope.profile(&sym("TIMEOUT")).await.unwrap_err();
    assert_eq!(err, ScopeError::request_timeout("profile"));
}

#[tokio::test(start_paused = true)]
async fn without_timeout_slow_calls_complete() {
    let scope = StockScope::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();

    // TIMEOUT has no fixture profile; reaching NotFound proves the call waited.
    let err = scope.profile(&sym("TIMEOUT")).await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err:?}");
}

#[tokio::test(start_paused = true)]
async fn hung_enrichment_degrades_to_shallow_under_timeout() {
    let (connector, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let scope = StockScope::builder()
        .with_connector(connector)
        .request_timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    ctrl.set_listing_behavior(MockBehavior::Return(vec![listing(AAPL, "190")]))
        .await;
    ctrl.set_profile_behavior(sym(AAPL), MockBehavior::Hang).await;

    let report = scope.ticker_snapshot().await.unwrap();
    assert_eq!(report.items.len(), 1);
    assert!(!report.items[0].is_enriched());
    assert_eq!(
        report.warnings,
        vec![ScopeError::request_timeout("profile")]
    );
}
