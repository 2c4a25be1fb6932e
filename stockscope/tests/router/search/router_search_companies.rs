use std::sync::Arc;

use stockscope::StockScope;
use stockscope_core::ScopeError;
use stockscope_mock::{MockBehavior, MockCall, MockConnector};

use crate::helpers::{dynamic_scope, fixture_scope, hit, profile, sym};

#[tokio::test]
async fn search_applies_limit_and_exchange() {
    let scope = StockScope::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .search_limit(2)
        .build()
        .unwrap();
    let hits = scope.search("inc").await.unwrap();
    let syms: Vec<_> = hits.iter().map(|h| h.symbol.to_string()).collect();
    assert_eq!(syms, vec!["AAPL", "GOOGL"]);

    let nyse = StockScope::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .search_exchange("NYSE")
        .build()
        .unwrap();
    let hits = nyse.search("corporation").await.unwrap();
    let syms: Vec<_> = hits.iter().map(|h| h.symbol.to_string()).collect();
    assert_eq!(syms, vec!["BAC", "IBM"]);
}

#[tokio::test]
async fn search_companies_enriches_every_hit() {
    let scope = fixture_scope();
    let report = scope.search_companies("inc").await.unwrap();
    let names: Vec<_> = report
        .items
        .iter()
        .map(|p| p.company_name.clone().unwrap_or_default())
        .collect();
    assert_eq!(
        names,
        vec![
            "Apple Inc.",
            "Alphabet Inc.",
            "Amazon.com, Inc.",
            "Tesla, Inc.",
            "Meta Platforms, Inc."
        ]
    );
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn failed_profiles_are_dropped_from_search() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_search_behavior(MockBehavior::Return(vec![hit("AAA"), hit("BBB"), hit("CCC")]))
        .await;
    ctrl.set_profile_behavior(sym("AAA"), MockBehavior::Return(profile("AAA", "A")))
        .await;
    ctrl.set_profile_behavior(sym("CCC"), MockBehavior::Return(profile("CCC", "C")))
        .await;

    let report = scope.search_companies("x").await.unwrap();
    let syms: Vec<_> = report.items.iter().map(|p| p.symbol.to_string()).collect();
    assert_eq!(syms, vec!["AAA", "CCC"]);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(ctrl.count_calls(|c| matches!(c, MockCall::Search(_))).await, 1);
}

#[tokio::test]
async fn zero_hits_is_empty_not_error() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_search_behavior(MockBehavior::Return(Vec::new())).await;
    let report = scope.search_companies("nothing").await.unwrap();
    assert!(report.items.is_empty());
    assert_eq!(ctrl.calls().await, vec![MockCall::Search("nothing".into())]);
}

#[tokio::test]
async fn search_failure_is_raised() {
    let scope = fixture_scope();
    let err = scope.search_companies("fail").await.unwrap_err();
    assert!(matches!(err, ScopeError::Connector { .. }));
}
