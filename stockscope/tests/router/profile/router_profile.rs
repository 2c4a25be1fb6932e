use rust_decimal::Decimal;
use stockscope_core::ScopeError;
use stockscope_mock::{MOCK_NAME, MockBehavior};

use crate::helpers::{AAPL, dynamic_scope, fixture_scope, sym};

#[tokio::test]
async fn fixture_profile_round_trips_fields() {
    let scope = fixture_scope();
    let p = scope.profile(&sym(AAPL)).await.unwrap();
    assert_eq!(p.company_name.as_deref(), Some("Apple Inc."));
    assert_eq!(p.price, Some(Decimal::new(18984, 2)));
    assert_eq!(p.changes, Some(Decimal::new(125, 2)));
    assert_eq!(p.exchange.as_deref(), Some("NASDAQ"));
}

#[tokio::test]
async fn http_404_passes_through_untouched() {
    let (scope, ctrl) = dynamic_scope();
    let not_found = ScopeError::status("dyn", 404, "profile for NOPE");
    ctrl.set_profile_behavior(sym("NOPE"), MockBehavior::Fail(not_found.clone()))
        .await;

    let err = scope.profile(&sym("NOPE")).await.unwrap_err();
    assert_eq!(err, not_found);
    assert!(err.is_not_found());
}

#[tokio::test]
async fn unknown_symbol_is_not_found_and_forced_failure_is_tagged() {
    let scope = fixture_scope();
    assert!(scope.profile(&sym("NOPE")).await.unwrap_err().is_not_found());

    match scope.profile(&sym("FAIL")).await.unwrap_err() {
        ScopeError::Connector { connector, .. } => assert_eq!(connector, MOCK_NAME),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn data_errors_are_attributed_to_the_connector() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_profile_behavior(sym("BAD"), MockBehavior::Fail(ScopeError::Data("truncated".into())))
        .await;
    let err = scope.profile(&sym("BAD")).await.unwrap_err();
    assert_eq!(err, ScopeError::connector("dyn", "data issue: truncated"));
}
