use chrono::NaiveDate;
use stockscope_core::PricePoint;
use stockscope_mock::MockBehavior;

use crate::helpers::{AAPL, dec, dynamic_scope, fixture_scope, sym};

fn point(y: i32, m: u32, d: u32, close: &str) -> PricePoint {
    PricePoint {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        close: dec(close),
    }
}

#[tokio::test]
async fn chart_history_keeps_latest_window_ascending() {
    let scope = fixture_scope();
    let raw = scope.history(&sym(AAPL)).await.unwrap();
    assert_eq!(raw.len(), 120);

    let window = scope.chart_history(&sym(AAPL)).await.unwrap();
    assert_eq!(window.len(), 90);
    assert!(window.windows(2).all(|w| w[0].date <= w[1].date));
    assert_eq!(
        window.last().unwrap().date,
        NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
    );
}

#[tokio::test]
async fn short_unsorted_history_is_sorted_not_padded() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_history_behavior(
        sym("X"),
        MockBehavior::Return(vec![
            point(2024, 3, 2, "11"),
            point(2024, 3, 1, "10"),
            point(2024, 3, 3, "12"),
        ]),
    )
    .await;

    let window = scope.chart_history(&sym("X")).await.unwrap();
    let closes: Vec<_> = window.iter().map(|p| p.close).collect();
    assert_eq!(closes, vec![dec("10"), dec("11"), dec("12")]);
}

#[tokio::test]
async fn unknown_symbol_has_empty_history() {
    let scope = fixture_scope();
    assert!(scope.chart_history(&sym("NOPE")).await.unwrap().is_empty());
}
