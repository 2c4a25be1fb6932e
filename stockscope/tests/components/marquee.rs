use std::sync::Arc;
use std::time::Duration;

use stockscope::view::Render;
use stockscope::view::ticker::{Animation, LOAD_FAILED, NO_DATA, TickerView};
use stockscope::{LoadOutcome, Marquee, StockScope};
use stockscope_core::ScopeError;
use stockscope_mock::{DynamicMockConnector, DynamicMockController, MockBehavior, MockCall};

use crate::helpers::{dynamic_scope, fixture_scope, listing};

async fn listings(ctrl: &DynamicMockController) -> usize {
    ctrl.count_calls(|c| *c == MockCall::StockList).await
}

#[tokio::test]
async fn loads_and_renders_strip_twice() {
    let marquee = Marquee::new(fixture_scope());
    assert_eq!(marquee.view(), TickerView::Initial);

    assert_eq!(marquee.load().await, LoadOutcome::Loaded(9));
    let view = marquee.view();
    let TickerView::Ready { items, animation } = &view else {
        panic!("expected ready strip, got {view:?}");
    };
    assert_eq!(*animation, Animation::Running);
    assert_eq!(items[0].symbol, "AAPL");
    assert_eq!(items[0].change, "+1.25%");
    assert_eq!(items[6].symbol, "META");
    assert_eq!(items[6].change, "+0.00%");
    assert_eq!(items[8].symbol, "ZZZZ");
    assert_eq!(items[8].price, "$12.50");

    let html = view.render_html();
    assert_eq!(html.matches(r#"<div class="ticker-item">"#).count(), 18);
}

#[tokio::test]
async fn failures_and_empty_data_show_messages() {
    let (scope, ctrl) = dynamic_scope();
    let marquee = Marquee::new(scope);

    ctrl.set_listing_behavior(MockBehavior::Fail(ScopeError::status("dyn", 500, "stock list")))
        .await;
    assert_eq!(marquee.load().await, LoadOutcome::Failed);
    assert_eq!(marquee.view(), TickerView::Error(LOAD_FAILED.into()));
    assert!(marquee.view().render_html().contains("ERROR"));

    ctrl.set_listing_behavior(MockBehavior::Return(vec![listing("PENNY", "0.42")]))
        .await;
    assert_eq!(marquee.load().await, LoadOutcome::Loaded(0));
    assert_eq!(marquee.view(), TickerView::Error(NO_DATA.into()));
}

#[tokio::test(start_paused = true)]
async fn overlapping_load_is_skipped() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_delay(Some(Duration::from_millis(100))).await;
    ctrl.set_listing_behavior(MockBehavior::Return(vec![listing("AAA", "10")]))
        .await;
    let marquee = Marquee::new(scope);

    let (first, second) = tokio::join!(marquee.load(), marquee.refresh());
    assert_eq!(first, LoadOutcome::Loaded(1));
    assert_eq!(second, LoadOutcome::Skipped);
    assert_eq!(ctrl.count_calls(|c| *c == MockCall::StockList).await, 1);
}

#[tokio::test]
async fn pause_and_resume_survive_reload() {
    let marquee = Marquee::new(fixture_scope());
    marquee.load().await;

    marquee.pause();
    assert!(marquee.view().render_html().contains("animation-play-state: paused"));
    marquee.load().await;
    assert!(matches!(
        marquee.view(),
        TickerView::Ready { animation: Animation::Paused, .. }
    ));

    marquee.resume();
    assert!(marquee.view().render_html().contains("animation-play-state: running"));
}

#[tokio::test(start_paused = true)]
async fn auto_refresh_polls_every_interval_until_destroyed() {
    let (connector, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    ctrl.set_listing_behavior(MockBehavior::Return(vec![listing("AAA", "10")]))
        .await;
    let scope = StockScope::builder()
        .with_connector(connector)
        .refresh_interval(Duration::from_secs(60))
        .build()
        .unwrap();
    let marquee = Marquee::new(Arc::new(scope));

    assert_eq!(marquee.init().await, LoadOutcome::Loaded(1));
    assert!(marquee.is_auto_refreshing());
    assert_eq!(listings(&ctrl).await, 1);

    tokio::time::sleep(Duration::from_secs(59)).await;
    assert_eq!(listings(&ctrl).await, 1);
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(listings(&ctrl).await, 2);
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(listings(&ctrl).await, 4);

    marquee.destroy();
    assert!(!marquee.is_auto_refreshing());
    assert_eq!(marquee.view(), TickerView::Cleared);
    tokio::time::sleep(Duration::from_secs(600)).await;
    assert_eq!(listings(&ctrl).await, 4);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_marquee_stops_its_timer() {
    let (connector, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    ctrl.set_listing_behavior(MockBehavior::Return(Vec::new())).await;
    let scope = StockScope::builder()
        .with_connector(connector)
        .refresh_interval(Duration::from_secs(10))
        .build()
        .unwrap();
    let marquee = Marquee::new(Arc::new(scope));
    marquee.start_auto_refresh();
    drop(marquee);

    tokio::time::sleep(Duration::from_secs(100)).await;
    assert!(ctrl.calls().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn destroy_wins_over_a_load_in_flight() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_delay(Some(Duration::from_millis(100))).await;
    ctrl.set_listing_behavior(MockBehavior::Return(vec![listing("AAA", "10")]))
        .await;
    let marquee = Marquee::new(scope);

    let pending = tokio::spawn({
        let marquee = Arc::clone(&marquee);
        async move { marquee.load().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    marquee.destroy();
    assert_eq!(marquee.view(), TickerView::Cleared);

    assert_eq!(pending.await.unwrap(), LoadOutcome::Skipped);
    assert_eq!(marquee.view(), TickerView::Cleared);

    assert_eq!(marquee.refresh().await, LoadOutcome::Skipped);
    assert_eq!(marquee.view(), TickerView::Cleared);
    assert_eq!(listings(&ctrl).await, 1);

    assert_eq!(marquee.init().await, LoadOutcome::Loaded(1));
    assert!(matches!(marquee.view(), TickerView::Ready { .. }));
    marquee.destroy();
}
