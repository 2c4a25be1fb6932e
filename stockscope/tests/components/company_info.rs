use stockscope::CompanyInfo;
use stockscope::components::company_info::{LOAD_FAILED, NO_SYMBOL};
use stockscope::symbol_from_query;
use stockscope::view::Render;
use stockscope::view::company::{CHART_FAILED, ChartView, LOADING, NO_HISTORY};
use stockscope_core::ScopeError;
use stockscope_mock::MockBehavior;

use crate::helpers::{AAPL, dynamic_scope, fixture_scope, profile, sym};

#[tokio::test]
async fn missing_symbol_fails_without_a_request() {
    let (scope, ctrl) = dynamic_scope();
    let mut info = CompanyInfo::new(scope, symbol_from_query("foo=bar"));
    assert!(info.view().loading);

    info.load().await;
    let view = info.view();
    assert!(!view.loading);
    assert_eq!(view.error.as_deref(), Some(NO_SYMBOL));
    assert!(ctrl.calls().await.is_empty());
}

#[tokio::test]
async fn profile_404_shows_generic_message_with_loading_hidden() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_profile_behavior(
        sym("NOPE"),
        MockBehavior::Fail(ScopeError::status("dyn", 404, "profile for NOPE")),
    )
    .await;
    let mut info = CompanyInfo::new(scope, Some(sym("NOPE")));

    info.load().await;
    let view = info.view();
    assert!(!view.loading);
    assert!(view.summary.is_none());
    assert_eq!(view.error.as_deref(), Some(LOAD_FAILED));
    let html = view.render_html();
    assert!(html.contains(LOAD_FAILED));
    assert!(!html.contains(LOADING));
    assert!(info.company().is_none());
}

#[tokio::test]
async fn loads_summary_then_chart() {
    let mut info = CompanyInfo::new(fixture_scope(), symbol_from_query("?symbol=AAPL"));
    assert_eq!(info.symbol(), Some(&sym(AAPL)));

    info.load().await;
    let summary = info.view().summary.clone().unwrap();
    assert_eq!(summary.name, "Apple Inc.");
    assert_eq!(summary.price, "$189.84");
    assert_eq!(summary.change, "+1.25%");
    assert_eq!(summary.market_cap, "2.95T");
    assert_eq!(info.view().chart, ChartView::Loading);

    info.add_chart().await;
    let ChartView::Ready(spec) = &info.view().chart else {
        panic!("expected a chart, got {:?}", info.view().chart);
    };
    assert_eq!(spec.len(), 90);
    assert_eq!(spec.labels.last().map(String::as_str), Some("2024-06-28"));
    assert!(info.view().render_html().contains(r#"<canvas id="stockChart""#));
}

#[tokio::test]
async fn chart_fallbacks() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_profile_behavior(sym("EMPTY"), MockBehavior::Return(profile("EMPTY", "Empty")))
        .await;
    ctrl.set_history_behavior(sym("EMPTY"), MockBehavior::Return(Vec::new()))
        .await;
    ctrl.set_profile_behavior(sym("BROKE"), MockBehavior::Return(profile("BROKE", "Broke")))
        .await;
    ctrl.set_history_behavior(
        sym("BROKE"),
        MockBehavior::Fail(ScopeError::status("dyn", 500, "history")),
    )
    .await;

    let mut empty = CompanyInfo::new(scope.clone(), Some(sym("EMPTY")));
    empty.load().await;
    empty.add_chart().await;
    assert_eq!(empty.view().chart, ChartView::Message(NO_HISTORY.into()));

    let mut broke = CompanyInfo::new(scope, Some(sym("BROKE")));
    broke.load().await;
    broke.add_chart().await;
    assert_eq!(broke.view().chart, ChartView::Message(CHART_FAILED.into()));
    assert!(broke.view().render_html().contains(CHART_FAILED));
}

#[tokio::test]
async fn missing_logo_and_website_then_destroy() {
    let mut info = CompanyInfo::new(fixture_scope(), Some(sym("IBM")));
    info.load().await;
    let summary = info.view().summary.clone().unwrap();
    assert!(summary.logo.is_none());
    assert!(summary.website.is_none());
    assert_eq!(summary.change, "-0.88%");

    info.destroy();
    assert!(info.company().is_none());
    assert!(info.view().summary.is_none());
    assert_eq!(info.view().render_html(), "");
}

#[tokio::test]
async fn failed_reload_forgets_previous_profile() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_profile_behavior(sym("FLIP"), MockBehavior::Return(profile("FLIP", "Flip Corp")))
        .await;
    let mut info = CompanyInfo::new(scope, Some(sym("FLIP")));
    info.load().await;
    assert_eq!(info.company().map(|c| c.symbol.clone()), Some(sym("FLIP")));

    ctrl.set_profile_behavior(
        sym("FLIP"),
        MockBehavior::Fail(ScopeError::status("dyn", 500, "profile for FLIP")),
    )
    .await;
    info.load().await;
    assert_eq!(info.view().error.as_deref(), Some(LOAD_FAILED));
    assert!(info.company().is_none());
}

#[tokio::test]
async fn chart_loads_by_symbol_without_a_profile() {
    let mut info = CompanyInfo::new(fixture_scope(), Some(sym(AAPL)));
    assert!(info.company().is_none());

    info.add_chart().await;
    let ChartView::Ready(spec) = &info.view().chart else {
        panic!("expected a chart, got {:?}", info.view().chart);
    };
    assert_eq!(spec.len(), 90);

    let mut blank = CompanyInfo::new(fixture_scope(), None);
    blank.add_chart().await;
    assert_eq!(blank.view().chart, ChartView::Loading);
}
