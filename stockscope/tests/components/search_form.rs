use std::sync::{Arc, Mutex};
use std::task::Poll;
use std::time::Duration;

use stockscope::components::search_form::{EMPTY_QUERY, SEARCH_FAILED};
use stockscope::{FormPhase, SearchForm, SubmitOutcome};
use stockscope_mock::{MockBehavior, MockCall};
use tokio_test::{assert_pending, task};

use crate::helpers::{dynamic_scope, fixture_scope, hit, profile, sym};

#[tokio::test]
async fn blank_query_is_rejected_without_a_request() {
    let (scope, ctrl) = dynamic_scope();
    let form = SearchForm::new(scope);
    form.set_value("   ");

    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert_eq!(form.view().error.as_deref(), Some(EMPTY_QUERY));
    assert_eq!(form.phase(), FormPhase::Idle);
    assert!(ctrl.calls().await.is_empty());
}

#[tokio::test]
async fn successful_submit_feeds_the_callback() {
    let form = SearchForm::new(fixture_scope());
    let seen: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&seen);
    form.on_search(move |companies| {
        let mut sink = sink.lock().unwrap();
        sink.extend(companies.iter().map(|c| c.symbol.to_string()));
    });
    form.set_value("  micro ");
    assert_eq!(form.value(), "micro");

    let outcome = form.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Completed(ref items) if items.len() == 1));
    assert_eq!(*seen.lock().unwrap(), vec!["MSFT".to_string()]);
    let view = form.view();
    assert!(!view.input_disabled && !view.button_disabled);
    assert_eq!(view.button_label, "Search");
    assert!(view.error.is_none());
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_searching_is_ignored() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_delay(Some(Duration::from_millis(100))).await;
    ctrl.set_search_behavior(MockBehavior::Return(vec![hit("AAA")]))
        .await;
    ctrl.set_profile_behavior(sym("AAA"), MockBehavior::Return(profile("AAA", "Triple A")))
        .await;
    let form = SearchForm::new(scope);
    form.set_value("aaa");

    let (first, second) = tokio::join!(form.submit(), form.submit());
    assert!(matches!(first, SubmitOutcome::Completed(ref items) if items.len() == 1));
    assert_eq!(second, SubmitOutcome::Ignored);
    assert_eq!(
        ctrl.count_calls(|c| matches!(c, MockCall::Search(_))).await,
        1
    );
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn controls_are_disabled_while_searching() {
    let (scope, ctrl) = dynamic_scope();
    ctrl.set_delay(Some(Duration::from_millis(100))).await;
    ctrl.set_search_behavior(MockBehavior::Return(Vec::new())).await;
    let form = SearchForm::new(scope);
    form.set_value("aaa");

    let mut pending = task::spawn(form.submit());
    assert_pending!(pending.poll());
    assert_eq!(form.phase(), FormPhase::Searching);
    let busy = form.view();
    assert!(busy.input_disabled && busy.button_disabled);
    assert_eq!(busy.button_label, "Searching...");

    let outcome = loop {
        tokio::time::advance(Duration::from_millis(50)).await;
        if let Poll::Ready(out) = pending.poll() {
            break out;
        }
    };
    drop(pending);
    assert_eq!(outcome, SubmitOutcome::Completed(Vec::new()));
    assert_eq!(form.view().button_label, "Search");
}

#[tokio::test(start_paused = true)]
async fn failure_message_expires_after_display_window() {
    let form = SearchForm::new(fixture_scope());
    form.set_value("fail");

    assert!(matches!(form.submit().await, SubmitOutcome::Failed(_)));
    assert_eq!(form.view().error.as_deref(), Some(SEARCH_FAILED));

    tokio::time::advance(Duration::from_millis(4_900)).await;
    assert_eq!(form.view().error.as_deref(), Some(SEARCH_FAILED));

    tokio::time::advance(Duration::from_millis(200)).await;
    assert!(form.view().error.is_none());
}

#[tokio::test(start_paused = true)]
async fn newer_error_replaces_older_and_restarts_the_window() {
    let form = SearchForm::new(fixture_scope());
    form.show_error("first");
    tokio::time::advance(Duration::from_secs(4)).await;
    form.show_error("second");
    tokio::time::advance(Duration::from_secs(4)).await;
    assert_eq!(form.view().error.as_deref(), Some("second"));
}

#[tokio::test]
async fn clear_empties_the_input() {
    let form = SearchForm::new(fixture_scope());
    form.set_value("apple");
    form.clear();
    assert_eq!(form.value(), "");
    assert_eq!(form.view().value, "");
}
