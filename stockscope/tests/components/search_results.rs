use stockscope::components::SearchResults;
use stockscope::view::Render;
use stockscope::view::results::{LOADING, NO_RESULTS, ResultsView};

use crate::helpers::{dec, profile};

fn three() -> Vec<stockscope_core::CompanyProfile> {
    let mut apple = profile("AAPL", "Apple Inc.");
    apple.changes = Some(dec("1.25"));
    let mut tesla = profile("TSLA", "Tesla, Inc.");
    tesla.changes_percentage = Some(dec("-4.56"));
    let ibm = profile("IBM", "International Business Machines");
    vec![apple, tesla, ibm]
}

#[test]
fn render_filter_sort_and_counts() {
    let results = SearchResults::new();
    assert_eq!(results.view(), ResultsView::Cleared);

    results.render(&three());
    assert_eq!(results.count(), 3);

    let kept = results.filter(|c| c.symbol.as_str() != "IBM");
    assert_eq!(kept.len(), 2);
    assert_eq!(results.count(), 2);

    let sorted = results.sort(|a, b| b.symbol.cmp(&a.symbol));
    let order: Vec<_> = sorted.iter().map(|c| c.symbol.to_string()).collect();
    assert_eq!(order, vec!["TSLA", "AAPL"]);

    let ResultsView::Cards { cards, highlight } = results.view() else {
        panic!("expected cards");
    };
    assert!(highlight.is_none());
    assert_eq!(cards[0].change, "-4.56%");
    assert_eq!(cards[1].change, "+1.25%");
}

#[test]
fn empty_render_shows_no_results() {
    let results = SearchResults::new();
    results.render(&[]);
    assert_eq!(results.view(), ResultsView::NoResults(NO_RESULTS.into()));

    results.render(&three());
    let none = results.filter(|_| false);
    assert!(none.is_empty());
    assert!(results.view().render_html().contains(NO_RESULTS));
}

#[test]
fn highlight_marks_matches_in_rendered_cards() {
    let results = SearchResults::new();
    results.highlight("apple");
    assert_eq!(results.view(), ResultsView::Cleared);

    results.render(&three());
    results.highlight("INC");
    let html = results.view().render_html();
    assert!(html.contains("Apple <mark>Inc</mark>."));
    assert!(html.contains("Tesla, <mark>Inc</mark>."));
    assert!(!html.contains("<mark>IBM"));
}

#[test]
fn status_views_keep_the_last_companies() {
    let results = SearchResults::new();
    results.render(&three());

    results.show_loading();
    assert!(results.view().render_html().contains(LOADING));
    results.show_error("boom");
    assert_eq!(results.view(), ResultsView::Error("boom".into()));
    results.clear();
    assert_eq!(results.view().render_html(), "");
    assert_eq!(results.companies().len(), 3);
}
