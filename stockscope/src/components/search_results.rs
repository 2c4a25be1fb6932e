//! Results list: enriched company cards with client-side filter, sort, and
//! highlight over the last rendered set.

use std::cmp::Ordering;
use std::sync::{Mutex, MutexGuard};

use stockscope_core::CompanyProfile;

use crate::view::results::{CompanyCard, NO_RESULTS, ResultsView};

#[derive(Default)]
struct ResultsState {
    companies: Vec<CompanyProfile>,
    view: Option<ResultsView>,
}

/// Results component.
#[derive(Default)]
pub struct SearchResults {
    state: Mutex<ResultsState>,
}

impl SearchResults {
    /// Create an empty, cleared list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ResultsState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn render_locked(state: &mut ResultsState, companies: Vec<CompanyProfile>) {
        state.view = Some(if companies.is_empty() {
            ResultsView::NoResults(NO_RESULTS.to_string())
        } else {
            ResultsView::Cards {
                cards: companies.iter().map(CompanyCard::from_profile).collect(),
                highlight: None,
            }
        });
        state.companies = companies;
    }

    /// Show `companies` as cards, or the empty-results message.
    pub fn render(&self, companies: &[CompanyProfile]) {
        Self::render_locked(&mut self.state(), companies.to_vec());
    }

    /// Show an error message.
    pub fn show_error(&self, message: impl Into<String>) {
        self.state().view = Some(ResultsView::Error(message.into()));
    }

    /// Show the searching spinner.
    pub fn show_loading(&self) {
        self.state().view = Some(ResultsView::Loading);
    }

    /// Empty the area. The last rendered companies are kept.
    pub fn clear(&self) {
        self.state().view = Some(ResultsView::Cleared);
    }

    /// The last rendered companies.
    #[must_use]
    pub fn companies(&self) -> Vec<CompanyProfile> {
        self.state().companies.clone()
    }

    /// Number of last rendered companies.
    #[must_use]
    pub fn count(&self) -> usize {
        self.state().companies.len()
    }

    /// Keep only companies matching `pred`, re-render, and return them.
    pub fn filter<F>(&self, pred: F) -> Vec<CompanyProfile>
    where
        F: Fn(&CompanyProfile) -> bool,
    {
        let mut state = self.state();
        let kept: Vec<CompanyProfile> = state
            .companies
            .iter()
            .filter(|c| pred(c))
            .cloned()
            .collect();
        Self::render_locked(&mut state, kept.clone());
        kept
    }

    /// Stable-sort the companies with `cmp`, re-render, and return them.
    pub fn sort<F>(&self, cmp: F) -> Vec<CompanyProfile>
    where
        F: FnMut(&CompanyProfile, &CompanyProfile) -> Ordering,
    {
        let mut state = self.state();
        let mut sorted = state.companies.clone();
        sorted.sort_by(cmp);
        Self::render_locked(&mut state, sorted.clone());
        sorted
    }

    /// Mark case-insensitive occurrences of `term` in card names and symbols.
    /// No-op for an empty term or when no cards are showing.
    pub fn highlight(&self, term: &str) {
        if term.is_empty() {
            return;
        }
        if let Some(ResultsView::Cards { highlight, .. }) = self.state().view.as_mut() {
            *highlight = Some(term.to_string());
        }
    }

    /// Current view.
    #[must_use]
    pub fn view(&self) -> ResultsView {
        self.state().view.clone().unwrap_or(ResultsView::Cleared)
    }
}
