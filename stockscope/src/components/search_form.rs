//! Search box with its submit state machine.
//!
//! `Idle -> Searching -> (Success | Failed) -> Idle`. A submission while
//! `Searching` is ignored; blank queries are rejected before `Searching` is
//! entered and never reach the network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use stockscope_core::{CompanyProfile, ScopeError};
use tokio::time::Instant;

use crate::StockScope;
use crate::view::form::{FormView, LABEL_BUSY, LABEL_IDLE};

/// Inline message for a blank query.
pub const EMPTY_QUERY: &str = "please enter a search term";
/// Inline message for a failed search.
pub const SEARCH_FAILED: &str = "failed to search companies, please try again";

type SearchCallback = Arc<dyn Fn(&[CompanyProfile]) + Send + Sync>;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input.
    Idle,
    /// A search is in flight; controls are disabled.
    Searching,
}

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another search was in flight; nothing happened.
    Ignored,
    /// The query was blank; the validation message is showing.
    Rejected,
    /// Search and enrichment finished; the callback received these companies.
    Completed(Vec<CompanyProfile>),
    /// The search failed; the failure message is showing.
    Failed(ScopeError),
}

struct InlineError {
    message: String,
    shown_at: Instant,
}

#[derive(Default)]
struct FormState {
    value: String,
    error: Option<InlineError>,
}

/// Resets the in-flight flag when the submit finishes or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Search form component.
pub struct SearchForm {
    scope: Arc<StockScope>,
    state: Mutex<FormState>,
    in_flight: AtomicBool,
    callback: Mutex<Option<SearchCallback>>,
}

impl SearchForm {
    /// Create an idle, empty form.
    #[must_use]
    pub fn new(scope: Arc<StockScope>) -> Self {
        Self {
            scope,
            state: Mutex::new(FormState::default()),
            in_flight: AtomicBool::new(false),
            callback: Mutex::new(None),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Register the callback that receives enriched results. Replaces any
    /// previous callback.
    pub fn on_search<F>(&self, f: F)
    where
        F: Fn(&[CompanyProfile]) + Send + Sync + 'static,
    {
        *self
            .callback
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(Arc::new(f));
    }

    /// Trimmed input text.
    #[must_use]
    pub fn value(&self) -> String {
        self.state().value.trim().to_string()
    }

    /// Replace the input text.
    pub fn set_value(&self, value: impl Into<String>) {
        self.state().value = value.into();
    }

    /// Empty the input.
    pub fn clear(&self) {
        self.state().value.clear();
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        if self.in_flight.load(Ordering::Acquire) {
            FormPhase::Searching
        } else {
            FormPhase::Idle
        }
    }

    /// Show an inline error, replacing any older one. It stays visible for the
    /// configured `error_display`.
    pub fn show_error(&self, message: impl Into<String>) {
        self.state().error = Some(InlineError {
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    /// Snapshot of the controls.
    #[must_use]
    pub fn view(&self) -> FormView {
        let busy = self.phase() == FormPhase::Searching;
        let ttl = self.scope.config().error_display;
        let state = self.state();
        FormView {
            value: state.value.clone(),
            input_disabled: busy,
            button_disabled: busy,
            button_label: if busy { LABEL_BUSY } else { LABEL_IDLE }.to_string(),
            error: state
                .error
                .as_ref()
                .filter(|e| e.shown_at.elapsed() < ttl)
                .map(|e| e.message.clone()),
        }
    }

    /// Submit the current input.
    ///
    /// Searches, enriches every hit with its profile (dropping hits whose
    /// profile fails), then hands the result to the `on_search` callback.
    #[tracing::instrument(target = "stockscope::components", skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let query = self.value();
        if query.is_empty() {
            self.show_error(EMPTY_QUERY);
            return SubmitOutcome::Rejected;
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(target: "stockscope::components", "search already in flight");
            return SubmitOutcome::Ignored;
        }
        let _guard = InFlight(&self.in_flight);

        match self.scope.search_companies(&query).await {
            Ok(report) => {
                let callback = self
                    .callback
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner)
                    .clone();
                if let Some(cb) = callback {
                    cb(&report.items);
                }
                SubmitOutcome::Completed(report.items)
            }
            Err(e) => {
                tracing::error!(target: "stockscope::components", query = %query, error = %e, "search failed");
                self.show_error(SEARCH_FAILED);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
