use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use stockscope_core::connector::{
    HistoryProvider, ListingProvider, ProfileProvider, ScopeConnector, SearchProvider,
};
use stockscope_core::{
    CompanyProfile, Listing, PricePoint, ScopeError, SearchHit, SearchRequest, Symbol,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone, Debug)]
pub enum MockBehavior<T> {
    /// Return the provided value.
    Return(T),
    /// Fail with the provided error.
    Fail(ScopeError),
    /// Hang indefinitely (simulate a stalled request).
    Hang,
}

/// One recorded call against the dynamic mock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockCall {
    /// `search` with the trimmed query.
    Search(String),
    /// `profile` for a symbol.
    Profile(Symbol),
    /// `history` for a symbol.
    History(Symbol),
    /// `stock_list`.
    StockList,
}

#[derive(Default)]
struct InternalState {
    profile_rules: HashMap<Symbol, MockBehavior<CompanyProfile>>,
    history_rules: HashMap<Symbol, MockBehavior<Vec<PricePoint>>>,
    search_rule: Option<MockBehavior<Vec<SearchHit>>>,
    listing_rule: Option<MockBehavior<Vec<Listing>>>,
    delay: Option<Duration>,
    calls: Vec<MockCall>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `profile` calls for a specific symbol.
    pub async fn set_profile_behavior(&self, symbol: Symbol, behavior: MockBehavior<CompanyProfile>) {
        let mut guard = self.state.lock().await;
        guard.profile_rules.insert(symbol, behavior);
    }

    /// Set the behavior for `history` calls for a specific symbol.
    pub async fn set_history_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<Vec<PricePoint>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol, behavior);
    }

    /// Set the behavior for every `search` call.
    pub async fn set_search_behavior(&self, behavior: MockBehavior<Vec<SearchHit>>) {
        self.state.lock().await.search_rule = Some(behavior);
    }

    /// Set the behavior for every `stock_list` call.
    pub async fn set_listing_behavior(&self, behavior: MockBehavior<Vec<Listing>>) {
        self.state.lock().await.listing_rule = Some(behavior);
    }

    /// Delay every answer by `delay` (on the tokio clock, so paused-time tests
    /// can step through it).
    pub async fn set_delay(&self, delay: Option<Duration>) {
        self.state.lock().await.delay = delay;
    }

    /// Return a copy of the call log, in arrival order.
    pub async fn calls(&self) -> Vec<MockCall> {
        self.state.lock().await.calls.clone()
    }

    /// Count recorded calls matching `pred`.
    pub async fn count_calls(&self, pred: impl Fn(&MockCall) -> bool) -> usize {
        self.state.lock().await.calls.iter().filter(|c| pred(c)).count()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Calls without a configured behavior fail with `Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn ScopeConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn ScopeConnector>, controller)
    }

    /// Log the call and snapshot the matching behavior plus the delay, without
    /// holding the lock across the answer.
    async fn record<T: Clone>(
        &self,
        call: MockCall,
        pick: impl FnOnce(&InternalState) -> Option<MockBehavior<T>>,
    ) -> (Option<MockBehavior<T>>, Option<Duration>) {
        let mut guard = self.state.lock().await;
        guard.calls.push(call);
        (pick(&guard), guard.delay)
    }

    async fn answer<T>(
        behavior: Option<MockBehavior<T>>,
        delay: Option<Duration>,
        capability: &'static str,
    ) -> Result<T, ScopeError> {
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }
        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(ScopeError::unsupported(capability)),
        }
    }
}

impl ScopeConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self as &dyn SearchProvider)
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_listing_provider(&self) -> Option<&dyn ListingProvider> {
        Some(self as &dyn ListingProvider)
    }
}

#[async_trait]
impl SearchProvider for DynamicMockConnector {
    async fn search(&self, req: &SearchRequest) -> Result<Vec<SearchHit>, ScopeError> {
        let (behavior, delay) = self
            .record(MockCall::Search(req.query().to_string()), |s| {
                s.search_rule.clone()
            })
            .await;
        Self::answer(behavior, delay, "search").await
    }
}

#[async_trait]
impl ProfileProvider for DynamicMockConnector {
    async fn profile(&self, symbol: &Symbol) -> Result<CompanyProfile, ScopeError> {
        let (behavior, delay) = self
            .record(MockCall::Profile(symbol.clone()), |s| {
                s.profile_rules.get(symbol).cloned()
            })
            .await;
        Self::answer(behavior, delay, "profile").await
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(&self, symbol: &Symbol) -> Result<Vec<PricePoint>, ScopeError> {
        let (behavior, delay) = self
            .record(MockCall::History(symbol.clone()), |s| {
                s.history_rules.get(symbol).cloned()
            })
            .await;
        Self::answer(behavior, delay, "history").await
    }
}

#[async_trait]
impl ListingProvider for DynamicMockConnector {
    async fn stock_list(&self) -> Result<Vec<Listing>, ScopeError> {
        let (behavior, delay) = self
            .record(MockCall::StockList, |s| s.listing_rule.clone())
            .await;
        Self::answer(behavior, delay, "stock-list").await
    }
}
