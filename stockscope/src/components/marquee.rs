//! Scrolling ticker of exchange-listed stocks with periodic refresh.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::StockScope;
use crate::view::ticker::{Animation, LOAD_FAILED, NO_DATA, TickerItem, TickerView};

/// Owns the background refresh task. Stopping or dropping the handle aborts
/// the task.
#[derive(Debug)]
pub struct RefreshHandle {
    inner: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    const fn new(task: JoinHandle<()>) -> Self {
        Self { inner: Some(task) }
    }

    /// Abort the refresh task.
    pub fn stop(mut self) {
        self.abort();
    }

    /// `true` once the task has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.as_ref().is_none_or(JoinHandle::is_finished)
    }

    fn abort(&mut self) {
        if let Some(h) = self.inner.take()
            && !h.is_finished()
        {
            h.abort();
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Result of one [`Marquee::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Another load was running, or the ticker was destroyed; the view was
    /// not touched.
    Skipped,
    /// The strip now shows this many quotes (0 means the empty-data message).
    Loaded(usize),
    /// The stock list could not be fetched; the error message is showing.
    Failed,
}

/// Clears the loading flag on every exit path.
struct LoadGuard<'a>(&'a AtomicBool);

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Ticker component.
pub struct Marquee {
    scope: Arc<StockScope>,
    view: Mutex<TickerView>,
    loading: AtomicBool,
    paused: AtomicBool,
    destroyed: AtomicBool,
    refresh: Mutex<Option<RefreshHandle>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

impl Marquee {
    /// Create the ticker in its initial state. Nothing is fetched yet.
    #[must_use]
    pub fn new(scope: Arc<StockScope>) -> Arc<Self> {
        Arc::new(Self {
            scope,
            view: Mutex::new(TickerView::Initial),
            loading: AtomicBool::new(false),
            paused: AtomicBool::new(false),
            destroyed: AtomicBool::new(false),
            refresh: Mutex::new(None),
        })
    }

    /// Load once, then refresh every `refresh_interval`. Revives a destroyed
    /// ticker.
    pub async fn init(self: &Arc<Self>) -> LoadOutcome {
        self.destroyed.store(false, Ordering::Release);
        let outcome = self.load().await;
        self.start_auto_refresh();
        outcome
    }

    fn animation(&self) -> Animation {
        if self.paused.load(Ordering::Acquire) {
            Animation::Paused
        } else {
            Animation::Running
        }
    }

    /// Fetch the listing snapshot, enrich it, and show it.
    ///
    /// A load that starts while another is running is skipped. After
    /// [`destroy`](Self::destroy) loads are skipped, and a load already in
    /// flight discards its result.
    #[tracing::instrument(target = "stockscope::components", skip(self))]
    pub async fn load(&self) -> LoadOutcome {
        if self.destroyed.load(Ordering::Acquire) {
            return LoadOutcome::Skipped;
        }
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(target: "stockscope::components", "ticker load already running, skipping");
            return LoadOutcome::Skipped;
        }
        let _guard = LoadGuard(&self.loading);
        if !self.write_view(TickerView::Loading) {
            return LoadOutcome::Skipped;
        }

        let (view, outcome) = match self.scope.ticker_snapshot().await {
            Ok(report) if report.items.is_empty() => {
                (TickerView::Error(NO_DATA.to_string()), LoadOutcome::Loaded(0))
            }
            Ok(report) => {
                let items: Vec<TickerItem> = report.items.iter().map(TickerItem::from).collect();
                let n = items.len();
                (
                    TickerView::Ready {
                        items,
                        animation: self.animation(),
                    },
                    LoadOutcome::Loaded(n),
                )
            }
            Err(e) => {
                tracing::error!(target: "stockscope::components", error = %e, "ticker load failed");
                (TickerView::Error(LOAD_FAILED.to_string()), LoadOutcome::Failed)
            }
        };
        if !self.write_view(view) {
            tracing::debug!(target: "stockscope::components", "ticker destroyed during load, dropping result");
            return LoadOutcome::Skipped;
        }
        outcome
    }

    /// Replace the view unless the ticker has been destroyed. The flag is read
    /// under the view lock, so a concurrent `destroy` always wins.
    fn write_view(&self, to: TickerView) -> bool {
        let mut view = lock(&self.view);
        if self.destroyed.load(Ordering::Acquire) {
            return false;
        }
        *view = to;
        true
    }

    /// Same as [`load`](Self::load).
    pub async fn refresh(&self) -> LoadOutcome {
        self.load().await
    }

    /// Start the periodic refresh, replacing any running timer. The first
    /// refresh fires one interval from now.
    ///
    /// The task only holds a weak reference, so it ends on its own once the
    /// marquee is gone.
    pub fn start_auto_refresh(self: &Arc<Self>) {
        let period = self.scope.config().refresh_interval;
        let weak: Weak<Self> = Arc::downgrade(self);
        let task = tokio::spawn(async move {
            let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let Some(marquee) = weak.upgrade() else { break };
                marquee.load().await;
            }
        });
        *lock(&self.refresh) = Some(RefreshHandle::new(task));
    }

    /// Stop the periodic refresh, if running.
    pub fn stop_auto_refresh(&self) {
        if let Some(handle) = lock(&self.refresh).take() {
            handle.stop();
        }
    }

    /// `true` while a refresh timer is installed and running.
    #[must_use]
    pub fn is_auto_refreshing(&self) -> bool {
        lock(&self.refresh).as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Freeze the strip.
    pub fn pause(&self) {
        self.set_animation(Animation::Paused);
    }

    /// Resume scrolling.
    pub fn resume(&self) {
        self.set_animation(Animation::Running);
    }

    fn set_animation(&self, to: Animation) {
        self.paused.store(to == Animation::Paused, Ordering::Release);
        if let TickerView::Ready { animation, .. } = &mut *lock(&self.view) {
            *animation = to;
        }
    }

    /// Current view.
    #[must_use]
    pub fn view(&self) -> TickerView {
        lock(&self.view).clone()
    }

    /// Stop the timer and clear the strip. Loads still in flight leave the
    /// cleared view alone.
    pub fn destroy(&self) {
        self.destroyed.store(true, Ordering::Release);
        self.stop_auto_refresh();
        *lock(&self.view) = TickerView::Cleared;
    }
}
