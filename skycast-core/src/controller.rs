//! The search-fetch controller.
//!
//! Owns the query text, the debounce timer, request supersession, and the
//! published [`ViewState`]. The presentation layer feeds it keystrokes via
//! [`SearchController::set_query`] (debounced) or an explicit trigger via
//! [`SearchController::search_now`], and watches the resulting state through
//! [`SearchController::subscribe`].
//!
//! Both entry points spawn onto the ambient Tokio runtime, so a controller
//! must live inside one.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    error::SearchError,
    model::WeatherReport,
    provider::{ForecastProvider, GeocodingProvider},
};

/// Quiet period after the last keystroke before a search fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// What the widget should present right now. Exactly one variant holds at
/// any instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Ready(WeatherReport),
}

pub struct SearchController {
    inner: Arc<Inner>,
}

struct Inner {
    geocoder: Arc<dyn GeocodingProvider>,
    forecaster: Arc<dyn ForecastProvider>,
    debounce: Duration,
    tx: watch::Sender<ViewState>,
    live: Mutex<Live>,
}

/// The controller's only mutable state, all replaced wholesale per search.
#[derive(Default)]
struct Live {
    query: String,
    generation: u64,
    timer: Option<JoinHandle<()>>,
    inflight: Option<CancellationToken>,
}

impl SearchController {
    pub fn new(geocoder: Arc<dyn GeocodingProvider>, forecaster: Arc<dyn ForecastProvider>) -> Self {
        Self::with_debounce(geocoder, forecaster, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(
        geocoder: Arc<dyn GeocodingProvider>,
        forecaster: Arc<dyn ForecastProvider>,
        debounce: Duration,
    ) -> Self {
        let (tx, _) = watch::channel(ViewState::Idle);
        Self {
            inner: Arc::new(Inner {
                geocoder,
                forecaster,
                debounce,
                tx,
                live: Mutex::new(Live::default()),
            }),
        }
    }

    /// Watch the published view state.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.inner.tx.subscribe()
    }

    /// Current snapshot of the view state.
    pub fn view(&self) -> ViewState {
        self.inner.tx.borrow().clone()
    }

    /// Record a keystroke and restart the debounce window.
    ///
    /// The previously scheduled timer (if any) is cancelled; nothing else is.
    /// An in-flight search keeps running until the timer actually fires.
    pub fn set_query(&self, text: &str) {
        let mut live = self.inner.live.lock();
        live.query = text.to_string();

        if let Some(timer) = live.timer.take() {
            timer.abort();
        }

        let inner = Arc::clone(&self.inner);
        let scheduled = live.query.clone();
        live.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.debounce).await;

            // a timer can fire despite a later abort; only the latest query
            // may trigger a search
            if inner.live.lock().query != scheduled {
                return;
            }
            let trimmed = scheduled.trim();
            if trimmed.is_empty() {
                return;
            }
            inner.run_search(trimmed.to_string()).await;
        }));
    }

    /// Explicit search trigger, bypassing the debounce window.
    ///
    /// Blank text is ignored.
    pub fn search_now(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        let inner = Arc::clone(&self.inner);
        let text = trimmed.to_string();
        tokio::spawn(async move {
            inner.run_search(text).await;
        });
    }
}

impl Inner {
    async fn run_search(self: Arc<Self>, text: String) {
        let (generation, token) = {
            let mut live = self.live.lock();
            live.generation += 1;
            if let Some(previous) = live.inflight.take() {
                previous.cancel();
            }
            let token = CancellationToken::new();
            live.inflight = Some(token.clone());
            self.tx.send_replace(ViewState::Loading);
            (live.generation, token)
        };

        tracing::debug!(query = %text, generation, "search started");
        let outcome = self.perform(&text, &token).await;

        let mut live = self.live.lock();
        if live.generation != generation {
            tracing::debug!(generation, "superseded search completion dropped");
            return;
        }
        live.inflight = None;

        match outcome {
            Ok(report) => {
                self.tx.send_replace(ViewState::Ready(report));
            }
            Err(err) if err.is_cancelled() => {}
            Err(err) => {
                tracing::warn!(query = %text, error = %err, "search failed");
                self.tx.send_replace(ViewState::Error(err.to_string()));
            }
        }
    }

    async fn perform(
        &self,
        text: &str,
        token: &CancellationToken,
    ) -> Result<WeatherReport, SearchError> {
        let candidates = tokio::select! {
            _ = token.cancelled() => return Err(SearchError::Cancelled),
            result = self.geocoder.search(text) => result?,
        };
        let place = candidates.into_iter().next().ok_or(SearchError::NotFound)?;

        let forecast = tokio::select! {
            _ = token.cancelled() => return Err(SearchError::Cancelled),
            result = self.forecaster.fetch(place.coordinate) => result?,
        };

        Ok(WeatherReport {
            place,
            current: forecast.current,
            forecast: forecast.daily,
        })
    }
}
