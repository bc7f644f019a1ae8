//! Concurrent dashboard loads with a last-vertical-wins guard.
//!
//! A load is split in two so callers (and tests) can control ordering:
//! [`Aggregator::issue`] bumps the cycle and enters `Loading` under the
//! state lock; [`Aggregator::execute`] runs the reads and applies the result
//! only if no newer cycle was issued meanwhile, checked under the same lock.

use std::sync::Arc;

use pulse_config::DashboardConfig;
use pulse_core::entities::{Category, IndustryMetrics, MarketTrend, NewsArticle, Procedure, Provider};
use pulse_core::enums::Vertical;
use pulse_core::responses::{DashboardSnapshot, DashboardView, NewsArticles};
use pulse_source::{QuerySource, SourceError, fetch_all, fetch_first};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::catalogue::{self, NewsFeed};
use crate::error::{DashError, LOAD_FAILED_MESSAGE};
use crate::state::{DashboardData, DashboardState, LoadOutcome, Phase};

/// Proof that a load was issued; consumed by [`Aggregator::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an issued load does nothing until executed"]
pub struct LoadTicket {
    pub cycle: u64,
    pub vertical: Vertical,
}

/// Owns the dashboard state for one query source.
#[derive(Debug)]
pub struct Aggregator<S> {
    source: S,
    limits: DashboardConfig,
    state: watch::Sender<DashboardState>,
}

impl<S: QuerySource> Aggregator<S> {
    /// Create an idle aggregator showing `initial`.
    #[must_use]
    pub fn new(source: S, limits: DashboardConfig, initial: Vertical) -> Self {
        let (state, _rx) = watch::channel(DashboardState {
            vertical: initial,
            ..DashboardState::default()
        });
        Self {
            source,
            limits,
            state,
        }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Start a new cycle for `vertical`: stale data is dropped and the
    /// state enters `Loading`. Any earlier ticket becomes superseded.
    pub fn issue(&self, vertical: Vertical) -> LoadTicket {
        let mut cycle = 0;
        self.state.send_modify(|state| {
            state.cycle += 1;
            state.vertical = vertical;
            state.phase = Phase::Loading;
            cycle = state.cycle;
        });
        debug!(cycle, %vertical, "dashboard: load issued");
        LoadTicket { cycle, vertical }
    }

    /// Run the reads for `ticket` and apply the result if it is still the
    /// latest cycle.
    pub async fn execute(&self, ticket: LoadTicket) -> LoadOutcome {
        let result = fetch_dashboard(&self.source, &self.limits, ticket.vertical).await;

        let (phase, outcome) = match result {
            Ok(data) => (Phase::Ready(Box::new(data)), LoadOutcome::Ready),
            Err(err) => {
                let err = DashError::from(err);
                error!(
                    cycle = ticket.cycle,
                    vertical = %ticket.vertical,
                    source = %self.source.describe(),
                    error = %err,
                    "dashboard: load failed"
                );
                (Phase::Failed(LOAD_FAILED_MESSAGE.to_string()), LoadOutcome::Failed)
            }
        };

        let applied = self.state.send_if_modified(|state| {
            if state.cycle != ticket.cycle {
                return false;
            }
            state.phase = phase;
            true
        });

        if applied {
            debug!(cycle = ticket.cycle, ?outcome, "dashboard: load applied");
            outcome
        } else {
            debug!(cycle = ticket.cycle, "dashboard: superseded result dropped");
            LoadOutcome::Superseded
        }
    }

    /// Issue and execute a load for `vertical`.
    pub async fn load(&self, vertical: Vertical) -> LoadOutcome {
        let ticket = self.issue(vertical);
        self.execute(ticket).await
    }

    /// Reload the vertical currently shown.
    pub async fn refetch(&self) -> LoadOutcome {
        let vertical = self.state.borrow().vertical;
        self.load(vertical).await
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn view(&self) -> DashboardView {
        self.state.borrow().view()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }
}

impl<S: QuerySource + 'static> Aggregator<S> {
    /// Reload on every change of `mode`, starting with its current value.
    ///
    /// Each change aborts the in-flight load task before issuing the next
    /// one. The returned task ends once the mode sender is dropped and the
    /// last load has finished.
    pub fn follow(self: Arc<Self>, mut mode: watch::Receiver<Vertical>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut inflight: Option<JoinHandle<LoadOutcome>> = None;
            loop {
                let vertical = *mode.borrow_and_update();
                if let Some(previous) = inflight.take() {
                    previous.abort();
                }
                let ticket = self.issue(vertical);
                let this = Arc::clone(&self);
                inflight = Some(tokio::spawn(async move { this.execute(ticket).await }));

                if mode.changed().await.is_err() {
                    break;
                }
            }
            if let Some(last) = inflight {
                if let Err(err) = last.await {
                    let err = DashError::from(err);
                    warn!(error = %err, "dashboard: follow task ended abnormally");
                }
            }
        })
    }
}

/// Run every dashboard read for `vertical` concurrently.
///
/// All-or-nothing: the first failing read fails the whole load.
///
/// # Errors
///
/// Returns the first [`SourceError`] any read produced.
pub async fn fetch_dashboard<S>(
    source: &S,
    limits: &DashboardConfig,
    vertical: Vertical,
) -> Result<DashboardData, SourceError>
where
    S: QuerySource + ?Sized,
{
    let metrics_q = catalogue::metrics(vertical);
    let procedures_q = catalogue::procedures(vertical, limits);
    let categories_q = catalogue::categories(vertical, limits);
    let trends_q = catalogue::market_trends(vertical, limits);
    let providers_q = catalogue::providers(vertical, limits);
    let by_procedures_q = catalogue::news(vertical, NewsFeed::ByProcedures, limits.news_limit);
    let by_categories_q = catalogue::news(vertical, NewsFeed::ByCategories, limits.news_limit);

    let (metrics, procedures, categories, market_trends, providers, by_procedures, by_categories) = tokio::try_join!(
        fetch_first::<_, IndustryMetrics>(source, &metrics_q),
        fetch_all::<_, Procedure>(source, &procedures_q),
        fetch_all::<_, Category>(source, &categories_q),
        fetch_all::<_, MarketTrend>(source, &trends_q),
        fetch_all::<_, Provider>(source, &providers_q),
        fetch_all::<_, NewsArticle>(source, &by_procedures_q),
        fetch_all::<_, NewsArticle>(source, &by_categories_q),
    )?;

    Ok(DashboardData {
        snapshot: DashboardSnapshot::assemble(
            vertical,
            metrics,
            procedures,
            categories,
            market_trends,
            providers,
        ),
        news: NewsArticles {
            by_procedures,
            by_categories,
        },
    })
}
