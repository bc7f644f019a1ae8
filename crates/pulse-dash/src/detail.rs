//! Procedure/category drill-down: the newest articles linked to one
//! selection, with loading and error state kept apart from the dashboard.

use pulse_core::entities::NewsArticle;
use pulse_core::enums::{DetailTarget, Vertical};
use pulse_source::{QuerySource, fetch_all};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::catalogue;
use crate::error::DETAIL_FAILED_MESSAGE;
use crate::state::LoadOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailPhase {
    #[default]
    Idle,
    Loading,
    Ready(Vec<NewsArticle>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailState {
    pub cycle: u64,
    pub open: bool,
    pub vertical: Vertical,
    pub target: Option<DetailTarget>,
    pub phase: DetailPhase,
}

impl DetailState {
    /// Loaded successfully but nothing is linked to the selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(&self.phase, DetailPhase::Ready(articles) if articles.is_empty())
    }

    #[must_use]
    pub fn articles(&self) -> &[NewsArticle] {
        match &self.phase {
            DetailPhase::Ready(articles) => articles,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an issued detail load does nothing until executed"]
pub struct DetailTicket {
    pub cycle: u64,
    pub vertical: Vertical,
    pub target: DetailTarget,
}

/// Loads articles for the open selection. Guarded by its own cycle counter.
#[derive(Debug)]
pub struct DetailFetcher<S> {
    source: S,
    limit: usize,
    state: watch::Sender<DetailState>,
}

impl<S: QuerySource> DetailFetcher<S> {
    #[must_use]
    pub fn new(source: S, limit: usize) -> Self {
        let (state, _rx) = watch::channel(DetailState::default());
        Self {
            source,
            limit,
            state,
        }
    }

    /// Open the drill-down on `target` without loading yet.
    pub fn open(&self, vertical: Vertical, target: DetailTarget) {
        self.state.send_modify(|state| {
            state.cycle += 1;
            state.open = true;
            state.vertical = vertical;
            state.target = Some(target);
            state.phase = DetailPhase::Idle;
        });
    }

    /// Close the drill-down. Any in-flight load is discarded.
    pub fn close(&self) {
        self.state.send_modify(|state| {
            state.cycle += 1;
            state.open = false;
            state.target = None;
            state.phase = DetailPhase::Idle;
        });
    }

    /// Move an open drill-down to `vertical`. Returns whether anything
    /// changed; a changed selection must be loaded again.
    pub fn set_vertical(&self, vertical: Vertical) -> bool {
        self.state.send_if_modified(|state| {
            if !state.open || state.vertical == vertical {
                return false;
            }
            state.cycle += 1;
            state.vertical = vertical;
            state.phase = DetailPhase::Idle;
            true
        })
    }

    /// Start a load for the current selection. `None` when closed or
    /// nothing is selected.
    pub fn issue(&self) -> Option<DetailTicket> {
        let mut ticket = None;
        self.state.send_if_modified(|state| {
            if !state.open {
                return false;
            }
            let Some(target) = state.target.clone() else {
                return false;
            };
            state.cycle += 1;
            state.phase = DetailPhase::Loading;
            ticket = Some(DetailTicket {
                cycle: state.cycle,
                vertical: state.vertical,
                target,
            });
            true
        });
        ticket
    }

    pub async fn execute(&self, ticket: DetailTicket) -> LoadOutcome {
        let query = catalogue::detail(ticket.vertical, &ticket.target, self.limit);
        let (phase, outcome) = match fetch_all::<_, NewsArticle>(&self.source, &query).await {
            Ok(articles) => (DetailPhase::Ready(articles), LoadOutcome::Ready),
            Err(err) => {
                warn!(target_id = %ticket.target, error = %err, "detail: load failed");
                (DetailPhase::Failed(DETAIL_FAILED_MESSAGE.to_string()), LoadOutcome::Failed)
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
            outcome
        } else {
            debug!(cycle = ticket.cycle, "detail: superseded result dropped");
            LoadOutcome::Superseded
        }
    }

    /// Load the current selection, or do nothing when there is none.
    pub async fn load(&self) -> LoadOutcome {
        match self.issue() {
            Some(ticket) => self.execute(ticket).await,
            None => LoadOutcome::Skipped,
        }
    }

    /// Reload an open drill-down for `vertical`, or do nothing when it is
    /// closed or already showing that vertical.
    pub async fn follow_vertical(&self, vertical: Vertical) -> LoadOutcome {
        if self.set_vertical(vertical) {
            self.load().await
        } else {
            LoadOutcome::Skipped
        }
    }

    /// Open on `target` and load it.
    pub async fn show(&self, vertical: Vertical, target: DetailTarget) -> LoadOutcome {
        self.open(vertical, target);
        self.load().await
    }

    #[must_use]
    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }
}
