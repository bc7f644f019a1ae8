//! Published dashboard state.

use pulse_core::enums::Vertical;
use pulse_core::responses::{DashboardSnapshot, DashboardView, NewsArticles};

/// Everything a successful load cycle produces.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub snapshot: DashboardSnapshot,
    pub news: NewsArticles,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Ready(Box<DashboardData>),
    /// Holds the user-facing message; details go to the log.
    Failed(String),
}

/// What [`Aggregator`](crate::Aggregator) publishes on its watch channel.
///
/// `cycle` increases by one for every issued load. A completing load only
/// writes `phase` when its cycle still equals this value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub cycle: u64,
    pub vertical: Vertical,
    pub phase: Phase,
}

impl DashboardState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn data(&self) -> Option<&DashboardData> {
        match &self.phase {
            Phase::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The `{ data, newsArticles, loading, error }` shape views render.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        let data = self.data();
        DashboardView {
            vertical: self.vertical,
            cycle: self.cycle,
            loading: self.is_loading(),
            error: self.error().map(str::to_string),
            data: data.map(|d| d.snapshot.clone()),
            news_articles: data.map(|d| d.news.clone()).unwrap_or_default(),
        }
    }
}

/// How a single load attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Result applied; state is ready.
    Ready,
    /// Failure applied; state carries the error message.
    Failed,
    /// A newer load was issued first; the result was dropped.
    Superseded,
    /// Nothing to load (detail view closed or no selection).
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_view_is_empty() {
        let view = DashboardState::default().view();
        assert!(!view.loading);
        assert!(view.error.is_none());
        assert!(view.data.is_none());
        assert!(view.news_articles.by_procedures.is_empty());
    }

    #[test]
    fn failed_view_surfaces_message_without_data() {
        let state = DashboardState {
            cycle: 2,
            vertical: Vertical::Aesthetic,
            phase: Phase::Failed("boom".into()),
        };
        let view = state.view();
        assert_eq!(view.error.as_deref(), Some("boom"));
        assert!(view.data.is_none());
        assert_eq!(view.cycle, 2);
        assert_eq!(view.vertical, Vertical::Aesthetic);
    }
}
