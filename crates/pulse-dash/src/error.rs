//! Dashboard error types.

use pulse_source::SourceError;
use thiserror::Error;

/// Shown in place of the dashboard when a load cycle fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again later.";

/// Shown inside the drill-down when its article read fails.
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load news articles. Please try again later.";

#[derive(Debug, Error)]
pub enum DashError {
    /// A read against the query source failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A background load task panicked or was cancelled.
    #[error("load task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for DashError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}
