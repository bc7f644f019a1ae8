//! Cross-cutting error types for Pulse.
//!
//! Domain-specific errors (`SourceError`, `DashError`) live in their own
//! crates. A unified error is deferred to `pulse-cli` where all crate errors
//! converge into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Pulse crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A vertical name that is neither `dental` nor `aesthetic`.
    #[error("Unknown vertical '{0}' (expected 'dental' or 'aesthetic')")]
    InvalidVertical(String),
}
