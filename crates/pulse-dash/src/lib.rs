//! # pulse-dash
//!
//! Dashboard state for Pulse:
//! - [`ModeState`]: the dental/aesthetic switch, observed through a watch
//!   channel
//! - [`Aggregator`]: concurrent reads of every dashboard view for one
//!   vertical, published as [`DashboardState`]; stale cycles never land
//! - [`DetailFetcher`]: articles linked to one procedure or category
//! - [`catalogue`]: which view, filter, order, and limit each read uses

pub mod catalogue;

mod aggregator;
mod detail;
mod error;
mod mode;
mod state;

pub use aggregator::{Aggregator, LoadTicket, fetch_dashboard};
pub use detail::{DetailFetcher, DetailPhase, DetailState, DetailTicket};
pub use error::{DETAIL_FAILED_MESSAGE, DashError, LOAD_FAILED_MESSAGE};
pub use mode::ModeState;
pub use state::{DashboardData, DashboardState, LoadOutcome, Phase};
