//! # pulse-source
//!
//! Read-only tabular query sources for Pulse.
//!
//! Every read is a [`Query`] (`source`, equality filters, one ordering
//! column, limit) run against a [`QuerySource`]:
//! - [`PostgrestClient`]: Supabase/PostgREST views over HTTP
//! - [`MemorySource`]: JSON fixture tables, for offline runs and tests
//!
//! Typed reads go through [`fetch_all`] and [`fetch_first`], which decode
//! rows with serde.

mod error;
mod http;
mod memory;
mod postgrest;
mod query;
mod source;

pub use error::SourceError;
pub use memory::MemorySource;
pub use postgrest::PostgrestClient;
pub use query::{Direction, Order, Query};
pub use source::{QuerySource, Row, decode_rows, fetch_all, fetch_first};
