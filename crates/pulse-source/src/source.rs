//! The [`QuerySource`] seam and typed helpers on top of it.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SourceError;
use crate::query::Query;

/// One row as returned by a view: column name → JSON cell.
pub type Row = serde_json::Map<String, Value>;

/// Read-only tabular backend.
///
/// An empty result is `Ok(vec![])`. A source that does not exist is
/// [`SourceError::Unavailable`].
pub trait QuerySource: Send + Sync {
    /// Run `query` and return its rows in order.
    fn fetch(&self, query: &Query) -> impl Future<Output = Result<Vec<Row>, SourceError>> + Send;

    /// Short human-readable description (endpoint or fixture path).
    fn describe(&self) -> String;
}

impl<S: QuerySource> QuerySource for Arc<S> {
    fn fetch(&self, query: &Query) -> impl Future<Output = Result<Vec<Row>, SourceError>> + Send {
        (**self).fetch(query)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Decode rows into `T`. Rows that are not JSON objects of the expected
/// shape fail the whole batch with [`SourceError::Parse`].
///
/// # Errors
///
/// Returns [`SourceError::Parse`] naming the source and row index.
pub fn decode_rows<T: DeserializeOwned>(source: &str, rows: Vec<Row>) -> Result<Vec<T>, SourceError> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            serde_json::from_value(Value::Object(row))
                .map_err(|e| SourceError::Parse(format!("{source} row {i}: {e}")))
        })
        .collect()
}

/// Fetch and decode every row of `query`.
///
/// # Errors
///
/// Propagates the source's error or a decoding failure.
pub async fn fetch_all<S, T>(source: &S, query: &Query) -> Result<Vec<T>, SourceError>
where
    S: QuerySource + ?Sized,
    T: DeserializeOwned,
{
    let rows = source.fetch(query).await?;
    decode_rows(&query.source, rows)
}

/// Fetch at most one row of `query`. `Ok(None)` when the result is empty.
///
/// # Errors
///
/// Propagates the source's error or a decoding failure.
pub async fn fetch_first<S, T>(source: &S, query: &Query) -> Result<Option<T>, SourceError>
where
    S: QuerySource + ?Sized,
    T: DeserializeOwned,
{
    let query = query.clone().limit(1);
    let mut rows: Vec<T> = fetch_all(source, &query).await?;
    Ok(if rows.is_empty() { None } else { Some(rows.swap_remove(0)) })
}
