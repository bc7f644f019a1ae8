//! In-memory [`QuerySource`] backed by JSON tables.
//!
//! Fixture files are a JSON object mapping view name → array of rows:
//!
//! ```json
//! {
//!   "v_dashboard_categories": [
//!     {"id": 1, "name": "Implants", "industry": "dental", "article_count": 40}
//!   ]
//! }
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use pulse_core::lenient::{as_f64, as_text};
use serde_json::Value;
use tracing::debug;

use crate::error::SourceError;
use crate::query::{Direction, Query};
use crate::source::{QuerySource, Row};

/// Tables held in memory, queried with the same filter, order, and limit
/// rules as the HTTP backend.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: Arc<BTreeMap<String, Vec<Row>>>,
    origin: Option<String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a table.
    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        Arc::make_mut(&mut self.tables).insert(name.into(), rows);
        self
    }

    /// Build from a JSON fixture value.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Parse`] if the value is not an object of
    /// arrays of objects.
    pub fn from_json(value: Value) -> Result<Self, SourceError> {
        let Value::Object(tables) = value else {
            return Err(SourceError::Parse(
                "fixture must be an object mapping view names to rows".into(),
            ));
        };
        let mut source = Self::new();
        for (name, rows) in tables {
            let Value::Array(rows) = rows else {
                return Err(SourceError::Parse(format!("fixture table {name} is not an array")));
            };
            let rows = rows
                .into_iter()
                .enumerate()
                .map(|(i, row)| match row {
                    Value::Object(map) => Ok(map),
                    _ => Err(SourceError::Parse(format!(
                        "fixture table {name} row {i} is not an object"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            source = source.with_table(name, rows);
        }
        Ok(source)
    }

    /// Load a fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be read, or
    /// [`SourceError::Parse`] if it is not a valid fixture.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| SourceError::Parse(format!("{}: {e}", path.display())))?;
        let mut source = Self::from_json(value)?;
        source.origin = Some(path.display().to_string());
        Ok(source)
    }

    /// Table names, sorted.
    #[must_use]
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Run `query` synchronously.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] if the table does not exist.
    pub fn query(&self, query: &Query) -> Result<Vec<Row>, SourceError> {
        let rows = self
            .tables
            .get(&query.source)
            .ok_or_else(|| SourceError::Unavailable {
                view: query.source.clone(),
            })?;

        let mut matched: Vec<Row> = rows
            .iter()
            .filter(|row| {
                query.filters.iter().all(|(col, want)| {
                    row.get(col).and_then(as_text).is_some_and(|have| have == *want)
                })
            })
            .cloned()
            .collect();

        if let Some(order) = &query.order {
            // Stable sort keeps fixture order for ties.
            matched.sort_by(|a, b| {
                compare_cells(a.get(&order.column), b.get(&order.column), order.direction)
            });
        }
        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }
        Ok(matched)
    }
}

impl QuerySource for MemorySource {
    fn fetch(&self, query: &Query) -> impl Future<Output = Result<Vec<Row>, SourceError>> + Send {
        debug!(query = %query, "memory: fetch");
        let result = self.query(query);
        async move { result }
    }

    fn describe(&self) -> String {
        self.origin
            .clone()
            .unwrap_or_else(|| format!("memory ({} tables)", self.tables.len()))
    }
}

/// Comparable form of a cell. Numeric strings count as numbers. Numbers
/// sort before text and absent sorts last, regardless of direction.
enum Key {
    Number(f64),
    Text(String),
    Absent,
}

fn key_of(cell: Option<&Value>) -> Key {
    let Some(cell) = cell else { return Key::Absent };
    if let Some(n) = as_f64(cell) {
        return Key::Number(n);
    }
    as_text(cell).map_or(Key::Absent, Key::Text)
}

fn compare_cells(a: Option<&Value>, b: Option<&Value>, direction: Direction) -> Ordering {
    let ordered = |ord: Ordering| match direction {
        Direction::Asc => ord,
        Direction::Desc => ord.reverse(),
    };
    match (key_of(a), key_of(b)) {
        (Key::Absent, Key::Absent) => Ordering::Equal,
        (Key::Absent, _) => Ordering::Greater,
        (_, Key::Absent) => Ordering::Less,
        (Key::Number(x), Key::Number(y)) => ordered(x.total_cmp(&y)),
        (Key::Text(x), Key::Text(y)) => ordered(x.cmp(&y)),
        (Key::Number(_), Key::Text(_)) => Ordering::Less,
        (Key::Text(_), Key::Number(_)) => Ordering::Greater,
    }
}
