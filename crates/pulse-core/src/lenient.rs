//! Tolerant field decoders for rows returned by backend views.
//!
//! View columns are loosely typed: counts arrive as numbers, numeric strings,
//! or `null`, and ids may be integers or text. Every decoder here maps
//! whatever it receives to a value, so one odd cell never fails a read.
//!
//! Field decoders go with `#[serde(default, deserialize_with = "...")]`.
//! Entities whose columns have more than one spelling across views decode
//! through [`Cells`] instead, where the first usable key wins.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::enums::Vertical;

/// Numeric view of a cell: JSON numbers and numeric strings.
#[must_use]
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Text view of a scalar cell. `null`, arrays, objects, and empty strings
/// have no text.
#[must_use]
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Decode a float, mapping anything non-numeric to `0.0`.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).unwrap_or(0.0))
}

/// Decode a non-negative count, mapping anything else to `0`.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn u64_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    Ok(as_f64(&value)
        .filter(|n| *n >= 0.0)
        .map_or(0, |n| n.round() as u64))
}

/// Decode a vertical name, falling back to the default vertical.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value.
pub fn vertical_or_default<'de, D>(deserializer: D) -> Result<Vertical, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_text(&value)
        .and_then(|text| text.parse().ok())
        .unwrap_or_default())
}

/// One backend row, read by column name.
///
/// Lookups take candidate keys in priority order and return the first
/// usable value, so a row carrying both `name` and `category_name` decodes
/// the same as one carrying either. Anything that is not a JSON object
/// decodes as an empty row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cells(Map<String, Value>);

impl Cells {
    fn first<T>(&self, keys: &[&str], read: impl Fn(&Value) -> Option<T>) -> Option<T> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find_map(read)
    }

    /// Text of the first key holding a non-empty scalar.
    #[must_use]
    pub fn opt_text(&self, keys: &[&str]) -> Option<String> {
        self.first(keys, as_text)
    }

    /// Like [`Self::opt_text`], with `""` when no key has text.
    #[must_use]
    pub fn text(&self, keys: &[&str]) -> String {
        self.opt_text(keys).unwrap_or_default()
    }

    /// First numeric value, or `0.0`.
    #[must_use]
    pub fn f64(&self, keys: &[&str]) -> f64 {
        self.first(keys, as_f64).unwrap_or(0.0)
    }

    /// First non-negative count, rounded, or `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn u64(&self, keys: &[&str]) -> u64 {
        self.first(keys, |value| {
            value.as_u64().or_else(|| {
                as_f64(value)
                    .filter(|n| *n >= 0.0)
                    .map(|n| n.round() as u64)
            })
        })
        .unwrap_or(0)
    }
}

impl From<Map<String, Value>> for Cells {
    fn from(row: Map<String, Value>) -> Self {
        Self(row)
    }
}

impl<'de> Deserialize<'de> for Cells {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(row) => Ok(Self(row)),
            _ => Ok(Self::default()),
        }
    }
}
