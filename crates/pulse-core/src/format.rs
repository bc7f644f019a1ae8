//! Display formatting and normalization used by dashboard views.
//!
//! Everything here is pure: no I/O, no terminal state. Renderers decide
//! colour and layout on top of these strings and numbers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_DISPLAY: &str = "%b %-d, %Y";

/// Largest value in a list, `0.0` for an empty list.
#[must_use]
pub fn max_value<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Whole-number percentage of `value` relative to `max`, clamped to
/// `0..=100`. A zero (or non-finite) maximum yields `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent_of_max(value: f64, max: f64) -> u8 {
    if !max.is_finite() || max <= 0.0 || !value.is_finite() {
        return 0;
    }
    (value / max * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Render a number the way the dashboard shows it: at most one decimal,
/// no trailing `.0`, and no negative zero.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::from("0");
    }
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        return String::from("0");
    }
    format!("{rounded}")
}

/// `12.5` → `12.5%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

/// Signed growth caption for metric tiles: `↑ 12% from last period`.
#[must_use]
pub fn format_growth(value: f64) -> String {
    let arrow = if value > 0.0 {
        "↑ "
    } else if value < 0.0 {
        "↓ "
    } else {
        ""
    };
    format!("{arrow}{} from last period", format_percent(value.abs()))
}

/// Format a backend date as `Jan 5, 2025`.
///
/// Missing or empty input gives an empty string; anything that does not
/// parse is returned unchanged.
#[must_use]
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    parse_date(raw).map_or_else(|| raw.to_string(), |date| date.format(DATE_DISPLAY).to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Turn a column name into a label: `total_articles` → `Total articles`.
#[must_use]
pub fn humanize(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.trim().chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Horizontal bar of `width` cells filled to `percent`.
#[must_use]
pub fn bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
