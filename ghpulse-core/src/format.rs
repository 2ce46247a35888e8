//! Formatting helpers shared across output formats.

use chrono::{DateTime, NaiveDate};

/// Placeholder for values that could not be derived.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a count for display (e.g., "14.2K", "1.5M").
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Format a percentage with one decimal (e.g., "42.5%").
pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Format a calendar date (e.g., "Jan 15, 2024").
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format an RFC 3339 timestamp (e.g., "Jan 15, 2024 10:30").
///
/// Unparseable input is returned unchanged.
pub fn format_timestamp(ts: &str) -> String {
    match DateTime::parse_from_rfc3339(ts) {
        Ok(parsed) => parsed.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => ts.to_string(),
    }
}

/// Display an optional value, or "N/A" if missing.
pub fn or_na<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
