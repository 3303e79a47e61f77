//! Secondary quality signals: methodology vocabulary and publication recency.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::patterns::METHODOLOGY;
use crate::constants::{DEFAULT_METHODOLOGY, DEFAULT_RECENCY, METHODOLOGY_MATCH_SCORE};

/// [`METHODOLOGY_MATCH_SCORE`] when the snippet uses research-method vocabulary,
/// otherwise [`DEFAULT_METHODOLOGY`].
pub fn methodology_score(snippet: Option<&str>) -> f64 {
    match snippet {
        Some(text) if METHODOLOGY.is_match(text) => METHODOLOGY_MATCH_SCORE,
        _ => DEFAULT_METHODOLOGY,
    }
}

/// Parses RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` timestamps (read as UTC),
/// and bare `YYYY-MM-DD` dates.
pub fn parse_publish_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Recency relative to `as_of`: ≤7 days 1.0, ≤30 days 0.8, ≤365 days 0.6, older 0.4.
///
/// Missing or unparseable dates score [`DEFAULT_RECENCY`]. Dates after `as_of` count as
/// brand new.
pub fn recency_score(publish_date: Option<&str>, as_of: DateTime<Utc>) -> f64 {
    let Some(published) = publish_date.and_then(parse_publish_date) else {
        return DEFAULT_RECENCY;
    };

    let age_days = (as_of - published).num_seconds() as f64 / 86_400.0;

    if age_days <= 7.0 {
        1.0
    } else if age_days <= 30.0 {
        0.8
    } else if age_days <= 365.0 {
        0.6
    } else {
        0.4
    }
}
