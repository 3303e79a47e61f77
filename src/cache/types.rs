use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const VERACITY_STATUS_HEADER: &str = "X-Veracity-Status";
pub const VERACITY_STATUS_HEALTHY: &str = "healthy";

/// TTL for requests that do not name a time range.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

/// Outcome of an assessment cache lookup, reported in [`VERACITY_STATUS_HEADER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VeracityStatus {
    Hit,
    Miss,
}

impl VeracityStatus {
    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            VeracityStatus::Hit => "HIT",
            VeracityStatus::Miss => "MISS",
        }
    }
}

impl std::fmt::Display for VeracityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_header_value())
    }
}

/// Search window requested by the caller. Wider windows change less often and are
/// cached longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "1y")]
    Year,
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Year => "1y",
            TimeRange::All => "all",
        }
    }

    pub fn ttl(&self) -> Duration {
        match self {
            TimeRange::Week => Duration::from_secs(15 * 60),
            TimeRange::Month => Duration::from_secs(60 * 60),
            TimeRange::Year => Duration::from_secs(6 * 60 * 60),
            TimeRange::All => Duration::from_secs(24 * 60 * 60),
        }
    }
}

/// Cache TTL for an optional time range.
pub fn ttl_for(time_range: Option<TimeRange>) -> Duration {
    time_range.map_or(DEFAULT_CACHE_TTL, |range| range.ttl())
}
