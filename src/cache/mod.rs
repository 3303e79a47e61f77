//! Assessment cache keyed by request fingerprint.

pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use store::{AssessmentCache, AssessmentCacheHandle, CachedAssessment};
pub use types::{
    DEFAULT_CACHE_TTL, TimeRange, VERACITY_STATUS_HEADER, VERACITY_STATUS_HEALTHY,
    VeracityStatus, ttl_for,
};
