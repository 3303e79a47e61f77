//! In-memory assessment cache.
//!
//! Entries are keyed by the request [`Fingerprint`] and expire after a per-entry TTL
//! chosen from the request's [`TimeRange`](super::TimeRange).

use chrono::{DateTime, Utc};
use moka::Expiry;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::evidence::EvidenceAssessment;
use crate::hashing::Fingerprint;
use crate::planner::ClaimType;

/// A scored request as stored in the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedAssessment {
    pub assessment: EvidenceAssessment,
    pub claim_type: ClaimType,
    pub language: String,
    pub scored_at: DateTime<Utc>,
    pub ttl: Duration,
}

struct PerEntryTtl;

impl Expiry<Fingerprint, Arc<CachedAssessment>> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &Fingerprint,
        value: &Arc<CachedAssessment>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Capacity-bounded cache of scored assessments.
pub struct AssessmentCache {
    entries: Cache<Fingerprint, Arc<CachedAssessment>>,
}

impl AssessmentCache {
    pub const DEFAULT_CAPACITY: u64 = 10_000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a cache holding at most `capacity` entries.
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(capacity)
                .expire_after(PerEntryTtl)
                .build(),
        }
    }

    /// Returns the entry if present and not yet expired.
    pub fn get(&self, key: &Fingerprint) -> Option<Arc<CachedAssessment>> {
        self.entries.get(key)
    }

    /// Stores an entry; it expires after its own `ttl`.
    pub fn insert(&self, key: Fingerprint, value: CachedAssessment) -> Arc<CachedAssessment> {
        let value = Arc::new(value);
        self.entries.insert(key, Arc::clone(&value));
        value
    }

    /// Approximate entry count; call [`run_pending_tasks`](Self::run_pending_tasks)
    /// first for an exact figure.
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.entry_count() == 0
    }

    pub fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks();
    }
}

impl Default for AssessmentCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AssessmentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

/// Shared handle to an [`AssessmentCache`].
#[derive(Clone, Default)]
pub struct AssessmentCacheHandle {
    inner: Arc<AssessmentCache>,
}

impl AssessmentCacheHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            inner: Arc::new(AssessmentCache::with_capacity(capacity)),
        }
    }

    #[inline]
    pub fn get(&self, key: &Fingerprint) -> Option<Arc<CachedAssessment>> {
        self.inner.get(key)
    }

    #[inline]
    pub fn insert(&self, key: Fingerprint, value: CachedAssessment) -> Arc<CachedAssessment> {
        self.inner.insert(key, value)
    }

    pub fn len(&self) -> usize {
        self.inner.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn run_pending_tasks(&self) {
        self.inner.run_pending_tasks();
    }
}

impl std::fmt::Debug for AssessmentCacheHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentCacheHandle")
            .field("entries", &self.inner.len())
            .field("strong_count", &Arc::strong_count(&self.inner))
            .finish()
    }
}
