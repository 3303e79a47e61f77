use std::sync::Arc;
use std::time::Duration;

use crate::cache::AssessmentCacheHandle;
use crate::config::Config;
use crate::scoring::EvidenceScorer;

#[derive(Clone, Debug)]
pub struct HandlerState {
    pub scorer: Arc<EvidenceScorer>,

    pub cache: AssessmentCacheHandle,

    /// Budget for one scoring call, measured on the blocking pool.
    pub request_timeout: Duration,

    /// Cap for requests that ask for domain de-duplication.
    pub max_sources: usize,
}

impl HandlerState {
    pub fn new(
        scorer: Arc<EvidenceScorer>,
        cache: AssessmentCacheHandle,
        request_timeout: Duration,
        max_sources: usize,
    ) -> Self {
        Self {
            scorer,
            cache,
            request_timeout,
            max_sources,
        }
    }

    /// Builds the scorer and cache described by `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(EvidenceScorer::new(config.scoring_config())),
            AssessmentCacheHandle::with_capacity(config.cache_capacity),
            config.request_timeout,
            config.max_sources,
        )
    }
}
