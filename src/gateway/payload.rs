use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache::{CachedAssessment, TimeRange};
use crate::evidence::{Consensus, EvidenceError, ScoredSource, SourceInput};
use crate::planner::ClaimType;
use crate::scoring::{VeracityVerdict, parse_publish_date};

/// Body of `POST /v1/evidence/score`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub claim: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub sources: Vec<SourceInput>,
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(default)]
    pub time_range: Option<TimeRange>,
    /// Reference instant for recency (RFC 3339 or `YYYY-MM-DD`). Defaults to now.
    #[serde(default)]
    pub as_of: Option<String>,
    #[serde(default)]
    pub is_paid: bool,
    /// Keep only the first source per domain, capped at the server's `max_sources`.
    #[serde(default)]
    pub dedupe: bool,
}

impl ScoreRequest {
    /// Checks the fields that do not depend on server configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.claim.trim().is_empty() {
            return Err(EvidenceError::EmptyClaim.to_string());
        }

        if self.top_n == Some(0) {
            return Err("topN must be at least 1".to_string());
        }

        self.resolve_as_of(Utc::now()).map(|_| ())
    }

    /// The explicit `asOf`, or `now` when absent.
    pub fn resolve_as_of(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, String> {
        match self.as_of.as_deref() {
            None => Ok(now),
            Some(value) => parse_publish_date(value)
                .ok_or_else(|| format!("asOf '{value}' is not an RFC 3339 timestamp or date")),
        }
    }
}

/// What the cache key is derived from: the request plus the day scoring is
/// anchored to, so implicit "now" requests share entries within a day.
#[derive(Serialize)]
pub(crate) struct CacheKey<'a> {
    pub request: &'a ScoreRequest,
    pub as_of_day: String,
}

/// Body of `POST /v1/claims/plan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub claim: String,
}

/// Response of `POST /v1/evidence/score`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub id: Uuid,
    /// Hex BLAKE3 fingerprint of the request; equal requests share it.
    pub fingerprint: String,
    pub claim_type: ClaimType,
    pub language: String,
    pub eqs: u8,
    pub sdi: u8,
    pub consensus: Consensus,
    pub verdict: VeracityVerdict,
    pub sources_with_scores: Vec<ScoredSource>,
    pub scored_at: DateTime<Utc>,
}

impl AssessmentResponse {
    pub fn from_cached(fingerprint: String, cached: &CachedAssessment) -> Self {
        let assessment = &cached.assessment;
        Self {
            id: Uuid::new_v4(),
            fingerprint,
            claim_type: cached.claim_type,
            language: cached.language.clone(),
            eqs: assessment.eqs,
            sdi: assessment.sdi,
            consensus: assessment.consensus,
            verdict: VeracityVerdict::from_assessment(assessment),
            sources_with_scores: assessment.sources_with_scores.clone(),
            scored_at: cached.scored_at,
        }
    }
}
