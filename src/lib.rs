//! Veracity library crate (used by the server and integration tests).
//!
//! Scores the evidence gathered for a claim: each source gets credibility,
//! directness, methodology, recency and stance scores, and the set is reduced to an
//! Evidence Quality Score (EQS, 0–100) and a Source Diversity Index (SDI, 0–10).
//!
//! ## Core
//! - [`score_evidence`], [`EvidenceScorer`] - The aggregator
//! - [`RawSource`], [`ScoredSource`], [`EvidenceAssessment`] - Data model
//! - [`SourceInput`], [`validate_sources`] - Boundary validation
//! - [`estimate_credibility`], [`FactCheckers`] - Credibility
//! - [`VeracityVerdict`] - Presentation buckets
//!
//! ## Planning
//! - [`QueryPlan`], [`ClaimType`] - Claim-type search planning
//!
//! ## Server
//! - [`Config`], [`ConfigError`] - Environment configuration
//! - [`AssessmentCache`] - Fingerprint-keyed result cache
//! - [`gateway`] - Axum routes
//!
//! Scoring is synchronous and pure. Recency is measured against the explicit
//! [`ScoreOptions::as_of`] instant, so the same inputs always give the same output.

pub mod cache;
pub mod config;
pub mod constants;
pub mod credibility;
pub mod evidence;
pub mod gateway;
pub mod hashing;
pub mod planner;
pub mod scoring;
pub mod text;

pub use cache::{
    AssessmentCache, AssessmentCacheHandle, CachedAssessment, TimeRange, VERACITY_STATUS_HEADER,
    VeracityStatus,
};
pub use config::{Config, ConfigError};
pub use constants::{QUALITY_WEIGHTS, QualityWeights};
pub use credibility::{FactCheckers, base_trust, estimate_credibility, source_credibility};
pub use evidence::{
    Consensus, DiscoveredVia, EvidenceAssessment, EvidenceError, RawSource, ScoredSource,
    SourceInput, SourceType, Stance, dedupe_by_domain, normalize_domain, validate_sources,
};
pub use hashing::{Fingerprint, fingerprint_request, hash_assessment, hash_to_u64};
pub use planner::{ClaimAnalysis, ClaimType, QueryPlan, analyze_claim, classify_claim};
pub use scoring::{
    EvidenceScorer, ScoreOptions, ScoringConfig, VeracityBucket, VeracityVerdict,
    estimate_directness, estimate_stance, score_evidence,
};
pub use text::{extract_keywords, normalize_language};
