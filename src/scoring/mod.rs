//! Evidence scoring and aggregation.
//!
//! Given a claim and its candidate sources, each source gets a credibility,
//! directness, methodology and recency score plus a stance. The set is then reduced
//! to an Evidence Quality Score (EQS, 0–100) and a Source Diversity Index (SDI, 0–10).
//!
//! # Pipeline
//!
//! - [`ClaimProfile`] extracts keywords, clauses and the well-established-fact category
//!   once per claim.
//! - [`directness`], [`classify_stance`], [`methodology_score`] and [`recency_score`]
//!   run per source; credibility comes from [`crate::credibility`].
//! - [`EvidenceScorer::score_evidence`] combines them with
//!   [`QUALITY_WEIGHTS`](crate::constants::QUALITY_WEIGHTS), takes the top-N sources by
//!   directness for the EQS, applies the well-established-fact floor, and computes the
//!   SDI and stance tally.
//!
//! # Heuristics, not verification
//!
//! These are lexical heuristics. They approximate relevance and stance; they do not
//! check facts.

pub mod claim;
pub mod config;
pub mod directness;
pub mod patterns;
pub mod scorer;
pub mod signals;
pub mod stance;
pub mod types;


pub use claim::ClaimProfile;
pub use config::{ScoreOptions, ScoringConfig};
pub use directness::{directness, estimate_directness};
pub use patterns::{FactCategory, fact_category, is_well_established_fact};
pub use scorer::{
    EvidenceScorer, diversity_index, established_fact_floor, score_evidence, top_by_directness,
    weighted_eqs,
};
pub use signals::{methodology_score, parse_publish_date, recency_score};
pub use stance::{
    STANCE_RULES, StanceDecision, StanceRule, classify_stance, decide_stance, estimate_stance,
};
pub use types::{VeracityBucket, VeracityVerdict};
