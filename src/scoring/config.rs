use chrono::{DateTime, Utc};

use crate::constants::DEFAULT_EQS_TOP_N;
use crate::credibility::FactCheckers;

/// Immutable tunables for an [`EvidenceScorer`](super::EvidenceScorer).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Sources (by directness) that feed the EQS.
    pub top_n: usize,

    /// Allow-list used for the credibility floor.
    pub fact_checkers: FactCheckers,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_EQS_TOP_N,
            fact_checkers: FactCheckers::default(),
        }
    }
}

impl ScoringConfig {
    pub fn new(top_n: usize, fact_checkers: FactCheckers) -> Self {
        Self {
            top_n,
            fact_checkers,
        }
    }

    /// Sets the EQS source count; zero is raised to one.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n.max(1);
        self
    }

    pub fn with_fact_checkers(mut self, fact_checkers: FactCheckers) -> Self {
        self.fact_checkers = fact_checkers;
        self
    }
}

/// Per-call options for [`EvidenceScorer::score_evidence`](super::EvidenceScorer::score_evidence).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOptions {
    /// Overrides [`ScoringConfig::top_n`] for this call.
    pub top_n: Option<usize>,

    /// Reference instant for recency. Fixing it makes scoring reproducible.
    pub as_of: DateTime<Utc>,

    /// Reserved for tiered scoring; does not change the result.
    pub is_paid: bool,
}

impl ScoreOptions {
    pub fn at(as_of: DateTime<Utc>) -> Self {
        Self {
            top_n: None,
            as_of,
            is_paid: false,
        }
    }

    /// Options anchored at the current time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    pub fn paid(mut self, is_paid: bool) -> Self {
        self.is_paid = is_paid;
        self
    }
}
