use std::collections::HashSet;

use super::patterns::{FactCategory, fact_category};
use crate::text::{clauses, extract_keywords};

/// Per-claim features computed once and shared by every per-source estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimProfile {
    text: String,
    keywords: Vec<String>,
    clauses: Vec<String>,
    fact_category: Option<FactCategory>,
}

impl ClaimProfile {
    pub fn new(claim: &str) -> Self {
        Self {
            text: claim.trim().to_string(),
            keywords: extract_keywords(claim),
            clauses: clauses(claim),
            fact_category: fact_category(claim),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Lowercased clauses of the claim.
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    pub fn fact_category(&self) -> Option<FactCategory> {
        self.fact_category
    }

    pub fn is_well_established(&self) -> bool {
        self.fact_category.is_some()
    }

    /// Number of claim keywords present in a token set.
    pub fn keyword_hits(&self, tokens: &HashSet<String>) -> usize {
        self.keywords.iter().filter(|k| tokens.contains(*k)).count()
    }

    /// Returns `true` if the word token is one of the claim keywords, ignoring case.
    pub fn is_keyword(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.keywords.iter().any(|k| *k == token)
    }
}
