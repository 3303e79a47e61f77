//! Evidence data model and the boundary where search results enter the core.
//!
//! Untrusted input arrives as [`SourceInput`] (loosely typed, as returned by search
//! providers) and is validated into [`RawSource`] by [`RawSource::from_input`]. Past
//! that point the scoring code can rely on a normalized, non-empty domain.

pub mod error;
pub mod types;


pub use error::EvidenceError;
pub use types::{
    Consensus, DiscoveredVia, EvidenceAssessment, RawSource, ScoredSource, SourceType, Stance,
};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::credibility::FactCheckers;

/// A search result as delivered by a provider, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInput {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    /// Derived from `url` when absent.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub source_type: Option<SourceType>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub discovered_via: Option<DiscoveredVia>,
    #[serde(default)]
    pub credibility_score: Option<f64>,
}

/// Lowercases a host, trims it, and strips a leading `www.` and trailing dot.
pub fn normalize_domain(host: &str) -> String {
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

/// Registrable-ish domain of a URL (`https://www.BBC.com/news` → `bbc.com`).
pub fn domain_of(url: &str) -> Result<String, EvidenceError> {
    let parsed = Url::parse(url.trim()).map_err(|e| EvidenceError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let domain = parsed
        .host_str()
        .map(normalize_domain)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| EvidenceError::MissingHost {
            url: url.to_string(),
        })?;

    Ok(domain)
}

impl RawSource {
    /// Validates one provider result.
    ///
    /// `index` is only used in error messages. Sources on the fact-checker list that
    /// carry no source type are tagged [`SourceType::Factcheck`]; provenance is kept
    /// as supplied.
    pub fn from_input(
        index: usize,
        input: SourceInput,
        fact_checkers: &FactCheckers,
    ) -> Result<Self, EvidenceError> {
        let url = input.url.trim().to_string();
        if url.is_empty() {
            return Err(EvidenceError::MissingUrl { index });
        }

        let domain = match input.domain.as_deref().map(normalize_domain) {
            Some(d) if !d.is_empty() => d,
            _ => domain_of(&url)?,
        };

        if let Some(value) = input.credibility_score
            && !(0.0..=1.0).contains(&value)
        {
            return Err(EvidenceError::CredibilityOutOfRange { url, value });
        }

        let source_type = match input.source_type {
            None if fact_checkers.contains(&domain) => Some(SourceType::Factcheck),
            other => other,
        };

        Ok(Self {
            url,
            title: input.title,
            snippet: input.snippet,
            publish_date: input.publish_date,
            domain,
            source_type,
            language: input.language,
            discovered_via: input.discovered_via,
            prior_credibility: input.credibility_score,
        })
    }
}

/// Validates a batch of provider results, failing on the first bad entry.
pub fn validate_sources(
    inputs: Vec<SourceInput>,
    fact_checkers: &FactCheckers,
) -> Result<Vec<RawSource>, EvidenceError> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| RawSource::from_input(index, input, fact_checkers))
        .collect()
}

/// Keeps the first source per domain, up to `cap` sources, preserving order.
pub fn dedupe_by_domain(sources: Vec<RawSource>, cap: usize) -> Vec<RawSource> {
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .filter(|s| seen.insert(s.domain.clone()))
        .take(cap)
        .collect()
}
