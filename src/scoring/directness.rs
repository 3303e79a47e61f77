use super::claim::ClaimProfile;
use crate::constants::{
    DEFAULT_DIRECTNESS, DIRECTNESS_MIN_DENOMINATOR, FACT_DIRECTNESS_FLOOR,
    FACT_DIRECTNESS_MIN_MATCHES, PHRASE_MATCH_BONUS, PHRASE_MIN_CHARS, clamp01,
};
use crate::text::token_set;

/// Lexical relevance of a snippet to the claim, in `[0, 1]`.
///
/// Keyword hits over `max(keywords, 3)`, plus [`PHRASE_MATCH_BONUS`] when a claim clause
/// longer than [`PHRASE_MIN_CHARS`] appears verbatim. Well-established facts with at
/// least two hits are floored at [`FACT_DIRECTNESS_FLOOR`], since reference texts
/// restate such facts without echoing the claim's wording.
pub fn directness(profile: &ClaimProfile, snippet: Option<&str>) -> f64 {
    let Some(snippet) = snippet.filter(|s| !s.trim().is_empty()) else {
        return DEFAULT_DIRECTNESS;
    };

    let hits = profile.keyword_hits(&token_set(snippet));
    let denominator = profile.keywords().len().max(DIRECTNESS_MIN_DENOMINATOR);
    let mut score = hits as f64 / denominator as f64;

    let normalized = snippet
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let phrase_match = profile
        .clauses()
        .iter()
        .any(|clause| clause.chars().count() > PHRASE_MIN_CHARS && normalized.contains(clause));
    if phrase_match {
        score += PHRASE_MATCH_BONUS;
    }

    if profile.is_well_established() && hits >= FACT_DIRECTNESS_MIN_MATCHES {
        score = score.max(FACT_DIRECTNESS_FLOOR);
    }

    clamp01(score)
}

/// Convenience wrapper that profiles the claim first.
pub fn estimate_directness(claim: &str, snippet: Option<&str>) -> f64 {
    directness(&ClaimProfile::new(claim), snippet)
}
