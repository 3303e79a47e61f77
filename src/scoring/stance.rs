//! Stance classification as an ordered rule chain.
//!
//! Rules are evaluated in [`STANCE_RULES`] order and the first one that applies decides
//! the stance. When none applies the source is [`Stance::Neutral`]. The chain leans
//! toward `supporting` for well-established facts so uncontested claims are not
//! reported as unverified.

use std::collections::HashSet;

use super::claim::ClaimProfile;
use super::patterns::{AFFIRMATION, DEFINITIONAL, EXPLANATORY, NEGATION};
use crate::constants::NEGATION_WINDOW_CHARS;
use crate::evidence::Stance;
use crate::text::{token_set, word_spans};

/// Snippet features the rules inspect.
#[derive(Debug)]
pub struct StanceInput<'a> {
    pub profile: &'a ClaimProfile,
    pub snippet: &'a str,
    /// Number of claim keywords present in the snippet.
    pub coverage: usize,
}

impl<'a> StanceInput<'a> {
    pub fn new(profile: &'a ClaimProfile, snippet: &'a str) -> Self {
        let tokens: HashSet<String> = token_set(snippet);
        Self {
            profile,
            snippet,
            coverage: profile.keyword_hits(&tokens),
        }
    }

    fn keyword_count(&self) -> usize {
        self.profile.keywords().len()
    }
}

/// One entry of the rule chain.
#[derive(Debug, Clone, Copy)]
pub struct StanceRule {
    pub name: &'static str,
    pub applies: fn(&StanceInput<'_>) -> bool,
    pub outcome: Stance,
}

pub const STANCE_RULES: &[StanceRule] = &[
    StanceRule {
        name: "denial_near_keyword",
        applies: denial_near_keyword,
        outcome: Stance::Challenging,
    },
    StanceRule {
        name: "affirmation",
        applies: affirmation,
        outcome: Stance::Supporting,
    },
    StanceRule {
        name: "established_fact_coverage",
        applies: established_fact_coverage,
        outcome: Stance::Supporting,
    },
    StanceRule {
        name: "explained_coverage",
        applies: explained_coverage,
        outcome: Stance::Supporting,
    },
    StanceRule {
        name: "definitional_coverage",
        applies: definitional_coverage,
        outcome: Stance::Supporting,
    },
];

/// Outcome of the chain plus the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StanceDecision {
    pub stance: Stance,
    /// `None` when the snippet was missing or no rule applied.
    pub rule: Option<&'static str>,
}

/// Runs the rule chain for one snippet.
pub fn decide_stance(profile: &ClaimProfile, snippet: Option<&str>) -> StanceDecision {
    let Some(snippet) = snippet.filter(|s| !s.trim().is_empty()) else {
        return StanceDecision {
            stance: Stance::Neutral,
            rule: None,
        };
    };

    let input = StanceInput::new(profile, snippet);
    STANCE_RULES
        .iter()
        .find(|rule| (rule.applies)(&input))
        .map(|rule| StanceDecision {
            stance: rule.outcome,
            rule: Some(rule.name),
        })
        .unwrap_or(StanceDecision {
            stance: Stance::Neutral,
            rule: None,
        })
}

pub fn classify_stance(profile: &ClaimProfile, snippet: Option<&str>) -> Stance {
    decide_stance(profile, snippet).stance
}

/// Convenience wrapper that profiles the claim first.
pub fn estimate_stance(claim: &str, snippet: Option<&str>) -> Stance {
    classify_stance(&ClaimProfile::new(claim), snippet)
}

/// A denial word followed by a claim keyword that starts within
/// [`NEGATION_WINDOW_CHARS`] of it. Words are never cut at the window edge.
pub fn denial_near_keyword(input: &StanceInput<'_>) -> bool {
    NEGATION.find_iter(input.snippet).any(|m| {
        let rest = &input.snippet[m.end()..];
        let limit = rest
            .char_indices()
            .nth(NEGATION_WINDOW_CHARS)
            .map_or(rest.len(), |(i, _)| i);

        word_spans(rest)
            .into_iter()
            .take_while(|(start, _)| *start < limit)
            .any(|(_, word)| input.profile.is_keyword(word))
    })
}

pub fn affirmation(input: &StanceInput<'_>) -> bool {
    AFFIRMATION.is_match(input.snippet)
}

/// Well-established fact with at least half the keywords (capped at 2) present, and
/// either explanatory/definitional phrasing or two or more keyword hits.
pub fn established_fact_coverage(input: &StanceInput<'_>) -> bool {
    if !input.profile.is_well_established() {
        return false;
    }

    let required = input.keyword_count().div_ceil(2).clamp(1, 2);
    if input.coverage < required {
        return false;
    }

    DEFINITIONAL.is_match(input.snippet)
        || EXPLANATORY.is_match(input.snippet)
        || input.coverage >= 2
}

/// Explanatory connectives with at least 60% of keywords (capped at 3) present.
pub fn explained_coverage(input: &StanceInput<'_>) -> bool {
    let required = (input.keyword_count() * 3).div_ceil(5).clamp(1, 3);
    EXPLANATORY.is_match(input.snippet) && input.coverage >= required
}

/// Definitional phrasing with at least two keywords present.
pub fn definitional_coverage(input: &StanceInput<'_>) -> bool {
    DEFINITIONAL.is_match(input.snippet) && input.coverage >= 2
}
