use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

use super::claim::ClaimProfile;
use super::config::{ScoreOptions, ScoringConfig};
use super::directness::directness;
use super::signals::{methodology_score, recency_score};
use super::stance::classify_stance;
use crate::constants::{
    EQS_FLOOR_LEANING, EQS_FLOOR_MODERATE, EQS_FLOOR_STRONG, HIGH_CREDIBILITY, HIGH_DIRECTNESS,
    QUALITY_WEIGHTS, SDI_NORMALIZER,
};
use crate::credibility::source_credibility;
use crate::evidence::{Consensus, EvidenceAssessment, RawSource, ScoredSource, Stance};

/// Scores evidence sets against a fixed [`ScoringConfig`].
///
/// Scoring is pure: the same claim, sources and options always give the same
/// assessment. Nothing here fails; missing fields fall back to neutral defaults.
#[derive(Debug, Clone, Default)]
pub struct EvidenceScorer {
    config: ScoringConfig,
}

impl EvidenceScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores one source. `quality_score` is [`QUALITY_WEIGHTS`] over the components.
    pub fn score_source(
        &self,
        profile: &ClaimProfile,
        source: RawSource,
        options: &ScoreOptions,
    ) -> ScoredSource {
        let snippet = source.snippet_text();

        let credibility_score = source_credibility(&source, &self.config.fact_checkers);
        let directness_score = directness(profile, snippet);
        let methodology_score = methodology_score(snippet);
        let recency_score = recency_score(source.publish_date.as_deref(), options.as_of);
        let stance = classify_stance(profile, snippet);

        let quality_score = QUALITY_WEIGHTS.combine(
            credibility_score,
            directness_score,
            methodology_score,
            recency_score,
        );

        ScoredSource {
            source,
            credibility_score,
            directness_score,
            methodology_score,
            recency_score,
            stance,
            quality_score,
        }
    }

    /// Scores every source and reduces them to EQS, SDI and a stance tally.
    ///
    /// An empty source list yields `eqs = 0`, `sdi = 0` and an empty tally.
    pub fn score_evidence(
        &self,
        claim: &str,
        language: &str,
        sources: Vec<RawSource>,
        options: &ScoreOptions,
    ) -> EvidenceAssessment {
        if sources.is_empty() {
            debug!(language, "No sources to score");
            return EvidenceAssessment::empty();
        }

        let profile = ClaimProfile::new(claim);
        let top_n = options.top_n.unwrap_or(self.config.top_n).max(1);

        debug!(
            language,
            num_sources = sources.len(),
            top_n,
            keywords = profile.keywords().len(),
            fact_category = ?profile.fact_category(),
            "Scoring evidence set"
        );

        let scored: Vec<ScoredSource> = sources
            .into_iter()
            .map(|source| self.score_source(&profile, source, options))
            .collect();

        let consensus = Consensus::tally(scored.iter().map(|s| &s.stance));

        let weighted = weighted_eqs(&scored, top_n);
        let eqs = match established_fact_floor(&profile, &scored, &consensus) {
            Some(floor) if floor > weighted => {
                debug!(weighted, floor, "Applying well-established fact floor");
                floor
            }
            _ => weighted,
        };

        let sdi = diversity_index(&scored);

        debug!(
            eqs,
            sdi,
            supporting = consensus.supporting,
            challenging = consensus.challenging,
            neutral = consensus.neutral,
            "Evidence scored"
        );

        EvidenceAssessment {
            eqs,
            sdi,
            sources_with_scores: scored,
            consensus,
        }
    }
}

/// Scores with a one-off scorer built from `config`.
pub fn score_evidence(
    claim: &str,
    language: &str,
    sources: Vec<RawSource>,
    config: &ScoringConfig,
    options: &ScoreOptions,
) -> EvidenceAssessment {
    EvidenceScorer::new(config.clone()).score_evidence(claim, language, sources, options)
}

/// Indexes of the `top_n` most direct sources; ties keep input order.
pub fn top_by_directness(scored: &[ScoredSource], top_n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scored.len()).collect();
    order.sort_by(|&a, &b| {
        scored[b]
            .directness_score
            .partial_cmp(&scored[a].directness_score)
            .unwrap_or(Ordering::Equal)
    });
    order.truncate(top_n);
    order
}

/// `round(100 · Σ d²·q / Σ d²)` over the top-N sources, with a zero denominator
/// treated as 1.
pub fn weighted_eqs(scored: &[ScoredSource], top_n: usize) -> u8 {
    let (numerator, denominator) = top_by_directness(scored, top_n)
        .into_iter()
        .map(|i| &scored[i])
        .fold((0.0_f64, 0.0_f64), |(num, den), s| {
            let weight = s.directness_score * s.directness_score;
            (num + weight * s.quality_score, den + weight)
        });

    let denominator = if denominator == 0.0 { 1.0 } else { denominator };
    (100.0 * numerator / denominator).round().clamp(0.0, 100.0) as u8
}

/// EQS floor for well-established facts backed by uncontested evidence.
pub fn established_fact_floor(
    profile: &ClaimProfile,
    scored: &[ScoredSource],
    consensus: &Consensus,
) -> Option<u8> {
    if !profile.is_well_established() {
        return None;
    }

    let high_credibility = scored
        .iter()
        .filter(|s| s.credibility_score >= HIGH_CREDIBILITY)
        .count();
    let high_directness = scored
        .iter()
        .filter(|s| s.directness_score >= HIGH_DIRECTNESS)
        .count();

    let Consensus {
        supporting,
        challenging,
        ..
    } = *consensus;

    if supporting >= 2 && challenging == 0 && high_credibility >= 1 {
        Some(EQS_FLOOR_STRONG)
    } else if supporting >= 1 && challenging == 0 && high_directness >= 2 {
        Some(EQS_FLOOR_MODERATE)
    } else if supporting > challenging && high_credibility >= 1 {
        Some(EQS_FLOOR_LEANING)
    } else {
        None
    }
}

/// `round(10 · min(1, (domain suffixes + stances + source types) / 20))`.
pub fn diversity_index(scored: &[ScoredSource]) -> u8 {
    if scored.is_empty() {
        return 0;
    }

    let suffixes: HashSet<&str> = scored.iter().map(|s| s.source.domain_suffix()).collect();
    let stances: HashSet<Stance> = scored.iter().map(|s| s.stance).collect();
    let source_types: HashSet<_> = scored.iter().map(|s| s.source.source_type).collect();

    let raw = (suffixes.len() + stances.len() + source_types.len()) as f64 / SDI_NORMALIZER;
    (10.0 * raw.min(1.0)).round() as u8
}
