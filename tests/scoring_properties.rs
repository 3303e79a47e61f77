//! Integration tests for the public scoring API: boundary validation feeding the
//! scorer, credibility guarantees and the serialized assessment.

mod common;

use common::fixtures::{MOON_CLAIM, MOON_SNIPPET, WATER_CLAIM, mixed_sources, options, source};
use veracity::credibility::DEFAULT_FACT_CHECKERS;
use veracity::{
    Consensus, DiscoveredVia, EvidenceScorer, FactCheckers, ScoringConfig, SourceInput,
    SourceType, VeracityBucket, VeracityVerdict, estimate_credibility, validate_sources,
};

#[test]
fn test_fact_checker_floor() {
    let checkers = FactCheckers::default();

    for domain in DEFAULT_FACT_CHECKERS {
        let score = estimate_credibility(domain, None, None, &checkers);
        assert!(score >= 0.88, "{domain} scored {score}");
    }

    let custom = FactCheckers::from_domains(["leadstories.com"]);
    assert!(estimate_credibility("leadstories.com", None, None, &custom) >= 0.88);
    assert!(estimate_credibility("leadstories.com", None, None, &checkers) < 0.88);
}

#[test]
fn test_fact_checker_floor_overrides_low_upstream_credibility() {
    let scorer = EvidenceScorer::default();
    let input = SourceInput {
        url: "https://www.snopes.com/fact-check/moon".to_string(),
        snippet: Some(MOON_SNIPPET.to_string()),
        credibility_score: Some(0.3),
        ..SourceInput::default()
    };

    let sources = validate_sources(vec![input], &scorer.config().fact_checkers).unwrap();
    let assessment = scorer.score_evidence(MOON_CLAIM, "en", sources, &options());

    let scored = &assessment.sources_with_scores[0];
    assert_eq!(scored.source.domain, "snopes.com");
    assert!(
        scored.credibility_score >= 0.88,
        "credibility {}",
        scored.credibility_score
    );
}

#[test]
fn test_preflight_boost_raises_credibility() {
    let checkers = FactCheckers::default();
    let plain = estimate_credibility("nytimes.com", Some(SourceType::News), None, &checkers);
    let boosted = estimate_credibility(
        "nytimes.com",
        Some(SourceType::News),
        Some(DiscoveredVia::FactcheckPreflight),
        &checkers,
    );

    assert!(boosted > plain);
    assert!(boosted <= 1.0);
}

#[test]
fn test_empty_input_is_unverified() {
    let assessment =
        EvidenceScorer::default().score_evidence(WATER_CLAIM, "en", vec![], &options());

    assert_eq!(assessment.eqs, 0);
    assert_eq!(assessment.sdi, 0);
    assert_eq!(assessment.consensus, Consensus::default());
    assert_eq!(
        VeracityVerdict::from_assessment(&assessment).bucket,
        VeracityBucket::Unverified
    );
}

#[test]
fn test_consensus_counts_every_source() {
    let mut sources = mixed_sources();
    sources.extend((0..8).map(|i| source(&format!("site{i}.com"), "Unrelated text.")));

    let scorer = EvidenceScorer::new(ScoringConfig::default().with_top_n(2));
    let assessment = scorer.score_evidence(WATER_CLAIM, "en", sources, &options());

    assert_eq!(assessment.consensus.total(), 13);
    assert_eq!(assessment.sources_with_scores.len(), 13);
}

#[test]
fn test_assessment_serializes_camel_case() {
    let assessment =
        EvidenceScorer::default().score_evidence(WATER_CLAIM, "en", mixed_sources(), &options());
    let json = serde_json::to_value(&assessment).unwrap();

    assert!(json["eqs"].is_u64());
    assert!(json["consensus"]["supporting"].is_u64());
    let first = &json["sourcesWithScores"][0];
    assert_eq!(first["domain"], "britannica.com");
    assert!(first["qualityScore"].is_f64());
    assert!(first.get("credibilityScore").is_some());
}
