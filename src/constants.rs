//! Cross-cutting, shared constants.
//!
//! Scoring weights, estimator defaults and aggregate thresholds live here so the
//! estimators, the aggregator and the tests agree on one set of numbers.
//!
//! # Quality Invariant
//!
//! A source's `quality_score` is always [`QUALITY_WEIGHTS`] applied to its component
//! scores. Changing a weight changes every persisted score, so treat these values as
//! part of the output format.

/// Midpoint used whenever an estimator has nothing to look at.
pub const NEUTRAL_SCORE: f64 = 0.5;

pub const DEFAULT_CREDIBILITY: f64 = NEUTRAL_SCORE;
pub const DEFAULT_DIRECTNESS: f64 = NEUTRAL_SCORE;
pub const DEFAULT_METHODOLOGY: f64 = NEUTRAL_SCORE;
pub const DEFAULT_RECENCY: f64 = NEUTRAL_SCORE;

/// Methodology score for snippets that use research-method vocabulary.
pub const METHODOLOGY_MATCH_SCORE: f64 = 0.8;

/// Stand-in value for the slant signal, which is not computed yet.
pub const NEUTRAL_SLANT: f64 = NEUTRAL_SCORE;

/// Number of sources (by directness) that feed the EQS.
pub const DEFAULT_EQS_TOP_N: usize = 5;

/// Keyword cap shared by the directness estimator and the query planner.
pub const MAX_KEYWORDS: usize = 8;

/// Keyword-count floor for the directness denominator.
pub const DIRECTNESS_MIN_DENOMINATOR: usize = 3;

/// Bonus when a whole claim clause appears verbatim in the snippet.
pub const PHRASE_MATCH_BONUS: f64 = 0.3;

/// Minimum clause length (chars) considered for the phrase bonus.
pub const PHRASE_MIN_CHARS: usize = 10;

/// Directness floor for well-established facts with enough keyword hits.
pub const FACT_DIRECTNESS_FLOOR: f64 = 0.8;
pub const FACT_DIRECTNESS_MIN_MATCHES: usize = 2;

/// How far (in chars) after a denial word a claim keyword may appear.
pub const NEGATION_WINDOW_CHARS: usize = 50;

/// Credibility floor for domains on the fact-checker allow-list.
pub const FACT_CHECKER_FLOOR: f64 = 0.88;

/// Credibility bonus for sources found by the fact-check preflight search.
pub const FACT_CHECK_PREFLIGHT_BOOST: f64 = 0.05;

/// Credibility at or above which a source counts as high-credibility.
pub const HIGH_CREDIBILITY: f64 = 0.8;

/// Directness at or above which a source counts as high-directness.
pub const HIGH_DIRECTNESS: f64 = 0.7;

/// EQS floors applied to well-established facts, strongest first.
pub const EQS_FLOOR_STRONG: u8 = 95;
pub const EQS_FLOOR_MODERATE: u8 = 90;
pub const EQS_FLOOR_LEANING: u8 = 85;

/// Denominator of the raw diversity count.
pub const SDI_NORMALIZER: f64 = 20.0;

/// Default cap for domain de-duplication at the boundary.
pub const DEFAULT_MAX_SOURCES: usize = 12;

/// Weights of the per-source quality sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityWeights {
    pub credibility: f64,
    pub directness: f64,
    pub methodology: f64,
    pub recency: f64,
    pub slant: f64,
}

pub const QUALITY_WEIGHTS: QualityWeights = QualityWeights {
    credibility: 0.40,
    directness: 0.25,
    methodology: 0.15,
    recency: 0.10,
    slant: 0.10,
};

impl QualityWeights {
    /// Weighted sum of the component scores, clamped to `[0, 1]`.
    ///
    /// The slant slot always receives [`NEUTRAL_SLANT`].
    #[inline]
    pub fn combine(&self, credibility: f64, directness: f64, methodology: f64, recency: f64) -> f64 {
        let raw = self.credibility * credibility
            + self.directness * directness
            + self.methodology * methodology
            + self.recency * recency
            + self.slant * NEUTRAL_SLANT;
        clamp01(raw)
    }

    /// Sum of all weights (1.0 for the shipped weights).
    pub fn total(&self) -> f64 {
        self.credibility + self.directness + self.methodology + self.recency + self.slant
    }
}

/// Clamps to `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((QUALITY_WEIGHTS.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_combine_all_neutral() {
        let q = QUALITY_WEIGHTS.combine(0.5, 0.5, 0.5, 0.5);
        assert!((q - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_combine_extremes() {
        let high = QUALITY_WEIGHTS.combine(1.0, 1.0, 1.0, 1.0);
        assert!((high - 0.95).abs() < 1e-9);

        let low = QUALITY_WEIGHTS.combine(0.0, 0.0, 0.0, 0.0);
        assert!((low - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.2), 0.0);
        assert_eq!(clamp01(1.7), 1.0);
        assert_eq!(clamp01(0.42), 0.42);
        assert_eq!(clamp01(f64::NAN), 0.0);
    }
}
