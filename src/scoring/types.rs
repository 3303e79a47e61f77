use serde::Serialize;

use crate::evidence::EvidenceAssessment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
/// Display bucket for an EQS.
pub enum VeracityBucket {
    True,
    MostlyTrue,
    LikelyTrue,
    Mixed,
    MostlyFalse,
    False,
    /// No evidence was scored.
    Unverified,
}

impl VeracityBucket {
    /// Maps an EQS onto its bucket.
    pub fn from_eqs(eqs: u8) -> Self {
        match eqs {
            76.. => VeracityBucket::True,
            61..=75 => VeracityBucket::MostlyTrue,
            51..=60 => VeracityBucket::LikelyTrue,
            26..=50 => VeracityBucket::Mixed,
            1..=25 => VeracityBucket::MostlyFalse,
            0 => VeracityBucket::False,
        }
    }

    /// Veracity score shown for the bucket.
    pub fn score(&self) -> u8 {
        match self {
            VeracityBucket::True => 90,
            VeracityBucket::MostlyTrue => 75,
            VeracityBucket::LikelyTrue => 60,
            VeracityBucket::Mixed => 40,
            VeracityBucket::MostlyFalse => 20,
            VeracityBucket::False | VeracityBucket::Unverified => 0,
        }
    }

    /// Canned human-readable summary.
    pub fn summary(&self) -> &'static str {
        match self {
            VeracityBucket::True => "This claim appears to be true based on strong evidence",
            VeracityBucket::MostlyTrue => {
                "This claim appears to be mostly true based on available evidence"
            }
            VeracityBucket::LikelyTrue => {
                "This claim appears to be likely true based on available evidence"
            }
            VeracityBucket::Mixed => {
                "This claim has mixed evidence and requires further verification"
            }
            VeracityBucket::MostlyFalse => {
                "This claim appears to be mostly false based on available evidence"
            }
            VeracityBucket::False => "This claim appears to be false based on available evidence",
            VeracityBucket::Unverified => {
                "No evidence was found for this claim, so it could not be assessed"
            }
        }
    }
}

impl std::fmt::Display for VeracityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.score(), self.summary())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Presentation form of an assessment.
pub struct VeracityVerdict {
    /// Bucketed 0–100 veracity score.
    pub score: u8,
    pub bucket: VeracityBucket,
    pub summary: &'static str,
}

impl VeracityVerdict {
    /// Verdict for a raw EQS.
    pub fn from_eqs(eqs: u8) -> Self {
        Self::from_bucket(VeracityBucket::from_eqs(eqs))
    }

    /// Verdict for an assessment; an empty evidence set is [`VeracityBucket::Unverified`]
    /// rather than "false".
    pub fn from_assessment(assessment: &EvidenceAssessment) -> Self {
        if assessment.is_empty() {
            return Self::from_bucket(VeracityBucket::Unverified);
        }
        Self::from_eqs(assessment.eqs)
    }

    fn from_bucket(bucket: VeracityBucket) -> Self {
        Self {
            score: bucket.score(),
            bucket,
            summary: bucket.summary(),
        }
    }
}
