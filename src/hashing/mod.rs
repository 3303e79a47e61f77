//! BLAKE3 fingerprints for request de-duplication and assessment snapshots.

use blake3::Hasher;
use serde::Serialize;

use crate::evidence::EvidenceAssessment;

/// Full 32-byte fingerprint.
pub type Fingerprint = [u8; 32];

/// First 8 bytes of the BLAKE3 hash, little-endian.
///
/// Fine for log correlation and sharding. Use [`Fingerprint`]s where a collision
/// would return the wrong cached assessment.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Fingerprint of any serializable request, over its canonical JSON encoding.
///
/// Struct fields serialize in declaration order, so equal values always produce the
/// same bytes. Maps must be ordered (`BTreeMap`) for the same guarantee.
pub fn fingerprint_request<T: Serialize>(request: &T) -> Result<Fingerprint, serde_json::Error> {
    let canonical = serde_json::to_vec(request)?;
    Ok(*blake3::hash(&canonical).as_bytes())
}

/// Digest of a scored assessment, for checking that re-scoring reproduced it.
///
/// Floats are hashed by bit pattern, so `0.1 + 0.2` and `0.3` differ.
pub fn hash_assessment(assessment: &EvidenceAssessment) -> Fingerprint {
    let mut hasher = Hasher::new();
    hasher.update(&[assessment.eqs, assessment.sdi]);
    for count in [
        assessment.consensus.supporting,
        assessment.consensus.challenging,
        assessment.consensus.neutral,
    ] {
        hasher.update(&(count as u64).to_le_bytes());
    }

    for scored in &assessment.sources_with_scores {
        hasher.update(scored.source.url.as_bytes());
        hasher.update(b"|");
        hasher.update(scored.stance.as_str().as_bytes());
        for score in [
            scored.credibility_score,
            scored.directness_score,
            scored.methodology_score,
            scored.recency_score,
            scored.quality_score,
        ] {
            hasher.update(&score.to_bits().to_le_bytes());
        }
    }

    *hasher.finalize().as_bytes()
}

/// Lowercase hex encoding of a fingerprint.
pub fn to_hex(fingerprint: &Fingerprint) -> String {
    blake3::Hash::from(*fingerprint).to_hex().to_string()
}
