//! Domain credibility estimation.
//!
//! Credibility is a pure lookup: a curated trust table, TLD classification, the
//! declared source type, and a fact-checker allow-list. Unknown domains resolve to the
//! neutral default; nothing here fails or touches the network.

pub mod fact_checkers;
pub mod trust;


pub use fact_checkers::{DEFAULT_FACT_CHECKERS, FactCheckers};
pub use trust::{base_trust, domain_matches};

use crate::constants::{FACT_CHECK_PREFLIGHT_BOOST, FACT_CHECKER_FLOOR, clamp01};
use crate::evidence::{DiscoveredVia, RawSource, SourceType};

/// Credibility of a domain in `[0, 1]`.
///
/// Domains on the allow-list never score below [`FACT_CHECKER_FLOOR`]. Sources surfaced
/// by the fact-check preflight pass get [`FACT_CHECK_PREFLIGHT_BOOST`] on top.
pub fn estimate_credibility(
    domain: &str,
    source_type: Option<SourceType>,
    discovered_via: Option<DiscoveredVia>,
    fact_checkers: &FactCheckers,
) -> f64 {
    let mut score = base_trust(domain, source_type);

    if fact_checkers.contains(domain) {
        score = score.max(FACT_CHECKER_FLOOR);
    }

    if discovered_via == Some(DiscoveredVia::FactcheckPreflight) {
        score += FACT_CHECK_PREFLIGHT_BOOST;
    }

    clamp01(score)
}

/// Credibility for a source: its upstream score when present, else estimated from
/// the domain. Allow-listed domains keep the [`FACT_CHECKER_FLOOR`] either way.
pub fn source_credibility(source: &RawSource, fact_checkers: &FactCheckers) -> f64 {
    match source.prior_credibility {
        Some(prior) if fact_checkers.contains(&source.domain) => {
            clamp01(prior).max(FACT_CHECKER_FLOOR)
        }
        Some(prior) => clamp01(prior),
        None => estimate_credibility(
            &source.domain,
            source.source_type,
            source.discovered_via,
            fact_checkers,
        ),
    }
}
