use regex::Regex;
use std::sync::LazyLock;

use crate::constants::DEFAULT_CREDIBILITY;
use crate::evidence::SourceType;

// Hand-curated tiers. Subdomains inherit their parent's entry.
const TRUST_TABLE: &[(&str, f64)] = &[
    // Government, academic and scientific publishers.
    ("who.int", 0.92),
    ("nih.gov", 0.92),
    ("cdc.gov", 0.92),
    ("nature.com", 0.92),
    ("science.org", 0.90),
    ("nasa.gov", 0.90),
    ("noaa.gov", 0.90),
    ("harvard.edu", 0.90),
    ("thelancet.com", 0.90),
    ("nejm.org", 0.90),
    // Fact-checkers and wire services.
    ("snopes.com", 0.90),
    ("politifact.com", 0.90),
    ("factcheck.org", 0.90),
    ("fullfact.org", 0.88),
    ("reuters.com", 0.85),
    ("apnews.com", 0.85),
    ("afp.com", 0.85),
    // Medical references.
    ("mayoclinic.org", 0.85),
    ("hopkinsmedicine.org", 0.85),
    ("webmd.com", 0.70),
    // Encyclopedic references and major outlets.
    ("britannica.com", 0.80),
    ("bbc.com", 0.80),
    ("bbc.co.uk", 0.80),
    ("npr.org", 0.80),
    ("nytimes.com", 0.80),
    ("scientificamerican.com", 0.80),
    ("washingtonpost.com", 0.78),
    ("theguardian.com", 0.78),
    ("nationalgeographic.com", 0.78),
    ("smithsonianmag.com", 0.78),
    ("wikipedia.org", 0.75),
    ("history.com", 0.72),
    ("khanacademy.org", 0.70),
    ("howstuffworks.com", 0.60),
];

// User-generated platforms.
const COMMUNITY_DOMAINS: &[&str] = &[
    "reddit.com",
    "quora.com",
    "medium.com",
    "twitter.com",
    "x.com",
    "facebook.com",
    "instagram.com",
    "tiktok.com",
    "pinterest.com",
    "yahoo.com",
    "answers.com",
    "blogspot.com",
    "wordpress.com",
];

pub const INSTITUTIONAL_TRUST: f64 = 0.85;
pub const ACADEMIC_TYPE_TRUST: f64 = 0.88;
pub const NEWS_TYPE_TRUST: f64 = 0.70;
pub const ORG_TRUST: f64 = 0.60;
pub const COMMUNITY_TRUST: f64 = 0.40;

static INSTITUTIONAL_TLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(?:gov|mil|edu|int)(?:\.[a-z]{2})?$|\.ac\.[a-z]{2}$")
        .expect("institutional TLD pattern is valid")
});

static ORG_TLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.org(?:\.[a-z]{2})?$").expect("org TLD pattern is valid")
});

/// Returns `true` if `domain` is `parent` or one of its subdomains.
#[inline]
pub fn domain_matches(domain: &str, parent: &str) -> bool {
    domain == parent
        || (domain.len() > parent.len()
            && domain.ends_with(parent)
            && domain.as_bytes()[domain.len() - parent.len() - 1] == b'.')
}

fn table_trust(domain: &str) -> Option<f64> {
    TRUST_TABLE
        .iter()
        .filter(|(parent, _)| domain_matches(domain, parent))
        .max_by_key(|(parent, _)| parent.len())
        .map(|(_, score)| *score)
}

/// Tier-based trust for a domain before fact-checker adjustments.
///
/// Resolution order: curated table, community platforms, institutional TLDs,
/// declared source type, `.org`, then [`DEFAULT_CREDIBILITY`].
pub fn base_trust(domain: &str, source_type: Option<SourceType>) -> f64 {
    if let Some(score) = table_trust(domain) {
        return score;
    }

    if COMMUNITY_DOMAINS.iter().any(|parent| domain_matches(domain, parent)) {
        return COMMUNITY_TRUST;
    }

    if INSTITUTIONAL_TLD.is_match(domain) {
        return INSTITUTIONAL_TRUST;
    }

    match source_type {
        Some(SourceType::Academic) => return ACADEMIC_TYPE_TRUST,
        Some(SourceType::Gov) | Some(SourceType::Edu) => return INSTITUTIONAL_TRUST,
        Some(SourceType::News) => return NEWS_TYPE_TRUST,
        Some(SourceType::Ngo) => return ORG_TRUST,
        Some(SourceType::Blog) => return COMMUNITY_TRUST,
        _ => {}
    }

    if ORG_TLD.is_match(domain) {
        return ORG_TRUST;
    }

    DEFAULT_CREDIBILITY
}
