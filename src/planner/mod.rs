//! Claim-type classification and search query planning.
//!
//! The planner does not search. It turns a claim into the inputs a search
//! collaborator needs: a targeted fact-check query, a counter-evidence query, and
//! domain include/exclude lists biased by the claim's subject area.

#[cfg(test)]
mod tests;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::text::extract_keywords;

/// Keywords used by the counter-evidence query.
pub const COUNTER_QUERY_KEYWORDS: usize = 3;

/// Domains included in every search regardless of claim type.
pub const BASE_DOMAINS: &[&str] = &[
    "wikipedia.org",
    "britannica.com",
    "snopes.com",
    "factcheck.org",
    "reuters.com",
    "apnews.com",
    "bbc.com",
];

/// Platforms excluded from search because they produce false matches.
pub const EXCLUDED_DOMAINS: &[&str] = &[
    "twitter.com",
    "x.com",
    "facebook.com",
    "instagram.com",
    "tiktok.com",
    "reddit.com",
    "yahoo.com",
    "pinterest.com",
    "linkedin.com",
];

/// Subject area of a claim. Classification is first match wins, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Scientific,
    Medical,
    Historical,
    Political,
    General,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Scientific => "scientific",
            ClaimType::Medical => "medical",
            ClaimType::Historical => "historical",
            ClaimType::Political => "political",
            ClaimType::General => "general",
        }
    }

    /// Terms appended to the fact-check query.
    pub fn context_terms(&self) -> &'static [&'static str] {
        match self {
            ClaimType::Scientific => &[
                "scientific explanation",
                "physics",
                "research",
                "study",
                "evidence",
            ],
            ClaimType::Medical => &["medical", "anatomy", "physiology", "health", "research"],
            ClaimType::Historical => &["historical", "history", "documented", "records", "evidence"],
            ClaimType::Political => &[
                "political",
                "government",
                "policy",
                "fact check",
                "verification",
            ],
            ClaimType::General => &["fact check", "verification", "evidence"],
        }
    }

    /// Authoritative domains for this subject, searched on top of [`BASE_DOMAINS`].
    pub fn domains(&self) -> &'static [&'static str] {
        match self {
            ClaimType::Scientific => &[
                "nasa.gov",
                "noaa.gov",
                "scientificamerican.com",
                "nature.com",
                "science.org",
                "physics.org",
                "nationalgeographic.com",
                "howstuffworks.com",
                "khanacademy.org",
            ],
            ClaimType::Medical => &[
                "mayoclinic.org",
                "webmd.com",
                "nih.gov",
                "who.int",
                "cdc.gov",
                "health.harvard.edu",
                "hopkinsmedicine.org",
            ],
            ClaimType::Historical => &[
                "history.com",
                "smithsonianmag.com",
                "nationalarchives.gov",
                "loc.gov",
                "historynet.com",
            ],
            ClaimType::Political => &[
                "politifact.com",
                "factcheck.org",
                "snopes.com",
                "washingtonpost.com",
                "nytimes.com",
                "congress.gov",
            ],
            ClaimType::General => &[],
        }
    }
}

impl std::fmt::Display for ClaimType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

static CLAIM_TYPE_PATTERNS: LazyLock<Vec<(ClaimType, Vec<Regex>)>> = LazyLock::new(|| {
    vec![
        (
            ClaimType::Scientific,
            vec![compile(
                r"(?i)\b(?:sky|light|colou?rs?|physics|gravity|temperatures?|boil\w*|melt\w*|freez\w*|atmospheres?|wavelengths?|energy|matter|chemicals?|reactions?)\b",
            )],
        ),
        (
            ClaimType::Medical,
            vec![compile(
                r"(?i)\b(?:humans?|body|anatomy|medical|health|diseases?|organs?|bones?|muscles?|blood|brains?|hearts?|lungs?|legs?|arms?|eyes?|ears?)\b",
            )],
        ),
        (
            ClaimType::Historical,
            vec![
                compile(
                    r"(?i)\b(?:history|historical|years?|century|centuries|wars?|battles?|ancient|medieval|renaissance|revolution|empires?|kings?|queens?|president)\b",
                ),
                compile(r"\b(?:19|20)\d{2}\b"),
                compile(
                    r"(?i)\b(?:happened|occurred|founded|established|discovered|invented|died|born|ruled)\b",
                ),
            ],
        ),
        (
            ClaimType::Political,
            vec![compile(
                r"(?i)\b(?:government|politics|political|policy|laws?|congress|senate|president|ministers?|elections?|votes?|democrats?|republicans?|liberals?|conservatives?)\b",
            )],
        ),
    ]
});

/// Classifies a claim; anything that matches no subject pattern is [`ClaimType::General`].
pub fn classify_claim(claim: &str) -> ClaimType {
    CLAIM_TYPE_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(claim)))
        .map(|(claim_type, _)| *claim_type)
        .unwrap_or(ClaimType::General)
}

/// Claim type plus the keywords and context terms used to build queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimAnalysis {
    pub claim_type: ClaimType,
    pub keywords: Vec<String>,
    pub context: Vec<&'static str>,
}

pub fn analyze_claim(claim: &str) -> ClaimAnalysis {
    let claim_type = classify_claim(claim);
    ClaimAnalysis {
        claim_type,
        keywords: extract_keywords(claim),
        context: claim_type.context_terms().to_vec(),
    }
}

/// Query aimed at authoritative explanations or fact-checks of the claim.
pub fn fact_check_query(claim: &str) -> String {
    let analysis = analyze_claim(claim);
    build_fact_check_query(claim.trim(), &analysis)
}

/// Query aimed at sources that dispute the claim.
pub fn counter_query(claim: &str) -> String {
    let analysis = analyze_claim(claim);
    build_counter_query(claim.trim(), &analysis)
}

/// [`BASE_DOMAINS`] followed by the claim type's own domains.
pub fn relevant_domains(claim: &str) -> Vec<&'static str> {
    domains_for(classify_claim(claim))
}

pub fn excluded_domains() -> &'static [&'static str] {
    EXCLUDED_DOMAINS
}

fn domains_for(claim_type: ClaimType) -> Vec<&'static str> {
    BASE_DOMAINS
        .iter()
        .chain(claim_type.domains())
        .copied()
        .collect()
}

fn build_fact_check_query(claim: &str, analysis: &ClaimAnalysis) -> String {
    let keywords = analysis.keywords.join(" ");
    let context = analysis.context.join(" ");

    match analysis.claim_type {
        ClaimType::Scientific => format!("{keywords} {context} scientific explanation research"),
        ClaimType::Medical => format!("{keywords} {context} medical information"),
        ClaimType::Historical => format!("{keywords} {context} historical facts"),
        ClaimType::Political => format!("\"{claim}\" {context} snopes politifact"),
        ClaimType::General => format!("\"{claim}\" {context} true false"),
    }
}

fn build_counter_query(claim: &str, analysis: &ClaimAnalysis) -> String {
    let keywords = analysis
        .keywords
        .iter()
        .take(COUNTER_QUERY_KEYWORDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    match analysis.claim_type {
        ClaimType::Scientific => format!("{keywords} myth debunked incorrect misconception false"),
        ClaimType::Medical => format!("{keywords} myth medical misinformation false claim"),
        ClaimType::Historical => format!("{keywords} myth historical inaccuracy false disputed"),
        ClaimType::Political => format!("\"{claim}\" false misleading fact check debunked"),
        ClaimType::General => format!("\"{claim}\" myth false debunked incorrect wrong"),
    }
}

/// Everything a search collaborator needs for one claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPlan {
    pub claim_type: ClaimType,
    pub keywords: Vec<String>,
    pub context: Vec<&'static str>,
    pub fact_check_query: String,
    pub counter_query: String,
    pub relevant_domains: Vec<&'static str>,
    pub excluded_domains: Vec<&'static str>,
}

impl QueryPlan {
    /// Plans a claim, classifying it once.
    pub fn for_claim(claim: &str) -> Self {
        let claim = claim.trim();
        let analysis = analyze_claim(claim);

        let plan = Self {
            claim_type: analysis.claim_type,
            fact_check_query: build_fact_check_query(claim, &analysis),
            counter_query: build_counter_query(claim, &analysis),
            relevant_domains: domains_for(analysis.claim_type),
            excluded_domains: EXCLUDED_DOMAINS.to_vec(),
            keywords: analysis.keywords,
            context: analysis.context,
        };

        tracing::debug!(
            claim_type = %plan.claim_type,
            keywords = plan.keywords.len(),
            domains = plan.relevant_domains.len(),
            "Planned claim queries"
        );

        plan
    }
}
