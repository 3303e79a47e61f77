use serde::{Deserialize, Serialize};

/// Kind of publisher behind a source, as reported by the search layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    News,
    Gov,
    Edu,
    Ngo,
    Blog,
    Academic,
    Factcheck,
    Web,
    #[serde(other)]
    Unknown,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::News => "news",
            SourceType::Gov => "gov",
            SourceType::Edu => "edu",
            SourceType::Ngo => "ngo",
            SourceType::Blog => "blog",
            SourceType::Academic => "academic",
            SourceType::Factcheck => "factcheck",
            SourceType::Web => "web",
            SourceType::Unknown => "unknown",
        }
    }
}

/// Search pass that surfaced a source. Never rewritten once scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscoveredVia {
    FactcheckPreflight,
    CounterEvidence,
    /// General search; also what unrecognized values deserialize to.
    #[serde(other)]
    Search,
}

impl DiscoveredVia {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveredVia::Search => "search",
            DiscoveredVia::FactcheckPreflight => "factcheck-preflight",
            DiscoveredVia::CounterEvidence => "counter-evidence",
        }
    }
}

/// Position a source takes toward the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Supporting,
    Challenging,
    Neutral,
}

impl Stance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Supporting => "supporting",
            Stance::Challenging => "challenging",
            Stance::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated evidence item entering the scoring core.
///
/// `domain` is the lowercase host without a leading `www.`. Build one from
/// untrusted input with [`RawSource::from_input`](super::RawSource::from_input).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSource {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// ISO-8601 timestamp or date, as supplied by the search provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovered_via: Option<DiscoveredVia>,
    /// Credibility computed upstream; derived from the domain when absent.
    #[serde(rename = "credibilityScore", default, skip_serializing)]
    pub prior_credibility: Option<f64>,
}

impl RawSource {
    /// Minimal source with only a URL and domain (mostly for tests and fixtures).
    pub fn new(url: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            snippet: None,
            publish_date: None,
            domain: domain.into(),
            source_type: None,
            language: None,
            discovered_via: None,
            prior_credibility: None,
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_publish_date(mut self, date: impl Into<String>) -> Self {
        self.publish_date = Some(date.into());
        self
    }

    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = Some(source_type);
        self
    }

    pub fn with_discovered_via(mut self, via: DiscoveredVia) -> Self {
        self.discovered_via = Some(via);
        self
    }

    pub fn with_prior_credibility(mut self, credibility: f64) -> Self {
        self.prior_credibility = Some(credibility);
        self
    }

    /// Snippet text if present and not blank.
    pub fn snippet_text(&self) -> Option<&str> {
        self.snippet.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Last label of the domain (`"org"` for `npr.org`), or `"unknown"`.
    pub fn domain_suffix(&self) -> &str {
        self.domain
            .rsplit('.')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("unknown")
    }
}

/// A source after scoring. Every score is in `[0, 1]`.
///
/// `quality_score` is [`QUALITY_WEIGHTS`](crate::constants::QUALITY_WEIGHTS) applied to
/// the credibility, directness, methodology and recency scores carried alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSource {
    #[serde(flatten)]
    pub source: RawSource,
    pub credibility_score: f64,
    pub directness_score: f64,
    pub methodology_score: f64,
    pub recency_score: f64,
    pub stance: Stance,
    pub quality_score: f64,
}

/// Stance tally over all scored sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consensus {
    pub supporting: usize,
    pub challenging: usize,
    pub neutral: usize,
}

impl Consensus {
    pub fn tally<'a>(stances: impl IntoIterator<Item = &'a Stance>) -> Self {
        stances
            .into_iter()
            .fold(Self::default(), |mut acc, stance| {
                match stance {
                    Stance::Supporting => acc.supporting += 1,
                    Stance::Challenging => acc.challenging += 1,
                    Stance::Neutral => acc.neutral += 1,
                }
                acc
            })
    }

    pub fn total(&self) -> usize {
        self.supporting + self.challenging + self.neutral
    }
}

/// Aggregate outcome of scoring one claim's evidence set.
///
/// `eqs` and `sdi` are derived from `sources_with_scores`; re-scoring the same sources
/// for the same claim reproduces them exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceAssessment {
    /// Evidence Quality Score, `0..=100`.
    pub eqs: u8,
    /// Source Diversity Index, `0..=10`.
    pub sdi: u8,
    pub sources_with_scores: Vec<ScoredSource>,
    pub consensus: Consensus,
}

impl EvidenceAssessment {
    pub fn empty() -> Self {
        Self {
            eqs: 0,
            sdi: 0,
            sources_with_scores: Vec::new(),
            consensus: Consensus::default(),
        }
    }

    /// Returns `true` if no evidence was scored.
    pub fn is_empty(&self) -> bool {
        self.sources_with_scores.is_empty()
    }
}
