use super::trust::domain_matches;

/// Fact-checking outlets trusted out of the box.
pub const DEFAULT_FACT_CHECKERS: &[&str] = &[
    "snopes.com",
    "politifact.com",
    "factcheck.org",
    "reuters.com",
    "apnews.com",
    "fullfact.org",
];

/// Allow-list of fact-checking domains.
///
/// Entries are normalized to lowercase without a leading `www.`; a domain matches an
/// entry if it is the entry itself or one of its subdomains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactCheckers {
    domains: Vec<String>,
}

impl Default for FactCheckers {
    fn default() -> Self {
        Self::from_domains(DEFAULT_FACT_CHECKERS.iter().copied())
    }
}

impl FactCheckers {
    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for domain in domains {
            let normalized = crate::evidence::normalize_domain(domain.as_ref());
            if !normalized.is_empty() && !out.contains(&normalized) {
                out.push(normalized);
            }
        }
        Self { domains: out }
    }

    /// Parses a comma-separated list (the `VERACITY_FACTCHECK_DOMAINS` format).
    pub fn parse_list(value: &str) -> Self {
        Self::from_domains(value.split(','))
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains
            .iter()
            .any(|parent| domain_matches(domain, parent))
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
