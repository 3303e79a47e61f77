//! Lexical helpers shared by the estimators and the query planner.
//!
//! Both the directness estimator and the claim planner go through
//! [`extract_keywords`], so a claim produces the same keyword list everywhere.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use crate::constants::MAX_KEYWORDS;

const STOPWORDS: &[&str] = &[
    "the", "is", "are", "was", "were", "a", "an", "and", "or", "but", "in", "on", "at", "to",
    "for", "of", "with", "by", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "can", "that", "this", "these", "those", "its",
    "from", "than", "then", "there", "their", "they", "not",
];

/// Language used when a request carries no usable code.
pub const DEFAULT_LANGUAGE: &str = "en";

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits lowercased text into word tokens (alphanumerics and `_`).
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Word tokens of `text` with their starting byte offsets, case preserved.
pub fn word_spans(text: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if is_word_char(c) {
            start.get_or_insert(i);
        } else if let Some(s) = start.take() {
            spans.push((s, &text[s..i]));
        }
    }
    if let Some(s) = start {
        spans.push((s, &text[s..]));
    }

    spans
}

/// Set of lowercased word tokens in `text`.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).collect()
}

/// Returns `true` if `word` is filtered out of keyword lists.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Extracts up to [`MAX_KEYWORDS`] distinct keywords from a claim.
///
/// Tokens shorter than three characters and stopwords are dropped; order of first
/// appearance is preserved.
pub fn extract_keywords(claim: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(claim)
        .filter(|t| t.chars().count() > 2 && !is_stopword(t))
        .filter(|t| seen.insert(t.clone()))
        .take(MAX_KEYWORDS)
        .collect()
}

/// Lowercased, trimmed clauses of `text` split on sentence punctuation.
pub fn clauses(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split([',', ';', ':', '.', '!', '?'])
        .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|c| !c.is_empty())
        .collect()
}

/// Normalizes a language tag to a two-letter lowercase code, falling back to `"en"`.
///
/// Region suffixes (`pt-BR`, `en_US`) are stripped.
pub fn normalize_language(code: Option<&str>) -> String {
    let Some(code) = code else {
        return DEFAULT_LANGUAGE.to_string();
    };

    let primary = code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if primary.len() == 2 && primary.chars().all(|c| c.is_ascii_lowercase()) {
        primary
    } else {
        DEFAULT_LANGUAGE.to_string()
    }
}
