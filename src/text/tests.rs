use super::*;

#[test]
fn test_extract_keywords_strips_stopwords_and_short_tokens() {
    let keywords = extract_keywords("Water boils at 100 degrees Celsius at sea level");
    assert_eq!(
        keywords,
        vec!["water", "boils", "100", "degrees", "celsius", "sea", "level"]
    );
}

#[test]
fn test_extract_keywords_caps_at_eight() {
    let keywords =
        extract_keywords("alpha bravo charlie delta echo foxtrot golf hotel india juliet");
    assert_eq!(keywords.len(), MAX_KEYWORDS);
    assert_eq!(keywords[0], "alpha");
    assert_eq!(keywords[7], "hotel");
}

#[test]
fn test_extract_keywords_dedupes_preserving_order() {
    let keywords = extract_keywords("Cheese moon cheese MOON rock");
    assert_eq!(keywords, vec!["cheese", "moon", "rock"]);
}

#[test]
fn test_extract_keywords_empty_claim() {
    assert!(extract_keywords("").is_empty());
    assert!(extract_keywords("is a of to").is_empty());
}

#[test]
fn test_tokenize_splits_on_symbols() {
    let tokens: Vec<_> = tokenize("Water boils at 100°C (212°F)").collect();
    assert_eq!(tokens, vec!["water", "boils", "at", "100", "c", "212", "f"]);
}

#[test]
fn test_word_spans_report_byte_offsets() {
    let spans = word_spans("No/moonlight, Käse 42");
    assert_eq!(spans, vec![(0, "No"), (3, "moonlight"), (14, "Käse"), (20, "42")]);
    assert!(word_spans("  ...  ").is_empty());
}

#[test]
fn test_token_set_is_lowercase() {
    let set = token_set("The MOON is Made");
    assert!(set.contains("moon"));
    assert!(set.contains("made"));
    assert!(!set.contains("MOON"));
}

#[test]
fn test_clauses() {
    let parts = clauses("Vaccines work, and  they are safe; trust me.");
    assert_eq!(parts, vec!["vaccines work", "and they are safe", "trust me"]);
}

#[test]
fn test_normalize_language() {
    assert_eq!(normalize_language(Some("EN")), "en");
    assert_eq!(normalize_language(Some("pt-BR")), "pt");
    assert_eq!(normalize_language(Some("en_US")), "en");
    assert_eq!(normalize_language(Some("deu")), "en");
    assert_eq!(normalize_language(Some("")), "en");
    assert_eq!(normalize_language(Some("1a")), "en");
    assert_eq!(normalize_language(None), "en");
}
