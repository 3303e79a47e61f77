//! Shared claims, snippets and source builders for integration tests.

use chrono::{DateTime, TimeZone, Utc};
use veracity::{RawSource, ScoreOptions};

pub const WATER_CLAIM: &str = "Water boils at 100 degrees Celsius at sea level";
pub const WATER_SNIPPET: &str = "Water boils at 100°C (212°F) at standard atmospheric pressure, according to physics textbooks.";

pub const MOON_CLAIM: &str = "The moon is made of cheese";
pub const MOON_SNIPPET: &str =
    "Scientists debunk the myth that the moon is made of cheese; it is composed of rock.";

pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

pub fn options() -> ScoreOptions {
    ScoreOptions::at(as_of())
}

pub fn source(domain: &str, snippet: &str) -> RawSource {
    RawSource::new(format!("https://{domain}/article"), domain).with_snippet(snippet)
}

/// A mixed evidence set: encyclopedic, news, fact-check, blog and a source with no snippet.
pub fn mixed_sources() -> Vec<RawSource> {
    vec![
        source("britannica.com", WATER_SNIPPET).with_publish_date("2025-05-28"),
        source(
            "nytimes.com",
            "A survey of chefs found water boils faster at altitude than at sea level.",
        )
        .with_publish_date("2024-11-02T08:30:00Z"),
        source("snopes.com", "Fact check: water boiling point claims are accurate."),
        source("random-blog.xyz", "My kettle is loud."),
        RawSource::new("https://example.org/empty", "example.org"),
    ]
}
