use chrono::Utc;
use std::time::Duration;

use super::*;
use crate::evidence::EvidenceAssessment;
use crate::hashing::{Fingerprint, fingerprint_request};
use crate::planner::ClaimType;

fn key(claim: &str) -> Fingerprint {
    fingerprint_request(&claim).unwrap()
}

fn entry(ttl: Duration) -> CachedAssessment {
    CachedAssessment {
        assessment: EvidenceAssessment::empty(),
        claim_type: ClaimType::General,
        language: "en".to_string(),
        scored_at: Utc::now(),
        ttl,
    }
}

#[test]
fn test_veracity_status_header_values() {
    assert_eq!(VeracityStatus::Hit.as_header_value(), "HIT");
    assert_eq!(VeracityStatus::Miss.as_header_value(), "MISS");
    assert_eq!(format!("{}", VeracityStatus::Hit), "HIT");
}

#[test]
fn test_time_range_ttl() {
    assert_eq!(TimeRange::Week.ttl(), Duration::from_secs(900));
    assert_eq!(TimeRange::Month.ttl(), Duration::from_secs(3600));
    assert_eq!(TimeRange::Year.ttl(), Duration::from_secs(21_600));
    assert_eq!(TimeRange::All.ttl(), Duration::from_secs(86_400));
    assert_eq!(ttl_for(None), Duration::from_secs(600));
    assert_eq!(ttl_for(Some(TimeRange::Month)), Duration::from_secs(3600));
}

#[test]
fn test_time_range_wire_names() {
    let parsed: Vec<TimeRange> = serde_json::from_str(r#"["7d","30d","1y","all"]"#).unwrap();
    assert_eq!(
        parsed,
        vec![TimeRange::Week, TimeRange::Month, TimeRange::Year, TimeRange::All]
    );
    for range in parsed {
        assert_eq!(serde_json::to_value(range).unwrap(), range.as_str());
    }
    assert!(serde_json::from_str::<TimeRange>(r#""90d""#).is_err());
}

#[test]
fn test_cache_new_is_empty() {
    let cache = AssessmentCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_cache_insert_and_get() {
    let cache = AssessmentCache::with_capacity(100);
    let moon = key("The moon is made of cheese");

    assert!(cache.get(&moon).is_none());
    let stored = cache.insert(moon, entry(Duration::from_secs(60)));

    let found = cache.get(&moon).unwrap();
    assert_eq!(*found, *stored);

    cache.run_pending_tasks();
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_overwrites_same_key() {
    let cache = AssessmentCache::new();
    let a = key("a");
    let b = key("b");
    cache.insert(a, entry(Duration::from_secs(60)));
    cache.insert(b, entry(Duration::from_secs(60)));

    let mut replacement = entry(Duration::from_secs(60));
    replacement.language = "de".to_string();
    cache.insert(a, replacement);
    cache.run_pending_tasks();

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&a).unwrap().language, "de");
    assert_eq!(cache.get(&b).unwrap().language, "en");
}

#[test]
fn test_cache_entry_expires_after_ttl() {
    let cache = AssessmentCache::new();
    let short = key("short");
    let long = key("long");
    cache.insert(short, entry(Duration::from_millis(50)));
    cache.insert(long, entry(Duration::from_secs(60)));

    std::thread::sleep(Duration::from_millis(200));

    assert!(cache.get(&short).is_none());
    assert!(cache.get(&long).is_some());
}

#[test]
fn test_cache_handle_shares_entries() {
    let handle = AssessmentCacheHandle::with_capacity(10);
    let clone = handle.clone();

    let shared = key("shared");
    handle.insert(shared, entry(Duration::from_secs(60)));
    assert!(clone.get(&shared).is_some());

    clone.run_pending_tasks();
    assert_eq!(handle.len(), 1);
}
