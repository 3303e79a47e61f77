use super::*;

#[test]
fn test_classify_claim_types() {
    assert_eq!(
        classify_claim("Water boils at 100 degrees Celsius at sea level"),
        ClaimType::Scientific
    );
    assert_eq!(classify_claim("Humans have two legs"), ClaimType::Medical);
    assert_eq!(classify_claim("The Berlin Wall fell in 1989"), ClaimType::Historical);
    assert_eq!(classify_claim("Penicillin was discovered by accident"), ClaimType::Historical);
    assert_eq!(classify_claim("The senate passed the tax law"), ClaimType::Political);
    assert_eq!(classify_claim("Cats purr when happy"), ClaimType::General);
}

#[test]
fn test_classify_claim_precedence() {
    // Scientific is checked before medical.
    assert_eq!(classify_claim("Light damages the human eye"), ClaimType::Scientific);
    // "president" is claimed by the historical pattern first.
    assert_eq!(classify_claim("The president signed the bill"), ClaimType::Historical);
}

#[test]
fn test_classify_claim_is_case_insensitive() {
    assert_eq!(classify_claim("GRAVITY IS WEAK"), ClaimType::Scientific);
}

#[test]
fn test_analyze_claim() {
    let analysis = analyze_claim("Water boils at 100 degrees Celsius at sea level");
    assert_eq!(analysis.claim_type, ClaimType::Scientific);
    assert_eq!(
        analysis.keywords,
        vec!["water", "boils", "100", "degrees", "celsius", "sea", "level"]
    );
    assert_eq!(analysis.context, ClaimType::Scientific.context_terms());
}

#[test]
fn test_fact_check_query_keyword_types() {
    assert_eq!(
        fact_check_query("The sky is blue"),
        "sky blue scientific explanation physics research study evidence scientific explanation research"
    );
    assert_eq!(
        fact_check_query("Humans have two legs"),
        "humans two legs medical anatomy physiology health research medical information"
    );
    assert_eq!(
        fact_check_query("Rome was founded in 753 BC"),
        "rome founded 753 historical history documented records evidence historical facts"
    );
}

#[test]
fn test_fact_check_query_quoted_types() {
    assert_eq!(
        fact_check_query("The senate passed the tax law"),
        "\"The senate passed the tax law\" political government policy fact check verification snopes politifact"
    );
    assert_eq!(
        fact_check_query("  Cats purr when happy "),
        "\"Cats purr when happy\" fact check verification evidence true false"
    );
}

#[test]
fn test_counter_query() {
    assert_eq!(
        counter_query("Water boils at 100 degrees Celsius at sea level"),
        "water boils 100 myth debunked incorrect misconception false"
    );
    assert_eq!(
        counter_query("Humans have two legs"),
        "humans two legs myth medical misinformation false claim"
    );
    assert_eq!(
        counter_query("The Berlin Wall fell in 1989"),
        "berlin wall fell myth historical inaccuracy false disputed"
    );
    assert_eq!(
        counter_query("The senate passed the tax law"),
        "\"The senate passed the tax law\" false misleading fact check debunked"
    );
    assert_eq!(
        counter_query("Cats purr when happy"),
        "\"Cats purr when happy\" myth false debunked incorrect wrong"
    );
}

#[test]
fn test_relevant_domains() {
    let general = relevant_domains("Cats purr when happy");
    assert_eq!(general, BASE_DOMAINS);

    let medical = relevant_domains("Humans have two legs");
    assert_eq!(&medical[..BASE_DOMAINS.len()], BASE_DOMAINS);
    assert!(medical.contains(&"mayoclinic.org"));
    assert!(medical.contains(&"health.harvard.edu"));
    assert_eq!(medical.len(), BASE_DOMAINS.len() + 7);
}

#[test]
fn test_excluded_domains() {
    let excluded = excluded_domains();
    assert_eq!(excluded.len(), 9);
    assert!(excluded.contains(&"reddit.com"));
    assert!(excluded.contains(&"x.com"));
    assert!(!excluded.contains(&"wikipedia.org"));
}

#[test]
fn test_query_plan_matches_free_functions() {
    let claim = "Vaccines caused a disease outbreak in 2019";
    let plan = QueryPlan::for_claim(claim);

    assert_eq!(plan.claim_type, classify_claim(claim));
    assert_eq!(plan.fact_check_query, fact_check_query(claim));
    assert_eq!(plan.counter_query, counter_query(claim));
    assert_eq!(plan.relevant_domains, relevant_domains(claim));
    assert_eq!(plan.excluded_domains, EXCLUDED_DOMAINS);
}

#[test]
fn test_query_plan_serializes_lowercase_type() {
    let plan = QueryPlan::for_claim("Cats purr when happy");
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["claimType"], "general");
    assert!(json["factCheckQuery"].is_string());
    assert_eq!(json["keywords"], serde_json::json!(["cats", "purr", "when", "happy"]));
}
