//! End-to-end tests of the HTTP surface through the public router.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::fixtures::{WATER_CLAIM, WATER_SNIPPET};
use http_body_util::BodyExt;
use tower::ServiceExt;
use veracity::gateway::{HandlerState, create_router_with_state};
use veracity::{Config, QueryPlan, VERACITY_STATUS_HEADER};

fn request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_score_then_plan_share_classification() {
    let router = create_router_with_state(HandlerState::from_config(&Config::default()));

    let score = router
        .clone()
        .oneshot(request(
            "/v1/evidence/score",
            serde_json::json!({
                "claim": WATER_CLAIM,
                "asOf": "2025-06-01T00:00:00Z",
                "timeRange": "7d",
                "sources": [
                    { "url": "https://britannica.com/boiling", "snippet": WATER_SNIPPET },
                    { "url": "https://www.snopes.com/fact-check/boiling", "discoveredVia": "factcheck-preflight" }
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(score.status(), StatusCode::OK);
    assert_eq!(score.headers()[VERACITY_STATUS_HEADER], "MISS");
    let bytes = score.into_body().collect().await.unwrap().to_bytes();
    let score: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let sources = score["sourcesWithScores"].as_array().unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[1]["domain"], "snopes.com");
    assert_eq!(sources[1]["discoveredVia"], "factcheck-preflight");
    assert!(sources[1]["credibilityScore"].as_f64().unwrap() >= 0.88);

    let plan = router
        .oneshot(request(
            "/v1/claims/plan",
            serde_json::json!({ "claim": WATER_CLAIM }),
        ))
        .await
        .unwrap();
    assert_eq!(plan.status(), StatusCode::OK);
    let bytes = plan.into_body().collect().await.unwrap().to_bytes();
    let plan: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(plan["claimType"], score["claimType"]);
    assert_eq!(
        plan["factCheckQuery"],
        QueryPlan::for_claim(WATER_CLAIM).fact_check_query
    );
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let router = create_router_with_state(HandlerState::from_config(&Config::default()));

    let response = router
        .oneshot(Request::builder().uri("/v1/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
