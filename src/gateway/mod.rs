//! HTTP gateway (Axum) for evidence scoring and claim planning.
//!
//! This module is primarily used by the `veracity` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{plan_handler, score_handler};
pub use payload::{AssessmentResponse, PlanRequest, ScoreRequest};
pub use state::HandlerState;

use crate::cache::{VERACITY_STATUS_HEADER, VERACITY_STATUS_HEALTHY};

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/v1/evidence/score", post(score_handler))
        .route("/v1/claims/plan", post(plan_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        VERACITY_STATUS_HEADER,
        HeaderValue::from_static(VERACITY_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}
