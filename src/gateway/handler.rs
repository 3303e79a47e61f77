use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::cache::{CachedAssessment, VERACITY_STATUS_HEADER, VeracityStatus, ttl_for};
use crate::evidence::{dedupe_by_domain, validate_sources};
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{AssessmentResponse, CacheKey, PlanRequest, ScoreRequest};
use crate::gateway::state::HandlerState;
use crate::hashing::{fingerprint_request, hash_assessment, hash_to_u64, to_hex};
use crate::planner::{QueryPlan, classify_claim};
use crate::scoring::ScoreOptions;
use crate::text::normalize_language;

#[instrument(
    skip(state, request),
    fields(fingerprint = tracing::field::Empty, claim_id = tracing::field::Empty)
)]
pub async fn score_handler(
    State(state): State<HandlerState>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError> {
    let request: ScoreRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;
    request.validate().map_err(GatewayError::InvalidRequest)?;

    let as_of = request
        .resolve_as_of(Utc::now())
        .map_err(GatewayError::InvalidRequest)?;

    let key = fingerprint_request(&CacheKey {
        request: &request,
        as_of_day: as_of.date_naive().to_string(),
    })
    .map_err(|e| GatewayError::SerializationFailed(e.to_string()))?;
    let fingerprint = to_hex(&key);
    let span = tracing::Span::current();
    span.record("fingerprint", tracing::field::display(&fingerprint));
    span.record("claim_id", hash_to_u64(request.claim.trim().as_bytes()));

    if let Some(cached) = state.cache.get(&key) {
        info!("Assessment cache hit");
        return make_response(
            AssessmentResponse::from_cached(fingerprint, &cached),
            VeracityStatus::Hit,
        );
    }

    let fact_checkers = &state.scorer.config().fact_checkers;
    let mut sources = validate_sources(request.sources.clone(), fact_checkers)?;
    if request.dedupe {
        sources = dedupe_by_domain(sources, state.max_sources);
    }

    let language = normalize_language(request.language.as_deref());
    let claim = request.claim.trim().to_string();
    let claim_type = classify_claim(&claim);

    let mut options = ScoreOptions::at(as_of).paid(request.is_paid);
    if let Some(top_n) = request.top_n {
        options = options.with_top_n(top_n);
    }

    debug!(
        sources = sources.len(),
        %claim_type,
        language = %language,
        "Cache miss - scoring evidence"
    );

    let scorer = Arc::clone(&state.scorer);
    let lang = language.clone();
    let task = tokio::task::spawn_blocking(move || {
        scorer.score_evidence(&claim, &lang, sources, &options)
    });

    let assessment = tokio::time::timeout(state.request_timeout, task)
        .await
        .map_err(|_| GatewayError::Timeout {
            timeout_ms: state.request_timeout.as_millis(),
        })?
        .map_err(|e| GatewayError::InternalError(format!("Scoring task failed: {}", e)))?;

    debug!(
        eqs = assessment.eqs,
        sdi = assessment.sdi,
        digest = %to_hex(&hash_assessment(&assessment)),
        "Assessment scored"
    );

    let cached = state.cache.insert(
        key,
        CachedAssessment {
            assessment,
            claim_type,
            language,
            scored_at: Utc::now(),
            ttl: ttl_for(request.time_range),
        },
    );

    debug!(cache_entries = state.cache.len(), "Assessment cached");

    make_response(
        AssessmentResponse::from_cached(fingerprint, &cached),
        VeracityStatus::Miss,
    )
}

#[instrument(skip(request))]
pub async fn plan_handler(
    Json(request): Json<serde_json::Value>,
) -> Result<Json<QueryPlan>, GatewayError> {
    let request: PlanRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;

    if request.claim.trim().is_empty() {
        return Err(crate::evidence::EvidenceError::EmptyClaim.into());
    }

    Ok(Json(QueryPlan::for_claim(&request.claim)))
}

pub(crate) fn make_response(
    body: AssessmentResponse,
    status: VeracityStatus,
) -> Result<Response, GatewayError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        VERACITY_STATUS_HEADER,
        HeaderValue::from_static(status.as_header_value()),
    );
    Ok((StatusCode::OK, headers, Json(body)).into_response())
}
