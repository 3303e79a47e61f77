use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cache::VERACITY_STATUS_HEADER;
use crate::evidence::EvidenceError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid evidence: {0}")]
    InvalidEvidence(#[from] EvidenceError),

    #[error("scoring timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u128 },

    #[error("serialization failed: {0}")]
    SerializationFailed(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) | GatewayError::InvalidEvidence(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::SerializationFailed(_) | GatewayError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn status_label(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) => "invalid_request",
            GatewayError::InvalidEvidence(_) => "invalid_evidence",
            GatewayError::Timeout { .. } => "timeout",
            GatewayError::SerializationFailed(_) => "serialization_error",
            GatewayError::InternalError(_) => "internal_error",
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            VERACITY_STATUS_HEADER,
            HeaderValue::from_static(self.status_label()),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
