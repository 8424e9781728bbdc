//! Mapping of service errors onto HTTP responses.
//!
//! Error bodies are `{"detail": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::faucet::FaucetError;

/// An error ready to be sent to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Request body failed validation.
    pub fn validation(err: FaucetError) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<FaucetError> for ApiError {
    fn from(err: FaucetError) -> Self {
        let status = match &err {
            FaucetError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            FaucetError::NodeUnreachable => StatusCode::SERVICE_UNAVAILABLE,
            FaucetError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            FaucetError::Depleted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            FaucetError::TransactionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FaucetError::Setup(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FaucetError::Query(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        if status.is_server_error() {
            tracing::error!(status = %status, error = %err, "Faucet request failed");
        }
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
