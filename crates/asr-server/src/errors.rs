//! HTTP error envelope mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use asr_core::ValidationError;
use asr_router::RouterError;

/// A request that could not be served.
///
/// Routing failures map to 503 with a uniform body; engine-specific detail
/// never leaves the process. Validation failures are the caller's to fix and
/// map to 400 with the specific rejection reason.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed boundary validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The fallback chain terminated without a result.
    #[error(transparent)]
    Routing(#[from] RouterError),
}

impl ApiError {
    /// HTTP status for this error class.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Routing(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
