//! `POST /transcribe`, the synchronous routing path.

use axum::Json;
use axum::extract::State;
use tracing::instrument;

use asr_core::{TranscribeRequest, TranscriptionResult};

use crate::errors::ApiError;
use crate::state::AppState;

/// Validate the request at the boundary, then hand it to the fallback chain.
///
/// Callers see exactly two failure shapes: 400 for a malformed request, 503
/// when every engine tier is gone. Engine-specific detail stays in logs and
/// metrics.
#[instrument(skip_all, fields(language = %request.language))]
pub async fn transcribe(
    State(state): State<AppState>,
    Json(request): Json<TranscribeRequest>,
) -> Result<Json<TranscriptionResult>, ApiError> {
    request.validate()?;
    let result = state.coordinator.transcribe(&request).await?;
    Ok(Json(result))
}
