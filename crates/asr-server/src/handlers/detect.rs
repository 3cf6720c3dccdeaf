//! `POST /detect-language`, degrades to a guess, never errors.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;

use asr_core::DetectionResult;

use crate::state::AppState;

/// Detection request body.
#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    /// Base64-encoded audio sample.
    pub audio_data: String,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

const fn default_sample_rate() -> u32 {
    16_000
}

/// Run the two-tier detection chain. Always 200: on total engine failure the
/// body carries the default-English guess with `engine_used == "default"`.
#[instrument(skip_all, fields(sample_rate = request.sample_rate))]
pub async fn detect_language(
    State(state): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> Json<DetectionResult> {
    Json(
        state
            .coordinator
            .detect_language(&request.audio_data, request.sample_rate)
            .await,
    )
}
