//! `GET /engine-status` and `GET /health`.
//!
//! Both are read-only probes. Engine failures never surface as HTTP errors
//! here; an unreachable engine is reported as `available = false` and the
//! endpoints always answer 200.

use axum::Json;
use axum::extract::State;
use serde_json::{Map, Value};
use tracing::instrument;

use asr_router::HealthReport;

use crate::state::AppState;

/// Per-engine liveness, keyed by engine name.
#[instrument(skip_all)]
pub async fn engine_status(State(state): State<AppState>) -> Json<Value> {
    let statuses = state.coordinator.all_engine_statuses().await;
    let mut body = Map::new();
    for (engine, status) in statuses {
        let _ = body.insert(
            engine.as_str().to_string(),
            serde_json::to_value(status).unwrap_or(Value::Null),
        );
    }
    Json(Value::Object(body))
}

/// Overall service health: healthy iff granary or whisper is up.
#[instrument(skip_all)]
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.coordinator.health_report().await)
}
