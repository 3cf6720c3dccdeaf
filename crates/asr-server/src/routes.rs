//! Route table and middleware stack.

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::websocket;

/// Maximum request body size (50 MB): base64 audio payloads are large.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Build the full HTTP surface over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/transcribe", post(handlers::transcribe::transcribe))
        .route("/detect-language", post(handlers::detect::detect_language))
        .route(
            "/supported-languages",
            get(handlers::languages::supported_languages),
        )
        .route("/engine-status", get(handlers::status::engine_status))
        .route("/health", get(handlers::status::health))
        .route("/metrics", get(metrics_handler))
        .route("/transcribe-stream", get(websocket::transcribe_stream))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Prometheus text exposition.
async fn metrics_handler(State(state): State<AppState>) -> String {
    crate::metrics::render(&state.metrics)
}
