//! Metric name constants shared by the routing crates.
//!
//! The Prometheus recorder itself is installed by `asr-server` at startup;
//! this module only pins the names so labels stay consistent across call
//! sites.

/// Engine selections (counter, labels: engine, reason).
pub const ENGINE_SELECTIONS_TOTAL: &str = "asr_engine_selections_total";
/// Transcription outcomes (counter, labels: language, engine, status).
pub const TRANSCRIPTIONS_TOTAL: &str = "asr_transcriptions_total";
/// Fallback chain transitions (counter, labels: from, to, reason).
pub const FALLBACK_EVENTS_TOTAL: &str = "asr_fallback_events_total";
/// Transcription latency (histogram, labels: language, engine).
pub const TRANSCRIPTION_DURATION_SECONDS: &str = "asr_transcription_duration_seconds";
/// Language-detection outcomes (counter, labels: engine, status).
pub const DETECTIONS_TOTAL: &str = "asr_language_detections_total";
/// WebSocket streaming sessions opened (counter).
pub const STREAM_SESSIONS_TOTAL: &str = "asr_stream_sessions_total";
/// WebSocket handshakes rejected before configuration (counter).
pub const STREAM_HANDSHAKE_ERRORS_TOTAL: &str = "asr_stream_handshake_errors_total";
