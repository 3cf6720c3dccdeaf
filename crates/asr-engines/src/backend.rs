//! The engine contract: trait, wire types, and the uniform failure shape.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use asr_core::{Engine, TranscribeRequest};

/// Convenience alias for engine calls.
pub type EngineResult<T> = Result<T, EngineError>;

/// An engine call failure.
///
/// For routing purposes every variant means "this tier is unavailable,
/// advance the chain". The split exists only so logs can say whether the
/// engine was unreachable or answered with an error status.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Transport-level failure: timeout, connection refused, DNS, bad body.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The engine answered with a non-2xx status.
    #[error("engine returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, captured for logs only.
        body: String,
    },
}

impl EngineError {
    /// Whether this failure was a client-side timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// Transcription payload as returned by an engine.
///
/// `engine_used` and `routing_reason` are the coordinator's to stamp; engines
/// only report what they heard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineTranscription {
    /// Recognized text.
    #[serde(default)]
    pub transcript: String,
    /// Engine confidence in [0.0, 1.0].
    #[serde(default)]
    pub confidence: f64,
}

/// Language-detection payload as returned by an engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineDetection {
    /// Best-guess language code.
    pub detected_language: String,
    /// Detection confidence in [0.0, 1.0].
    #[serde(default)]
    pub confidence: f64,
    /// Lower-ranked candidates, best first.
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// One backing speech engine, reached over HTTP.
///
/// Implementations make exactly one attempt per call; retries and fallback
/// belong to the routing coordinator, never to this layer.
#[async_trait]
pub trait TranscribeBackend: Send + Sync {
    /// Which engine this backend fronts.
    fn engine(&self) -> Engine;

    /// `POST {base}/transcribe`, bounded by the request timeout.
    async fn transcribe(&self, request: &TranscribeRequest) -> EngineResult<EngineTranscription>;

    /// `POST {base}/detect-language`, same timeout and failure contract.
    async fn detect_language(
        &self,
        audio_data: &str,
        sample_rate: u32,
    ) -> EngineResult<EngineDetection>;

    /// `GET {base}/health` with the short probe timeout. Returns the raw
    /// liveness payload; the caller converts failures to `available = false`.
    async fn health(&self) -> EngineResult<Value>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
