//! Outbound result types: transcription, language detection, engine status.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::Engine;

/// A completed transcription, stamped with the engine that produced it.
///
/// Constructed fresh per request. `routing_reason` is the only field ever
/// rewritten after construction: the coordinator overwrites it when the
/// result came from a fallback tier rather than the originally selected
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// Recognized text; may be empty on degraded results.
    pub transcript: String,
    /// Engine confidence in [0.0, 1.0].
    pub confidence: f64,
    /// The engine that actually returned this result.
    pub engine_used: Engine,
    /// Human-readable narrative of the routing decision path.
    pub routing_reason: String,
}

/// A language-detection result.
///
/// Unlike transcription, detection degrades rather than fails: when both
/// main engines are down, [`DetectionResult::default_fallback`] is returned
/// with `engine_used == "default"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Best-guess language code.
    pub detected_language: String,
    /// Detection confidence in [0.0, 1.0].
    pub confidence: f64,
    /// Lower-ranked candidate codes, best first.
    #[serde(default)]
    pub alternatives: Vec<String>,
    /// Engine name, or the literal `default` for the degraded guess.
    pub engine_used: String,
}

impl DetectionResult {
    /// The "better a guess than an error" result used when every detection
    /// tier has failed.
    #[must_use]
    pub fn default_fallback() -> Self {
        Self {
            detected_language: "en-US".into(),
            confidence: 0.5,
            alternatives: Vec::new(),
            engine_used: "default".into(),
        }
    }
}

/// Ephemeral per-engine liveness record from a health probe.
///
/// Recomputed on every health check, never persisted. A probe failure is
/// represented as `available = false`, not as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    /// Whether the engine answered its health probe.
    pub available: bool,
    /// Raw health payload from the engine, or an error note when unreachable.
    pub status_detail: Value,
    /// Number of language codes this engine nominally serves.
    pub supported_language_count: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
