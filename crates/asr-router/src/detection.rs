//! Language detection: a two-tier chain that degrades instead of failing.
//!
//! Detection mirrors only the first two transcription tiers (granary, then
//! whisper, no riva). On total failure it returns the default-English guess
//! rather than an error: for this lower-stakes operation a guess beats a 503.

use metrics::counter;
use tracing::{instrument, warn};

use asr_core::{DetectionResult, Engine};

use crate::coordinator::RoutingCoordinator;
use crate::metrics::DETECTIONS_TOTAL;

impl RoutingCoordinator {
    /// Detect the language of an audio sample.
    ///
    /// Infallible by design; the worst outcome is
    /// [`DetectionResult::default_fallback`].
    #[instrument(skip(self, audio_data))]
    pub async fn detect_language(&self, audio_data: &str, sample_rate: u32) -> DetectionResult {
        for engine in [Engine::Granary, Engine::Whisper] {
            match self
                .backend(engine)
                .detect_language(audio_data, sample_rate)
                .await
            {
                Ok(detection) => {
                    counter!(
                        DETECTIONS_TOTAL,
                        "engine" => engine.as_str(),
                        "status" => "success",
                    )
                    .increment(1);
                    return DetectionResult {
                        detected_language: detection.detected_language,
                        confidence: detection.confidence,
                        alternatives: detection.alternatives,
                        engine_used: engine.as_str().to_string(),
                    };
                }
                Err(e) => {
                    warn!(engine = %engine, error = %e, "detection tier failed");
                }
            }
        }

        counter!(
            DETECTIONS_TOTAL,
            "engine" => "default",
            "status" => "degraded",
        )
        .increment(1);
        DetectionResult::default_fallback()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
