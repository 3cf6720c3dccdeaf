//! The routing coordinator: selection, the bounded fallback chain, and
//! per-transition metrics.

use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, histogram};
use tracing::{error, info, instrument, warn};

use asr_core::{Engine, TranscribeRequest, TranscriptionResult, select_engine};
use asr_engines::{EngineTranscription, TranscribeBackend};

use crate::errors::{Result, RouterError};
use crate::metrics::{
    ENGINE_SELECTIONS_TOTAL, FALLBACK_EVENTS_TOTAL, TRANSCRIPTIONS_TOTAL,
    TRANSCRIPTION_DURATION_SECONDS,
};

/// Orchestrates selection, the primary call, fallback call(s), and response
/// stamping.
///
/// The chain is bounded at exactly three attempts per request: the selected
/// engine, its fixed partner (granary ↔ whisper), then riva. Each tier is
/// tried once; retries belong to the upstream caller, not the router.
pub struct RoutingCoordinator {
    granary: Arc<dyn TranscribeBackend>,
    whisper: Arc<dyn TranscribeBackend>,
    riva: Arc<dyn TranscribeBackend>,
    fallback_enabled: bool,
}

impl RoutingCoordinator {
    /// Create a coordinator over the three backend handles.
    #[must_use]
    pub fn new(
        granary: Arc<dyn TranscribeBackend>,
        whisper: Arc<dyn TranscribeBackend>,
        riva: Arc<dyn TranscribeBackend>,
        fallback_enabled: bool,
    ) -> Self {
        Self {
            granary,
            whisper,
            riva,
            fallback_enabled,
        }
    }

    /// Whether the fallback chain is active.
    #[must_use]
    pub const fn fallback_enabled(&self) -> bool {
        self.fallback_enabled
    }

    pub(crate) fn backend(&self, engine: Engine) -> &Arc<dyn TranscribeBackend> {
        match engine {
            Engine::Granary => &self.granary,
            Engine::Whisper => &self.whisper,
            Engine::Riva => &self.riva,
        }
    }

    /// Route one transcription request through the fallback chain.
    #[instrument(skip_all, fields(language = %request.language, prefer_accuracy = request.prefer_accuracy))]
    pub async fn transcribe(&self, request: &TranscribeRequest) -> Result<TranscriptionResult> {
        let selection = select_engine(&request.language, request.prefer_accuracy);
        counter!(
            ENGINE_SELECTIONS_TOTAL,
            "engine" => selection.engine.as_str(),
            "reason" => selection.category.as_str(),
        )
        .increment(1);

        let primary = selection.engine;

        // Tier 1: the selected engine.
        match self.timed_attempt(primary, request, true).await {
            Ok(t) => {
                counter!(
                    TRANSCRIPTIONS_TOTAL,
                    "language" => request.language.clone(),
                    "engine" => primary.as_str(),
                    "status" => "success",
                )
                .increment(1);
                return Ok(stamp(t, primary, selection.reason));
            }
            Err(()) if !self.fallback_enabled => {
                counter!(
                    TRANSCRIPTIONS_TOTAL,
                    "language" => request.language.clone(),
                    "engine" => primary.as_str(),
                    "status" => "error",
                )
                .increment(1);
                return Err(RouterError::FallbackDisabled);
            }
            Err(()) => {}
        }

        // Tier 2: the fixed partner swap, never a re-selection.
        let fallback = primary.fallback_partner();
        counter!(
            FALLBACK_EVENTS_TOTAL,
            "from" => primary.as_str(),
            "to" => fallback.as_str(),
            "reason" => "primary_failed",
        )
        .increment(1);

        match self.timed_attempt(fallback, request, true).await {
            Ok(t) => {
                counter!(
                    TRANSCRIPTIONS_TOTAL,
                    "language" => request.language.clone(),
                    "engine" => fallback.as_str(),
                    "status" => "success_fallback",
                )
                .increment(1);
                let reason = format!(
                    "Fallback to {fallback} — {primary} failed: {}",
                    selection.reason
                );
                return Ok(stamp(t, fallback, reason));
            }
            Err(()) => {}
        }

        // Tier 3: the legacy engine, independent of language tier.
        counter!(
            FALLBACK_EVENTS_TOTAL,
            "from" => fallback.as_str(),
            "to" => Engine::Riva.as_str(),
            "reason" => "fallback_failed",
        )
        .increment(1);

        match self.timed_attempt(Engine::Riva, request, false).await {
            Ok(t) => {
                counter!(
                    TRANSCRIPTIONS_TOTAL,
                    "language" => request.language.clone(),
                    "engine" => Engine::Riva.as_str(),
                    "status" => "success_last_resort",
                )
                .increment(1);
                info!("last-resort engine absorbed the request");
                let reason =
                    "Last resort fallback — both granary and whisper failed".to_string();
                Ok(stamp(t, Engine::Riva, reason))
            }
            Err(()) => {
                counter!(
                    TRANSCRIPTIONS_TOTAL,
                    "language" => request.language.clone(),
                    "engine" => "all",
                    "status" => "total_failure",
                )
                .increment(1);
                error!("all three engine tiers failed");
                Err(RouterError::AllEnginesUnavailable)
            }
        }
    }

    /// One engine attempt with latency recording on success.
    ///
    /// Failure detail stays here (structured log); callers only see that the
    /// tier is gone.
    async fn timed_attempt(
        &self,
        engine: Engine,
        request: &TranscribeRequest,
        record_latency: bool,
    ) -> std::result::Result<EngineTranscription, ()> {
        let start = Instant::now();
        match self.backend(engine).transcribe(request).await {
            Ok(t) => {
                if record_latency {
                    histogram!(
                        TRANSCRIPTION_DURATION_SECONDS,
                        "language" => request.language.clone(),
                        "engine" => engine.as_str(),
                    )
                    .record(start.elapsed().as_secs_f64());
                }
                Ok(t)
            }
            Err(e) => {
                warn!(
                    engine = %engine,
                    language = %request.language,
                    timeout = e.is_timeout(),
                    error = %e,
                    "engine tier failed"
                );
                Err(())
            }
        }
    }
}

/// Fill in the coordinator-owned fields of an engine payload.
fn stamp(payload: EngineTranscription, engine: Engine, reason: String) -> TranscriptionResult {
    TranscriptionResult {
        transcript: payload.transcript,
        confidence: payload.confidence,
        engine_used: engine,
        routing_reason: reason,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
