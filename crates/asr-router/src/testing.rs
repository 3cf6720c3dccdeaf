//! Scripted backends shared by the coordinator, detection, and health tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};

use asr_core::{AudioEncoding, Engine, TranscribeRequest};
use asr_engines::{
    EngineDetection, EngineError, EngineResult, EngineTranscription, TranscribeBackend,
};

use crate::coordinator::RoutingCoordinator;

struct Inner {
    engine: Engine,
    transcription: Option<EngineTranscription>,
    detection: Option<EngineDetection>,
    health: Option<Value>,
    transcribe_calls: AtomicUsize,
    detect_calls: AtomicUsize,
    health_calls: AtomicUsize,
}

/// A backend with a fixed scripted response per operation.
///
/// Clones share call counters, so tests can hand a clone to the coordinator
/// and assert on the original.
#[derive(Clone)]
pub(crate) struct StubBackend {
    inner: Arc<Inner>,
}

impl StubBackend {
    fn build(
        engine: Engine,
        transcription: Option<EngineTranscription>,
        detection: Option<EngineDetection>,
        health: Option<Value>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                engine,
                transcription,
                detection,
                health,
                transcribe_calls: AtomicUsize::new(0),
                detect_calls: AtomicUsize::new(0),
                health_calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Every operation succeeds.
    pub(crate) fn ok(engine: Engine, transcript: &str, confidence: f64) -> Self {
        Self::build(
            engine,
            Some(EngineTranscription {
                transcript: transcript.into(),
                confidence,
            }),
            Some(EngineDetection {
                detected_language: "en-US".into(),
                confidence: 0.9,
                alternatives: Vec::new(),
            }),
            Some(json!({"status": "ok"})),
        )
    }

    /// Every operation fails with a 503-shaped engine error.
    pub(crate) fn failing(engine: Engine) -> Self {
        Self::build(engine, None, None, None)
    }

    /// Succeeds with a specific detection payload.
    pub(crate) fn detecting(engine: Engine, language: &str, confidence: f64) -> Self {
        let mut stub = Self::ok(engine, "", 0.0);
        Arc::get_mut(&mut stub.inner)
            .expect("fresh stub is unshared")
            .detection = Some(EngineDetection {
            detected_language: language.into(),
            confidence,
            alternatives: vec!["en-GB".into()],
        });
        stub
    }

    pub(crate) fn calls(&self) -> usize {
        self.inner.transcribe_calls.load(Ordering::Relaxed)
    }

    pub(crate) fn detect_calls(&self) -> usize {
        self.inner.detect_calls.load(Ordering::Relaxed)
    }

    pub(crate) fn health_calls(&self) -> usize {
        self.inner.health_calls.load(Ordering::Relaxed)
    }

    fn unavailable(&self) -> EngineError {
        EngineError::Status {
            status: 503,
            body: format!("stub {} is down", self.inner.engine),
        }
    }
}

#[async_trait]
impl TranscribeBackend for StubBackend {
    fn engine(&self) -> Engine {
        self.inner.engine
    }

    async fn transcribe(&self, _request: &TranscribeRequest) -> EngineResult<EngineTranscription> {
        let _ = self.inner.transcribe_calls.fetch_add(1, Ordering::Relaxed);
        self.inner
            .transcription
            .clone()
            .ok_or_else(|| self.unavailable())
    }

    async fn detect_language(
        &self,
        _audio_data: &str,
        _sample_rate: u32,
    ) -> EngineResult<EngineDetection> {
        let _ = self.inner.detect_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.detection.clone().ok_or_else(|| self.unavailable())
    }

    async fn health(&self) -> EngineResult<Value> {
        let _ = self.inner.health_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.health.clone().ok_or_else(|| self.unavailable())
    }
}

/// Coordinator over clones of the three stubs.
pub(crate) fn coordinator_with(
    granary: &StubBackend,
    whisper: &StubBackend,
    riva: &StubBackend,
    fallback_enabled: bool,
) -> RoutingCoordinator {
    RoutingCoordinator::new(
        Arc::new(granary.clone()),
        Arc::new(whisper.clone()),
        Arc::new(riva.clone()),
        fallback_enabled,
    )
}

/// A valid request for `language`.
pub(crate) fn request(language: &str, prefer_accuracy: bool) -> TranscribeRequest {
    TranscribeRequest {
        audio_data: "UklGRg==".into(),
        language: language.into(),
        sample_rate: 16_000,
        encoding: AudioEncoding::Linear16,
        prefer_accuracy,
    }
}
