//! Reqwest-backed [`TranscribeBackend`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, error, instrument};

use asr_core::{Engine, TranscribeRequest};

use crate::backend::{
    EngineDetection, EngineError, EngineResult, EngineTranscription, TranscribeBackend,
};

/// HTTP client for one backing engine.
///
/// The transcription timeout is baked into the underlying `reqwest::Client`;
/// health probes override it per-request with the shorter probe timeout.
pub struct HttpEngineClient {
    engine: Engine,
    base_url: String,
    client: reqwest::Client,
    health_timeout: Duration,
}

impl HttpEngineClient {
    /// Create a client for `engine` at `base_url`.
    pub fn new(
        engine: Engine,
        base_url: impl Into<String>,
        request_timeout: Duration,
        health_timeout: Duration,
    ) -> EngineResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self::with_client(engine, base_url, client, health_timeout))
    }

    /// Create a client around a pre-built `reqwest::Client`.
    #[must_use]
    pub fn with_client(
        engine: Engine,
        base_url: impl Into<String>,
        client: reqwest::Client,
        health_timeout: Duration,
    ) -> Self {
        Self {
            engine,
            base_url: base_url.into(),
            client,
            health_timeout,
        }
    }

    /// POST a JSON body and deserialize a JSON success response.
    ///
    /// Non-2xx responses have their body drained into the error so operators
    /// can see what the engine said; callers never forward it to clients.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> EngineResult<T>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            error!(
                engine = %self.engine,
                status = status.as_u16(),
                body = %body_text,
                "engine call failed"
            );
            return Err(EngineError::Status {
                status: status.as_u16(),
                body: body_text,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TranscribeBackend for HttpEngineClient {
    fn engine(&self) -> Engine {
        self.engine
    }

    #[instrument(skip_all, fields(engine = %self.engine, language = %request.language))]
    async fn transcribe(&self, request: &TranscribeRequest) -> EngineResult<EngineTranscription> {
        debug!(sample_rate = request.sample_rate, "sending transcribe request");
        self.post_json("/transcribe", request).await
    }

    #[instrument(skip_all, fields(engine = %self.engine))]
    async fn detect_language(
        &self,
        audio_data: &str,
        sample_rate: u32,
    ) -> EngineResult<EngineDetection> {
        self.post_json(
            "/detect-language",
            &json!({
                "audio_data": audio_data,
                "sample_rate": sample_rate,
            }),
        )
        .await
    }

    #[instrument(skip_all, fields(engine = %self.engine))]
    async fn health(&self) -> EngineResult<Value> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json().await?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use asr_core::AudioEncoding;
    use wiremock::matchers::{body_json_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> TranscribeRequest {
        TranscribeRequest {
            audio_data: "UklGRg==".into(),
            language: "de-DE".into(),
            sample_rate: 16_000,
            encoding: AudioEncoding::Linear16,
            prefer_accuracy: false,
        }
    }

    async fn client_for(server: &MockServer) -> HttpEngineClient {
        HttpEngineClient::new(
            Engine::Granary,
            server.uri(),
            Duration::from_secs(2),
            Duration::from_millis(500),
        )
        .unwrap()
    }

    // ── transcribe ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn transcribe_parses_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/transcribe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "transcript": "guten Tag",
                "confidence": 0.93,
            })))
            .mount(&server)
            .await;

        let result = client_for(&server).await.transcribe(&request()).await.unwrap();
        assert_eq!(result.transcript, "guten Tag");
        assert!((result.confidence - 0.93).abs() < 1e-9);
    }

    #[tokio::test]
    async fn transcribe_posts_the_request_as_json() {
        let server = MockServer::start().await;
        let expected = serde_json::to_string(&request()).unwrap();
        Mock::given(method("POST"))
            .and(path("/transcribe"))
            .and(body_json_string(&expected))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"transcript": "", "confidence": 0.0})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let _ = client_for(&server).await.transcribe(&request()).await.unwrap();
    }

    #[tokio::test]
    async fn transcribe_non_200_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/transcribe"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.transcribe(&request()).await.unwrap_err();
        match err {
            EngineError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "model crashed");
            }
            EngineError::Transport(_) => panic!("expected status error"),
        }
    }

    #[tokio::test]
    async fn transcribe_timeout_is_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/transcribe"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"transcript": "", "confidence": 0.0}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = HttpEngineClient::new(
            Engine::Whisper,
            server.uri(),
            Duration::from_millis(100),
            Duration::from_millis(100),
        )
        .unwrap();
        let err = client.transcribe(&request()).await.unwrap_err();
        assert!(err.is_timeout(), "expected timeout, got {err}");
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Port 1 is never listening
        let client = HttpEngineClient::new(
            Engine::Riva,
            "http://127.0.0.1:1",
            Duration::from_millis(500),
            Duration::from_millis(500),
        )
        .unwrap();
        let err = client.transcribe(&request()).await.unwrap_err();
        assert!(matches!(err, EngineError::Transport(_)));
    }

    // ── detect-language ─────────────────────────────────────────────────

    #[tokio::test]
    async fn detect_language_parses_alternatives() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect-language"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "detected_language": "de-DE",
                "confidence": 0.88,
                "alternatives": ["nl-NL", "da-DK"],
            })))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .await
            .detect_language("UklGRg==", 16_000)
            .await
            .unwrap();
        assert_eq!(result.detected_language, "de-DE");
        assert_eq!(result.alternatives, vec!["nl-NL", "da-DK"]);
    }

    // ── health ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn health_returns_raw_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "ok", "gpu": true})),
            )
            .mount(&server)
            .await;

        let payload = client_for(&server).await.health().await.unwrap();
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["gpu"], true);
    }

    #[tokio::test]
    async fn health_uses_the_short_probe_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "ok"}))
                    .set_delay(Duration::from_secs(1)),
            )
            .mount(&server)
            .await;

        // Request timeout is generous; the 100ms probe timeout must win.
        let client = HttpEngineClient::new(
            Engine::Granary,
            server.uri(),
            Duration::from_secs(10),
            Duration::from_millis(100),
        )
        .unwrap();
        let err = client.health().await.unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn health_non_200_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).await.health().await.unwrap_err();
        assert!(matches!(err, EngineError::Status { status: 503, .. }));
    }
}
