//! Shared application state.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use asr_core::Engine;
use asr_engines::{EngineError, HttpEngineClient, TranscribeBackend};
use asr_router::RoutingCoordinator;
use asr_settings::AsrSettings;

/// State handed to every handler: the routing coordinator plus the metrics
/// handle for the `/metrics` endpoint.
#[derive(Clone)]
pub struct AppState {
    /// The routing core.
    pub coordinator: Arc<RoutingCoordinator>,
    /// Renders the Prometheus exposition text.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Build state from settings: one HTTP client per engine, wired into the
    /// coordinator with the configured fallback flag.
    pub fn from_settings(
        settings: &AsrSettings,
        metrics: PrometheusHandle,
    ) -> Result<Self, EngineError> {
        let request_timeout = settings.request_timeout();
        let health_timeout = settings.health_timeout();
        let client = |engine: Engine, url: &str| -> Result<Arc<dyn TranscribeBackend>, EngineError> {
            Ok(Arc::new(HttpEngineClient::new(
                engine,
                url,
                request_timeout,
                health_timeout,
            )?))
        };

        let coordinator = RoutingCoordinator::new(
            client(Engine::Granary, &settings.engines.granary_url)?,
            client(Engine::Whisper, &settings.engines.whisper_url)?,
            client(Engine::Riva, &settings.engines.riva_url)?,
            settings.fallback_enabled,
        );

        Ok(Self {
            coordinator: Arc::new(coordinator),
            metrics,
        })
    }
}
