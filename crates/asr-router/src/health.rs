//! Health probing and aggregation.
//!
//! Probe failures are converted, never propagated: an unreachable engine is
//! `available = false` with the error noted in `status_detail`. Overall
//! service health counts only the two main engines; riva being up cannot
//! make a service with both main tiers down "healthy".

use serde::Serialize;
use serde_json::json;
use tracing::instrument;

use asr_core::{Engine, EngineStatus, languages};

use crate::coordinator::RoutingCoordinator;

/// Aggregated service health for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// `healthy` if at least one main engine is available, else `degraded`.
    pub status: &'static str,
    /// Whether the fallback chain is active.
    pub fallback_enabled: bool,
    /// Raw per-engine status, keyed by engine name in the serialized form.
    pub engines: Vec<EngineHealth>,
}

/// One engine's status within a [`HealthReport`].
#[derive(Debug, Clone, Serialize)]
pub struct EngineHealth {
    /// Engine name.
    pub engine: Engine,
    /// Probe outcome.
    #[serde(flatten)]
    pub status: EngineStatus,
}

/// Language codes an engine nominally serves.
///
/// Riva predates the tier split and is credited with the combined table.
#[must_use]
pub fn supported_language_count(engine: Engine) -> usize {
    match engine {
        Engine::Granary => languages::EU_LANGUAGES.len(),
        Engine::Whisper => languages::GLOBAL_LANGUAGES.len(),
        Engine::Riva => languages::combined_unique_count(),
    }
}

impl RoutingCoordinator {
    /// Probe one engine, converting failure into `available = false`.
    pub async fn engine_status(&self, engine: Engine) -> EngineStatus {
        match self.backend(engine).health().await {
            Ok(detail) => EngineStatus {
                available: true,
                status_detail: detail,
                supported_language_count: supported_language_count(engine),
            },
            Err(e) => EngineStatus {
                available: false,
                status_detail: json!({"error": e.to_string()}),
                supported_language_count: supported_language_count(engine),
            },
        }
    }

    /// Probe all three engines. Probes run concurrently; they are independent
    /// reads, not a fallback chain.
    pub async fn all_engine_statuses(&self) -> Vec<(Engine, EngineStatus)> {
        let (granary, whisper, riva) = tokio::join!(
            self.engine_status(Engine::Granary),
            self.engine_status(Engine::Whisper),
            self.engine_status(Engine::Riva),
        );
        vec![
            (Engine::Granary, granary),
            (Engine::Whisper, whisper),
            (Engine::Riva, riva),
        ]
    }

    /// Overall service health per the aggregation rule.
    #[instrument(skip_all)]
    pub async fn health_report(&self) -> HealthReport {
        let statuses = self.all_engine_statuses().await;
        let main_engine_up = statuses
            .iter()
            .any(|(engine, status)| *engine != Engine::Riva && status.available);
        HealthReport {
            status: if main_engine_up { "healthy" } else { "degraded" },
            fallback_enabled: self.fallback_enabled(),
            engines: statuses
                .into_iter()
                .map(|(engine, status)| EngineHealth { engine, status })
                .collect(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StubBackend, coordinator_with};

    #[test]
    fn language_counts_per_engine() {
        assert_eq!(supported_language_count(Engine::Granary), 25);
        assert_eq!(supported_language_count(Engine::Whisper), 40);
        assert_eq!(supported_language_count(Engine::Riva), 65);
    }

    #[tokio::test]
    async fn probe_failure_becomes_unavailable() {
        let granary = StubBackend::failing(Engine::Granary);
        let whisper = StubBackend::ok(Engine::Whisper, "", 0.0);
        let riva = StubBackend::ok(Engine::Riva, "", 0.0);
        let coordinator = coordinator_with(&granary, &whisper, &riva, true);

        let status = coordinator.engine_status(Engine::Granary).await;
        assert!(!status.available);
        assert!(status.status_detail["error"].is_string());
        assert_eq!(granary.health_calls(), 1);
    }

    #[tokio::test]
    async fn healthy_when_one_main_engine_is_up() {
        let granary = StubBackend::failing(Engine::Granary);
        let whisper = StubBackend::ok(Engine::Whisper, "", 0.0);
        let riva = StubBackend::failing(Engine::Riva);
        let coordinator = coordinator_with(&granary, &whisper, &riva, true);

        let report = coordinator.health_report().await;
        assert_eq!(report.status, "healthy");
        assert!(report.fallback_enabled);
        assert_eq!(report.engines.len(), 3);
    }

    #[tokio::test]
    async fn riva_alone_does_not_make_the_service_healthy() {
        let granary = StubBackend::failing(Engine::Granary);
        let whisper = StubBackend::failing(Engine::Whisper);
        let riva = StubBackend::ok(Engine::Riva, "", 0.0);
        let coordinator = coordinator_with(&granary, &whisper, &riva, true);

        let report = coordinator.health_report().await;
        assert_eq!(report.status, "degraded");
    }

    #[tokio::test]
    async fn report_serializes_flattened_status() {
        let granary = StubBackend::ok(Engine::Granary, "", 0.0);
        let whisper = StubBackend::ok(Engine::Whisper, "", 0.0);
        let riva = StubBackend::ok(Engine::Riva, "", 0.0);
        let coordinator = coordinator_with(&granary, &whisper, &riva, false);

        let report = coordinator.health_report().await;
        let val = serde_json::to_value(&report).unwrap();
        assert_eq!(val["status"], "healthy");
        assert_eq!(val["fallback_enabled"], false);
        assert_eq!(val["engines"][0]["engine"], "granary");
        assert_eq!(val["engines"][0]["available"], true);
        assert_eq!(val["engines"][0]["supported_language_count"], 25);
    }
}
