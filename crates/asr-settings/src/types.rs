//! Settings type definitions with production defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root settings for the ASR router process.
///
/// Read once from `ASR_*` environment variables at startup and immutable for
/// the process lifetime; there is no hot-reload path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsrSettings {
    /// Base URLs of the three backing engines.
    pub engines: EngineEndpoints,
    /// Per-call transcription/detection timeout in seconds.
    pub request_timeout_secs: u64,
    /// Per-call health-probe timeout in seconds.
    pub health_timeout_secs: u64,
    /// Whether the multi-tier fallback chain is active.
    pub fallback_enabled: bool,
    /// HTTP listen address for the router itself.
    pub bind_addr: String,
}

/// Base URLs of the backing engines, without trailing slash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineEndpoints {
    /// Primary high-accuracy engine.
    pub granary_url: String,
    /// Secondary broad-coverage engine.
    pub whisper_url: String,
    /// Legacy last-resort engine.
    pub riva_url: String,
}

impl Default for AsrSettings {
    fn default() -> Self {
        Self {
            engines: EngineEndpoints::default(),
            request_timeout_secs: 30,
            health_timeout_secs: 5,
            fallback_enabled: true,
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Default for EngineEndpoints {
    fn default() -> Self {
        Self {
            granary_url: "http://granary:9000".to_string(),
            whisper_url: "http://whisper:9001".to_string(),
            riva_url: "http://riva:9002".to_string(),
        }
    }
}

impl AsrSettings {
    /// Transcription/detection call timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Health-probe timeout.
    #[must_use]
    pub const fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    /// Correct invalid values in place rather than rejecting them.
    ///
    /// A zero timeout would fail every engine call instantly; warn and fall
    /// back to the compiled default so a typo degrades to known-good
    /// behavior instead of a dead service.
    pub fn validate(&mut self) {
        if self.request_timeout_secs == 0 {
            tracing::warn!("request_timeout_secs is 0, resetting to 30");
            self.request_timeout_secs = 30;
        }
        if self.health_timeout_secs == 0 {
            tracing::warn!("health_timeout_secs is 0, resetting to 5");
            self.health_timeout_secs = 5;
        }
        for url in [
            &mut self.engines.granary_url,
            &mut self.engines.whisper_url,
            &mut self.engines.riva_url,
        ] {
            while url.ends_with('/') {
                let _ = url.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_defaults() {
        let settings = AsrSettings::default();
        assert_eq!(settings.request_timeout_secs, 30);
        assert_eq!(settings.health_timeout_secs, 5);
        assert!(settings.fallback_enabled);
    }

    #[test]
    fn validate_resets_zero_timeouts() {
        let mut settings = AsrSettings::default();
        settings.request_timeout_secs = 0;
        settings.validate();
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn validate_strips_trailing_slashes() {
        let mut settings = AsrSettings::default();
        settings.engines.granary_url = "http://granary:9000//".into();
        settings.validate();
        assert_eq!(settings.engines.granary_url, "http://granary:9000");
    }

    #[test]
    fn timeout_accessors_are_durations() {
        let settings = AsrSettings::default();
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert_eq!(settings.health_timeout(), Duration::from_secs(5));
    }
}
