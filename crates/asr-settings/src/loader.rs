//! Environment-variable loader for [`AsrSettings`].
//!
//! Every knob has a compiled default; only set variables override. The loader
//! takes the lookup as a closure so tests can feed a map instead of mutating
//! process-global environment state.

use crate::errors::{Result, SettingsError};
use crate::types::AsrSettings;

/// Engine base URL variables.
pub const ENV_GRANARY_URL: &str = "ASR_GRANARY_URL";
/// Secondary engine base URL.
pub const ENV_WHISPER_URL: &str = "ASR_WHISPER_URL";
/// Legacy engine base URL.
pub const ENV_RIVA_URL: &str = "ASR_RIVA_URL";
/// Transcription call timeout in seconds.
pub const ENV_REQUEST_TIMEOUT: &str = "ASR_REQUEST_TIMEOUT_SECS";
/// Health probe timeout in seconds.
pub const ENV_HEALTH_TIMEOUT: &str = "ASR_HEALTH_TIMEOUT_SECS";
/// Fallback chain toggle.
pub const ENV_FALLBACK_ENABLED: &str = "ASR_FALLBACK_ENABLED";
/// Router listen address.
pub const ENV_BIND_ADDR: &str = "ASR_BIND_ADDR";

/// Load settings from the process environment.
pub fn load_settings() -> Result<AsrSettings> {
    load_settings_with(|var| std::env::var(var).ok())
}

/// Load settings using an arbitrary variable lookup.
pub fn load_settings_with(lookup: impl Fn(&str) -> Option<String>) -> Result<AsrSettings> {
    let mut settings = AsrSettings::default();

    if let Some(url) = lookup(ENV_GRANARY_URL) {
        settings.engines.granary_url = url;
    }
    if let Some(url) = lookup(ENV_WHISPER_URL) {
        settings.engines.whisper_url = url;
    }
    if let Some(url) = lookup(ENV_RIVA_URL) {
        settings.engines.riva_url = url;
    }
    if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT) {
        settings.request_timeout_secs = parse_u64(ENV_REQUEST_TIMEOUT, &raw)?;
    }
    if let Some(raw) = lookup(ENV_HEALTH_TIMEOUT) {
        settings.health_timeout_secs = parse_u64(ENV_HEALTH_TIMEOUT, &raw)?;
    }
    if let Some(raw) = lookup(ENV_FALLBACK_ENABLED) {
        settings.fallback_enabled = parse_bool(ENV_FALLBACK_ENABLED, &raw)?;
    }
    if let Some(addr) = lookup(ENV_BIND_ADDR) {
        settings.bind_addr = addr;
    }

    settings.validate();
    Ok(settings)
}

fn parse_u64(var: &'static str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|e| SettingsError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: format!("expected an integer: {e}"),
        })
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(SettingsError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: "expected true/false".to_string(),
        }),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
