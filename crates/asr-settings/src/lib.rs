//! # asr-settings
//!
//! Configuration for the ASR router, loaded once from `ASR_*` environment
//! variables at process startup:
//!
//! 1. **Compiled defaults**: [`AsrSettings::default()`]
//! 2. **Environment variables**: `ASR_*` overrides
//!
//! Configuration is fixed for the process lifetime (no hot-reload), so the
//! global is a `OnceLock` rather than a swappable cell: the first
//! [`get_settings`] call loads and caches, every later call returns the same
//! snapshot.
//!
//! # Usage
//!
//! ```no_run
//! let settings = asr_settings::get_settings();
//! println!("granary at {}", settings.engines.granary_url);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{load_settings, load_settings_with};
pub use types::{AsrSettings, EngineEndpoints};

use std::sync::{Arc, OnceLock};

/// Global settings singleton, set exactly once.
static SETTINGS: OnceLock<Arc<AsrSettings>> = OnceLock::new();

/// Get the global settings instance.
///
/// On first call, loads from the process environment; a malformed variable
/// logs a warning and falls back to compiled defaults rather than aborting.
/// Returns an `Arc` so callers hold a consistent snapshot.
pub fn get_settings() -> Arc<AsrSettings> {
    Arc::clone(SETTINGS.get_or_init(|| {
        Arc::new(match load_settings() {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load settings from env, using defaults");
                AsrSettings::default()
            }
        })
    }))
}

/// Seed the global settings with a specific value.
///
/// Only effective before the first [`get_settings`] call; later calls are
/// ignored because the process-lifetime snapshot is already fixed. Useful for
/// server startup with a pre-validated value.
pub fn init_settings(settings: AsrSettings) {
    let _ = SETTINGS.set(Arc::new(settings));
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _settings = AsrSettings::default();
        let _endpoints = EngineEndpoints::default();
    }

    #[test]
    fn get_settings_is_stable_across_calls() {
        init_settings(AsrSettings::default());
        let first = get_settings();
        let second = get_settings();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
