//! `GET /supported-languages`, the static tier tables.

use axum::Json;
use serde::Serialize;

use asr_core::languages::{EU_LANGUAGES, GLOBAL_LANGUAGES, combined_unique_count};

/// Static listing of both language tiers.
#[derive(Debug, Serialize)]
pub struct SupportedLanguages {
    /// EU-tier codes served by granary.
    pub eu_languages: &'static [&'static str],
    /// Global-tier codes served by whisper.
    pub global_languages: &'static [&'static str],
    /// EU tier size.
    pub eu_count: usize,
    /// Global tier size.
    pub global_count: usize,
    /// Distinct codes across both tiers.
    pub total_unique: usize,
}

/// The tables never change at runtime; this is a constant response.
pub async fn supported_languages() -> Json<SupportedLanguages> {
    Json(SupportedLanguages {
        eu_languages: EU_LANGUAGES,
        global_languages: GLOBAL_LANGUAGES,
        eu_count: EU_LANGUAGES.len(),
        global_count: GLOBAL_LANGUAGES.len(),
        total_unique: combined_unique_count(),
    })
}
