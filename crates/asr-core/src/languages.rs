//! Static language tier tables and the code → tier lookup.
//!
//! The two tables partition the supported language codes: EU-tier codes route
//! to granary, global-tier codes to whisper. A code in neither table is
//! "unknown" and falls to the selector's tie-break policy.
//!
//! The tables are folded into a single lookup map the first time any tier
//! query runs; a code appearing in both tables is a build defect and panics
//! during that fold rather than silently shadowing one tier with the other.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Which main engine tier a known language code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageTier {
    /// EU tier, routed to granary for premium accuracy.
    Eu,
    /// Global tier, routed to whisper for broad coverage.
    Global,
}

/// EU-tier language codes (25 entries) served by the primary engine.
pub const EU_LANGUAGES: &[&str] = &[
    "bg-BG", "cs-CZ", "da-DK", "de-DE", "el-GR", "en-GB", "es-ES", "et-EE",
    "fi-FI", "fr-FR", "ga-IE", "hr-HR", "hu-HU", "it-IT", "lt-LT", "lv-LV",
    "mt-MT", "nb-NO", "nl-NL", "pl-PL", "pt-PT", "ro-RO", "sk-SK", "sl-SI",
    "sv-SE",
];

/// Global-tier language codes (40 entries) served by the secondary engine.
pub const GLOBAL_LANGUAGES: &[&str] = &[
    "am-ET", "ar-AE", "ar-EG", "ar-SA", "az-AZ", "bn-BD", "en-AU", "en-CA",
    "en-IN", "en-US", "es-AR", "es-CO", "es-MX", "fa-IR", "fr-CA", "gu-IN",
    "he-IL", "hi-IN", "id-ID", "ja-JP", "ka-GE", "kk-KZ", "kn-IN", "ko-KR",
    "ml-IN", "mr-IN", "ms-MY", "my-MM", "ne-NP", "pt-BR", "ru-RU", "si-LK",
    "sw-KE", "ta-IN", "te-IN", "th-TH", "tr-TR", "uk-UA", "vi-VN", "zh-CN",
];

/// Code → tier map, built once and shared for the process lifetime.
static TIER_MAP: OnceLock<HashMap<&'static str, LanguageTier>> = OnceLock::new();

fn tier_map() -> &'static HashMap<&'static str, LanguageTier> {
    TIER_MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(EU_LANGUAGES.len() + GLOBAL_LANGUAGES.len());
        for &code in EU_LANGUAGES {
            assert!(
                map.insert(code, LanguageTier::Eu).is_none(),
                "duplicate language code in EU table: {code}"
            );
        }
        for &code in GLOBAL_LANGUAGES {
            assert!(
                map.insert(code, LanguageTier::Global).is_none(),
                "language code {code} appears in both tier tables"
            );
        }
        map
    })
}

/// Look up which tier a language code belongs to, if any.
#[must_use]
pub fn language_tier(code: &str) -> Option<LanguageTier> {
    tier_map().get(code).copied()
}

/// Number of distinct codes across both tiers.
#[must_use]
pub fn combined_unique_count() -> usize {
    tier_map().len()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
