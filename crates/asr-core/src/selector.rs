//! Pure engine selection: `(language, prefer_accuracy)` → engine + reason.

use crate::engine::Engine;
use crate::languages::{LanguageTier, language_tier};

/// Why a selection landed where it did, used as a metrics label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionCategory {
    /// Language is in the EU tier table.
    EuLanguage,
    /// Language is in the global tier table.
    GlobalLanguage,
    /// Unknown language, caller asked for accuracy.
    AccuracyPreferred,
    /// Unknown language, default speed preference.
    SpeedPreferred,
}

impl SelectionCategory {
    /// Stable snake_case label value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EuLanguage => "eu_language",
            Self::GlobalLanguage => "global_language",
            Self::AccuracyPreferred => "accuracy_preferred",
            Self::SpeedPreferred => "speed_preferred",
        }
    }
}

/// The selector's decision for one request.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Engine to try first.
    pub engine: Engine,
    /// Human-readable selection narrative, surfaced as `routing_reason`.
    pub reason: String,
    /// Coarse decision class for the selection counter.
    pub category: SelectionCategory,
}

/// Map a language code and accuracy preference to the primary engine.
///
/// Ordered, first match wins: EU tier → granary, global tier → whisper,
/// unknown + `prefer_accuracy` → granary, otherwise whisper. Pure (no I/O,
/// no hidden state) and shared verbatim by the synchronous and streaming
/// request paths.
#[must_use]
pub fn select_engine(language: &str, prefer_accuracy: bool) -> Selection {
    match language_tier(language) {
        Some(LanguageTier::Eu) => Selection {
            engine: Engine::Granary,
            reason: format!("EU language {language} — using granary for premium accuracy"),
            category: SelectionCategory::EuLanguage,
        },
        Some(LanguageTier::Global) => Selection {
            engine: Engine::Whisper,
            reason: format!("Global language {language} — using whisper for broad coverage"),
            category: SelectionCategory::GlobalLanguage,
        },
        None if prefer_accuracy => Selection {
            engine: Engine::Granary,
            reason: format!("Unknown language {language} — trying granary for accuracy"),
            category: SelectionCategory::AccuracyPreferred,
        },
        None => Selection {
            engine: Engine::Whisper,
            reason: format!("Unknown language {language} — using whisper for speed"),
            category: SelectionCategory::SpeedPreferred,
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
