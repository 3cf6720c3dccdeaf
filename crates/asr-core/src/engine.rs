//! The three backing speech engines and the fallback partner relation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A backing speech-recognition engine.
///
/// `Granary` is the high-accuracy engine serving the EU language tier,
/// `Whisper` the broad-coverage engine serving the global tier, and `Riva`
/// the legacy engine kept as the last-resort fallback for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Primary engine, premium accuracy, EU language tier.
    Granary,
    /// Secondary engine, broad coverage, global language tier.
    Whisper,
    /// Legacy engine, last-resort fallback only.
    Riva,
}

impl Engine {
    /// Stable lowercase name used in responses, logs, and metric labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Granary => "granary",
            Self::Whisper => "whisper",
            Self::Riva => "riva",
        }
    }

    /// The fixed binary swap used when the first transcription attempt fails.
    ///
    /// The fallback target is always "the other main engine", never a
    /// re-selection; this keeps the chain bounded at three attempts. `Riva`
    /// has no partner (it is itself the tier after the swap) and maps to
    /// itself.
    #[must_use]
    pub const fn fallback_partner(self) -> Self {
        match self {
            Self::Granary => Self::Whisper,
            Self::Whisper => Self::Granary,
            Self::Riva => Self::Riva,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
