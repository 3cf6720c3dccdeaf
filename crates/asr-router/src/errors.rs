//! Router-level error taxonomy.
//!
//! Engine-specific failure detail is deliberately absent here: tier failures
//! are absorbed by the coordinator and narrated through logs and metrics,
//! never through the client-facing error. These variants are the only errors
//! a `/transcribe` caller can observe.

use thiserror::Error;

/// Convenience alias for coordinator operations.
pub type Result<T> = std::result::Result<T, RouterError>;

/// Terminal routing failure, surfaced as HTTP 503.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// Every tier of the fallback chain failed.
    #[error("All transcription engines are currently unavailable")]
    AllEnginesUnavailable,
    /// The selected engine failed and the fallback chain is disabled.
    #[error("Transcription engine unavailable and fallback is disabled")]
    FallbackDisabled,
}
