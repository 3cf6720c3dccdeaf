//! Inbound transcription request and boundary validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sample-rate bounds accepted at the boundary (Hz).
pub const MIN_SAMPLE_RATE: u32 = 8_000;
/// Upper sample-rate bound (Hz).
pub const MAX_SAMPLE_RATE: u32 = 48_000;

/// Audio encoding of the submitted payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    /// Uncompressed 16-bit linear PCM.
    #[default]
    Linear16,
    /// FLAC lossless compression.
    Flac,
    /// 8-bit mu-law telephony encoding.
    Mulaw,
}

/// A transcription request as received on the wire.
///
/// Validated with [`TranscribeRequest::validate`] before it reaches the
/// routing coordinator; inside the router `language` is always a non-empty,
/// well-formed `ll-CC` code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscribeRequest {
    /// Base64-encoded audio payload, opaque to the router.
    pub audio_data: String,
    /// BCP-47-style language code matching `^[a-z]{2}-[A-Z]{2}$`.
    pub language: String,
    /// Sample rate in Hz, within [8000, 48000].
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Payload encoding.
    #[serde(default)]
    pub encoding: AudioEncoding,
    /// Tie-break toward the high-accuracy engine for unknown languages.
    #[serde(default)]
    pub prefer_accuracy: bool,
}

const fn default_sample_rate() -> u32 {
    16_000
}

/// Rejection reason for a malformed request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty audio payload.
    #[error("audio_data must not be empty")]
    EmptyAudio,
    /// Language code does not match `^[a-z]{2}-[A-Z]{2}$`.
    #[error("language '{0}' does not match the ll-CC pattern (e.g. en-US)")]
    BadLanguageCode(String),
    /// Sample rate outside [8000, 48000].
    #[error("sample_rate {0} outside supported range [{MIN_SAMPLE_RATE}, {MAX_SAMPLE_RATE}]")]
    SampleRateOutOfRange(u32),
}

impl TranscribeRequest {
    /// Validate the wire-level invariants before routing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.audio_data.is_empty() {
            return Err(ValidationError::EmptyAudio);
        }
        if !is_valid_language_code(&self.language) {
            return Err(ValidationError::BadLanguageCode(self.language.clone()));
        }
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            return Err(ValidationError::SampleRateOutOfRange(self.sample_rate));
        }
        Ok(())
    }
}

/// Check a code against the fixed `^[a-z]{2}-[A-Z]{2}$` shape.
#[must_use]
pub fn is_valid_language_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_lowercase()
        && bytes[1].is_ascii_lowercase()
        && bytes[2] == b'-'
        && bytes[3].is_ascii_uppercase()
        && bytes[4].is_ascii_uppercase()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
