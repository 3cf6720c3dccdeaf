//! # asr-engines
//!
//! The HTTP boundary to the backing speech engines. Each engine is a black
//! box with an identical contract: `POST /transcribe`, `POST /detect-language`
//! (JSON in, JSON out, bounded timeout), and `GET /health` (short probe
//! timeout).
//!
//! - [`backend::TranscribeBackend`]: the trait seam the coordinator routes
//!   through, so tests can substitute scripted backends
//! - [`client::HttpEngineClient`]: the reqwest implementation
//! - [`backend::EngineError`]: the uniform "this tier is unavailable" shape
//!
//! ## Crate Position
//!
//! Depends on `asr-core` for request/engine types. Depended on by
//! `asr-router` and `asr-server`.

#![deny(unsafe_code)]

pub mod backend;
pub mod client;

pub use backend::{
    EngineDetection, EngineError, EngineResult, EngineTranscription, TranscribeBackend,
};
pub use client::HttpEngineClient;
