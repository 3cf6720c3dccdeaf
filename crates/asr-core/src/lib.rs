//! # asr-core
//!
//! Foundation types and pure routing logic for the ASR router:
//!
//! - **Engines**: [`engine::Engine`]: the three backing speech engines and
//!   the fixed fallback partner swap
//! - **Language tiers**: [`languages`]: the EU/global partition tables and
//!   the code → tier lookup built (and overlap-checked) at first use
//! - **Selector**: [`selector::select_engine`]: deterministic mapping from
//!   `(language, prefer_accuracy)` to an engine and a routing reason
//! - **Wire types**: [`request::TranscribeRequest`],
//!   [`result::TranscriptionResult`], [`result::DetectionResult`],
//!   [`result::EngineStatus`]
//!
//! ## Crate Position
//!
//! Foundation crate, no I/O and no async. Depended on by all other asr crates.

#![deny(unsafe_code)]

pub mod engine;
pub mod languages;
pub mod request;
pub mod result;
pub mod selector;

pub use engine::Engine;
pub use languages::LanguageTier;
pub use request::{AudioEncoding, TranscribeRequest, ValidationError};
pub use result::{DetectionResult, EngineStatus, TranscriptionResult};
pub use selector::{Selection, SelectionCategory, select_engine};
