//! # asr-router
//!
//! The routing core: a deterministic three-tier fallback chain over the
//! backing speech engines.
//!
//! - [`coordinator::RoutingCoordinator`]: selection, primary call, the fixed
//!   binary fallback swap, last-resort riva call, and metrics at every
//!   transition
//! - [`detection`]: the two-tier language-detection chain that degrades to a
//!   default guess instead of erroring
//! - [`health`]: independent health probes and the granary-or-whisper
//!   aggregation rule
//! - [`errors::RouterError`]: the only failures a caller can observe
//! - [`metrics`]: metric name constants
//!
//! ## Crate Position
//!
//! Depends on `asr-core` and `asr-engines`. Depended on by `asr-server`.

#![deny(unsafe_code)]

pub mod coordinator;
pub mod detection;
pub mod errors;
pub mod health;
pub mod metrics;

#[cfg(test)]
pub(crate) mod testing;

pub use coordinator::RoutingCoordinator;
pub use errors::{Result, RouterError};
pub use health::{EngineHealth, HealthReport, supported_language_count};
