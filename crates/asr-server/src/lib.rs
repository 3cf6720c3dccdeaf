//! # asr-server
//!
//! The HTTP + WebSocket surface of the ASR router.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `routes` | route table and middleware stack |
//! | `handlers` | per-endpoint request handlers |
//! | `websocket` | `/transcribe-stream` configuration handshake |
//! | `state` | shared `AppState` (coordinator + metrics handle) |
//! | `errors` | `ApiError` → HTTP status/envelope mapping |
//! | `metrics` | Prometheus recorder install and rendering |

#![deny(unsafe_code)]

pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod routes;
pub mod state;
pub mod websocket;

pub use routes::build_router;
pub use state::AppState;
