//! HTTP endpoint handlers.
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | `transcribe` | `POST /transcribe` |
//! | `detect` | `POST /detect-language` |
//! | `languages` | `GET /supported-languages` |
//! | `status` | `GET /engine-status`, `GET /health` |

pub mod detect;
pub mod languages;
pub mod status;
pub mod transcribe;
