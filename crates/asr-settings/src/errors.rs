//! Settings error types.

use thiserror::Error;

/// Convenience alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Failure while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An environment variable held a value the field cannot parse.
    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        /// Environment variable name.
        var: &'static str,
        /// Offending raw value.
        value: String,
        /// What the parser expected.
        reason: String,
    },
}
