//! Error types for configuration loading and validation.

use thiserror::Error;

/// Error type for configuration operations.
///
/// All configuration problems surface at startup, before any request is
/// made against the gateway.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable (or CLI override) is missing.
    #[error("Missing required configuration: {name}. {hint}")]
    MissingVar {
        /// Name of the missing variable
        name: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// A configured URL failed to parse or cannot serve as a base.
    #[error("Invalid URL in {name} ('{url}'): {reason}")]
    InvalidUrl {
        /// Name of the variable holding the URL
        name: &'static str,
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid polling configuration.
    #[error("Invalid polling configuration: {0}")]
    InvalidPoll(String),
}
