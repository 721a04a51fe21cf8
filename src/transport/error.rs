//! Error types for HTTP transport operations.

use thiserror::Error;

/// Error type for HTTP transport failures.
///
/// Describes what went wrong reaching the gateway without dictating a
/// recovery strategy. Transport errors are never downgraded to a status
/// value by the transaction client; they always propagate to the caller.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the transport's timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This indicates a configuration error rather than a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
