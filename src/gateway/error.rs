//! Error taxonomy for gateway operations.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for transaction client operations.
///
/// Every operation surfaces failures through this taxonomy; nothing is
/// silently swallowed into a status value. The binary maps these onto
/// user-safe messages, so internal detail stays in the logs.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network, DNS or timeout failure reaching the gateway.
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    /// The gateway answered with a non-2xx status.
    ///
    /// The message is extracted from a JSON error body when one is
    /// present, otherwise a generic fallback.
    #[error("gateway returned {status}: {message}")]
    Http {
        /// HTTP status code of the reply
        status: http::StatusCode,
        /// Human-readable message from the error body, or a fallback
        message: String,
    },

    /// A 2xx reply was missing required fields or had an unexpected shape.
    #[error("invalid gateway response: {0}")]
    InvalidResponse(String),

    /// The gateway explicitly reported the transaction as failed.
    #[error("transaction {id} failed")]
    TransactionFailed {
        /// Gateway transaction identifier
        id: String,
    },

    /// Polling attempts were exhausted while the transaction stayed pending.
    #[error("transaction still pending after {attempts} status checks")]
    PollingTimeout {
        /// Number of status checks performed
        attempts: u32,
    },
}
