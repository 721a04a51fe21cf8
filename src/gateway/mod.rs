//! Transaction client for the payment gateway.
//!
//! This module provides:
//! - The transaction client itself ([`GatewayClient`])
//! - Request and status types ([`TransactionRequest`], [`TransactionStatus`])
//! - Response-shape classification ([`Reply`], [`classify`])
//! - Polling policy for asynchronous acceptance ([`PollPolicy`])
//! - The gateway error taxonomy ([`GatewayError`])

mod client;
mod error;
mod poll;
mod response;
mod types;

#[cfg(test)]
mod poll_tests;

pub use client::GatewayClient;
pub use error::GatewayError;
pub use poll::PollPolicy;
pub use response::{Reply, classify};
pub use types::{InvalidRequest, TransactionRequest, TransactionStatus};
