//! Configuration layer for the transaction client.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Request routing ([`Route`]) and merchant credentials ([`Credentials`])
//! - Validated configuration ([`GatewayConfig`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority
//! (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **Process environment** - `PAYGATE_*` variables (see [`env_var`])
//!
//! # Routing
//!
//! If a relay URL is configured it wins: requests go through the webhook
//! relay and credentials are not required (the relay holds them). Without
//! a relay URL the client calls the gateway API directly, which requires
//! the store id and secret key; missing either is a fails-fast
//! configuration error, never a request-time one.

mod cli;
mod error;
mod route;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use route::Route;
pub use validated::{Credentials, GatewayConfig, defaults, env_var};
