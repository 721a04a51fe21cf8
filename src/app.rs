//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and the user-safe
//! error messages that support the main entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing variables, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - transport failure, gateway error, etc.
    ///
    /// Note: This is a function rather than a constant because
    /// `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// User-safe failure messages.
///
/// Shown to end users instead of gateway internals; the detailed error
/// stays in the logs for operators.
pub mod user_message {
    /// Creation failed.
    pub const CREATE: &str = "Failed to create transaction.";
    /// Status query failed.
    pub const STATUS: &str = "Failed to fetch transaction status.";
    /// Verification failed.
    pub const VERIFY: &str = "Failed to verify payment.";
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
