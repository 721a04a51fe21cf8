//! Polling policy for asynchronously accepted transactions.

use std::time::Duration;

/// Controls how long the client polls an accepted transaction for a
/// terminal status.
///
/// When the gateway answers a creation with 202 Accepted, the client
/// checks the transaction status a bounded number of times with a fixed
/// delay between checks. Unlike a backoff policy the delay never grows;
/// the gateway expects a steady cadence.
///
/// # Defaults
///
/// - `max_attempts`: 10
/// - `delay`: 2 seconds
///
/// # Example
///
/// ```
/// use paygate::gateway::PollPolicy;
/// use std::time::Duration;
///
/// let policy = PollPolicy::default();
///
/// let custom = PollPolicy::new()
///     .with_max_attempts(5)
///     .with_delay(Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    /// Maximum number of status checks (including the first).
    ///
    /// A value of 1 means a single check with no waiting.
    pub max_attempts: u32,

    /// Fixed delay between consecutive status checks.
    pub delay: Duration,
}

impl PollPolicy {
    /// Default maximum number of status checks.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

    /// Default delay between status checks (2 seconds).
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    /// Minimum value for `max_attempts`.
    pub const MIN_MAX_ATTEMPTS: u32 = 1;

    /// Creates a new polling policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Sets the maximum number of status checks.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is less than 1.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        assert!(
            max_attempts >= Self::MIN_MAX_ATTEMPTS,
            "max_attempts must be at least 1"
        );
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the delay between status checks.
    ///
    /// Zero delay is supported (useful for testing) but not recommended
    /// against a real gateway as it creates a tight polling loop.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns true when another check is allowed after `attempt` checks.
    ///
    /// # Arguments
    ///
    /// * `attempt` - The attempt number just finished (1 = first check)
    #[must_use]
    pub const fn should_continue(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new()
    }
}
