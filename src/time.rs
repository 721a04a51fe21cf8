//! Time abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait so the polling loop can suspend
//! between status checks with [`TokioSleeper`] in production, while tests
//! inject [`InstantSleeper`] to observe the requested delays without waiting.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

/// Abstraction over timed suspension.
///
/// The transaction client suspends between polling attempts. Implementations
/// decide whether that suspension is real wall-clock time ([`TokioSleeper`])
/// or recorded and skipped ([`InstantSleeper`]).
pub trait Sleeper: Send + Sync {
    /// Suspends the current task for the given duration.
    ///
    /// Implementations must not block the thread; other tasks on the same
    /// runtime keep making progress while a polling loop waits.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

impl<S: Sleeper> Sleeper for Arc<S> {
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await;
    }
}

/// Production sleeper backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately and records every requested delay.
///
/// Used by tests to assert the polling cadence without wall-clock waits.
///
/// # Example
///
/// ```
/// use paygate::time::{InstantSleeper, Sleeper};
/// use std::time::Duration;
///
/// # async fn example() {
/// let sleeper = InstantSleeper::new();
/// sleeper.sleep(Duration::from_secs(2)).await;
/// assert_eq!(sleeper.delays(), vec![Duration::from_secs(2)]);
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InstantSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl InstantSleeper {
    /// Creates a new recording sleeper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the delays requested so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if a previous caller panicked while recording a delay.
    #[must_use]
    pub fn delays(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

impl Sleeper for InstantSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}
