//! Retry policy for catalog fetches.

use std::time::Duration;

/// Attempts made against the catalog before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Pause between attempts. Fixed, no jitter: the backend just needs time
/// to wake, not load shedding.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(2);

/// Backoff between retry attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// No delay between retries.
    None,
    /// Fixed delay between retries.
    Fixed(Duration),
}

impl Backoff {
    /// Delay to wait before the next attempt.
    pub fn delay(&self) -> Duration {
        match self {
            Backoff::None => Duration::ZERO,
            Backoff::Fixed(d) => *d,
        }
    }
}

/// Retry policy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts (including the first). Always at least 1.
    pub max_attempts: u32,
    /// Backoff between attempts.
    pub backoff: Backoff,
}

impl RetryPolicy {
    /// Create a policy with the default fixed pause.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff: Backoff::Fixed(DEFAULT_PAUSE),
        }
    }

    /// A single attempt, no retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: Backoff::None,
        }
    }

    /// Set the backoff strategy.
    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}
