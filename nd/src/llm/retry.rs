//! Bounded exponential backoff
//!
//! [`RetryState`] tracks one remote call: how many attempts have been made and
//! how long to wait before the next one. The wait itself goes through a
//! [`Sleeper`] so tests can record delays instead of sleeping.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Default total attempts per call
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default delay before the first retry
pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Suspends the current task between attempts
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Attempt budget and backoff schedule for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
        }
    }

    /// Fresh state for a new call
    pub fn start(&self) -> RetryState {
        RetryState {
            attempt: 0,
            delay: self.initial_backoff,
            max_attempts: self.max_attempts,
        }
    }

    /// Delays slept between attempts when every attempt fails
    pub fn schedule(&self) -> Vec<Duration> {
        let mut state = self.start();
        let mut delays = Vec::new();
        loop {
            state.begin_attempt();
            match state.next_delay() {
                Some(delay) => delays.push(delay),
                None => return delays,
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_INITIAL_BACKOFF)
    }
}

/// Per-call retry bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryState {
    attempt: u32,
    delay: Duration,
    max_attempts: u32,
}

impl RetryState {
    /// Attempts started so far
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Record the start of an attempt, returning its 1-based number
    pub fn begin_attempt(&mut self) -> u32 {
        self.attempt += 1;
        self.attempt
    }

    /// Delay before the next attempt, or None once the budget is spent
    ///
    /// Each call doubles the delay handed out by the following one.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.attempt >= self.max_attempts {
            debug!(attempt = self.attempt, "next_delay: budget exhausted");
            return None;
        }
        let delay = self.delay;
        self.delay = self.delay.saturating_mul(2);
        Some(delay)
    }
}
