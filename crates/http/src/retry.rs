//! Retry policy and the explicit retry state machine.

use std::time::Duration;

/// Retry configuration for one logical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempt budget, including the first attempt.
    pub max_attempts: u32,
    /// Base factor for exponential backoff: `delay = factor * 2^attempt`.
    pub backoff_factor: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff_factor: Duration::from_millis(300),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff_factor: Duration) -> Self {
        Self {
            max_attempts,
            backoff_factor,
        }
    }

    /// Backoff delay before retrying after the given zero-based attempt.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_factor
            .saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// How a single attempt ended, as seen by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// HTTP 200; the caller gets the response.
    Success,
    /// HTTP 429; retry after backoff.
    RateLimited,
    /// Any other status; handed back to the caller without retry.
    Terminal,
    /// Connection/timeout failure; retried like rate-limiting.
    Transport,
}

/// State of one retry loop.
///
/// Transitions are pure so the schedule is testable without IO:
/// `Attempting -> Succeeded | Backoff | Exhausted`, `Backoff -> Attempting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    /// About to issue attempt number `attempt` (zero-based).
    Attempting { attempt: u32 },
    /// Sleeping before the next attempt.
    Backoff { attempt: u32, delay: Duration },
    /// A response was obtained (successful or terminal-per-call).
    Succeeded,
    /// The attempt budget ran out without obtaining a response.
    Exhausted { attempts: u32 },
}

impl RetryState {
    pub fn start() -> Self {
        Self::Attempting { attempt: 0 }
    }

    /// Fold an attempt outcome into the next state.
    pub fn on_outcome(self, outcome: AttemptOutcome, policy: &RetryPolicy) -> Self {
        match self {
            Self::Attempting { attempt } => match outcome {
                AttemptOutcome::Success | AttemptOutcome::Terminal => Self::Succeeded,
                AttemptOutcome::RateLimited | AttemptOutcome::Transport => {
                    if attempt + 1 >= policy.max_attempts {
                        Self::Exhausted {
                            attempts: attempt + 1,
                        }
                    } else {
                        Self::Backoff {
                            attempt,
                            delay: policy.backoff_delay(attempt),
                        }
                    }
                }
            },
            // Terminal states absorb further outcomes.
            other => other,
        }
    }

    /// Leave the backoff state once the delay has elapsed.
    pub fn resume(self) -> Self {
        match self {
            Self::Backoff { attempt, .. } => Self::Attempting {
                attempt: attempt + 1,
            },
            other => other,
        }
    }
}
