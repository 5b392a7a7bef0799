//! Retry tuning for the optimistic path
//!
//! The reference behavior this models showed two different backoff values
//! for the same algorithm, so both knobs are explicit configuration rather
//! than constants.

use std::time::Duration;

/// Write-attempt budget and conflict backoff for optimistic decrements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum write attempts per call, the first included.
    pub max_attempts: u32,
    /// Fixed sleep between attempts after a conflict.
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Policy with the given attempt budget and the default backoff.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        RetryPolicy {
            max_attempts,
            ..Self::default()
        }
    }

    /// Policy with the given backoff and the default attempt budget.
    pub fn with_backoff(backoff: Duration) -> Self {
        RetryPolicy {
            backoff,
            ..Self::default()
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 5,
            backoff: Duration::from_millis(100),
        }
    }
}
