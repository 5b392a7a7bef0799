//! Error taxonomy for stockbench
//!
//! One enum covers every failure a decrement call or a harness run can
//! surface. Classification helpers tell callers how to react: retry,
//! count as a business failure, or abort the run.

use crate::types::ItemId;
use std::time::Duration;
use thiserror::Error;

/// All stockbench errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Referenced record does not exist. Fatal to the calling operation.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// Demand exceeds current stock. Terminal business failure, never retried.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        /// Quantity the caller asked to remove.
        requested: u32,
        /// Quantity actually available at the time of the check.
        available: u32,
    },

    /// A versioned write lost the race: another writer committed first.
    /// Recoverable; drives the optimistic retry loop.
    #[error("version conflict: expected {expected}, found {actual}")]
    VersionConflict {
        /// Version stamp the writer read before attempting the write.
        expected: u64,
        /// Version stamp actually persisted at write time.
        actual: u64,
    },

    /// The optimistic retry budget was consumed without a successful write.
    #[error("failed to commit after {attempts} attempts")]
    RetryExhausted {
        /// Number of write attempts performed.
        attempts: u32,
    },

    /// Bounded exclusive acquisition expired before the lock was granted.
    #[error("exclusive lock not acquired within {0:?}")]
    LockTimeout(Duration),

    /// The harness deadline expired before every worker finished.
    #[error("harness timed out: {completed}/{total} workers finished")]
    HarnessTimeout {
        /// Workers that signalled completion before the deadline.
        completed: usize,
        /// Workers the run started with.
        total: usize,
    },

    /// Invariant violation. The only run-aborting class.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for stockbench operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether a retry with fresh state may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::VersionConflict { .. })
    }

    /// Whether this is a terminal per-call failure the harness should
    /// tally and move past.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_)
                | Error::InsufficientStock { .. }
                | Error::RetryExhausted { .. }
                | Error::LockTimeout(_)
        )
    }

    /// Whether this error must abort the whole run.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_is_retryable() {
        let err = Error::VersionConflict {
            expected: 3,
            actual: 4,
        };
        assert!(err.is_retryable());
        assert!(!err.is_terminal());
        assert!(!err.is_serious());
    }

    #[test]
    fn test_business_failures_are_terminal() {
        assert!(Error::InsufficientStock {
            requested: 5,
            available: 2
        }
        .is_terminal());
        assert!(Error::RetryExhausted { attempts: 5 }.is_terminal());
        assert!(Error::NotFound(ItemId::new(9)).is_terminal());
        assert!(Error::LockTimeout(Duration::from_millis(10)).is_terminal());
    }

    #[test]
    fn test_internal_is_serious() {
        assert!(Error::Internal("broken invariant".into()).is_serious());
    }

    #[test]
    fn test_display_messages() {
        let err = Error::InsufficientStock {
            requested: 3,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock: requested 3, available 1"
        );

        let err = Error::HarnessTimeout {
            completed: 48,
            total: 50,
        };
        assert_eq!(err.to_string(), "harness timed out: 48/50 workers finished");
    }
}
