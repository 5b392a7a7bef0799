//! Optimistic decrementer
//!
//! Read-check-write against the version stamp:
//!
//! 1. Read the current record.
//! 2. Fail `InsufficientStock` if demand exceeds supply (terminal, never
//!    retried).
//! 3. Attempt a version-checked write stamping the version just read.
//! 4. On `VersionConflict`, sleep the fixed backoff and start over from a
//!    fresh read, up to the attempt budget; then fail `RetryExhausted`.
//!
//! Avoids blocking readers and writers but pays a retry cost proportional
//! to contention.

use crate::retry::RetryPolicy;
use crate::Decrementer;
use stockbench_core::error::{Error, Result};
use stockbench_core::traits::InventoryStore;
use stockbench_core::types::{ItemId, Strategy};
use std::sync::Arc;
use std::thread;

/// Decrements via compare-and-set on the record's version stamp.
///
/// Holds no state between calls; every retry starts from a fresh read.
#[derive(Debug)]
pub struct OptimisticDecrementer<S> {
    store: Arc<S>,
    policy: RetryPolicy,
}

impl<S: InventoryStore> OptimisticDecrementer<S> {
    /// New decrementer with the default retry policy (5 attempts, 100 ms).
    pub fn new(store: Arc<S>) -> Self {
        Self::with_policy(store, RetryPolicy::default())
    }

    /// New decrementer with an explicit retry policy.
    pub fn with_policy(store: Arc<S>, policy: RetryPolicy) -> Self {
        OptimisticDecrementer { store, policy }
    }

    /// The configured retry policy.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }
}

impl<S: InventoryStore> Decrementer for OptimisticDecrementer<S> {
    fn strategy(&self) -> Strategy {
        Strategy::Optimistic
    }

    fn decrement(&self, id: ItemId, quantity: u32) -> Result<()> {
        let mut attempt = 0;
        loop {
            attempt += 1;

            let record = self.store.read(id)?;
            let remaining =
                record
                    .quantity
                    .checked_sub(quantity)
                    .ok_or(Error::InsufficientStock {
                        requested: quantity,
                        available: record.quantity,
                    })?;

            match self.store.write_versioned(id, remaining, record.version) {
                Ok(_) => return Ok(()),
                Err(Error::VersionConflict { .. }) if attempt < self.policy.max_attempts => {
                    tracing::debug!(%id, attempt, "version conflict, backing off");
                    thread::sleep(self.policy.backoff);
                }
                Err(Error::VersionConflict { .. }) => {
                    return Err(Error::RetryExhausted { attempts: attempt });
                }
                Err(other) => return Err(other),
            }
        }
    }
}
