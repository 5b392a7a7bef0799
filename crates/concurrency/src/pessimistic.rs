//! Pessimistic decrementer
//!
//! Acquires the record's exclusive section before reading, so no writer
//! ever observes a stale version and no retry loop is needed:
//!
//! 1. Acquire the lease (blocking, or bounded by an optional timeout).
//! 2. Read through the lease; fail `InsufficientStock` if demand exceeds
//!    supply.
//! 3. Write the decremented quantity through the lease.
//!
//! The lease is released on every exit path, error paths included, by
//! drop.

use crate::Decrementer;
use stockbench_core::error::{Error, Result};
use stockbench_core::traits::{InventoryStore, StockLease};
use stockbench_core::types::{ItemId, Strategy};
use std::sync::Arc;
use std::time::Duration;

/// Decrements inside an exclusive per-record critical section.
#[derive(Debug)]
pub struct PessimisticDecrementer<S> {
    store: Arc<S>,
    acquire_timeout: Option<Duration>,
}

impl<S: InventoryStore> PessimisticDecrementer<S> {
    /// New decrementer with unbounded blocking acquisition.
    pub fn new(store: Arc<S>) -> Self {
        PessimisticDecrementer {
            store,
            acquire_timeout: None,
        }
    }

    /// New decrementer that gives up acquisition after `timeout`,
    /// surfacing `LockTimeout`.
    pub fn with_acquire_timeout(store: Arc<S>, timeout: Duration) -> Self {
        PessimisticDecrementer {
            store,
            acquire_timeout: Some(timeout),
        }
    }
}

impl<S: InventoryStore> Decrementer for PessimisticDecrementer<S> {
    fn strategy(&self) -> Strategy {
        Strategy::Pessimistic
    }

    fn decrement(&self, id: ItemId, quantity: u32) -> Result<()> {
        let mut lease = match self.acquire_timeout {
            Some(timeout) => self.store.try_acquire_exclusive(id, timeout)?,
            None => self.store.acquire_exclusive(id)?,
        };

        let available = lease.record().quantity;
        let remaining = available
            .checked_sub(quantity)
            .ok_or(Error::InsufficientStock {
                requested: quantity,
                available,
            })?;

        lease.write(remaining);
        Ok(())
    }
}
