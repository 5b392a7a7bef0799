//! Concurrency strategies for stockbench
//!
//! This crate implements the two classical ways of safely decrementing a
//! shared counter:
//! - [`OptimisticDecrementer`]: read-check-write against the version stamp,
//!   retrying on conflict up to a fixed budget
//! - [`PessimisticDecrementer`]: exclusive per-record critical section,
//!   no retries needed
//!
//! Both implement [`Decrementer`] so the harness can drive either.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod optimistic;
pub mod pessimistic;
pub mod retry;

pub use optimistic::OptimisticDecrementer;
pub use pessimistic::PessimisticDecrementer;
pub use retry::RetryPolicy;

use stockbench_core::error::Result;
use stockbench_core::types::{ItemId, Strategy};

/// One concurrency-control strategy for decrementing stock.
///
/// A decrementer holds no per-call state; everything a retry needs is
/// re-derived from a fresh read. Implementations must be safe to call
/// from many threads at once.
pub trait Decrementer: Send + Sync {
    /// Which strategy this is, for result labelling.
    fn strategy(&self) -> Strategy;

    /// Remove `quantity` units from the record, or fail with one of the
    /// per-call error classes.
    fn decrement(&self, id: ItemId, quantity: u32) -> Result<()>;
}
