//! # Stockbench
//!
//! Benchmark harness for two classical strategies of safely decrementing a
//! shared inventory counter under concurrent demand:
//!
//! - **Optimistic**: read-check-write against a monotonically increasing
//!   version stamp, retrying on conflict up to a fixed budget
//! - **Pessimistic**: an exclusive critical section per record
//!
//! ## Quick Start
//!
//! ```
//! use stockbench::prelude::*;
//!
//! let bench = StockBench::new();
//!
//! // 10 units of stock, 4 workers each taking 1
//! let comparison = bench.compare(10, 1, 4)?;
//!
//! assert!(comparison.optimistic.is_consistent);
//! assert!(comparison.pessimistic.is_consistent);
//! println!("winner: {}", comparison.winner);
//! # Ok::<(), stockbench::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`stockbench_core`]: data model, error taxonomy, store contract
//! - [`stockbench_storage`]: concurrent in-memory store
//! - [`stockbench_concurrency`]: the two decrement strategies
//! - [`stockbench_harness`]: worker pool, latch, result reduction
//! - this crate: the [`StockBench`] facade tying them together

#![warn(missing_docs)]

mod bench;

pub mod prelude;

// Re-export main entry points
pub use bench::{StockBench, StockBenchBuilder};

// Re-export the shared taxonomy and types
pub use stockbench_core::{Error, InventoryStore, ItemId, Result, StockLease, StockRecord, Strategy};

// Re-export the layer surfaces adapters usually need
pub use stockbench_concurrency::{
    Decrementer, OptimisticDecrementer, PessimisticDecrementer, RetryPolicy,
};
pub use stockbench_harness::{BenchResult, Comparison, HarnessOptions, RunStats, Stagger};
pub use stockbench_storage::MemoryStore;
