//! Convenient imports for stockbench.
//!
//! Re-exports the types most callers need so one import is enough:
//!
//! ```
//! use stockbench::prelude::*;
//!
//! let bench = StockBench::new();
//! let item = bench.initialize("widget", 10);
//! # let _ = item;
//! ```

// Main entry point
pub use crate::bench::{StockBench, StockBenchBuilder};

// Error handling
pub use stockbench_core::{Error, Result};

// Data model
pub use stockbench_core::{ItemId, StockRecord, Strategy};

// Store contract
pub use stockbench_core::{InventoryStore, StockLease};

// Strategies and tuning
pub use stockbench_concurrency::{
    Decrementer, OptimisticDecrementer, PessimisticDecrementer, RetryPolicy,
};

// Harness surface
pub use stockbench_harness::{BenchResult, Comparison, HarnessOptions, RunStats, Stagger};

// Store implementation
pub use stockbench_storage::MemoryStore;
