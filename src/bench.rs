//! Benchmark entry point
//!
//! [`StockBench`] owns one in-memory store and one decrementer per
//! strategy, and exposes the invocation surface: create a record, run one
//! strategy against it, or run the side-by-side comparison.

use stockbench_concurrency::{OptimisticDecrementer, PessimisticDecrementer, RetryPolicy};
use stockbench_core::error::Result;
use stockbench_core::traits::InventoryStore;
use stockbench_core::types::{ItemId, StockRecord, Strategy};
use stockbench_harness::{self as harness, BenchResult, Comparison, HarnessOptions, Stagger};
use stockbench_storage::MemoryStore;
use std::sync::Arc;
use std::time::Duration;

/// The benchmark facade.
///
/// # Example
///
/// ```
/// use stockbench::prelude::*;
/// use std::time::Duration;
///
/// let bench = StockBench::builder()
///     .max_attempts(64)
///     .backoff(Duration::from_millis(1))
///     .harness_timeout(Duration::from_secs(30))
///     .build();
///
/// let item = bench.initialize("widget", 20);
/// let result = bench.run_optimistic(item.id, 1, 8)?;
///
/// assert_eq!(result.success_count, 8);
/// assert_eq!(bench.record(item.id)?.quantity, 12);
/// # Ok::<(), stockbench::Error>(())
/// ```
pub struct StockBench {
    store: Arc<MemoryStore>,
    optimistic: Arc<OptimisticDecrementer<MemoryStore>>,
    pessimistic: Arc<PessimisticDecrementer<MemoryStore>>,
    options: HarnessOptions,
}

impl StockBench {
    /// Benchmark with default tuning (5 attempts, 100 ms backoff,
    /// unbounded waits, no stagger).
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for benchmark configuration.
    pub fn builder() -> StockBenchBuilder {
        StockBenchBuilder::default()
    }

    /// Create a fresh record with the given initial quantity, version 0.
    pub fn initialize(&self, name: &str, initial_quantity: u32) -> StockRecord {
        self.store.create(name, initial_quantity)
    }

    /// Point read of a record's current state.
    pub fn record(&self, id: ItemId) -> Result<StockRecord> {
        self.store.read(id)
    }

    /// The underlying store, for direct contract-level access.
    pub fn store(&self) -> &Arc<MemoryStore> {
        &self.store
    }

    /// Run `workers` concurrent optimistic decrements of `quantity`
    /// against `id`.
    pub fn run_optimistic(&self, id: ItemId, quantity: u32, workers: usize) -> Result<BenchResult> {
        self.run_strategy(Strategy::Optimistic, id, quantity, workers)
    }

    /// Run `workers` concurrent pessimistic decrements of `quantity`
    /// against `id`.
    pub fn run_pessimistic(&self, id: ItemId, quantity: u32, workers: usize) -> Result<BenchResult> {
        self.run_strategy(Strategy::Pessimistic, id, quantity, workers)
    }

    /// Run both strategies over the same workload, each against its own
    /// fresh record, and reduce to a comparison.
    pub fn compare(&self, initial_stock: u32, quantity: u32, workers: usize) -> Result<Comparison> {
        let optimistic_item = self.initialize("optimistic-lock-test", initial_stock);
        let pessimistic_item = self.initialize("pessimistic-lock-test", initial_stock);

        let optimistic = self.run_optimistic(optimistic_item.id, quantity, workers)?;
        let pessimistic = self.run_pessimistic(pessimistic_item.id, quantity, workers)?;

        let comparison = Comparison::new(optimistic, pessimistic);
        tracing::info!(
            winner = %comparison.winner,
            optimistic_ms = comparison.optimistic.duration_ms,
            pessimistic_ms = comparison.pessimistic.duration_ms,
            "comparison completed"
        );
        Ok(comparison)
    }

    fn run_strategy(
        &self,
        strategy: Strategy,
        id: ItemId,
        quantity: u32,
        workers: usize,
    ) -> Result<BenchResult> {
        let initial = self.record(id)?.quantity;
        let stats = match strategy {
            Strategy::Optimistic => {
                harness::run(&self.optimistic, id, quantity, workers, &self.options)?
            }
            Strategy::Pessimistic => {
                harness::run(&self.pessimistic, id, quantity, workers, &self.options)?
            }
        };
        let final_stock = self.record(id)?.quantity;
        Ok(BenchResult::new(
            strategy,
            &stats,
            initial,
            final_stock,
            quantity,
            workers,
        ))
    }
}

impl Default for StockBench {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`StockBench`] tuning.
#[derive(Debug, Clone, Default)]
pub struct StockBenchBuilder {
    retry: RetryPolicy,
    acquire_timeout: Option<Duration>,
    options: HarnessOptions,
}

impl StockBenchBuilder {
    /// Write-attempt budget for the optimistic path.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.retry.max_attempts = max_attempts;
        self
    }

    /// Fixed backoff between optimistic attempts.
    pub fn backoff(mut self, backoff: Duration) -> Self {
        self.retry.backoff = backoff;
        self
    }

    /// Bound pessimistic lock acquisition, surfacing `LockTimeout`.
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = Some(timeout);
        self
    }

    /// Bound the wait for worker completion, surfacing `HarnessTimeout`.
    pub fn harness_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Delay every `every`-th worker's start by `delay`.
    pub fn stagger(mut self, every: usize, delay: Duration) -> Self {
        self.options.stagger = Some(Stagger { every, delay });
        self
    }

    /// Build the benchmark.
    pub fn build(self) -> StockBench {
        let store = Arc::new(MemoryStore::new());
        let optimistic = Arc::new(OptimisticDecrementer::with_policy(
            Arc::clone(&store),
            self.retry,
        ));
        let pessimistic = Arc::new(match self.acquire_timeout {
            Some(timeout) => PessimisticDecrementer::with_acquire_timeout(Arc::clone(&store), timeout),
            None => PessimisticDecrementer::new(Arc::clone(&store)),
        });
        StockBench {
            store,
            optimistic,
            pessimistic,
            options: self.options,
        }
    }
}
