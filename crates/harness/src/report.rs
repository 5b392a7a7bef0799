//! Result reduction
//!
//! Pure data transforms from raw run stats to the comparison summary.
//! Both types serialize, so adapters (CLI, tests) can emit them as JSON
//! without reshaping.

use crate::runner::RunStats;
use serde::{Deserialize, Serialize};
use stockbench_core::types::Strategy;

/// Outcome of one benchmark run of a single strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchResult {
    /// Strategy that produced this result.
    pub strategy: Strategy,
    /// Wall-clock time for the whole run, in milliseconds.
    pub duration_ms: u64,
    /// Stock before the run.
    pub initial_stock: u32,
    /// Stock after the run.
    pub final_stock: u32,
    /// `initial - quantity * workers`; negative when demand exceeds supply.
    pub expected_final_stock: i64,
    /// Whether the final stock equals the expectation. Only meaningful when
    /// demand does not exceed supply; oversubscribed runs report false.
    pub is_consistent: bool,
    /// Workers whose decrement committed.
    pub success_count: u32,
    /// Workers whose decrement failed.
    pub fail_count: u32,
}

impl BenchResult {
    /// Reduce raw stats plus before/after reads into a result.
    pub fn new(
        strategy: Strategy,
        stats: &RunStats,
        initial_stock: u32,
        final_stock: u32,
        quantity: u32,
        workers: usize,
    ) -> Self {
        let expected_final_stock = initial_stock as i64 - quantity as i64 * workers as i64;
        BenchResult {
            strategy,
            duration_ms: stats.duration_ms(),
            initial_stock,
            final_stock,
            expected_final_stock,
            is_consistent: final_stock as i64 == expected_final_stock,
            success_count: stats.success_count,
            fail_count: stats.fail_count,
        }
    }

    /// The no-lost-updates identity: every counted success corresponds to
    /// exactly one applied decrement of `quantity`, and nothing else
    /// touched the record.
    pub fn conserves(&self, quantity: u32) -> bool {
        self.final_stock as i64
            == self.initial_stock as i64 - quantity as i64 * self.success_count as i64
    }
}

/// Side-by-side outcome of both strategies over the same workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Optimistic run.
    pub optimistic: BenchResult,
    /// Pessimistic run.
    pub pessimistic: BenchResult,
    /// Shared expectation for both runs.
    pub expected_final_stock: i64,
    /// Strategy with the smaller duration; ties go to pessimistic.
    pub winner: Strategy,
}

impl Comparison {
    /// Reduce two results into a comparison.
    pub fn new(optimistic: BenchResult, pessimistic: BenchResult) -> Self {
        let winner = if optimistic.duration_ms < pessimistic.duration_ms {
            Strategy::Optimistic
        } else {
            Strategy::Pessimistic
        };
        Comparison {
            expected_final_stock: optimistic.expected_final_stock,
            optimistic,
            pessimistic,
            winner,
        }
    }
}
