//! Worker-pool runner
//!
//! Spawns N threads, each performing exactly one decrement through the
//! chosen strategy, and waits for all of them on a countdown latch.
//! Success and failure tallies are per-run owned atomics; one run never
//! interferes with another run's counters.

use crate::latch::CountdownLatch;
use parking_lot::Mutex;
use stockbench_concurrency::Decrementer;
use stockbench_core::error::{Error, Result};
use stockbench_core::types::ItemId;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Delayed start for a slice of the workers.
///
/// Every `every`-th worker (skipping the first) sleeps `delay` before its
/// decrement, thinning the initial collision burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    /// Apply the delay to every Nth worker.
    pub every: usize,
    /// How long those workers sleep before starting.
    pub delay: Duration,
}

impl Default for Stagger {
    fn default() -> Self {
        Stagger {
            every: 10,
            delay: Duration::from_millis(50),
        }
    }
}

/// Tuning for one harness run.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarnessOptions {
    /// Deadline for the completion latch. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Optional staggered worker start. `None` starts everyone at once.
    pub stagger: Option<Stagger>,
}

/// Raw outcome of one harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Wall-clock time from first spawn to last completion signal.
    pub duration: Duration,
    /// Workers whose decrement committed.
    pub success_count: u32,
    /// Workers whose decrement failed for any reason.
    pub fail_count: u32,
}

impl RunStats {
    /// Elapsed time in whole milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }
}

/// Run `workers` concurrent decrements of `quantity` against `id`.
///
/// Each worker performs exactly one `decrement` call. Per-worker failures
/// (insufficient stock, exhausted retries, lock timeouts, even panics) are
/// tallied and never abort sibling workers or the harness. The only
/// failures of the run itself are:
///
/// - [`Error::HarnessTimeout`] — the configured deadline expired with
///   workers still outstanding (those threads are left to finish on their
///   own; their record writes remain valid)
/// - [`Error::Internal`] — a worker surfaced an invariant violation
pub fn run<D>(
    decrementer: &Arc<D>,
    id: ItemId,
    quantity: u32,
    workers: usize,
    options: &HarnessOptions,
) -> Result<RunStats>
where
    D: Decrementer + 'static,
{
    let success = Arc::new(AtomicU32::new(0));
    let failure = Arc::new(AtomicU32::new(0));
    let serious = Arc::new(Mutex::new(None::<String>));
    let latch = Arc::new(CountdownLatch::new(workers));
    let stagger = options.stagger;

    tracing::debug!(
        strategy = %decrementer.strategy(),
        %id,
        quantity,
        workers,
        "harness run starting"
    );

    let start = Instant::now();
    let handles: Vec<_> = (0..workers)
        .map(|worker| {
            let decrementer = Arc::clone(decrementer);
            let success = Arc::clone(&success);
            let failure = Arc::clone(&failure);
            let serious = Arc::clone(&serious);
            let latch = Arc::clone(&latch);

            thread::spawn(move || {
                if let Some(stagger) = stagger {
                    if worker > 0 && stagger.every > 0 && worker % stagger.every == 0 {
                        thread::sleep(stagger.delay);
                    }
                }

                let outcome =
                    panic::catch_unwind(AssertUnwindSafe(|| decrementer.decrement(id, quantity)));
                match outcome {
                    Ok(Ok(())) => {
                        success.fetch_add(1, Ordering::Relaxed);
                    }
                    Ok(Err(err)) => {
                        failure.fetch_add(1, Ordering::Relaxed);
                        if err.is_serious() {
                            serious.lock().get_or_insert_with(|| err.to_string());
                        }
                        tracing::error!(worker, %err, "worker decrement failed");
                    }
                    Err(_) => {
                        failure.fetch_add(1, Ordering::Relaxed);
                        tracing::error!(worker, "worker panicked");
                    }
                }
                latch.count_down();
            })
        })
        .collect();

    match options.timeout {
        Some(timeout) => {
            if !latch.wait_for(timeout) {
                let completed = workers - latch.remaining();
                return Err(Error::HarnessTimeout {
                    completed,
                    total: workers,
                });
            }
        }
        None => latch.wait(),
    }
    let duration = start.elapsed();

    // Every worker has signalled; joins return immediately.
    for handle in handles {
        let _ = handle.join();
    }

    if let Some(message) = serious.lock().take() {
        return Err(Error::Internal(message));
    }

    let stats = RunStats {
        duration,
        success_count: success.load(Ordering::Relaxed),
        fail_count: failure.load(Ordering::Relaxed),
    };
    tracing::info!(
        strategy = %decrementer.strategy(),
        duration_ms = stats.duration_ms(),
        success = stats.success_count,
        fail = stats.fail_count,
        "harness run completed"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbench_core::types::Strategy;

    struct StubDecrementer<F: Fn(ItemId, u32) -> Result<()> + Send + Sync>(F);

    impl<F: Fn(ItemId, u32) -> Result<()> + Send + Sync> Decrementer for StubDecrementer<F> {
        fn strategy(&self) -> Strategy {
            Strategy::Optimistic
        }

        fn decrement(&self, id: ItemId, quantity: u32) -> Result<()> {
            (self.0)(id, quantity)
        }
    }

    fn item() -> ItemId {
        ItemId::new(1)
    }

    #[test]
    fn test_all_workers_succeed() {
        let dec = Arc::new(StubDecrementer(|_, _| Ok(())));
        let stats = run(&dec, item(), 1, 16, &HarnessOptions::default()).unwrap();
        assert_eq!(stats.success_count, 16);
        assert_eq!(stats.fail_count, 0);
    }

    #[test]
    fn test_failures_counted_not_propagated() {
        let dec = Arc::new(StubDecrementer(|_, _| {
            Err(Error::InsufficientStock {
                requested: 1,
                available: 0,
            })
        }));
        let stats = run(&dec, item(), 1, 8, &HarnessOptions::default()).unwrap();
        assert_eq!(stats.success_count, 0);
        assert_eq!(stats.fail_count, 8);
    }

    #[test]
    fn test_panicking_worker_counted_as_failure() {
        let calls = Arc::new(AtomicU32::new(0));
        let dec = {
            let calls = Arc::clone(&calls);
            Arc::new(StubDecrementer(move |_, _| {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    panic!("worker blew up");
                }
                Ok(())
            }))
        };

        let stats = run(&dec, item(), 1, 4, &HarnessOptions::default()).unwrap();
        assert_eq!(stats.success_count + stats.fail_count, 4);
        assert_eq!(stats.fail_count, 1);
    }

    #[test]
    fn test_timeout_surfaces_progress() {
        let calls = Arc::new(AtomicU32::new(0));
        let dec = {
            let calls = Arc::clone(&calls);
            Arc::new(StubDecrementer(move |_, _| {
                // One worker hangs well past the harness deadline.
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    thread::sleep(Duration::from_secs(2));
                }
                Ok(())
            }))
        };

        let options = HarnessOptions {
            timeout: Some(Duration::from_millis(100)),
            stagger: None,
        };
        let err = run(&dec, item(), 1, 4, &options).unwrap_err();
        match err {
            Error::HarnessTimeout { completed, total } => {
                assert_eq!(total, 4);
                assert!(completed < 4);
            }
            other => panic!("expected HarnessTimeout, got {other}"),
        }
    }

    #[test]
    fn test_timeout_large_enough_passes() {
        let dec = Arc::new(StubDecrementer(|_, _| Ok(())));
        let options = HarnessOptions {
            timeout: Some(Duration::from_secs(5)),
            stagger: None,
        };
        let stats = run(&dec, item(), 1, 8, &options).unwrap();
        assert_eq!(stats.success_count, 8);
    }

    #[test]
    fn test_serious_error_aborts_run() {
        let dec = Arc::new(StubDecrementer(|_, _| {
            Err(Error::Internal("quantity went negative".into()))
        }));
        let err = run(&dec, item(), 1, 2, &HarnessOptions::default()).unwrap_err();
        assert!(err.is_serious());
    }

    #[test]
    fn test_zero_workers() {
        let dec = Arc::new(StubDecrementer(|_, _| Ok(())));
        let stats = run(&dec, item(), 1, 0, &HarnessOptions::default()).unwrap();
        assert_eq!(stats.success_count, 0);
        assert_eq!(stats.fail_count, 0);
    }

    #[test]
    fn test_stagger_still_completes() {
        let dec = Arc::new(StubDecrementer(|_, _| Ok(())));
        let options = HarnessOptions {
            timeout: None,
            stagger: Some(Stagger {
                every: 2,
                delay: Duration::from_millis(5),
            }),
        };
        let stats = run(&dec, item(), 1, 6, &options).unwrap();
        assert_eq!(stats.success_count, 6);
    }
}
