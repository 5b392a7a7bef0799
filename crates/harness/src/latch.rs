//! Countdown latch
//!
//! A one-shot completion barrier: workers count down, the harness waits
//! until the count reaches zero. `wait_for` bounds the wait so a hung
//! worker cannot block the harness forever.

use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// One-shot countdown latch.
///
/// # Example
///
/// ```
/// use stockbench_harness::CountdownLatch;
/// use std::sync::Arc;
/// use std::thread;
///
/// let latch = Arc::new(CountdownLatch::new(2));
/// for _ in 0..2 {
///     let latch = Arc::clone(&latch);
///     thread::spawn(move || latch.count_down());
/// }
/// latch.wait();
/// ```
pub struct CountdownLatch {
    remaining: Mutex<usize>,
    all_done: Condvar,
}

impl CountdownLatch {
    /// Latch that opens after `count` calls to [`count_down`](Self::count_down).
    pub fn new(count: usize) -> Self {
        CountdownLatch {
            remaining: Mutex::new(count),
            all_done: Condvar::new(),
        }
    }

    /// Signal one completion. Calls beyond the initial count are ignored.
    pub fn count_down(&self) {
        let mut remaining = self.remaining.lock();
        if *remaining > 0 {
            *remaining -= 1;
            if *remaining == 0 {
                self.all_done.notify_all();
            }
        }
    }

    /// Completions still outstanding.
    pub fn remaining(&self) -> usize {
        *self.remaining.lock()
    }

    /// Block until the count reaches zero.
    pub fn wait(&self) {
        let mut remaining = self.remaining.lock();
        while *remaining > 0 {
            self.all_done.wait(&mut remaining);
        }
    }

    /// Block until the count reaches zero or `timeout` elapses.
    ///
    /// Returns true if the latch opened, false on expiry.
    pub fn wait_for(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut remaining = self.remaining.lock();
        while *remaining > 0 {
            if self
                .all_done
                .wait_until(&mut remaining, deadline)
                .timed_out()
            {
                return *remaining == 0;
            }
        }
        true
    }
}

impl std::fmt::Debug for CountdownLatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountdownLatch")
            .field("remaining", &self.remaining())
            .finish()
    }
}
