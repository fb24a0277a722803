//! Janitor Task
//!
//! Recurring background task that reclaims expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

// == Janitor ==
/// A cancellable repeating background task.
///
/// The janitor runs a sweep closure on a fixed-delay schedule: the first
/// sweep fires immediately, and each subsequent sweep starts one interval
/// after the END of the previous one. A sweep that overruns the interval
/// pushes the next sweep back rather than letting executions compound.
///
/// Exactly one janitor is associated with a live cache; it is cancelled by
/// the eviction hook when the cache is closed.
#[derive(Debug)]
pub struct Janitor {
    /// Handle to the spawned sweep loop
    handle: JoinHandle<()>,
}

impl Janitor {
    // == Start ==
    /// Spawns the sweep loop on the current Tokio runtime.
    ///
    /// The closure runs synchronously inside the loop, so cancellation never
    /// interrupts a sweep already in progress: the abort only lands at the
    /// sleep between sweeps.
    ///
    /// # Arguments
    /// * `interval` - Fixed delay between the end of one sweep and the start
    ///   of the next
    /// * `sweep` - The work to run each cycle
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn start<F>(interval: Duration, mut sweep: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            info!("Starting janitor with interval of {:?}", interval);

            loop {
                // First sweep at zero delay; fixed delay measured from the
                // end of each run.
                sweep();

                tokio::time::sleep(interval).await;
            }
        });

        Self { handle }
    }

    // == Cancel ==
    /// Cancels the janitor: no future sweep executes.
    ///
    /// Idempotent. Does not interrupt a sweep that is already running.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    // == Is Cancelled ==
    /// Returns true once the sweep loop has stopped.
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    #[tokio::test]
    async fn test_first_sweep_runs_immediately() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let janitor = Janitor::start(Duration::from_secs(60), move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        // The first sweep fires at zero delay, well before the first
        // interval elapses.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        janitor.cancel();
    }

    #[tokio::test]
    async fn test_sweeps_repeat_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let janitor = Janitor::start(Duration::from_millis(50), move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(275)).await;
        let seen = count.load(Ordering::SeqCst);
        assert!(seen >= 3, "expected several sweeps, saw {}", seen);

        janitor.cancel();
    }

    #[tokio::test]
    async fn test_cancel_stops_future_sweeps() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let janitor = Janitor::start(Duration::from_millis(50), move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(75)).await;
        janitor.cancel();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let at_cancel = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(count.load(Ordering::SeqCst), at_cancel);
        assert!(janitor.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancel_is_idempotent() {
        let janitor = Janitor::start(Duration::from_millis(50), || {});

        janitor.cancel();
        janitor.cancel();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(janitor.is_cancelled());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_fixed_delay_spacing() {
        let starts = Arc::new(Mutex::new(Vec::new()));
        let starts_clone = starts.clone();

        // Each sweep overruns the 50ms interval by sleeping 150ms, so
        // consecutive starts must be spaced by at least sweep + interval,
        // not by the interval alone (fixed delay, not fixed rate).
        let janitor = Janitor::start(Duration::from_millis(50), move || {
            starts_clone.lock().unwrap().push(Instant::now());
            std::thread::sleep(Duration::from_millis(150));
        });

        tokio::time::sleep(Duration::from_millis(700)).await;
        janitor.cancel();

        let starts = starts.lock().unwrap();
        assert!(starts.len() >= 2, "expected at least two sweeps");
        for pair in starts.windows(2) {
            let gap = pair[1].duration_since(pair[0]);
            assert!(
                gap >= Duration::from_millis(200),
                "sweeps spaced {:?} apart, expected >= 200ms",
                gap
            );
        }
    }
}
