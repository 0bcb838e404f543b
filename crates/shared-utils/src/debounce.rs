//! Trailing-edge call debouncing on the Tokio runtime.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;

/// Trailing-edge debouncer around a callback.
///
/// Each [`call`](Debouncer::call) discards any pending invocation and
/// schedules the callback to run `wait` after that call, with that call's
/// arguments. Only the last call of a burst fires; there is no leading-edge
/// option and no explicit cancellation surface.
///
/// One pending slot is kept per instance. Concurrent calls on the same
/// instance race for the slot, with the last call before the quiet period
/// winning. Dropping the debouncer does not cancel an invocation that is
/// already scheduled.
pub struct Debouncer<T> {
    wait: Duration,
    func: Arc<dyn Fn(T) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wrap `func` so invocations are deferred by `wait`.
    pub fn new<F>(wait: Duration, func: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            wait,
            func: Arc::new(func),
            pending: Mutex::new(None),
        }
    }

    /// Discard any pending invocation and schedule `func(args)` to run once
    /// the configured wait has elapsed without further calls.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime; the deferred invocation is
    /// driven by a spawned timer task.
    pub fn call(&self, args: T) {
        let func = Arc::clone(&self.func);
        let wait = self.wait;
        let mut slot = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.take() {
            // Aborting an already-finished task is a no-op.
            previous.abort();
        }
        *slot = Some(tokio::spawn(async move {
            time::sleep(wait).await;
            func(args);
        }));
    }
}

#[cfg(test)]
mod tests {
    //! Paused-clock tests pinning the trailing-edge timing contract.

    use super::*;

    fn recording_debouncer(wait_ms: u64) -> (Debouncer<u32>, Arc<Mutex<Vec<u32>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let debouncer = Debouncer::new(Duration::from_millis(wait_ms), move |value: u32| {
            sink.lock().expect("recorder lock").push(value);
        });
        (debouncer, calls)
    }

    fn recorded(calls: &Arc<Mutex<Vec<u32>>>) -> Vec<u32> {
        calls.lock().expect("recorder lock").clone()
    }

    #[tokio::test(start_paused = true)]
    async fn lone_call_fires_after_the_wait() {
        let (debouncer, calls) = recording_debouncer(100);

        debouncer.call(7);
        time::sleep(Duration::from_millis(99)).await;
        assert!(recorded(&calls).is_empty());

        time::sleep(Duration::from_millis(2)).await;
        assert_eq!(recorded(&calls), vec![7]);
    }

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_the_last_call() {
        let (debouncer, calls) = recording_debouncer(100);

        debouncer.call(1); // t = 0
        time::sleep(Duration::from_millis(50)).await;
        debouncer.call(2); // t = 50
        time::sleep(Duration::from_millis(10)).await;
        debouncer.call(3); // t = 60

        // Nothing may fire before t = 160.
        time::sleep(Duration::from_millis(99)).await;
        assert!(recorded(&calls).is_empty());

        time::sleep(Duration::from_millis(2)).await;
        assert_eq!(recorded(&calls), vec![3]);
    }

    #[tokio::test(start_paused = true)]
    async fn debouncer_is_reusable_after_firing() {
        let (debouncer, calls) = recording_debouncer(100);

        debouncer.call(1);
        time::sleep(Duration::from_millis(150)).await;
        debouncer.call(2);
        time::sleep(Duration::from_millis(150)).await;

        assert_eq!(recorded(&calls), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn call_after_quiet_period_does_not_resurrect_cancelled_args() {
        let (debouncer, calls) = recording_debouncer(100);

        debouncer.call(1);
        debouncer.call(2);
        time::sleep(Duration::from_millis(150)).await;

        assert_eq!(recorded(&calls), vec![2]);
    }
}
