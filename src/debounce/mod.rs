//! Debounced invocation of an operation
//!
//! Coalesces bursts of triggers into a single call once a quiet period has
//! elapsed since the last trigger.

use crate::DEFAULT_DEBOUNCE_MS;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// Rate-limiter that delays an operation until a quiet period has elapsed.
///
/// Every call to [`trigger`](Self::trigger) cancels the pending invocation
/// and restarts the timer, so a burst of N triggers spaced closer than the
/// delay runs the operation exactly once, with the value from the last
/// trigger in the burst. A single isolated trigger still waits the full
/// delay before firing.
pub struct Debouncer<T> {
    delay: Duration,
    op: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer with the default delay
    pub fn new(op: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self::with_delay(Duration::from_millis(DEFAULT_DEBOUNCE_MS), op)
    }

    /// Create a debouncer with a custom delay
    pub fn with_delay(delay: Duration, op: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            op: Arc::new(op),
            pending: None,
        }
    }

    /// Record `value` and (re)start the quiet-period timer.
    ///
    /// If an earlier trigger is still pending, its scheduled invocation
    /// never happens. Execution is fire-and-forget: nothing is returned to
    /// the trigger site when the timer eventually fires.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&mut self, value: T) {
        self.cancel();
        let op = Arc::clone(&self.op);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            op(value);
        }));
    }

    /// Abort the pending invocation, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            trace!("cancelled pending debounced call");
        }
    }

    /// Whether a trigger is still waiting for its quiet period to elapse
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Configured quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
