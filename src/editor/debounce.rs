//! Trailing-edge Debouncer
//!
//! Suppresses repeated triggers until a quiet period elapses: each call
//! cancels any pending timer and arms a fresh one, so at most one action
//! fires per quiet window, carrying the latest input. The pending timer
//! is aborted when the debouncer is dropped, so a torn-down surface
//! never acts on stale state.

use std::time::Duration;
use tokio::task::JoinHandle;

pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm the timer; `action` runs once the quiet window elapses with
    /// no further calls. Any previously armed action is cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_with_latest_value_after_quiet_window() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(600));
        let start = tokio::time::Instant::now();

        // keystroke at t=0
        let tx1 = tx.clone();
        debouncer.call(move || {
            let _ = tx1.send("first");
        });

        // keystroke at t=300, inside the quiet window
        tokio::time::sleep(Duration::from_millis(300)).await;
        let tx2 = tx.clone();
        debouncer.call(move || {
            let _ = tx2.send("second");
        });

        // exactly one search fires, with the latest value, at t>=900
        let value = rx.recv().await.unwrap();
        assert_eq!(value, "second");
        assert!(start.elapsed() >= Duration::from_millis(900));

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_call_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(600));
        let start = tokio::time::Instant::now();

        debouncer.call(move || {
            let _ = tx.send(());
        });

        rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(600));

        debouncer.call(move || {
            let _ = tx.send(());
        });
        drop(debouncer);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(600));

        debouncer.call(move || {
            let _ = tx.send(());
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(rx.try_recv().is_err());
    }
}
