//! Debounced search filter
//!
//! Stabilizes a rapidly changing text value: the published value moves only
//! after the input has been quiescent for the configured delay.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Owns the single pending quiescence timer for a text input
///
/// Each `observe` aborts the outstanding timer and schedules a new one, so at
/// most one timer is live at any time. The stabilized value is published
/// through a watch channel and always lands on a later scheduler tick - never
/// synchronously inside `observe`, even with a zero delay. Dropping the
/// debouncer aborts the pending timer, so a disposed input cannot publish a
/// stray update.
pub struct Debouncer {
    delay: Duration,
    tx: watch::Sender<String>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer and the receiver for the stabilized value
    ///
    /// The stabilized value starts out empty. Must be called within a tokio
    /// runtime; the timer runs as a spawned task.
    pub fn new(delay: Duration) -> (Self, watch::Receiver<String>) {
        let (tx, rx) = watch::channel(String::new());
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Feed the next raw value, e.g. one keystroke
    ///
    /// Cancels any pending timer; the value is published only if `delay`
    /// elapses with no further call.
    pub fn observe(&mut self, value: impl Into<String>) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        let value = value.into();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(value);
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
