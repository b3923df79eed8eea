use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use tokio::sync::Notify;

/// One-shot gate with two states: armed, then open.
///
/// `open` is a monotonic one-way transition; once open the latch stays open
/// and every waiter, past or future, returns immediately. Single writer
/// (the slow request handler), any number of waiters.
pub struct Latch {
    opened: AtomicBool,
    notify: Notify,
}

impl Latch {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { opened: AtomicBool::new(false), notify: Notify::new() })
    }

    /// Transition to open. Repeated calls are harmless no-ops.
    pub fn open(&self) {
        if !self.opened.swap(true, Ordering::AcqRel) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_open(&self) -> bool {
        self.opened.load(Ordering::Acquire)
    }

    /// Block until the latch opens; returns immediately if it already has.
    ///
    /// The `notified()` future is enabled before the flag is re-checked, so
    /// an `open()` landing between the check and the await still wakes this
    /// waiter instead of being lost.
    pub async fn wait(&self) {
        loop {
            let notified = self.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.is_open() {
                return;
            }
            notified.await;
        }
    }

    /// Like `wait`, bounded by `timeout`. Returns whether the latch opened.
    pub async fn wait_timeout(&self, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, self.wait()).await.is_ok()
    }
}
