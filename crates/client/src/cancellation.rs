//! Cooperative cancellation for long-running waits.
//!
//! Responsibilities:
//! - Provide a cheap, clonable token that callers hand to the command poller.
//! - Let a waiting task race its sleep against cancellation.
//!
//! Does NOT handle:
//! - Signal handling. The CLI wires Ctrl+C to [`CancellationToken::cancel`].
//! - Aborting server-side commands. Use `abort_command` for that.
//!
//! Invariants:
//! - Once cancelled, a token remains cancelled forever.
//! - All clones observe the same state.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    /// True if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolve once the token is cancelled.
    ///
    /// The `notified()` future is created before the flag is checked so a
    /// concurrent `cancel()` cannot be missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}
