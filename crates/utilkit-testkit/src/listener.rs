//! Listener that counts raises.

use std::sync::atomic::{AtomicUsize, Ordering};

use utilkit_events::{HandlerSet, Listener};

use crate::source::RAISED_EVENT;

/// Listener with one handler for the `"Raised"` event.
#[derive(Debug, Default)]
pub struct CountingListener {
    calls: AtomicUsize,
}

impl CountingListener {
    /// Creates a listener that has not been called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler for `"Raised"`.
    pub fn on_raised(&self, _: &()) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns how many times `on_raised` ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Listener for CountingListener {
    fn register(&self, handlers: &mut HandlerSet<Self>) {
        handlers.on(RAISED_EVENT, Self::on_raised);
    }
}
