// ── Single-writer state cell ──
//
// Holds one store's state behind a `watch` channel. Every transition runs
// inside `send_if_modified`, so reducers never interleave.

use std::sync::Arc;

use tokio::sync::watch;

use crate::stream::StateStream;

pub(crate) struct StateCell<S: Send + Sync + 'static> {
    sender: watch::Sender<Arc<S>>,
}

impl<S: Send + Sync + 'static> StateCell<S> {
    pub(crate) fn new(initial: S) -> Self {
        let (sender, _) = watch::channel(Arc::new(initial));
        Self { sender }
    }

    /// Current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<S> {
        self.sender.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> StateStream<S> {
        StateStream::new(self.sender.subscribe())
    }

    /// Run `step` against the current state under the writer lock.
    ///
    /// `step` returns the next state, or `None` to leave the state untouched
    /// (subscribers are then not notified). Returns whether a transition
    /// was applied.
    pub(crate) fn transition(&self, step: impl FnOnce(&S) -> Option<S>) -> bool {
        self.sender.send_if_modified(|state| match step(state) {
            Some(next) => {
                *state = Arc::new(next);
                true
            }
            None => false,
        })
    }
}
