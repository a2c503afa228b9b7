// ── Request generations ──
//
// Each read takes a ticket before it goes out. Under `LatestIssued`, a
// response is admitted only if no newer read was issued in the meantime.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::ResponseOrdering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticket(u64);

pub(crate) struct RequestGate {
    ordering: ResponseOrdering,
    issued: AtomicU64,
}

impl RequestGate {
    pub(crate) fn new(ordering: ResponseOrdering) -> Self {
        Self {
            ordering,
            issued: AtomicU64::new(0),
        }
    }

    pub(crate) fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a response carrying `ticket` may be applied.
    pub(crate) fn admits(&self, ticket: Ticket) -> bool {
        match self.ordering {
            ResponseOrdering::LastResolved => true,
            ResponseOrdering::LatestIssued => ticket.0 == self.issued.load(Ordering::SeqCst),
        }
    }
}
