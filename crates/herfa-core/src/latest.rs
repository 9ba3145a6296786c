//! Stale-response guard.
//!
//! Two searches issued back to back may resolve out of order. A component
//! that only cares about its newest request takes a ticket per request and
//! drops any response whose ticket is no longer the latest.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct LatestRequest {
    issued: AtomicU64,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new ticket; every earlier ticket becomes stale.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Returns `value` only if `ticket` is still the latest.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }

    /// Issues a ticket, awaits `fut`, and discards the output if a newer
    /// request was issued meanwhile.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        let ticket = self.issue();
        let output = fut.await;
        self.accept(ticket, output)
    }
}
