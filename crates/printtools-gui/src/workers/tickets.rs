use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic ticket counter shared by the UI and the worker.
///
/// Every image selection takes a new ticket. Work and results belonging to
/// an older ticket are dropped.
#[derive(Clone, Debug, Default)]
pub struct LoadTickets {
    latest: Arc<AtomicU64>,
}

impl LoadTickets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket, superseding all earlier ones.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Most recently issued ticket; 0 before the first selection.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let tickets = LoadTickets::new();
        assert_eq!(tickets.latest(), 0);
        let first = tickets.issue();
        assert!(tickets.is_current(first));

        let shared = tickets.clone();
        let second = shared.issue();
        assert!(second > first);
        assert!(!tickets.is_current(first));
        assert!(tickets.is_current(second));
    }
}
