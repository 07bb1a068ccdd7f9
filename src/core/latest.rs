//! Tracking of the newest search so callers can drop stale results.
//!
//! The search engine has no notion of "latest". A frontend that searches on
//! every keystroke from more than one thread takes a ticket before each search
//! and only applies results whose ticket is still current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(u64);

impl QueryTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Hands out tickets and remembers which one is newest.
#[derive(Debug, Default)]
pub struct QueryTracker {
    latest: AtomicU64,
}

impl QueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a new search. Every earlier ticket becomes stale.
    pub fn begin(&self) -> QueryTicket {
        QueryTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Check if `ticket` belongs to the newest search.
    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Return `results` only if `ticket` is still current.
    pub fn accept<T>(&self, ticket: QueryTicket, results: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(results)
        } else {
            tracing::trace!(ticket = ticket.0, "dropping stale search results");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_newest_ticket_is_current() {
        let tracker = QueryTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_accept_drops_stale_results() {
        let tracker = QueryTracker::new();
        let old = tracker.begin();
        let new = tracker.begin();

        assert_eq!(tracker.accept(old, vec!["stale"]), None);
        assert_eq!(tracker.accept(new, vec!["fresh"]), Some(vec!["fresh"]));
    }

    #[test]
    fn test_tickets_unique_across_threads() {
        let tracker = Arc::new(QueryTracker::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || (0..100).map(|_| tracker.begin().sequence()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 800);
        assert!(tracker.is_current(QueryTicket(800)));
    }
}
