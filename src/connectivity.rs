//! Earliest full connectivity of a timestamped merge log.
//!
//! A direct application of [`UnionFind`]: replay the merges of a log in order
//! and report the first moment the whole universe forms one component.
//!
//! [`UnionFind`]: ../disjoint_sets/union_find/struct.UnionFind.html

use crate::disjoint_sets::UnionFind;

/// A timestamped merge of two members of the universe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionEvent {
    pub timestamp: u64,
    pub first: usize,
    pub second: usize,
}

impl ConnectionEvent {
    /// Creates an event merging `first` and `second` at `timestamp`.
    pub fn new(timestamp: u64, first: usize, second: usize) -> Self {
        Self {
            timestamp,
            first,
            second,
        }
    }
}

/// Gives the first timestamp at which all `n` members form one component, or
/// `None` if the log ends before that happens.
///
/// The events must be sorted by timestamp.
/// The replay runs in `O(m α(n))` time for `m` events and uses space
/// proportional to `n`.
///
/// # Panics
///
/// If an event names a member outside `0 .. n`.
///
/// # Examples
///
/// ```
/// use percolate::connectivity::{earliest_full_connection, ConnectionEvent};
///
/// let log = [
///     ConnectionEvent::new(2, 0, 1),
///     ConnectionEvent::new(5, 2, 3),
///     ConnectionEvent::new(9, 1, 2),
/// ];
///
/// assert!(earliest_full_connection(4, &log) == Some(9));
/// assert!(earliest_full_connection(5, &log) == None);
/// ```
pub fn earliest_full_connection(n: usize, events: &[ConnectionEvent]) -> Option<u64> {
    let mut members = UnionFind::new(n);

    for event in events {
        if !members.connected(event.first, event.second) {
            members.union(event.first, event.second);
        }

        if members.count() == 1 {
            return Some(event.timestamp);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_event_that_completes_the_network() {
        let log = [
            ConnectionEvent::new(1_744_121_662_000, 0, 1),
            ConnectionEvent::new(1_744_125_010_000, 0, 3),
            ConnectionEvent::new(1_744_211_410_000, 1, 2),
            ConnectionEvent::new(1_744_384_210_000, 1, 3),
        ];

        assert_eq!(earliest_full_connection(4, &log), Some(1_744_211_410_000));
    }

    #[test]
    fn a_log_that_never_connects_everyone() {
        let log = [
            ConnectionEvent::new(1_744_121_662_000, 0, 1),
            ConnectionEvent::new(1_744_125_010_000, 5, 3),
            ConnectionEvent::new(1_744_211_410_000, 6, 2),
            ConnectionEvent::new(1_744_384_210_000, 1, 3),
            ConnectionEvent::new(1_744_384_210_000, 2, 4),
            ConnectionEvent::new(1_744_384_210_000, 5, 9),
            ConnectionEvent::new(1_744_384_210_000, 7, 8),
        ];

        assert_eq!(earliest_full_connection(10, &log), None);
    }

    #[test]
    fn two_members_connect_on_the_first_event() {
        let log = [ConnectionEvent::new(1_744_121_662_000, 0, 1)];

        assert_eq!(earliest_full_connection(2, &log), Some(1_744_121_662_000));
    }

    #[test]
    fn redundant_events_do_not_finish_the_network() {
        let log = [
            ConnectionEvent::new(1, 0, 1),
            ConnectionEvent::new(2, 1, 0),
            ConnectionEvent::new(3, 0, 1),
        ];

        assert_eq!(earliest_full_connection(3, &log), None);
    }

    #[test]
    fn an_empty_log_never_connects() {
        assert_eq!(earliest_full_connection(4, &[]), None);
    }
}
