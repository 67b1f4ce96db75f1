//! Single-submission-in-flight guard
//!
//! A successful submission takes the lock and hands back a [`SettleTicket`]. Until the
//! ticket is settled (the front end finished revealing the row) or the timeout elapses,
//! further edits and submissions are refused.

use std::time::{Duration, Instant};

/// Default time a submission may stay unsettled before the lock frees itself
pub const DEFAULT_SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Proof of one in-flight submission
///
/// Not `Clone`: settling consumes it, so each submission is released at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an unsettled ticket keeps input locked until the timeout"]
pub struct SettleTicket {
    epoch: u64,
    serial: u64,
}

impl SettleTicket {
    /// Puzzle epoch the submission belongs to
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }
}

#[derive(Debug)]
struct Hold {
    serial: u64,
    acquired_at: Instant,
}

#[derive(Debug)]
pub struct SubmissionLock {
    timeout: Duration,
    hold: Option<Hold>,
    next_serial: u64,
}

impl SubmissionLock {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            hold: None,
            next_serial: 0,
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// True while a submission is unsettled and within its timeout
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.hold
            .as_ref()
            .is_some_and(|hold| hold.acquired_at.elapsed() < self.timeout)
    }

    /// Take the lock for a submission in `epoch`; `None` if already held
    pub fn acquire(&mut self, epoch: u64) -> Option<SettleTicket> {
        if self.is_held() {
            return None;
        }

        let serial = self.next_serial;
        self.next_serial += 1;
        self.hold = Some(Hold {
            serial,
            acquired_at: Instant::now(),
        });

        Some(SettleTicket { epoch, serial })
    }

    /// Release the hold `ticket` was issued for
    ///
    /// Returns false when the ticket no longer matches the current hold (it expired and
    /// another submission took the lock, or the lock was cleared).
    pub fn release(&mut self, ticket: SettleTicket) -> bool {
        match &self.hold {
            Some(hold) if hold.serial == ticket.serial => {
                self.hold = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any hold without a ticket
    pub fn clear(&mut self) {
        self.hold = None;
    }
}

impl Default for SubmissionLock {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_then_release() {
        let mut lock = SubmissionLock::default();
        assert!(!lock.is_held());

        let ticket = lock.acquire(0).unwrap();
        assert!(lock.is_held());
        assert!(lock.acquire(0).is_none());

        assert!(lock.release(ticket));
        assert!(!lock.is_held());
    }

    #[test]
    fn zero_timeout_expires_immediately() {
        let mut lock = SubmissionLock::new(Duration::ZERO);
        let _first = lock.acquire(0).unwrap();
        assert!(!lock.is_held());
        assert!(lock.acquire(0).is_some());
    }

    #[test]
    fn expired_ticket_cannot_release_newer_hold() {
        let mut lock = SubmissionLock::new(Duration::ZERO);
        let stale = lock.acquire(0).unwrap();
        let _current = lock.acquire(0).unwrap();

        assert!(!lock.release(stale));
    }

    #[test]
    fn clear_drops_hold() {
        let mut lock = SubmissionLock::default();
        let ticket = lock.acquire(3).unwrap();
        assert_eq!(ticket.epoch(), 3);

        lock.clear();
        assert!(!lock.is_held());
        assert!(!lock.release(ticket));
    }
}
