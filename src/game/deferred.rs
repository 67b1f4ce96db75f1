//! Deferred effects tied to a puzzle epoch
//!
//! Front ends schedule time-based effects (cell reveals, keyboard refresh, game-over
//! panel) after a state change. Each effect is tagged with the epoch of the puzzle it
//! belongs to; once the game is reset the epoch moves on and older effects are discarded
//! without running.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Entry<T> {
    due: Instant,
    epoch: u64,
    seq: u64,
    effect: T,
}

/// Time-ordered queue of pending effects
#[derive(Debug)]
pub struct DeferredQueue<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<T> DeferredQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `effect` for `due` on behalf of puzzle `epoch`
    pub fn schedule_at(&mut self, epoch: u64, due: Instant, effect: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due,
            epoch,
            seq,
            effect,
        });
    }

    /// Schedule `effect` to run `delay` after `now`
    pub fn schedule_after(&mut self, epoch: u64, now: Instant, delay: Duration, effect: T) {
        self.schedule_at(epoch, now + delay, effect);
    }

    /// Remove and return every effect of `epoch` due at or before `now`
    ///
    /// Effects of any other epoch are dropped. Returned effects are ordered by due time,
    /// ties broken by scheduling order.
    pub fn drain_due(&mut self, epoch: u64, now: Instant) -> Vec<T> {
        self.entries.retain(|entry| entry.epoch == epoch);

        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.due <= now);
        self.entries = pending;

        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.effect).collect()
    }

    /// Earliest due time among effects of `epoch`
    #[must_use]
    pub fn next_due(&self, epoch: u64) -> Option<Instant> {
        self.entries
            .iter()
            .filter(|entry| entry.epoch == epoch)
            .map(|entry| entry.due)
            .min()
    }

    /// Number of effects still pending for `epoch`
    #[must_use]
    pub fn pending(&self, epoch: u64) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.epoch == epoch)
            .count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
