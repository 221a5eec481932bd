// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtual-clock timer queue.

use alloc::vec::Vec;

/// Whether a scheduled timer fires once or keeps re-arming itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Fires once and is then removed (`setTimeout`).
    Once,
    /// Fires every `period` milliseconds until cancelled (`setInterval`).
    Repeating {
        /// Interval between firings, in milliseconds.
        period: u64,
    },
}

#[derive(Clone, Debug)]
struct Entry<K> {
    key: K,
    deadline: u64,
    kind: TimerKind,
    seq: u64,
}

/// A deterministic queue of timers keyed by a slot type `K`.
///
/// Each key identifies at most one pending timer. Scheduling a key that is
/// already pending replaces the old timer, which is exactly the
/// "clear then set" dance a debounced callback does in a browser.
///
/// The queue owns a virtual clock that only moves forward when the caller
/// advances it. Timers that come due at the same instant fire in the order
/// they were scheduled.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    now: u64,
    next_seq: u64,
    entries: Vec<Entry<K>>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> TimerQueue<K> {
    /// Creates an empty queue with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedules `key` to fire once, `delay` milliseconds from now.
    pub fn schedule_once(&mut self, key: K, delay: u64) {
        self.schedule(key, delay, TimerKind::Once);
    }

    /// Schedules `key` to fire every `period` milliseconds, starting one
    /// period from now.
    ///
    /// A zero period is treated as one millisecond so that advancing the
    /// clock always terminates.
    pub fn schedule_repeating(&mut self, key: K, period: u64) {
        let period = period.max(1);
        self.schedule(key, period, TimerKind::Repeating { period });
    }

    /// Schedules `key` with an explicit [`TimerKind`], replacing any pending
    /// timer with the same key.
    pub fn schedule(&mut self, key: K, delay: u64, kind: TimerKind) {
        self.cancel(key);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            key,
            deadline: self.now.saturating_add(delay),
            kind,
            seq,
        });
    }

    /// Cancels the pending timer for `key`, returning `true` if one existed.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        before != self.entries.len()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if a timer for `key` is pending.
    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Fires the earliest timer due at or before `until`.
    ///
    /// The clock moves to that timer's deadline. Repeating timers are
    /// re-armed one period later. Returns `None` (and leaves the clock alone)
    /// if nothing is due.
    ///
    /// Firing one timer at a time lets callers run a callback that schedules
    /// or cancels other timers before the next one is considered.
    pub fn pop_due(&mut self, until: u64) -> Option<K> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= until)
            .min_by_key(|(_, e)| (e.deadline, e.seq))
            .map(|(i, _)| i)?;

        let deadline = self.entries[idx].deadline;
        self.now = self.now.max(deadline);
        let key = self.entries[idx].key;
        match self.entries[idx].kind {
            TimerKind::Once => {
                self.entries.swap_remove(idx);
            }
            TimerKind::Repeating { period } => {
                let seq = self.next_seq;
                self.next_seq += 1;
                let entry = &mut self.entries[idx];
                entry.deadline = deadline.saturating_add(period);
                entry.seq = seq;
            }
        }
        Some(key)
    }

    /// Advances the clock to `until`, returning every key that fired on the
    /// way in firing order.
    pub fn advance_to(&mut self, until: u64) -> Vec<K> {
        let mut fired = Vec::new();
        while let Some(key) = self.pop_due(until) {
            fired.push(key);
        }
        self.now = self.now.max(until);
        fired
    }

    /// Advances the clock by `delta` milliseconds. See [`Self::advance_to`].
    pub fn advance_by(&mut self, delta: u64) -> Vec<K> {
        self.advance_to(self.now.saturating_add(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Slot {
        A,
        B,
        Poll,
    }

    #[test]
    fn once_fires_a_single_time() {
        let mut q = TimerQueue::new();
        q.schedule_once(Slot::A, 50);
        assert!(q.advance_to(49).is_empty());
        assert_eq!(q.advance_to(50), vec![Slot::A]);
        assert!(q.advance_to(1_000).is_empty());
        assert!(q.is_empty());
    }

    #[test]
    fn rescheduling_replaces_pending_timer() {
        let mut q = TimerQueue::new();
        q.schedule_once(Slot::A, 100);
        q.advance_to(60);
        q.schedule_once(Slot::A, 100);
        assert_eq!(q.len(), 1);
        assert!(q.advance_to(100).is_empty());
        assert_eq!(q.advance_to(160), vec![Slot::A]);
    }

    #[test]
    fn repeating_rearms_until_cancelled() {
        let mut q = TimerQueue::new();
        q.schedule_repeating(Slot::Poll, 100);
        assert_eq!(q.advance_to(350), vec![Slot::Poll, Slot::Poll, Slot::Poll]);
        assert_eq!(q.next_deadline(), Some(400));
        assert!(q.cancel(Slot::Poll));
        assert!(!q.cancel(Slot::Poll));
        assert!(q.advance_to(1_000).is_empty());
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule_once(Slot::B, 10);
        q.schedule_once(Slot::A, 10);
        assert_eq!(q.advance_to(10), vec![Slot::B, Slot::A]);
    }

    #[test]
    fn pop_due_moves_clock_to_deadline() {
        let mut q = TimerQueue::new();
        q.schedule_once(Slot::A, 30);
        q.schedule_once(Slot::B, 70);
        assert_eq!(q.pop_due(100), Some(Slot::A));
        assert_eq!(q.now(), 30);
        // Scheduled relative to the deadline that just fired.
        q.schedule_once(Slot::A, 10);
        assert_eq!(q.pop_due(100), Some(Slot::A));
        assert_eq!(q.now(), 40);
        assert_eq!(q.pop_due(100), Some(Slot::B));
        assert_eq!(q.pop_due(100), None);
        assert_eq!(q.now(), 70);
    }

    #[test]
    fn zero_period_still_terminates() {
        let mut q = TimerQueue::new();
        q.schedule_repeating(Slot::Poll, 0);
        assert_eq!(q.advance_to(3).len(), 3);
    }
}
