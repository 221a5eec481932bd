// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing debounce policy.

/// Bookkeeping for a trailing debounce.
///
/// A trailing debounce runs an action once, `wait` milliseconds after the
/// last of a burst of requests. The host owns the actual timer: every call to
/// [`arm`](Self::arm) returns the delay the host should (re)schedule, and the
/// host reports the timer firing through [`fire`](Self::fire).
///
/// ```
/// use fixit_timing::TrailingDebounce;
///
/// let mut settle = TrailingDebounce::new(100);
/// assert_eq!(settle.arm(), 100);
/// assert_eq!(settle.arm(), 100);
/// assert!(settle.is_pending());
///
/// // Only one run per burst.
/// assert!(settle.fire());
/// assert!(!settle.fire());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrailingDebounce {
    wait: u64,
    pending: bool,
}

impl TrailingDebounce {
    /// Creates a debounce with the given wait, in milliseconds.
    #[must_use]
    pub const fn new(wait: u64) -> Self {
        Self {
            wait,
            pending: false,
        }
    }

    /// Records a request and returns the delay to schedule.
    pub fn arm(&mut self) -> u64 {
        self.pending = true;
        self.wait
    }

    /// Records a request with a one-off delay, returning it unchanged.
    pub fn arm_with(&mut self, wait: u64) -> u64 {
        self.pending = true;
        wait
    }

    /// Consumes the pending run. Returns `false` if nothing was armed, which
    /// happens when a stale timer outlives a [`cancel`](Self::cancel).
    pub fn fire(&mut self) -> bool {
        core::mem::replace(&mut self.pending, false)
    }

    /// Drops any pending run.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Returns `true` while a run is armed and has not fired.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }
}
