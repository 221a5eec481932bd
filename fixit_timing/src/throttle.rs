// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Count-based throttle policy.

/// Lets one call through every `limit` calls.
///
/// The counter increments on every [`hit`](Self::hit); once it reaches the
/// limit the hit returns `true` and the counter starts over. A limit of zero
/// or one lets every call through.
///
/// ```
/// use fixit_timing::CountThrottle;
///
/// let mut every_third = CountThrottle::new(3);
/// let passed: Vec<bool> = (0..6).map(|_| every_third.hit()).collect();
/// assert_eq!(passed, [false, false, true, false, false, true]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CountThrottle {
    limit: u32,
    count: u32,
}

impl CountThrottle {
    /// Creates a throttle that passes every `limit`-th call.
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self { limit, count: 0 }
    }

    /// Returns the number of calls counted since the last pass.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Counts a call. Returns `true` when this call reaches the limit.
    pub fn hit(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        if self.count >= self.limit {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Resets the counter without passing.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_passes_every_call() {
        let mut t = CountThrottle::new(0);
        assert!(t.hit());
        assert!(t.hit());
    }

    #[test]
    fn reset_restarts_the_count() {
        let mut t = CountThrottle::new(2);
        assert!(!t.hit());
        t.reset();
        assert_eq!(t.count(), 0);
        assert!(!t.hit());
        assert!(t.hit());
    }
}
