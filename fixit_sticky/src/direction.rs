// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll direction detection.
//!
//! Direction is inferred from how the placeholder's top moves between
//! evaluations rather than from the window scroll position, which browsers
//! report inconsistently. A decreasing top means the page is scrolling down.
//!
//! Committing a direction is deliberately sluggish. Two paths lead to a
//! commit check:
//!
//! - a [`CountThrottle`] that forces a check every `throttle` requests, which
//!   bounds the latency during long continuous scrolls, and
//! - a [`TrailingDebounce`] that checks once scrolling pauses for `wait_ms`,
//!   so the resting direction is always eventually right.
//!
//! Both only commit when the placeholder moved more than `threshold` pixels
//! since the last commit.
//!
//! ```
//! use fixit_sticky::{DirectionConfig, DirectionDetector, ScrollDirection};
//!
//! let mut detector = DirectionDetector::new(DirectionConfig {
//!     wait_ms: 100,
//!     threshold: 75.0,
//!     throttle: 20,
//! });
//!
//! let mut commits = Vec::new();
//! for tick in 1..=25 {
//!     let top = -5.0 * f64::from(tick);
//!     let direction = detector.observe(top);
//!     let request = detector.request(direction, top);
//!     commits.extend(request.change.map(|c| (tick, c.new)));
//! }
//! assert_eq!(commits, [(20, ScrollDirection::Down)]);
//!
//! // Scrolling pauses; the settle check has nothing new to commit.
//! assert_eq!(detector.settle(), None);
//! ```

use fixit_timing::{CountThrottle, TrailingDebounce};

use crate::event::ScrollDirection;
use crate::options::DirectionConfig;

/// A committed direction change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirectionChange {
    /// Direction committed before this change, if any.
    pub previous: Option<ScrollDirection>,
    /// Newly committed direction.
    pub new: ScrollDirection,
}

/// Result of [`DirectionDetector::request`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirectionRequest {
    /// Set when the throttle path committed a change.
    pub change: Option<DirectionChange>,
    /// Delay after which the host should call [`DirectionDetector::settle`].
    /// Any previously scheduled settle is superseded.
    pub settle_after_ms: u64,
}

/// Throttled, debounced scroll direction tracker.
#[derive(Clone, Debug)]
pub struct DirectionDetector {
    threshold: f64,
    throttle: CountThrottle,
    settle: TrailingDebounce,
    last_top: f64,
    newest_top: f64,
    commit_top: f64,
    requested: Option<ScrollDirection>,
    committed: Option<ScrollDirection>,
}

impl DirectionDetector {
    /// Creates a detector with nothing committed.
    #[must_use]
    pub fn new(config: DirectionConfig) -> Self {
        Self {
            threshold: config.threshold,
            throttle: CountThrottle::new(config.throttle),
            settle: TrailingDebounce::new(config.wait_ms),
            last_top: 0.0,
            newest_top: 0.0,
            commit_top: 0.0,
            requested: None,
            committed: None,
        }
    }

    /// Returns the committed direction.
    #[must_use]
    pub fn committed(&self) -> Option<ScrollDirection> {
        self.committed
    }

    /// Returns `true` while a settle check is outstanding.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settle.is_pending()
    }

    /// Infers the direction from a new placeholder top and remembers it.
    ///
    /// Returns `None` when the top did not move.
    pub fn observe(&mut self, top: f64) -> Option<ScrollDirection> {
        let direction = infer_direction(self.last_top, top);
        self.last_top = top;
        direction
    }

    /// Asks for `direction` to be committed at placeholder top `top`.
    ///
    /// Every call counts toward the throttle and re-arms the settle debounce.
    pub fn request(&mut self, direction: Option<ScrollDirection>, top: f64) -> DirectionRequest {
        self.newest_top = top;
        let change = if self.throttle.hit() {
            self.commit_past_threshold(direction)
        } else {
            None
        };
        self.requested = direction;
        DirectionRequest {
            change,
            settle_after_ms: self.settle.arm(),
        }
    }

    /// Runs the settle check once scrolling paused.
    ///
    /// The newest top becomes the reference for the next threshold check
    /// whether or not anything was committed. Returns `None` without side
    /// effects if no settle was pending.
    pub fn settle(&mut self) -> Option<DirectionChange> {
        if !self.settle.fire() {
            return None;
        }
        let change = self.commit_past_threshold(self.requested);
        self.commit_top = self.newest_top;
        change
    }

    /// Commits `direction` immediately, bypassing threshold and throttle.
    pub fn force(&mut self, direction: ScrollDirection, top: f64) -> Option<DirectionChange> {
        self.newest_top = top;
        self.commit(direction)
    }

    /// Forgets everything: committed direction, counters and pending settle.
    pub fn reset(&mut self) {
        self.throttle.reset();
        self.settle.cancel();
        self.last_top = 0.0;
        self.newest_top = 0.0;
        self.commit_top = 0.0;
        self.requested = None;
        self.committed = None;
    }

    fn commit_past_threshold(
        &mut self,
        direction: Option<ScrollDirection>,
    ) -> Option<DirectionChange> {
        if (self.newest_top - self.commit_top).abs() > self.threshold {
            self.commit(direction?)
        } else {
            None
        }
    }

    fn commit(&mut self, direction: ScrollDirection) -> Option<DirectionChange> {
        if self.committed == Some(direction) {
            return None;
        }
        let previous = self.committed.replace(direction);
        self.commit_top = self.newest_top;
        Some(DirectionChange {
            previous,
            new: direction,
        })
    }
}

/// Direction implied by the placeholder top moving from `previous` to `top`.
#[must_use]
pub fn infer_direction(previous: f64, top: f64) -> Option<ScrollDirection> {
    if previous > top {
        Some(ScrollDirection::Down)
    } else if previous < top {
        Some(ScrollDirection::Up)
    } else {
        None
    }
}
