// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixit Timing: host-agnostic timer primitives for UI behavior controllers.
//!
//! Browser-style widgets lean on three timing idioms: a `setTimeout` that is
//! cleared and re-armed on every call (a trailing debounce), a `setInterval`
//! poll, and "do the expensive thing every N calls" (a count throttle). This
//! crate models each of them as a small value type so that controllers can be
//! driven deterministically from tests as well as from a real event loop:
//!
//! - [`TimerQueue`]: a virtual-clock queue of one-shot and repeating timers
//!   keyed by a caller-chosen slot type. Scheduling a slot that is already
//!   pending replaces it.
//! - [`TrailingDebounce`]: bookkeeping for a debounced action; the host owns
//!   the actual timer.
//! - [`CountThrottle`]: lets one call through every `limit` calls.
//!
//! All times are expressed in milliseconds as `u64`.
//!
//! ## Minimal example
//!
//! ```rust
//! use fixit_timing::TimerQueue;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Slot {
//!     Poll,
//!     Settle,
//! }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule_repeating(Slot::Poll, 100);
//! timers.schedule_once(Slot::Settle, 150);
//!
//! assert_eq!(timers.advance_to(100), vec![Slot::Poll]);
//! assert_eq!(timers.advance_to(200), vec![Slot::Settle, Slot::Poll]);
//! assert!(!timers.is_pending(Slot::Settle));
//! assert!(timers.is_pending(Slot::Poll));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod debounce;
mod queue;
mod throttle;

pub use debounce::TrailingDebounce;
pub use queue::{TimerKind, TimerQueue};
pub use throttle::CountThrottle;
