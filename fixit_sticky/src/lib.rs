// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixit Sticky: a headless sticky-positioning controller.
//!
//! This crate decides, on every scroll, poll or resize tick, how one target
//! element should be positioned relative to the viewport and an optional
//! containing parent:
//!
//! - **Inactive**: the target sits in normal document flow.
//! - **Active**: the target is pinned at the configured offset from the top
//!   of the viewport (or to the viewport bottom, for tall targets scrolling
//!   down). An invisible placeholder keeps its slot in the layout.
//! - **Frozen**: a target taller than the viewport rides with the scroll
//!   until the edge it needs comes into view.
//! - **Docked**: an active target has reached the bottom of its containing
//!   parent and parks there.
//!
//! Optionally, it also infers scroll direction from placeholder movement and
//! mirrors a parent's content width onto the target.
//!
//! The crate does not know about browsers. Callers implement [`Host`] over
//! their document (see `fixit_web` for `web-sys`), deliver [`HostEvent`]s to
//! [`StickyController::handle`], and the controller answers with class
//! toggles, inline style writes and [`FixitEvent`]s through the same host.
//!
//! ## Layers
//!
//! - [`state`]: pure transition functions over [`Measurements`]; usable on
//!   their own for testing or for custom drivers.
//! - [`DirectionDetector`]: throttled and debounced direction inference.
//! - [`StickyController`]: lifecycle, placeholder, and the glue that applies
//!   transitions through a [`Host`].
//!
//! ## Pure transitions
//!
//! ```rust
//! use kurbo::Rect;
//! use fixit_sticky::state::{Measurements, Transition, position_transition};
//! use fixit_sticky::{ScrollDirection, StickyState};
//!
//! // A 50px bar whose natural position just scrolled above a 0px offset.
//! let m = Measurements {
//!     placeholder_top: -10.0,
//!     target: Rect::new(0.0, -10.0, 300.0, 40.0),
//!     parent: None,
//!     viewport_height: 800.0,
//!     inner_height: 800.0,
//!     offset: 0.0,
//! };
//! assert_eq!(
//!     position_transition(StickyState::Inactive, &m, Some(ScrollDirection::Down)),
//!     Some(Transition::Activate { to_bottom: false }),
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `serde`: derive `serde` traits on plain-data types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod classes;
mod controller;
mod direction;
mod event;
mod host;
mod options;
pub mod state;

pub use classes::{PLACEHOLDER_CLASS, StateClasses};
pub use controller::{SetupError, Snapshot, StickyController};
pub use direction::{DirectionChange, DirectionDetector, DirectionRequest, infer_direction};
pub use event::{FixitEvent, ScrollDirection};
pub use host::{Host, HostEvent, Listener, Style, TimerSlot};
pub use options::{
    Callback, DirectionConfig, EnabledPredicate, FixitOptions, Offset, ParentChoice, Target,
};
pub use state::{Measurements, StickyState};
