// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability interface a document host provides to the controller.
//!
//! [`StickyController`](crate::StickyController) never talks to a browser
//! directly. Every geometry read, class toggle, style write, event
//! publication, listener registration and timer goes through [`Host`], so the
//! same controller runs against `web-sys` in a browser and against an
//! in-memory fake in tests.
//!
//! The host is expected to call back into the controller with a
//! [`HostEvent`] when a registered [`Listener`] fires or a scheduled
//! [`TimerSlot`] elapses. Timers are keyed by slot: scheduling a slot that is
//! already pending replaces it.

use kurbo::{Insets, Rect, Size};

use crate::event::{FixitEvent, ScrollDirection};

/// Document access needed by the sticky controller.
///
/// All coordinates are viewport-relative CSS pixels, as returned by
/// `getBoundingClientRect`.
pub trait Host {
    /// Handle to a document element.
    type Element: Clone + PartialEq + core::fmt::Debug;

    /// Resolves a selector to its first matching element.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Resolves a selector to every matching element, in document order.
    fn query_selector_all(&self, selector: &str) -> alloc::vec::Vec<Self::Element>;

    /// Returns the parent element, if any.
    fn parent_of(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Returns the element's border box relative to the viewport.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Returns the element's computed margins.
    fn computed_margin(&self, element: &Self::Element) -> Insets;

    /// Returns the element's computed padding.
    fn computed_padding(&self, element: &Self::Element) -> Insets;

    /// Returns the root element's client size (`documentElement.clientWidth`
    /// and `clientHeight`).
    fn viewport_size(&self) -> Size;

    /// Returns the window's inner height, which includes a horizontal
    /// scrollbar when one is shown.
    fn inner_height(&self) -> f64;

    /// Returns the full scrollable height of the document.
    fn document_height(&self) -> f64;

    /// Creates an empty element carrying `class` and inserts it immediately
    /// before `sibling`. Returns `None` if `sibling` is detached.
    fn insert_placeholder_before(
        &mut self,
        sibling: &Self::Element,
        class: &'static str,
    ) -> Option<Self::Element>;

    /// Removes an element from the document.
    fn remove_element(&mut self, element: &Self::Element);

    /// Adds a class to an element's class list.
    fn add_class(&mut self, element: &Self::Element, class: &'static str);

    /// Removes a class from an element's class list.
    fn remove_class(&mut self, element: &Self::Element, class: &'static str);

    /// Writes (or clears) one inline style property.
    fn set_style(&mut self, element: &Self::Element, style: Style);

    /// Dispatches a bubbling, cancelable custom event on `element`.
    fn publish(&mut self, element: &Self::Element, event: &FixitEvent);

    /// Starts delivering `listener` events to the controller.
    fn listen(&mut self, listener: Listener);

    /// Stops delivering `listener` events to the controller.
    fn unlisten(&mut self, listener: Listener);

    /// Schedules `slot` to fire once after `delay_ms`, replacing any pending
    /// timer in that slot.
    fn set_timeout(&mut self, slot: TimerSlot, delay_ms: u64);

    /// Schedules `slot` to fire every `period_ms`, replacing any pending
    /// timer in that slot.
    fn set_interval(&mut self, slot: TimerSlot, period_ms: u64);

    /// Cancels whatever is pending in `slot`.
    fn clear_timer(&mut self, slot: TimerSlot);
}

/// One inline style write. `None` clears the property.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Style {
    /// `top`, in pixels.
    Top(Option<f64>),
    /// `width`, in pixels.
    Width(Option<f64>),
    /// `height`, in pixels.
    Height(Option<f64>),
    /// `margin`, per edge.
    Margin(Option<Insets>),
}

/// Event sources the controller subscribes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Window `scroll`.
    Scroll,
    /// Window `resize`.
    Resize,
    /// `fixit:triggerResize` on the target.
    TriggerResize,
    /// `fixit:updateScrollDirection` on the target.
    UpdateScrollDirection,
}

impl Listener {
    /// DOM event type name for this listener.
    #[must_use]
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::TriggerResize => "fixit:triggerResize",
            Self::UpdateScrollDirection => "fixit:updateScrollDirection",
        }
    }

    /// Returns `true` if the listener is registered on the target element
    /// rather than the window.
    #[must_use]
    pub const fn on_target(self) -> bool {
        matches!(self, Self::TriggerResize | Self::UpdateScrollDirection)
    }
}

/// Timer slots owned by the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Debounced enable/disable check.
    Enable,
    /// Periodic re-evaluation poll.
    Poll,
    /// Debounced scroll-direction settle.
    DirectionSettle,
}

/// Everything a host can report back to the controller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// The window scrolled.
    Scroll,
    /// The window resized.
    Resize,
    /// A scheduled timer elapsed.
    Timer(TimerSlot),
    /// `fixit:triggerResize` was dispatched on the target.
    TriggerResize,
    /// `fixit:updateScrollDirection` was dispatched on the target.
    UpdateScrollDirection(ScrollDirection),
}
