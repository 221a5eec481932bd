// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;

use crate::controller::Snapshot;

/// Element to make sticky.
#[derive(Clone, Debug, PartialEq)]
pub enum Target<E> {
    /// An element handle.
    Element(E),
    /// A selector resolved once, at construction.
    Selector(String),
}

/// Distance from the viewport top at which the target sticks.
#[derive(Clone, Debug, PartialEq)]
pub enum Offset<E> {
    /// A fixed number of pixels.
    Fixed(f64),
    /// The summed, rounded heights of these elements (a fixed header, for
    /// example), re-measured on every enable check.
    Elements(Vec<E>),
    /// Like [`Offset::Elements`], resolved from a selector at construction.
    Selector(String),
}

impl<E> Default for Offset<E> {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

/// Which element, if any, an optional feature measures against.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ParentChoice<E> {
    /// Feature disabled.
    #[default]
    Off,
    /// Use the natural default: the target's parent for containment, the
    /// containing parent (or else the target's parent) for width mirroring.
    Parent,
    /// Use this element.
    Element(E),
}

impl<E> ParentChoice<E> {
    /// Returns `true` unless the feature is [`ParentChoice::Off`].
    #[must_use]
    pub fn is_on(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl<E> From<bool> for ParentChoice<E> {
    fn from(on: bool) -> Self {
        if on { Self::Parent } else { Self::Off }
    }
}

/// Tuning for scroll direction detection.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DirectionConfig {
    /// Milliseconds after the last triggered evaluation before the direction
    /// settles. Values between 75 and 300 work well.
    pub wait_ms: u64,
    /// Minimum pixel distance from the last commit before a new direction is
    /// committed.
    pub threshold: f64,
    /// Number of triggered evaluations between forced direction checks while
    /// scrolling continues.
    pub throttle: u32,
}

impl Default for DirectionConfig {
    fn default() -> Self {
        Self {
            wait_ms: 100,
            threshold: 75.0,
            throttle: 20,
        }
    }
}

/// Lifecycle hook. Receives the target and a snapshot of the controller.
pub type Callback<E> = Box<dyn FnMut(&E, &Snapshot)>;

/// Predicate deciding whether sticky behavior applies to the current
/// viewport. Receives the viewport's client size.
pub type EnabledPredicate = Box<dyn Fn(Size) -> bool>;

/// Options for [`StickyController`](crate::StickyController).
///
/// ```
/// use fixit_sticky::{FixitOptions, Offset};
///
/// let options = FixitOptions::selector("#sidebar")
///     .with_offset(Offset::<u32>::Selector(".site-header".into()))
///     .with_contained_in_parent(true)
///     .with_direction_updates(true)
///     .with_enabled(|viewport| viewport.width >= 768.0);
/// assert!(options.direction_updates);
/// ```
pub struct FixitOptions<E> {
    /// Element to make sticky.
    pub target: Target<E>,
    /// Viewport gate. `None` always enables.
    pub enabled: Option<EnabledPredicate>,
    /// Sticky threshold.
    pub offset: Offset<E>,
    /// Direction detection tuning.
    pub direction: DirectionConfig,
    /// Containment ("docking") against a parent.
    pub contained_in_parent: ParentChoice<E>,
    /// Width mirroring from a parent.
    pub respond_to_parent: ParentChoice<E>,
    /// Write the offset as the target's inline `top` while active.
    pub use_offset_on_target: bool,
    /// Track scroll direction and expose it as classes and events.
    pub direction_updates: bool,
    /// Period of the re-evaluation poll, in milliseconds.
    pub poll_interval_ms: u64,
    /// Debounce applied to enable checks triggered by window resize.
    pub resize_debounce_ms: u64,
    /// Runs once after first setup.
    pub on_init: Option<Callback<E>>,
    /// Runs each time the target becomes active.
    pub on_active: Option<Callback<E>>,
    /// Runs each time the target becomes inactive.
    pub on_inactive: Option<Callback<E>>,
}

impl<E> FixitOptions<E> {
    /// Options for a target element handle, everything else defaulted.
    #[must_use]
    pub fn new(target: E) -> Self {
        Self::with_target(Target::Element(target))
    }

    /// Options for a target resolved from a selector.
    #[must_use]
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::with_target(Target::Selector(selector.into()))
    }

    fn with_target(target: Target<E>) -> Self {
        Self {
            target,
            enabled: None,
            offset: Offset::default(),
            direction: DirectionConfig::default(),
            contained_in_parent: ParentChoice::Off,
            respond_to_parent: ParentChoice::Off,
            use_offset_on_target: false,
            direction_updates: false,
            poll_interval_ms: 100,
            resize_debounce_ms: 150,
            on_init: None,
            on_active: None,
            on_inactive: None,
        }
    }

    /// Sets the viewport gate.
    #[must_use]
    pub fn with_enabled(mut self, enabled: impl Fn(Size) -> bool + 'static) -> Self {
        self.enabled = Some(Box::new(enabled));
        self
    }

    /// Sets the sticky threshold.
    #[must_use]
    pub fn with_offset(mut self, offset: Offset<E>) -> Self {
        self.offset = offset;
        self
    }

    /// Sets direction detection tuning.
    #[must_use]
    pub fn with_direction_config(mut self, direction: DirectionConfig) -> Self {
        self.direction = direction;
        self
    }

    /// Enables or disables direction tracking.
    #[must_use]
    pub fn with_direction_updates(mut self, on: bool) -> Self {
        self.direction_updates = on;
        self
    }

    /// Configures containment against a parent.
    #[must_use]
    pub fn with_contained_in_parent(mut self, parent: impl Into<ParentChoice<E>>) -> Self {
        self.contained_in_parent = parent.into();
        self
    }

    /// Configures width mirroring.
    #[must_use]
    pub fn with_respond_to_parent(mut self, parent: impl Into<ParentChoice<E>>) -> Self {
        self.respond_to_parent = parent.into();
        self
    }

    /// Writes the offset as inline `top` while active.
    #[must_use]
    pub fn with_offset_on_target(mut self, on: bool) -> Self {
        self.use_offset_on_target = on;
        self
    }

    /// Sets the hook run after first setup.
    #[must_use]
    pub fn on_init(mut self, f: impl FnMut(&E, &Snapshot) + 'static) -> Self {
        self.on_init = Some(Box::new(f));
        self
    }

    /// Sets the hook run on entering the active state.
    #[must_use]
    pub fn on_active(mut self, f: impl FnMut(&E, &Snapshot) + 'static) -> Self {
        self.on_active = Some(Box::new(f));
        self
    }

    /// Sets the hook run on entering the inactive state.
    #[must_use]
    pub fn on_inactive(mut self, f: impl FnMut(&E, &Snapshot) + 'static) -> Self {
        self.on_inactive = Some(Box::new(f));
        self
    }
}

impl<E: fmt::Debug> fmt::Debug for FixitOptions<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixitOptions")
            .field("target", &self.target)
            .field("enabled", &self.enabled.is_some())
            .field("offset", &self.offset)
            .field("direction", &self.direction)
            .field("contained_in_parent", &self.contained_in_parent)
            .field("respond_to_parent", &self.respond_to_parent)
            .field("use_offset_on_target", &self.use_offset_on_target)
            .field("direction_updates", &self.direction_updates)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("resize_debounce_ms", &self.resize_debounce_ms)
            .field("on_init", &self.on_init.is_some())
            .field("on_active", &self.on_active.is_some())
            .field("on_inactive", &self.on_inactive.is_some())
            .finish()
    }
}
