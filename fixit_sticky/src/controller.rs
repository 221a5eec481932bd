// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sticky controller: lifecycle, placeholder, positional state, docking,
//! scroll direction and width mirroring for one target element.

use alloc::string::String;
use core::fmt;

use fixit_timing::TrailingDebounce;
use kurbo::Rect;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::classes::{PLACEHOLDER_CLASS, StateClasses};
use crate::direction::{DirectionChange, DirectionDetector};
use crate::event::{FixitEvent, ScrollDirection};
use crate::host::{Host, HostEvent, Listener, Style, TimerSlot};
use crate::options::{FixitOptions, Offset, ParentChoice, Target};
use crate::state::{self, DockTransition, Measurements, StickyState, Transition};

/// Error returned by [`StickyController::try_new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// The target selector matched nothing.
    TargetNotFound {
        /// The selector that failed to resolve.
        selector: String,
    },
    /// The target has no parent, so no placeholder can be inserted before it.
    TargetDetached,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetNotFound { selector } => {
                write!(f, "no element matches target selector {selector:?}")
            }
            Self::TargetDetached => f.write_str("target element is not attached to a parent"),
        }
    }
}

impl core::error::Error for SetupError {}

/// Read-only view of the controller handed to lifecycle callbacks.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Current positional state.
    pub state: StickyState,
    /// Whether sticky behavior is enabled for the current viewport.
    pub enabled: bool,
    /// Current sticky threshold in pixels.
    pub offset: f64,
    /// Committed scroll direction, if any.
    pub direction: Option<ScrollDirection>,
    /// Classes the controller has applied to the target.
    pub classes: StateClasses,
}

bitflags::bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    struct Listeners: u8 {
        const SCROLL = 1 << 0;
        const RESIZE = 1 << 1;
        const TRIGGER_RESIZE = 1 << 2;
        const UPDATE_SCROLL_DIRECTION = 1 << 3;
    }
}

impl Listeners {
    fn of(listener: Listener) -> Self {
        match listener {
            Listener::Scroll => Self::SCROLL,
            Listener::Resize => Self::RESIZE,
            Listener::TriggerResize => Self::TRIGGER_RESIZE,
            Listener::UpdateScrollDirection => Self::UPDATE_SCROLL_DIRECTION,
        }
    }

    fn each(self) -> impl Iterator<Item = Listener> {
        [
            Listener::Scroll,
            Listener::Resize,
            Listener::TriggerResize,
            Listener::UpdateScrollDirection,
        ]
        .into_iter()
        .filter(move |l| self.contains(Self::of(*l)))
    }
}

#[derive(Copy, Clone, Debug)]
enum Hook {
    Init,
    Active,
    Inactive,
}

/// Sticky positioning controller for one target element.
///
/// The controller is driven entirely by its [`Host`]: the host reports
/// scroll, resize, timer and custom events through [`handle`](Self::handle),
/// and the controller answers by reading geometry and writing classes, inline
/// styles and events back through the host.
///
/// A controller whose target could not be resolved is inert: every operation
/// is a no-op.
///
/// ```
/// # use fixit_sticky::{FixitOptions, StickyController, StickyState};
/// # fn demo<H: fixit_sticky::Host<Element = u32>>(host: &mut H) {
/// let mut sticky = StickyController::new(FixitOptions::new(7_u32), host);
/// // ... host delivers events ...
/// if sticky.state() == StickyState::Active {
///     sticky.destroy(host);
/// }
/// # }
/// ```
pub struct StickyController<E> {
    options: FixitOptions<E>,
    target: Option<E>,
    offset_elements: Option<SmallVec<[E; 2]>>,
    offset: f64,
    placeholder: Option<E>,
    container: Option<E>,
    respond_to: Option<E>,
    state: StickyState,
    classes: StateClasses,
    direction: DirectionDetector,
    placeholder_top: f64,
    document_height_at_trigger: Option<f64>,
    enable_check: TrailingDebounce,
    listeners: Listeners,
    polling: bool,
    enabled: bool,
    set_up: bool,
    destroyed: bool,
}

impl<E: Clone + PartialEq + fmt::Debug> StickyController<E> {
    /// Creates a controller and schedules its first enable check.
    ///
    /// If the target cannot be resolved the problem is logged and an inert
    /// controller is returned. Use [`try_new`](Self::try_new) to observe the
    /// error instead.
    pub fn new<H: Host<Element = E>>(options: FixitOptions<E>, host: &mut H) -> Self {
        let mut controller = Self::inert(options);
        match controller.resolve(host) {
            Ok(()) => controller.start(host),
            Err(err) => warn!(%err, "fixit: sticky behavior disabled"),
        }
        controller
    }

    /// Creates a controller, failing if the target cannot be resolved.
    pub fn try_new<H: Host<Element = E>>(
        options: FixitOptions<E>,
        host: &mut H,
    ) -> Result<Self, SetupError> {
        let mut controller = Self::inert(options);
        controller.resolve(host)?;
        controller.start(host);
        Ok(controller)
    }

    fn inert(options: FixitOptions<E>) -> Self {
        let direction = DirectionDetector::new(options.direction);
        let enable_check = TrailingDebounce::new(options.resize_debounce_ms);
        Self {
            options,
            target: None,
            offset_elements: None,
            offset: 0.0,
            placeholder: None,
            container: None,
            respond_to: None,
            state: StickyState::Inactive,
            classes: StateClasses::empty(),
            direction,
            placeholder_top: 0.0,
            document_height_at_trigger: None,
            enable_check,
            listeners: Listeners::empty(),
            polling: false,
            enabled: false,
            set_up: false,
            destroyed: false,
        }
    }

    fn resolve<H: Host<Element = E>>(&mut self, host: &H) -> Result<(), SetupError> {
        let target = match &self.options.target {
            Target::Element(element) => element.clone(),
            Target::Selector(selector) => {
                host.query_selector(selector)
                    .ok_or_else(|| SetupError::TargetNotFound {
                        selector: selector.clone(),
                    })?
            }
        };
        if host.parent_of(&target).is_none() {
            return Err(SetupError::TargetDetached);
        }

        self.offset_elements = match &self.options.offset {
            Offset::Fixed(_) => None,
            Offset::Elements(elements) => Some(elements.iter().cloned().collect()),
            Offset::Selector(selector) => Some(SmallVec::from_vec(host.query_selector_all(selector))),
        };
        self.target = Some(target);
        self.offset = self.measure_offset(host);
        Ok(())
    }

    fn start<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.enable(host, 0);
        self.attach(host, Listener::Resize);
    }

    /// Returns the target, or `None` for an inert controller.
    #[must_use]
    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }

    /// Returns the placeholder once first setup has run.
    #[must_use]
    pub fn placeholder(&self) -> Option<&E> {
        self.placeholder.as_ref()
    }

    /// Returns the current positional state.
    #[must_use]
    pub fn state(&self) -> StickyState {
        self.state
    }

    /// Returns the committed scroll direction.
    #[must_use]
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction.committed()
    }

    /// Returns the current sticky threshold in pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the classes the controller has applied to the target.
    #[must_use]
    pub fn classes(&self) -> StateClasses {
        self.classes
    }

    /// Returns `true` while sticky behavior is enabled for the viewport.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` once [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Returns `true` if the target never resolved.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.target.is_none()
    }

    /// Returns a copy of the observable controller state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            enabled: self.enabled,
            offset: self.offset,
            direction: self.direction.committed(),
            classes: self.classes,
        }
    }

    fn is_live(&self) -> bool {
        self.target.is_some() && !self.destroyed
    }

    /// Routes one host event.
    pub fn handle<H: Host<Element = E>>(&mut self, host: &mut H, event: HostEvent) {
        if !self.is_live() {
            return;
        }
        match event {
            HostEvent::Scroll => {
                if self.enabled {
                    self.evaluate(host, false);
                }
            }
            HostEvent::Resize => {
                self.enable(host, self.options.resize_debounce_ms);
                self.sync_width(host);
            }
            HostEvent::Timer(TimerSlot::Enable) => {
                if self.enable_check.fire() {
                    self.run_enable_check(host);
                }
            }
            HostEvent::Timer(TimerSlot::Poll) => {
                if self.enabled {
                    self.evaluate(host, true);
                }
            }
            HostEvent::Timer(TimerSlot::DirectionSettle) => {
                if let Some(change) = self.direction.settle() {
                    self.apply_direction_change(host, change);
                }
            }
            HostEvent::TriggerResize => self.sync_width(host),
            HostEvent::UpdateScrollDirection(direction) => {
                self.update_scroll_direction(host, direction);
            }
        }
    }

    // Lifecycle

    /// Schedules an enable check after `delay_ms`, superseding any pending
    /// one.
    ///
    /// The check re-measures the offset and consults the enable predicate.
    /// Turning on runs first setup (once), starts the poll and scroll
    /// listener, and evaluates immediately. Turning off deactivates the
    /// target and stops the poll and scroll listener.
    pub fn enable<H: Host<Element = E>>(&mut self, host: &mut H, delay_ms: u64) {
        if !self.is_live() {
            return;
        }
        let delay = self.enable_check.arm_with(delay_ms);
        host.set_timeout(TimerSlot::Enable, delay);
    }

    fn run_enable_check<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.offset = self.measure_offset(host);
        let should_enable = self
            .options
            .enabled
            .as_ref()
            .is_none_or(|predicate| predicate(host.viewport_size()));

        if !self.enabled && should_enable {
            debug!(offset = self.offset, "fixit: enabled");
            self.enabled = true;
            if !self.set_up {
                self.initial_setup(host);
            }
            if !self.polling {
                host.set_interval(TimerSlot::Poll, self.options.poll_interval_ms);
                self.polling = true;
            }
            self.attach(host, Listener::Scroll);
            self.evaluate(host, false);
        } else if self.enabled && !should_enable {
            debug!("fixit: disabled for viewport");
            self.enabled = false;
            self.set_inactive(host);
            self.stop_polling(host);
            self.detach(host, Listener::Scroll);
        }
    }

    fn initial_setup<H: Host<Element = E>>(&mut self, host: &mut H) {
        let Some(target) = self.target.clone() else {
            return;
        };
        self.placeholder = host.insert_placeholder_before(&target, PLACEHOLDER_CLASS);
        if self.placeholder.is_none() {
            warn!("fixit: could not insert placeholder; target stays in flow");
        }

        self.container = match &self.options.contained_in_parent {
            ParentChoice::Off => None,
            ParentChoice::Parent => host.parent_of(&target),
            ParentChoice::Element(element) => Some(element.clone()),
        };

        self.respond_to = match &self.options.respond_to_parent {
            ParentChoice::Off => None,
            ParentChoice::Parent => self
                .container
                .clone()
                .or_else(|| host.parent_of(&target)),
            ParentChoice::Element(element) => Some(element.clone()),
        };
        if self.respond_to.is_some() {
            self.add_classes(host, StateClasses::RESPOND_TO_PARENT);
            self.attach(host, Listener::TriggerResize);
        } else if self.options.respond_to_parent.is_on() {
            warn!("fixit: no parent to respond to; width mirroring disabled");
        }

        self.direction.reset();
        self.set_up = true;

        host.publish(&target, &FixitEvent::Init);
        self.run_hook(Hook::Init);

        self.attach(host, Listener::UpdateScrollDirection);
    }

    /// Tears everything down: deactivates the target, removes the
    /// placeholder, cancels every timer and detaches every listener.
    ///
    /// After the first call the controller never touches the document again;
    /// later calls are no-ops.
    pub fn destroy<H: Host<Element = E>>(&mut self, host: &mut H) {
        if self.destroyed {
            return;
        }
        if self.target.is_some() {
            self.enabled = false;
            if self.set_up {
                self.set_inactive(host);
                self.clear_direction(host);
                self.remove_classes(host, StateClasses::RESPOND_TO_PARENT);
            }
            if let Some(placeholder) = self.placeholder.take() {
                host.remove_element(&placeholder);
            }
            self.enable_check.cancel();
            host.clear_timer(TimerSlot::Enable);
            host.clear_timer(TimerSlot::DirectionSettle);
            self.stop_polling(host);
            for listener in self.listeners.each() {
                host.unlisten(listener);
            }
            self.listeners = Listeners::empty();
            debug!("fixit: destroyed");
        }
        self.destroyed = true;
    }

    fn measure_offset<H: Host<Element = E>>(&self, host: &H) -> f64 {
        match &self.offset_elements {
            Some(elements) => elements
                .iter()
                .map(|element| host.bounding_rect(element).size().round().height)
                .sum(),
            None => match &self.options.offset {
                Offset::Fixed(offset) => *offset,
                _ => 0.0,
            },
        }
    }

    fn attach<H: Host<Element = E>>(&mut self, host: &mut H, listener: Listener) {
        let flag = Listeners::of(listener);
        if !self.listeners.contains(flag) {
            self.listeners.insert(flag);
            host.listen(listener);
        }
    }

    fn detach<H: Host<Element = E>>(&mut self, host: &mut H, listener: Listener) {
        let flag = Listeners::of(listener);
        if self.listeners.contains(flag) {
            self.listeners.remove(flag);
            host.unlisten(listener);
        }
    }

    fn stop_polling<H: Host<Element = E>>(&mut self, host: &mut H) {
        if self.polling {
            host.clear_timer(TimerSlot::Poll);
            self.polling = false;
        }
    }

    // Position state machine

    /// Measures geometry and applies whatever transition it calls for.
    ///
    /// `polled` marks an evaluation from the periodic poll; those are skipped
    /// outright while the document height is unchanged since the last
    /// triggered evaluation. Returns `true` if the target is active, docked
    /// or frozen afterwards.
    pub fn evaluate<H: Host<Element = E>>(&mut self, host: &mut H, polled: bool) -> bool {
        if !self.is_live() || !self.enabled {
            return self.state.is_engaged();
        }
        if polled && self.document_height_at_trigger == Some(host.document_height()) {
            return self.state.is_engaged();
        }
        let (Some(target), Some(placeholder)) = (self.target.clone(), self.placeholder.clone())
        else {
            return self.state.is_engaged();
        };

        let viewport = host.viewport_size();
        let m = Measurements {
            placeholder_top: host.bounding_rect(&placeholder).y0,
            target: host.bounding_rect(&target),
            parent: self.container.as_ref().map(|c| host.bounding_rect(c)),
            viewport_height: viewport.height,
            inner_height: host.inner_height(),
            offset: self.offset,
        };
        self.placeholder_top = m.placeholder_top;
        trace!(?m, state = ?self.state, polled, "fixit: evaluate");

        let triggered = m.is_triggered();
        let direction = if triggered {
            let direction = self.direction.observe(m.placeholder_top);
            self.document_height_at_trigger = Some(host.document_height());

            if m.is_fully_scrolled() {
                self.add_classes(host, StateClasses::SCROLLED);
            }
            if self.options.direction_updates {
                let request = self.direction.request(direction, m.placeholder_top);
                if let Some(change) = request.change {
                    self.apply_direction_change(host, change);
                }
                host.set_timeout(TimerSlot::DirectionSettle, request.settle_after_ms);
            }
            direction
        } else {
            None
        };

        match state::position_transition(self.state, &m, direction) {
            Some(Transition::Activate { to_bottom }) => self.set_active(host, to_bottom),
            Some(Transition::Freeze) => self.set_frozen(host),
            Some(Transition::Deactivate) => self.set_inactive(host),
            None => {}
        }

        if triggered {
            self.check_docking(host);
        }

        self.state.is_engaged()
    }

    /// Docks or undocks an active target against its containing parent.
    ///
    /// No-op without a containing parent or while not active.
    pub fn check_docking<H: Host<Element = E>>(&mut self, host: &mut H) {
        if !self.is_live() || !self.state.is_active() {
            return;
        }
        let (Some(target), Some(container)) = (self.target.as_ref(), self.container.as_ref())
        else {
            return;
        };
        let target_rect = host.bounding_rect(target);
        let parent_rect = host.bounding_rect(container);
        let viewport_height = host.viewport_size().height;

        match state::docking_transition(
            self.state,
            target_rect,
            parent_rect,
            viewport_height,
            self.offset,
        ) {
            Some(DockTransition::Dock) => self.set_docked(host),
            Some(DockTransition::Undock) => self.set_undocked(host),
            None => {}
        }
    }

    fn set_active<H: Host<Element = E>>(&mut self, host: &mut H, to_bottom: bool) {
        let Some(target) = self.target.clone() else {
            return;
        };
        debug!(to_bottom, from = ?self.state, "fixit: active");
        self.state = StickyState::Active;
        self.sync_placeholder(host, &target, true);
        self.remove_classes(host, StateClasses::FROZEN);
        self.add_classes(host, StateClasses::ACTIVE);
        if to_bottom {
            self.add_classes(host, StateClasses::BOTTOM);
            host.set_style(&target, Style::Top(None));
        } else {
            self.pin_top(host, &target);
        }
        self.sync_width(host);

        host.publish(&target, &FixitEvent::Active);
        self.run_hook(Hook::Active);
    }

    fn set_frozen<H: Host<Element = E>>(&mut self, host: &mut H) {
        let Some(target) = self.target.clone() else {
            return;
        };
        let target_rect = host.bounding_rect(&target);
        let reference = self
            .container
            .clone()
            .or_else(|| host.parent_of(&target))
            .map_or(Rect::ZERO, |r| host.bounding_rect(&r));
        let top = state::frozen_top(reference, target_rect);
        debug!(top, "fixit: frozen");

        self.state = StickyState::Frozen;
        self.sync_placeholder(host, &target, true);
        host.set_style(&target, Style::Top(Some(top)));
        self.remove_classes(host, StateClasses::BOTTOM | StateClasses::ACTIVE);
        self.add_classes(host, StateClasses::FROZEN);
    }

    fn set_inactive<H: Host<Element = E>>(&mut self, host: &mut H) {
        let Some(target) = self.target.clone() else {
            return;
        };
        debug!(from = ?self.state, "fixit: inactive");
        self.state = StickyState::Inactive;
        self.sync_placeholder(host, &target, false);
        self.remove_classes(host, StateClasses::POSITIONAL);

        // Injected directions outlive deactivation when tracking is off.
        if self.options.direction_updates {
            self.clear_direction(host);
        }

        host.set_style(&target, Style::Top(None));
        if self.respond_to.is_some() {
            host.set_style(&target, Style::Width(None));
        }

        host.publish(&target, &FixitEvent::Inactive);
        self.run_hook(Hook::Inactive);
    }

    fn set_docked<H: Host<Element = E>>(&mut self, host: &mut H) {
        let Some(target) = self.target.clone() else {
            return;
        };
        debug!("fixit: docked");
        self.state = StickyState::Docked;
        self.add_classes(host, StateClasses::DOCKED);
        self.remove_classes(host, StateClasses::BOTTOM);
        host.set_style(&target, Style::Top(None));
    }

    fn set_undocked<H: Host<Element = E>>(&mut self, host: &mut H) {
        let Some(target) = self.target.clone() else {
            return;
        };
        debug!("fixit: undocked");
        self.state = StickyState::Active;
        self.remove_classes(host, StateClasses::DOCKED);
        self.pin_top(host, &target);
    }

    fn pin_top<H: Host<Element = E>>(&self, host: &mut H, target: &E) {
        let top = self.options.use_offset_on_target.then_some(self.offset);
        host.set_style(target, Style::Top(top));
    }

    // Placeholder

    fn sync_placeholder<H: Host<Element = E>>(&self, host: &mut H, target: &E, mirror: bool) {
        let Some(placeholder) = self.placeholder.as_ref() else {
            return;
        };
        if mirror {
            let height = host.bounding_rect(target).height();
            let margin = host.computed_margin(target);
            host.set_style(placeholder, Style::Height(Some(height)));
            host.set_style(placeholder, Style::Margin(Some(margin)));
        } else {
            host.set_style(placeholder, Style::Height(None));
            host.set_style(placeholder, Style::Margin(None));
        }
    }

    // Parent responsiveness

    /// Mirrors the respond-to parent's content width onto the target.
    ///
    /// Only has an effect while active, docked or frozen.
    pub fn sync_width<H: Host<Element = E>>(&mut self, host: &mut H) {
        if !self.is_live() || !self.state.is_engaged() {
            return;
        }
        let (Some(target), Some(parent)) = (self.target.as_ref(), self.respond_to.as_ref()) else {
            return;
        };
        let padding = host.computed_padding(parent);
        let width = host.bounding_rect(parent).width() - padding.x0 - padding.x1;
        trace!(width, "fixit: sync width");
        host.set_style(target, Style::Width(Some(width)));
    }

    // Scroll direction

    /// Commits an externally supplied direction, bypassing the threshold and
    /// throttle.
    pub fn update_scroll_direction<H: Host<Element = E>>(
        &mut self,
        host: &mut H,
        direction: ScrollDirection,
    ) {
        if !self.is_live() || !self.set_up {
            return;
        }
        if let Some(change) = self.direction.force(direction, self.placeholder_top) {
            self.apply_direction_change(host, change);
        }
    }

    fn apply_direction_change<H: Host<Element = E>>(&mut self, host: &mut H, change: DirectionChange) {
        let Some(target) = self.target.clone() else {
            return;
        };
        debug!(previous = ?change.previous, new = %change.new, "fixit: scroll direction");
        let new = StateClasses::for_direction(change.new);
        self.remove_classes(host, (StateClasses::SCROLL_UP | StateClasses::SCROLL_DOWN) - new);
        self.add_classes(host, new);
        if change.previous.is_some() {
            self.add_classes(host, StateClasses::SCROLL_DIRECTION_CHANGE);
        }
        host.publish(
            &target,
            &FixitEvent::ScrollDirectionChange {
                previous: change.previous,
                new: change.new,
            },
        );
    }

    fn clear_direction<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.remove_classes(host, StateClasses::DIRECTION);
        host.clear_timer(TimerSlot::DirectionSettle);
        self.direction.reset();
    }

    // Classes and hooks

    fn add_classes<H: Host<Element = E>>(&mut self, host: &mut H, classes: StateClasses) {
        let Some(target) = self.target.as_ref() else {
            return;
        };
        let added = classes.difference(self.classes);
        for name in added.class_names() {
            host.add_class(target, name);
        }
        self.classes.insert(added);
    }

    fn remove_classes<H: Host<Element = E>>(&mut self, host: &mut H, classes: StateClasses) {
        let Some(target) = self.target.as_ref() else {
            return;
        };
        let removed = classes.intersection(self.classes);
        for name in removed.class_names() {
            host.remove_class(target, name);
        }
        self.classes.remove(removed);
    }

    fn run_hook(&mut self, hook: Hook) {
        let snapshot = self.snapshot();
        let Some(target) = self.target.as_ref() else {
            return;
        };
        let callback = match hook {
            Hook::Init => self.options.on_init.as_mut(),
            Hook::Active => self.options.on_active.as_mut(),
            Hook::Inactive => self.options.on_inactive.as_mut(),
        };
        if let Some(callback) = callback {
            callback(target, &snapshot);
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for StickyController<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyController")
            .field("options", &self.options)
            .field("target", &self.target)
            .field("offset_elements", &self.offset_elements)
            .field("offset", &self.offset)
            .field("placeholder", &self.placeholder)
            .field("container", &self.container)
            .field("respond_to", &self.respond_to)
            .field("state", &self.state)
            .field("classes", &self.classes)
            .field("direction", &self.direction)
            .field("placeholder_top", &self.placeholder_top)
            .field(
                "document_height_at_trigger",
                &self.document_height_at_trigger,
            )
            .field("enable_check", &self.enable_check)
            .field("listeners", &self.listeners)
            .field("polling", &self.polling)
            .field("enabled", &self.enabled)
            .field("set_up", &self.set_up)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
