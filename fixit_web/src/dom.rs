// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `web-sys` host and the owning [`FixIt`] handle.

use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use fixit_sticky::{
    FixitEvent, FixitOptions, Host, HostEvent, Listener, ScrollDirection, Snapshot,
    StickyController, Style, TimerSlot,
};
use js_sys::{Function, Object, Reflect};
use kurbo::{Insets, Rect, Size};
use tracing::{trace, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CustomEvent, CustomEventInit, Document, Element, Event, EventTarget, HtmlElement, Node,
    Window,
};

use crate::{css_declaration, insets_from_css};

type EventClosure = Closure<dyn FnMut(Event)>;
type TimerClosure = Closure<dyn FnMut()>;

struct Driver {
    sticky: StickyController<Element>,
    host: DomHost,
}

/// Hands one event to the controller unless it is already running.
fn deliver(driver: &Weak<RefCell<Driver>>, event: HostEvent) {
    let Some(shared) = driver.upgrade() else {
        return;
    };
    let Ok(mut guard) = shared.try_borrow_mut() else {
        trace!(?event, "fixit: controller busy; event dropped");
        return;
    };
    let Driver { sticky, host } = &mut *guard;
    // Nothing retired earlier can be on the stack now.
    host.retired_events.clear();
    host.retired_timers.clear();
    sticky.handle(host, event);
}

fn requested_direction(event: &Event) -> Option<ScrollDirection> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    let value = Reflect::get(&detail, &JsValue::from("scrollDirection"))
        .ok()?
        .as_string()?;
    ScrollDirection::parse(&value)
}

struct Timer {
    slot: TimerSlot,
    handle: i32,
    repeating: bool,
    callback: TimerClosure,
}

/// [`Host`] over the browser document.
///
/// Listener and timer closures hold a weak reference back to the owning
/// [`FixIt`], so they go quiet once it is dropped. Closures that are
/// unregistered while the controller is running are parked until the next
/// delivery, since one of them may be the closure currently executing.
pub struct DomHost {
    window: Window,
    document: Document,
    target: Option<Element>,
    driver: Weak<RefCell<Driver>>,
    listeners: Vec<(Listener, EventTarget, EventClosure)>,
    timers: Vec<Timer>,
    retired_events: Vec<EventClosure>,
    retired_timers: Vec<TimerClosure>,
}

impl DomHost {
    fn new(window: Window, document: Document, driver: Weak<RefCell<Driver>>) -> Self {
        Self {
            window,
            document,
            target: None,
            driver,
            listeners: Vec::new(),
            timers: Vec::new(),
            retired_events: Vec::new(),
            retired_timers: Vec::new(),
        }
    }

    fn computed_insets(&self, element: &Element, property: &str) -> Insets {
        let Some(style) = self.window.get_computed_style(element).ok().flatten() else {
            return Insets::ZERO;
        };
        let edge = |side: &str| {
            style
                .get_property_value(&format!("{property}-{side}"))
                .unwrap_or_default()
        };
        insets_from_css(&edge("top"), &edge("right"), &edge("bottom"), &edge("left"))
    }

    fn schedule(&mut self, slot: TimerSlot, delay_ms: u64, repeating: bool) {
        self.clear_timer(slot);
        let driver = self.driver.clone();
        let callback = TimerClosure::new(move || deliver(&driver, HostEvent::Timer(slot)));
        let function: &Function = callback.as_ref().unchecked_ref();
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let handle = if repeating {
            self.window
                .set_interval_with_callback_and_timeout_and_arguments_0(function, timeout)
        } else {
            self.window
                .set_timeout_with_callback_and_timeout_and_arguments_0(function, timeout)
        };
        match handle {
            Ok(handle) => self.timers.push(Timer {
                slot,
                handle,
                repeating,
                callback,
            }),
            Err(err) => warn!(?err, ?slot, "fixit: could not schedule timer"),
        }
    }
}

impl Host for DomHost {
    type Element = Element;

    fn query_selector(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn parent_of(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn bounding_rect(&self, element: &Element) -> Rect {
        let r = element.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }

    fn computed_margin(&self, element: &Element) -> Insets {
        self.computed_insets(element, "margin")
    }

    fn computed_padding(&self, element: &Element) -> Insets {
        self.computed_insets(element, "padding")
    }

    fn viewport_size(&self) -> Size {
        self.document.document_element().map_or(Size::ZERO, |root| {
            Size::new(f64::from(root.client_width()), f64::from(root.client_height()))
        })
    }

    fn inner_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        let mut height = 0;
        if let Some(body) = self.document.body() {
            height = height.max(body.scroll_height()).max(body.offset_height());
        }
        if let Some(root) = self.document.document_element() {
            height = height.max(root.client_height()).max(root.scroll_height());
            if let Some(root) = root.dyn_ref::<HtmlElement>() {
                height = height.max(root.offset_height());
            }
        }
        f64::from(height)
    }

    fn insert_placeholder_before(&mut self, sibling: &Element, class: &'static str) -> Option<Element> {
        let parent = sibling.parent_node()?;
        let placeholder = self.document.create_element("div").ok()?;
        placeholder.set_class_name(class);
        let before: &Node = sibling;
        parent.insert_before(&placeholder, Some(before)).ok()?;
        Some(placeholder)
    }

    fn remove_element(&mut self, element: &Element) {
        element.remove();
    }

    fn add_class(&mut self, element: &Element, class: &'static str) {
        if let Err(err) = element.class_list().add_1(class) {
            trace!(?err, class, "fixit: classList.add failed");
        }
    }

    fn remove_class(&mut self, element: &Element, class: &'static str) {
        if let Err(err) = element.class_list().remove_1(class) {
            trace!(?err, class, "fixit: classList.remove failed");
        }
    }

    fn set_style(&mut self, element: &Element, style: Style) {
        let Some(element) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        let declarations = element.style();
        let (property, value) = css_declaration(style);
        let result = match value {
            Some(value) => declarations.set_property(property, &value),
            None => declarations.remove_property(property).map(drop),
        };
        if let Err(err) = result {
            trace!(?err, property, "fixit: style write failed");
        }
    }

    fn publish(&mut self, element: &Element, event: &FixitEvent) {
        let detail = match *event {
            FixitEvent::ScrollDirectionChange { previous, new } => {
                let detail = Object::new();
                let previous = previous.map_or(JsValue::UNDEFINED, |d| JsValue::from(d.as_str()));
                let fields = [
                    ("previousDirection", previous),
                    ("newDirection", JsValue::from(new.as_str())),
                ];
                for (key, value) in fields {
                    if Reflect::set(&detail, &JsValue::from(key), &value).is_err() {
                        trace!(key, "fixit: could not fill event detail");
                    }
                }
                detail.into()
            }
            _ => JsValue::NULL,
        };

        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_detail(&detail);
        match CustomEvent::new_with_event_init_dict(event.event_type(), &init) {
            Ok(custom) => {
                if let Err(err) = element.dispatch_event(&custom) {
                    warn!(?err, event = event.event_type(), "fixit: dispatch failed");
                }
            }
            Err(err) => warn!(?err, event = event.event_type(), "fixit: could not create event"),
        }
    }

    fn listen(&mut self, listener: Listener) {
        let source: EventTarget = if listener.on_target() {
            let Some(target) = self.target.clone() else {
                warn!(?listener, "fixit: no target to listen on");
                return;
            };
            target.into()
        } else {
            self.window.clone().into()
        };

        let driver = self.driver.clone();
        let callback = EventClosure::new(move |event: Event| {
            let host_event = match listener {
                Listener::Scroll => HostEvent::Scroll,
                Listener::Resize => HostEvent::Resize,
                Listener::TriggerResize => HostEvent::TriggerResize,
                Listener::UpdateScrollDirection => match requested_direction(&event) {
                    Some(direction) => HostEvent::UpdateScrollDirection(direction),
                    None => {
                        trace!("fixit: updateScrollDirection without a direction");
                        return;
                    }
                },
            };
            deliver(&driver, host_event);
        });

        let function: &Function = callback.as_ref().unchecked_ref();
        match source.add_event_listener_with_callback(listener.event_type(), function) {
            Ok(()) => self.listeners.push((listener, source, callback)),
            Err(err) => warn!(?err, ?listener, "fixit: could not add listener"),
        }
    }

    fn unlisten(&mut self, listener: Listener) {
        let Some(index) = self.listeners.iter().position(|(l, ..)| *l == listener) else {
            return;
        };
        let (_, source, callback) = self.listeners.swap_remove(index);
        let function: &Function = callback.as_ref().unchecked_ref();
        if let Err(err) = source.remove_event_listener_with_callback(listener.event_type(), function)
        {
            trace!(?err, ?listener, "fixit: could not remove listener");
        }
        self.retired_events.push(callback);
    }

    fn set_timeout(&mut self, slot: TimerSlot, delay_ms: u64) {
        self.schedule(slot, delay_ms, false);
    }

    fn set_interval(&mut self, slot: TimerSlot, period_ms: u64) {
        self.schedule(slot, period_ms, true);
    }

    fn clear_timer(&mut self, slot: TimerSlot) {
        let Some(index) = self.timers.iter().position(|t| t.slot == slot) else {
            return;
        };
        let timer = self.timers.swap_remove(index);
        if timer.repeating {
            self.window.clear_interval_with_handle(timer.handle);
        } else {
            self.window.clear_timeout_with_handle(timer.handle);
        }
        self.retired_timers.push(timer.callback);
    }
}

impl fmt::Debug for DomHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners: Vec<Listener> = self.listeners.iter().map(|(l, ..)| *l).collect();
        let timers: Vec<TimerSlot> = self.timers.iter().map(|t| t.slot).collect();
        f.debug_struct("DomHost")
            .field("target", &self.target)
            .field("listeners", &listeners)
            .field("timers", &timers)
            .finish_non_exhaustive()
    }
}

/// A sticky controller bound to the browser document.
///
/// The first enable check is scheduled on construction. Dropping the handle
/// destroys the controller.
pub struct FixIt {
    driver: Rc<RefCell<Driver>>,
}

impl FixIt {
    /// Binds `options` to the current window's document.
    ///
    /// Fails only if there is no window or document. A target that cannot
    /// be resolved yields an inert handle whose methods do nothing (the
    /// reason is logged); see [`FixIt::is_inert`].
    pub fn new(options: FixitOptions<Element>) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from("fixit: no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from("fixit: window has no document"))?;

        let driver = Rc::new_cyclic(|weak| {
            let mut host = DomHost::new(window, document, weak.clone());
            let sticky = StickyController::new(options, &mut host);
            host.target = sticky.target().cloned();
            RefCell::new(Driver { sticky, host })
        });
        Ok(Self { driver })
    }

    /// Returns `true` if the target never resolved.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.driver
            .try_borrow()
            .is_ok_and(|d| d.sticky.is_inert())
    }

    /// Schedules an enable check after `delay_ms`.
    pub fn enable_sticky(&self, delay_ms: u64) {
        self.with(|sticky, host| sticky.enable(host, delay_ms));
    }

    /// Tears the controller down. Later calls do nothing.
    pub fn destroy_sticky(&self) {
        if self.with(|sticky, host| sticky.destroy(host)).is_none() {
            warn!("fixit: destroy requested while the controller is running");
        }
    }

    /// Returns the target element, or `None` while the controller is running.
    #[must_use]
    pub fn target(&self) -> Option<Element> {
        self.driver
            .try_borrow()
            .ok()
            .and_then(|d| d.sticky.target().cloned())
    }

    /// Returns a snapshot of the controller, or `None` while it is running.
    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.driver.try_borrow().ok().map(|d| d.sticky.snapshot())
    }

    /// Runs `f` with the controller and its host, unless the controller is
    /// already running further up the stack.
    pub fn with<R>(
        &self,
        f: impl FnOnce(&mut StickyController<Element>, &mut DomHost) -> R,
    ) -> Option<R> {
        let mut guard = self.driver.try_borrow_mut().ok()?;
        let Driver { sticky, host } = &mut *guard;
        Some(f(sticky, host))
    }
}

impl Drop for FixIt {
    fn drop(&mut self) {
        self.destroy_sticky();
    }
}

impl fmt::Debug for FixIt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("FixIt")
            .field("snapshot", &snapshot)
            .finish_non_exhaustive()
    }
}
