// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory document used by the controller integration tests.
//!
//! `FakeHost` keeps each element's natural rectangle in document
//! coordinates and applies a tiny slice of CSS when answering
//! `bounding_rect`, enough to mimic the stylesheet a sticky widget ships
//! with:
//!
//! - `fixit--active`: `position: fixed`, at the inline `top` (default 0), or
//!   with `bottom: 0` when `fixit--bottom` is also set.
//! - `fixit--frozen`: `position: absolute` at the inline `top` inside the
//!   parent.
//! - `fixit--docked`: `position: absolute; bottom: 0` inside the parent.
//!
//! Timers run on a [`TimerQueue`] virtual clock.

#![allow(
    missing_docs,
    dead_code,
    unreachable_pub,
    reason = "Integration-test helper module; not every test uses every helper."
)]

use fixit_sticky::{
    FixitEvent, Host, HostEvent, Listener, StickyController, Style, TimerSlot,
};
use fixit_timing::TimerQueue;
use kurbo::{Insets, Rect, Size};

pub type NodeId = usize;

#[derive(Clone, Debug, Default)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub natural: Rect,
    pub classes: Vec<&'static str>,
    pub top: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Option<Insets>,
    pub computed_margin: Insets,
    pub padding: Insets,
    pub attached: bool,
    /// Positioned against the viewport regardless of scroll.
    pub fixed: bool,
}

#[derive(Debug)]
pub struct FakeHost {
    pub nodes: Vec<Node>,
    pub selectors: Vec<(&'static str, NodeId)>,
    pub scroll_y: f64,
    pub viewport: Size,
    pub inner_height: f64,
    pub document_height: f64,
    pub published: Vec<(NodeId, FixitEvent)>,
    pub listening: Vec<Listener>,
    pub listen_calls: Vec<Listener>,
    pub timers: TimerQueue<TimerSlot>,
    pub mutations: usize,
}

impl FakeHost {
    /// An 800px-tall viewport over a 5000px document with a `body` root.
    pub fn new() -> Self {
        let mut host = Self {
            nodes: Vec::new(),
            selectors: Vec::new(),
            scroll_y: 0.0,
            viewport: Size::new(1_000.0, 800.0),
            inner_height: 800.0,
            document_height: 5_000.0,
            published: Vec::new(),
            listening: Vec::new(),
            listen_calls: Vec::new(),
            timers: TimerQueue::new(),
            mutations: 0,
        };
        host.add(None, Rect::new(0.0, 0.0, 1_000.0, 5_000.0));
        host
    }

    pub const BODY: NodeId = 0;

    pub fn add(&mut self, parent: Option<NodeId>, natural: Rect) -> NodeId {
        self.nodes.push(Node {
            parent,
            natural,
            attached: true,
            ..Node::default()
        });
        self.nodes.len() - 1
    }

    pub fn add_fixed(&mut self, natural: Rect) -> NodeId {
        let id = self.add(Some(Self::BODY), natural);
        self.nodes[id].fixed = true;
        id
    }

    pub fn register(&mut self, selector: &'static str, id: NodeId) {
        self.selectors.push((selector, id));
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id].classes.iter().any(|c| *c == class)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn count_published(&self, event_type: &str) -> usize {
        self.published
            .iter()
            .filter(|(_, e)| e.event_type() == event_type)
            .count()
    }

    pub fn bounding_rect_of(&self, id: NodeId) -> Rect {
        self.bounding_rect(&id)
    }

    pub fn listen_count(&self, listener: Listener) -> usize {
        self.listening.iter().filter(|l| **l == listener).count()
    }

    fn natural_on_screen(&self, node: &Node) -> Rect {
        if node.fixed {
            node.natural
        } else {
            Rect::new(
                node.natural.x0,
                node.natural.y0 - self.scroll_y,
                node.natural.x1,
                node.natural.y1 - self.scroll_y,
            )
        }
    }

    fn parent_rect(&self, node: &Node) -> Rect {
        node.parent
            .map_or(Rect::ZERO, |parent| self.bounding_rect(&parent))
    }
}

impl Host for FakeHost {
    type Element = NodeId;

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.selectors
            .iter()
            .find(|(s, _)| *s == selector)
            .map(|(_, id)| *id)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        self.selectors
            .iter()
            .filter(|(s, _)| *s == selector)
            .map(|(_, id)| *id)
            .collect()
    }

    fn parent_of(&self, element: &NodeId) -> Option<NodeId> {
        self.nodes[*element].parent
    }

    fn bounding_rect(&self, element: &NodeId) -> Rect {
        let node = &self.nodes[*element];
        if !node.attached {
            return Rect::ZERO;
        }
        let natural = self.natural_on_screen(node);
        let height = node.height.unwrap_or(natural.height());
        let width = node.width.unwrap_or(natural.width());
        let has = |class: &str| node.classes.iter().any(|c| *c == class);

        let y0 = if has("fixit--docked") {
            self.parent_rect(node).y1 - height
        } else if has("fixit--frozen") {
            self.parent_rect(node).y0 + node.top.unwrap_or(0.0)
        } else if has("fixit--active") {
            if has("fixit--bottom") {
                self.viewport.height - height
            } else {
                node.top.unwrap_or(0.0)
            }
        } else {
            natural.y0
        };
        Rect::new(natural.x0, y0, natural.x0 + width, y0 + height)
    }

    fn computed_margin(&self, element: &NodeId) -> Insets {
        self.nodes[*element].computed_margin
    }

    fn computed_padding(&self, element: &NodeId) -> Insets {
        self.nodes[*element].padding
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn inner_height(&self) -> f64 {
        self.inner_height
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn insert_placeholder_before(&mut self, sibling: &NodeId, class: &'static str) -> Option<NodeId> {
        let target = self.nodes[*sibling].clone();
        let parent = target.parent?;
        self.mutations += 1;
        let natural = Rect::new(
            target.natural.x0,
            target.natural.y0,
            target.natural.x1,
            target.natural.y0,
        );
        let id = self.add(Some(parent), natural);
        self.nodes[id].classes.push(class);
        Some(id)
    }

    fn remove_element(&mut self, element: &NodeId) {
        self.mutations += 1;
        self.nodes[*element].attached = false;
    }

    fn add_class(&mut self, element: &NodeId, class: &'static str) {
        self.mutations += 1;
        let classes = &mut self.nodes[*element].classes;
        if !classes.contains(&class) {
            classes.push(class);
        }
    }

    fn remove_class(&mut self, element: &NodeId, class: &'static str) {
        self.mutations += 1;
        self.nodes[*element].classes.retain(|c| *c != class);
    }

    fn set_style(&mut self, element: &NodeId, style: Style) {
        self.mutations += 1;
        let node = &mut self.nodes[*element];
        match style {
            Style::Top(v) => node.top = v,
            Style::Width(v) => node.width = v,
            Style::Height(v) => node.height = v,
            Style::Margin(v) => node.margin = v,
        }
    }

    fn publish(&mut self, element: &NodeId, event: &FixitEvent) {
        self.mutations += 1;
        self.published.push((*element, *event));
    }

    fn listen(&mut self, listener: Listener) {
        self.listening.push(listener);
        self.listen_calls.push(listener);
    }

    fn unlisten(&mut self, listener: Listener) {
        if let Some(i) = self.listening.iter().position(|l| *l == listener) {
            self.listening.remove(i);
        }
    }

    fn set_timeout(&mut self, slot: TimerSlot, delay_ms: u64) {
        self.timers.schedule_once(slot, delay_ms);
    }

    fn set_interval(&mut self, slot: TimerSlot, period_ms: u64) {
        self.timers.schedule_repeating(slot, period_ms);
    }

    fn clear_timer(&mut self, slot: TimerSlot) {
        self.timers.cancel(slot);
    }
}

/// Advances the virtual clock by `ms`, delivering each timer as it fires.
pub fn advance(host: &mut FakeHost, sticky: &mut StickyController<NodeId>, ms: u64) {
    let until = host.timers.now() + ms;
    while let Some(slot) = host.timers.pop_due(until) {
        sticky.handle(host, HostEvent::Timer(slot));
    }
    host.timers.advance_to(until);
}

/// Runs only the timers already due, without moving the clock.
pub fn flush(host: &mut FakeHost, sticky: &mut StickyController<NodeId>) {
    advance(host, sticky, 0);
}

/// Scrolls the window and delivers a scroll event if one is being listened for.
pub fn scroll_to(host: &mut FakeHost, sticky: &mut StickyController<NodeId>, y: f64) {
    host.scroll_y = y;
    if host.listen_count(Listener::Scroll) > 0 {
        sticky.handle(host, HostEvent::Scroll);
    }
}

/// Resizes the viewport and delivers a resize event if one is being listened for.
pub fn resize(host: &mut FakeHost, sticky: &mut StickyController<NodeId>, size: Size) {
    host.viewport = size;
    host.inner_height = size.height;
    if host.listen_count(Listener::Resize) > 0 {
        sticky.handle(host, HostEvent::Resize);
    }
}
