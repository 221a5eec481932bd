// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky state and its pure transition functions.
//!
//! Nothing in this module touches a document. The controller measures
//! geometry into [`Measurements`], asks [`position_transition`] and
//! [`docking_transition`] what should happen, and then applies the answer.
//!
//! ## State model
//!
//! ```text
//!              triggered              tall, edge off-screen
//!   Inactive ────────────▶ Active ─────────────────────────▶ Frozen
//!      ▲                   │  ▲  ◀───────────────────────────  │
//!      │                   │  │        edge back in view       │
//!      │          parent   ▼  │ top ≥ offset                   │
//!      │          bottom  Docked                               │
//!      └──────────── not triggered (from any engaged state) ───┘
//! ```
//!
//! Docked is a sub-state of Active. Frozen is mutually exclusive with both.

use kurbo::Rect;

use crate::event::ScrollDirection;

/// Visual state of the sticky target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StickyState {
    /// In natural document flow.
    #[default]
    Inactive,
    /// Pinned to the viewport, at the offset or bottom-aligned.
    Active,
    /// Riding with the scroll at a fixed position inside its parent; used by
    /// targets taller than the viewport.
    Frozen,
    /// Active, but parked at the bottom of its containing parent.
    Docked,
}

impl StickyState {
    /// Returns `true` for [`Active`](Self::Active) and [`Docked`](Self::Docked).
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active | Self::Docked)
    }

    /// Returns `true` for anything but [`Inactive`](Self::Inactive).
    #[must_use]
    pub const fn is_engaged(self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// One evaluation's worth of geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurements {
    /// Placeholder top, relative to the viewport.
    pub placeholder_top: f64,
    /// Target border box, relative to the viewport.
    pub target: Rect,
    /// Containing parent border box, if containment is configured.
    pub parent: Option<Rect>,
    /// Root element client height.
    pub viewport_height: f64,
    /// Window inner height.
    pub inner_height: f64,
    /// Sticky threshold in pixels.
    pub offset: f64,
}

impl Measurements {
    /// The target fits inside its parent (always true without a parent).
    #[must_use]
    pub fn containment_eligible(&self) -> bool {
        self.parent
            .is_none_or(|parent| self.target.height() < parent.height())
    }

    /// The natural position has scrolled past the threshold.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.containment_eligible() && self.placeholder_top < self.offset
    }

    /// The whole target has scrolled past the threshold.
    #[must_use]
    pub fn is_fully_scrolled(&self) -> bool {
        self.placeholder_top + self.target.height() < self.offset
    }

    /// The target cannot fit below the offset.
    #[must_use]
    pub fn is_tall(&self) -> bool {
        self.target.height() + self.offset > self.viewport_height
    }

    /// The target's bottom edge is inside the viewport.
    #[must_use]
    pub fn bottom_fits(&self) -> bool {
        self.target.round().y1 <= self.inner_height.max(self.viewport_height)
    }

    /// The target's top edge is at or below the threshold.
    #[must_use]
    pub fn top_fits(&self) -> bool {
        self.target.round().y0 >= self.offset
    }

    /// Docking condition against the measured parent. See [`should_dock`].
    #[must_use]
    pub fn should_dock(&self) -> bool {
        self.parent.is_some_and(|parent| {
            should_dock(self.target, parent, self.viewport_height, self.offset)
        })
    }
}

/// A change to the positional state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Pin the target. Bottom-aligned targets stick to the viewport bottom.
    Activate {
        /// Align to the viewport bottom instead of the offset.
        to_bottom: bool,
    },
    /// Pin the target inside its parent at its current position.
    Freeze,
    /// Return the target to natural flow.
    Deactivate,
}

/// A change to the docked sub-state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DockTransition {
    /// Park the target at the bottom of its parent.
    Dock,
    /// Resume normal active pinning.
    Undock,
}

/// Decides the positional transition for one evaluation.
///
/// `direction` is the direction inferred for this evaluation; anything other
/// than [`ScrollDirection::Down`] follows the upward rules.
///
/// A triggered evaluation always leaves the target engaged. A tall target
/// that leaves the flow with its leading edge off-screen is first pinned at
/// the offset; once active it freezes where it is.
#[must_use]
pub fn position_transition(
    state: StickyState,
    m: &Measurements,
    direction: Option<ScrollDirection>,
) -> Option<Transition> {
    if !m.is_triggered() {
        return state.is_engaged().then_some(Transition::Deactivate);
    }

    if !m.is_tall() {
        return (!state.is_active()).then_some(Transition::Activate { to_bottom: false });
    }

    let (fits, to_bottom) = if direction == Some(ScrollDirection::Down) {
        (m.bottom_fits(), true)
    } else {
        (m.top_fits(), false)
    };

    if fits {
        return (!state.is_active()).then_some(Transition::Activate { to_bottom });
    }
    match state {
        StickyState::Active if !m.should_dock() => Some(Transition::Freeze),
        StickyState::Inactive => Some(Transition::Activate { to_bottom: false }),
        _ => None,
    }
}

/// Decides the docking transition after a triggered evaluation.
///
/// Only active targets dock. A docked target undocks once its top is back at
/// or below the offset.
#[must_use]
pub fn docking_transition(
    state: StickyState,
    target: Rect,
    parent: Rect,
    viewport_height: f64,
    offset: f64,
) -> Option<DockTransition> {
    match state {
        StickyState::Active if should_dock(target, parent, viewport_height, offset) => {
            Some(DockTransition::Dock)
        }
        StickyState::Docked
            if !should_dock(target, parent, viewport_height, offset) && target.y0 >= offset =>
        {
            Some(DockTransition::Undock)
        }
        _ => None,
    }
}

/// The parent's bottom is on screen, the target has reached it, and the
/// target's top is still above the threshold.
#[must_use]
pub fn should_dock(target: Rect, parent: Rect, viewport_height: f64, offset: f64) -> bool {
    parent.y1 <= viewport_height && target.y1 >= parent.y1 && target.y0 <= offset
}

/// Inline `top` that keeps a frozen target where it currently is, relative
/// to `reference`.
#[must_use]
pub fn frozen_top(reference: Rect, target: Rect) -> f64 {
    (reference.y0 - target.y0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn measure(placeholder_top: f64, target_top: f64, height: f64, offset: f64) -> Measurements {
        Measurements {
            placeholder_top,
            target: Rect::new(0.0, target_top, 300.0, target_top + height),
            parent: None,
            viewport_height: VIEWPORT,
            inner_height: VIEWPORT,
            offset,
        }
    }

    #[test]
    fn trigger_matches_threshold() {
        for offset in [0.0, 40.0, 70.0] {
            for top in [-100.0, -1.0, 0.0, 39.0, 40.0, 69.0, 70.0, 200.0] {
                let m = measure(top, top, 50.0, offset);
                assert_eq!(m.is_triggered(), top < offset, "offset {offset}, top {top}");
            }
        }
    }

    #[test]
    fn short_target_activates_once_and_never_freezes() {
        let mut state = StickyState::Inactive;
        let mut activations = 0;
        for top in (-10..=100).rev().map(f64::from) {
            let m = measure(top, top.min(0.0), 50.0, 0.0);
            assert!(!m.is_tall());
            match position_transition(state, &m, Some(ScrollDirection::Down)) {
                Some(Transition::Activate { to_bottom }) => {
                    assert!(!to_bottom);
                    activations += 1;
                    state = StickyState::Active;
                }
                Some(other) => panic!("unexpected {other:?}"),
                None => {}
            }
        }
        assert_eq!(activations, 1);
        assert_eq!(state, StickyState::Active);
    }

    #[test]
    fn untriggered_deactivates_any_engaged_state() {
        let m = measure(10.0, 10.0, 50.0, 0.0);
        for state in [StickyState::Active, StickyState::Frozen, StickyState::Docked] {
            assert_eq!(
                position_transition(state, &m, None),
                Some(Transition::Deactivate)
            );
        }
        assert_eq!(position_transition(StickyState::Inactive, &m, None), None);
    }

    #[test]
    fn tall_target_freezes_then_bottom_aligns_scrolling_down() {
        // Activated at the top first.
        let start = measure(-1.0, 0.0, 1200.0, 0.0);
        assert!(start.is_tall());
        assert_eq!(
            position_transition(StickyState::Inactive, &start, Some(ScrollDirection::Up)),
            Some(Transition::Activate { to_bottom: false })
        );

        // Bottom still below the viewport: ride with the scroll.
        let mid = measure(-50.0, -50.0, 1200.0, 0.0);
        assert_eq!(
            position_transition(StickyState::Active, &mid, Some(ScrollDirection::Down)),
            Some(Transition::Freeze)
        );
        assert_eq!(
            position_transition(StickyState::Frozen, &mid, Some(ScrollDirection::Down)),
            None
        );

        // Bottom reaches the viewport bottom: pin to the bottom.
        let end = measure(-400.0, -400.0, 1200.0, 0.0);
        assert!(end.bottom_fits());
        assert_eq!(
            position_transition(StickyState::Frozen, &end, Some(ScrollDirection::Down)),
            Some(Transition::Activate { to_bottom: true })
        );
    }

    #[test]
    fn tall_target_freezes_scrolling_up_until_top_fits() {
        let m = measure(-300.0, -20.0, 1200.0, 0.0);
        assert_eq!(
            position_transition(StickyState::Active, &m, Some(ScrollDirection::Up)),
            Some(Transition::Freeze)
        );
        let m = measure(-300.0, 0.0, 1200.0, 0.0);
        assert_eq!(
            position_transition(StickyState::Frozen, &m, None),
            Some(Transition::Activate { to_bottom: false })
        );
    }

    #[test]
    fn tall_target_in_flow_activates_before_freezing() {
        let m = measure(-10.0, -10.0, 1200.0, 0.0);
        assert_eq!(
            position_transition(StickyState::Inactive, &m, Some(ScrollDirection::Down)),
            Some(Transition::Activate { to_bottom: false })
        );
        let pinned = measure(-20.0, 0.0, 1200.0, 0.0);
        assert_eq!(
            position_transition(StickyState::Active, &pinned, Some(ScrollDirection::Down)),
            Some(Transition::Freeze)
        );
    }

    #[test]
    fn docked_target_is_never_frozen() {
        let m = measure(-100.0, -100.0, 1200.0, 0.0);
        assert_eq!(
            position_transition(StickyState::Docked, &m, Some(ScrollDirection::Down)),
            None
        );
    }

    #[test]
    fn tall_target_about_to_dock_is_not_frozen() {
        let mut m = measure(-300.0, -300.0, 1200.0, 0.0);
        m.parent = Some(Rect::new(0.0, -700.0, 300.0, 600.0));
        assert!(m.containment_eligible());
        assert!(!m.top_fits());
        assert!(m.should_dock());
        assert_eq!(
            position_transition(StickyState::Active, &m, Some(ScrollDirection::Up)),
            None
        );
    }

    #[test]
    fn target_taller_than_parent_is_not_eligible() {
        let mut m = measure(-10.0, -10.0, 500.0, 0.0);
        m.parent = Some(Rect::new(0.0, -10.0, 300.0, 400.0));
        assert!(!m.is_triggered());
    }

    #[test]
    fn dock_requires_every_condition() {
        let parent = Rect::new(0.0, -500.0, 300.0, 600.0);
        let target = Rect::new(0.0, -10.0, 300.0, 600.0);
        assert!(should_dock(target, parent, VIEWPORT, 0.0));
        // Parent bottom below the viewport.
        assert!(!should_dock(target, parent, 500.0, 0.0));
        // Target bottom above the parent bottom.
        assert!(!should_dock(
            Rect::new(0.0, -10.0, 300.0, 590.0),
            parent,
            VIEWPORT,
            0.0
        ));
        // Target top below the threshold.
        assert!(!should_dock(
            Rect::new(0.0, 10.0, 300.0, 600.0),
            parent,
            VIEWPORT,
            0.0
        ));
    }

    #[test]
    fn docking_transitions() {
        let parent = Rect::new(0.0, -500.0, 300.0, 600.0);
        let at_bottom = Rect::new(0.0, -10.0, 300.0, 600.0);
        let back_down = Rect::new(0.0, 0.0, 300.0, 590.0);

        assert_eq!(
            docking_transition(StickyState::Active, at_bottom, parent, VIEWPORT, 0.0),
            Some(DockTransition::Dock)
        );
        assert_eq!(
            docking_transition(StickyState::Docked, at_bottom, parent, VIEWPORT, 0.0),
            None
        );
        assert_eq!(
            docking_transition(StickyState::Docked, back_down, parent, VIEWPORT, 0.0),
            Some(DockTransition::Undock)
        );
        assert_eq!(
            docking_transition(StickyState::Frozen, at_bottom, parent, VIEWPORT, 0.0),
            None
        );
    }

    #[test]
    fn frozen_top_is_distance_from_reference() {
        let parent = Rect::new(0.0, -200.0, 300.0, 2_000.0);
        let target = Rect::new(0.0, -50.0, 300.0, 1_150.0);
        assert_eq!(frozen_top(parent, target), 150.0);
    }
}
